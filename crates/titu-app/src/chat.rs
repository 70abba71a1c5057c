//! Terminal surface for the chat widget.
//!
//! Stdin drives the session (`/open`, `/close`, `/reply <id>`, `/quit`,
//! anything else is typed text); session events are rendered by a separate
//! task so the idle cue shows up while the prompt waits.

use std::sync::Arc;

use titu_chat::{
    ConversationSession, ConversationState, OpenPhase, Origin, QuickReply, SessionConfig,
    SessionEvent, TokioScheduler, WebhookClient, WebhookConfig,
};
use titu_common::{IdentityProvider, TituError};
use titu_config::TituConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Open,
    Close,
    Reply(String),
    Quit,
    Help,
    Text(String),
}

pub fn parse_input(line: &str) -> Input {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.trim() {
        "/open" => Input::Open,
        "/close" => Input::Close,
        "/quit" | "/exit" => Input::Quit,
        "/help" => Input::Help,
        other => match other.strip_prefix("/reply ") {
            Some(id) => Input::Reply(id.trim().to_string()),
            None => Input::Text(line.to_string()),
        },
    }
}

/// One line of output for an event, if it shows anything.
pub fn render(event: &SessionEvent, quick_replies: &[QuickReply]) -> Option<String> {
    match event {
        SessionEvent::MessageAppended(message) => Some(match message.origin {
            Origin::Bot => format!("Titu: {}", message.content),
            Origin::User => format!("Tú: {}", message.content),
        }),
        SessionEvent::StateChanged(ConversationState::Open(OpenPhase::Typing)) => {
            Some("Titu está escribiendo...".to_string())
        }
        SessionEvent::StateChanged(ConversationState::Open(OpenPhase::AwaitingChoice)) => {
            let options: Vec<_> = quick_replies
                .iter()
                .map(|q| format!("[{}] {}", q.id, q.label))
                .collect();
            Some(format!("Opciones: {}  (/reply <id>)", options.join("  ")))
        }
        SessionEvent::StateChanged(ConversationState::Closed) => {
            Some("(chat cerrado, /open para abrir)".to_string())
        }
        SessionEvent::StateChanged(ConversationState::Open(OpenPhase::Active)) => None,
        SessionEvent::IdleShake(true) => Some("💬 ¿Hablamos? /open".to_string()),
        SessionEvent::IdleShake(false) => None,
    }
}

const HELP: &str = "/open  /close  /reply <id>  /quit  (cualquier otro texto se envía)";

pub async fn run(config: &TituConfig, identity: &dyn IdentityProvider) -> Result<(), TituError> {
    let webhook = WebhookConfig::from_env(config)?;
    info!(url = %webhook.url, "webhook configured");
    let responder = Arc::new(WebhookClient::new(webhook)?);
    let scheduler = Arc::new(TokioScheduler::from_current()?);

    let session_config = SessionConfig::from(&config.chat);
    let quick_replies = session_config.quick_replies.clone();

    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    let mut session =
        ConversationSession::new(session_config, responder, scheduler, identity)?.with_events(tx);
    let renderer = tokio::spawn(render_loop(rx, quick_replies));

    println!("{HELP}");
    session.open();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Open => session.open(),
            Input::Close => session.close(),
            Input::Quit => break,
            Input::Help => println!("{HELP}"),
            Input::Reply(id) => {
                if session.select_quick_reply(&id).await.is_none() {
                    println!("(opción no disponible)");
                }
            }
            Input::Text(text) => {
                session.set_draft(text);
                if session.submit_draft().await.is_none() {
                    debug!(state = ?session.state(), "draft not sent");
                    if !session.state().is_open() {
                        println!("(chat cerrado, /open para abrir)");
                    } else if !session.input_enabled() {
                        println!("(elige una opción primero: /reply <id>)");
                    }
                }
            }
        }
    }

    drop(session);
    let _ = renderer.await;
    info!("chat surface closed");
    Ok(())
}

async fn render_loop(mut rx: UnboundedReceiver<SessionEvent>, quick_replies: Vec<QuickReply>) {
    while let Some(event) = rx.recv().await {
        if let Some(line) = render(&event, &quick_replies) {
            println!("{line}");
        }
    }
}
