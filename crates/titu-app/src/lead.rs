//! Terminal surface for the contact form.

use titu_common::{Notice, NoticeLevel, TituError};
use titu_config::TituConfig;
use titu_leads::{AirtableConfig, Budget, CompanySize, Interest, LeadClient, LeadForm};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::info;

pub async fn run(config: &TituConfig) -> Result<(), TituError> {
    let airtable = AirtableConfig::from_env(config)?;
    info!(table = %airtable.table, "lead store configured");
    let client = LeadClient::new(airtable)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut form = LeadForm::new();

    loop {
        if !fill(&mut form, &mut lines).await? {
            return Ok(());
        }
        let notice = client.submit_form(&mut form).await;
        println!("{}", render_notice(&notice));
        if !notice.is_error() {
            return Ok(());
        }
        println!("(Enter para mantener el valor actual)");
    }
}

pub fn render_notice(notice: &Notice) -> String {
    let mark = match notice.level {
        NoticeLevel::Success => "✔",
        NoticeLevel::Error => "✘",
    };
    format!("{mark} {}\n  {}", notice.title, notice.body)
}

/// Prompt for every field. Returns `false` when stdin ends.
async fn fill<R>(form: &mut LeadForm, lines: &mut Lines<R>) -> Result<bool, TituError>
where
    R: AsyncBufRead + Unpin,
{
    let fields: [(&str, &mut String); 3] = [
        ("Nombre", &mut form.name),
        ("Email", &mut form.email),
        ("Empresa", &mut form.company),
    ];
    for (label, slot) in fields {
        let Some(value) = ask(lines, label, slot.as_str()).await? else {
            return Ok(false);
        };
        if !value.is_empty() {
            *slot = value;
        }
    }

    let Some(choice) = choose(lines, "Tamaño de empresa", labels(CompanySize::ALL)).await? else {
        return Ok(false);
    };
    if let Some(label) = choice {
        form.select_company_size(&label);
    }
    let Some(choice) = choose(lines, "Presupuesto", labels(Budget::ALL)).await? else {
        return Ok(false);
    };
    if let Some(label) = choice {
        form.select_budget(&label);
    }
    let Some(choice) = choose(lines, "Interés principal", labels(Interest::ALL)).await? else {
        return Ok(false);
    };
    if let Some(label) = choice {
        form.select_interest(&label);
    }

    let current = form.message.clone();
    let Some(message) = ask(lines, "Mensaje (opcional)", &current).await? else {
        return Ok(false);
    };
    if !message.is_empty() {
        form.message = message;
    }
    Ok(true)
}

fn labels<T: Copy + std::fmt::Display>(options: &[T]) -> Vec<String> {
    options.iter().map(|o| o.to_string()).collect()
}

async fn ask<R>(lines: &mut Lines<R>, label: &str, current: &str) -> Result<Option<String>, TituError>
where
    R: AsyncBufRead + Unpin,
{
    if current.is_empty() {
        println!("{label}:");
    } else {
        println!("{label} [{current}]:");
    }
    Ok(lines.next_line().await?.map(|l| l.trim().to_string()))
}

/// Numbered choice. `Some(None)` keeps the current value.
async fn choose<R>(
    lines: &mut Lines<R>,
    label: &str,
    options: Vec<String>,
) -> Result<Option<Option<String>>, TituError>
where
    R: AsyncBufRead + Unpin,
{
    println!("{label}:");
    for (i, option) in options.iter().enumerate() {
        println!("  {}) {option}", i + 1);
    }
    let Some(answer) = lines.next_line().await? else {
        return Ok(None);
    };
    Ok(Some(pick(&options, answer.trim())))
}

/// Resolve a numbered or literal answer against `options`.
pub fn pick(options: &[String], answer: &str) -> Option<String> {
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| options.get(i)).cloned();
    }
    options.iter().find(|o| o.as_str() == answer).cloned()
}
