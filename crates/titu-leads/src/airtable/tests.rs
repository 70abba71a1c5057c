//! Tests for lead store configuration and submission.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use titu_common::{ConfigError, NoticeLevel};
use titu_config::TituConfig;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::{LeadError, LeadForm};

fn client_for(server: &MockServer) -> LeadClient {
    let config = AirtableConfig::new("appTEST", "pat-secret").with_api_base(server.uri());
    LeadClient::new(config).unwrap()
}

fn filled_form() -> LeadForm {
    let mut form = LeadForm::new();
    form.name = "Ana Pérez".into();
    form.email = "ana@empresa.es".into();
    form.company = "Empresa SL".into();
    form.select_company_size("1-10");
    form.select_budget("≤1.000€");
    form.select_interest("Chatbot");
    form.message = "Hola".into();
    form
}

fn created() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "records": [{"id": "recABC123", "createdTime": "2025-01-31T09:15:02.000Z", "fields": {}}]
    }))
}

#[tokio::test]
async fn posts_record_envelope_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/appTEST/Leads"))
        .and(header("authorization", "Bearer pat-secret"))
        .and(body_json(serde_json::json!({
            "records": [{
                "fields": {
                    "Nombre": "Ana Pérez",
                    "Email": "ana@empresa.es",
                    "Empresa": "Empresa SL",
                    "TamañoEmpresa": "1-10",
                    "Presupuesto": "≤1.000€",
                    "InterésPrincipal": "Chatbot",
                    "Mensaje": "Hola",
                    "Estado": "Nuevo",
                }
            }]
        })))
        .respond_with(created())
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let record = filled_form().validate().unwrap();
    assert_eq!(
        client.submit(&record).await.unwrap().as_deref(),
        Some("recABC123")
    );
}

#[tokio::test]
async fn accepted_lead_resets_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(created()).mount(&server).await;

    let client = client_for(&server);
    let mut form = filled_form();
    let notice = client.submit_form(&mut form).await;

    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.title, "¡Transformación iniciada! 🚀");
    assert_eq!(form, LeadForm::default());
}

#[tokio::test]
async fn accepted_lead_without_record_id_still_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"records": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let record = filled_form().validate().unwrap();
    assert_eq!(client.submit(&record).await.unwrap(), None);

    let mut form = filled_form();
    let notice = client.submit_form(&mut form).await;
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(form, LeadForm::default());
}

#[tokio::test]
async fn accepted_status_with_unreadable_body_keeps_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let record = filled_form().validate().unwrap();
    assert!(matches!(
        client.submit(&record).await.unwrap_err(),
        LeadError::Parse(_)
    ));

    let mut form = filled_form();
    assert!(client.submit_form(&mut form).await.is_error());
    assert_eq!(form, filled_form());
}

/// Log sink for asserting on formatted tracing output.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test(flavor = "current_thread")]
async fn submission_log_lines_share_one_correlation_id() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut form = filled_form();
    client_for(&server).submit_form(&mut form).await;

    let text = String::from_utf8_lossy(&logs.0.lock().unwrap()).into_owned();
    let ids: Vec<String> = text
        .split("correlation_id=")
        .skip(1)
        .map(|rest| rest.chars().take(8).collect())
        .collect();
    assert!(ids.len() >= 2, "request and failure lines both tagged: {text}");
    assert!(ids.iter().all(|id| id == &ids[0]));
}

#[tokio::test]
async fn rejected_lead_keeps_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "error": {"type": "INVALID_VALUE_FOR_COLUMN", "message": "Field \"Presupuesto\" cannot accept the provided value"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let record = filled_form().validate().unwrap();
    let err = client.submit(&record).await.unwrap_err();
    assert!(
        matches!(err, LeadError::Api { status: 422, ref message } if message.contains("Presupuesto"))
    );

    let mut form = filled_form();
    let notice = client.submit_form(&mut form).await;
    assert!(notice.is_error());
    assert_eq!(notice.title, "Error de transmisión");
    assert_eq!(form, filled_form());
}

#[tokio::test]
async fn bare_error_code_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "NOT_FOUND"})),
        )
        .mount(&server)
        .await;

    let record = filled_form().validate().unwrap();
    let err = client_for(&server).submit(&record).await.unwrap_err();
    assert!(matches!(err, LeadError::Api { status: 404, ref message } if message == "NOT_FOUND"));
}

#[tokio::test]
async fn invalid_form_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(created())
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let mut form = filled_form();
    form.budget = None;
    let notice = client.submit_form(&mut form).await;
    assert_eq!(notice.title, "Campos requeridos");

    let mut form = filled_form();
    form.email = "ana@empresa".into();
    let notice = client.submit_form(&mut form).await;
    assert_eq!(notice.title, "Email inválido");
    assert_eq!(form.email, "ana@empresa");
}

#[tokio::test]
async fn unreachable_store_is_a_transmission_error() {
    let config =
        AirtableConfig::new("appTEST", "pat-secret").with_api_base("http://127.0.0.1:1/v0");
    let client = LeadClient::new(config).unwrap();

    let record = filled_form().validate().unwrap();
    assert!(matches!(
        client.submit(&record).await.unwrap_err(),
        LeadError::Network(_)
    ));

    let mut form = filled_form();
    assert_eq!(
        client.submit_form(&mut form).await.title,
        "Error de transmisión"
    );
}

#[test]
fn endpoint_appends_base_and_table() {
    let config = AirtableConfig::new("appXYZ", "pat").with_api_base("https://api.airtable.com/v0/");
    let client = LeadClient::new(config).unwrap();
    assert_eq!(
        client.endpoint().as_str(),
        "https://api.airtable.com/v0/appXYZ/Leads"
    );
}

#[test]
fn invalid_api_base_is_rejected() {
    let config = AirtableConfig::new("appXYZ", "pat").with_api_base("not a url");
    assert!(matches!(LeadClient::new(config), Err(LeadError::Http(_))));
}

#[test]
fn config_requires_both_env_vars() {
    let vars: HashMap<&str, &str> = HashMap::from([("TITU_AIRTABLE_BASE_ID", "appTEST")]);
    let err = AirtableConfig::from_lookup(&TituConfig::default(), |k| {
        vars.get(k).map(|v| v.to_string())
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::MissingSetting(ref m) if m.contains("TITU_AIRTABLE_TOKEN")));
}

#[test]
fn config_resolves_from_env_and_file() {
    let mut config = TituConfig::default();
    config.leads.table = "Prospects".into();
    let vars: HashMap<&str, &str> = HashMap::from([
        ("TITU_AIRTABLE_BASE_ID", "appTEST"),
        ("TITU_AIRTABLE_TOKEN", "pat-secret"),
    ]);

    let resolved =
        AirtableConfig::from_lookup(&config, |k| vars.get(k).map(|v| v.to_string())).unwrap();
    assert_eq!(resolved.base_id, "appTEST");
    assert_eq!(resolved.table, "Prospects");
    assert_eq!(resolved.api_base, "https://api.airtable.com/v0");

    let printed = format!("{resolved:?}");
    assert!(!printed.contains("pat-secret"));
}
