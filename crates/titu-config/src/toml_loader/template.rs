//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Titu Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
#
# Credentials are never read from this file. Set them in the environment
# (or a .env file next to the binary):
#   TITU_WEBHOOK_URL        overrides [webhook].url
#   TITU_WEBHOOK_TOKEN      bearer credential      (auth_scheme = "bearer")
#   TITU_WEBHOOK_USER       basic credential user  (auth_scheme = "basic")
#   TITU_WEBHOOK_PASSWORD   basic credential password
#   TITU_AIRTABLE_BASE_ID   lead record store base
#   TITU_AIRTABLE_TOKEN     lead record store bearer token

[chat]
# greeting = "👋 Hola, soy Titu ¿En qué puedo ayudarte hoy?"
# typing_delay_ms = 2000     # 0-30000
# idle_interval_ms = 6000    # 1000-600000
# idle_shake_ms = 600        # 50-5000, shorter than idle_interval_ms
# empty_reply_fallback = "Lo siento, no pude procesar tu mensaje en este momento."
# connection_fallback = "Lo siento, hay un problema de conexión. Por favor intenta más tarde."

# [[chat.quick_replies]]
# id = "1"
# label = "Consultas"

# [[chat.quick_replies]]
# id = "2"
# label = "Agendar Asesoría"

[webhook]
# url = "http://localhost:5678/webhook/chatbot"
# auth_scheme = "basic"      # basic, bearer
# connect_timeout_secs = 10  # 1-120
# request_timeout_secs = 30  # 1-300

[leads]
# api_base = "https://api.airtable.com/v0"
# table = "Leads"
# request_timeout_secs = 30  # 1-300

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
