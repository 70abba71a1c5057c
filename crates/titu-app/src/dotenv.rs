//! `.env` loading (KEY=VALUE lines). Existing variables win.

use std::path::{Path, PathBuf};

/// Parse `.env` contents. Blank lines and `#` comments are skipped;
/// surrounding quotes are stripped from values.
pub fn parse(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Apply the first `.env` found: the working directory, then the Titu
/// config directory. Returns the file that was used.
pub fn load() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from(".env")];
    if let Ok(dir) = titu_platform::config_dir() {
        candidates.push(dir.join(".env"));
    }

    candidates.into_iter().find(|path| apply(path))
}

fn apply(path: &Path) -> bool {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return false;
    };
    for (key, value) in parse(&contents) {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(key, value);
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_comments_and_quotes() {
        let vars = parse(
            "# webhook\n\
             TITU_WEBHOOK_URL=https://hooks.example.com/chatbot\n\
             \n\
             TITU_WEBHOOK_USER = \"chatbot\"\n\
             export TITU_WEBHOOK_PASSWORD='s3cret'\n\
             not a pair\n\
             =orphan\n",
        );
        assert_eq!(
            vars,
            [
                (
                    "TITU_WEBHOOK_URL".to_string(),
                    "https://hooks.example.com/chatbot".to_string()
                ),
                ("TITU_WEBHOOK_USER".to_string(), "chatbot".to_string()),
                ("TITU_WEBHOOK_PASSWORD".to_string(), "s3cret".to_string()),
            ]
        );
    }

    #[test]
    fn values_may_contain_equals() {
        let vars = parse("TOKEN=abc=def==\n");
        assert_eq!(vars, [("TOKEN".to_string(), "abc=def==".to_string())]);
    }

    #[test]
    fn apply_keeps_existing_variables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "TITU_DOTENV_TEST_NEW=from-file\nTITU_DOTENV_TEST_SET=from-file\n",
        )
        .unwrap();
        std::env::set_var("TITU_DOTENV_TEST_SET", "from-env");

        assert!(apply(&path));
        assert_eq!(std::env::var("TITU_DOTENV_TEST_NEW").unwrap(), "from-file");
        assert_eq!(std::env::var("TITU_DOTENV_TEST_SET").unwrap(), "from-env");

        assert!(!apply(&dir.path().join("missing.env")));
    }
}
