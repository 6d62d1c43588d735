use anyhow::{Context, Result};

/// Validation settings, loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaConfig {
    /// Reject salary ranges whose `min` exceeds `max`. Off by default:
    /// the declaration itself does not order the bounds.
    pub enforce_salary_order: bool,
    pub log_filter: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            enforce_salary_order: false,
            log_filter: "info".to_string(),
        }
    }
}

impl SchemaConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let enforce_salary_order = match lookup("SCHEMA_ENFORCE_SALARY_ORDER") {
            Some(raw) => parse_flag(&raw).with_context(|| {
                format!("SCHEMA_ENFORCE_SALARY_ORDER must be true/false/1/0, got '{raw}'")
            })?,
            None => false,
        };

        Ok(SchemaConfig {
            enforce_salary_order,
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
