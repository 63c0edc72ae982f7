use std::str::FromStr;

/// Output format shared by logs and printed results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("text") {
            Ok(Format::Text)
        } else if s.eq_ignore_ascii_case("json") {
            Ok(Format::Json)
        } else {
            Err(format!("Unknown format: {}", s))
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// `SA_LOG_FORMAT`
    pub log_format: Format,
    /// `SA_OUTPUT_FORMAT`
    pub output_format: Format,
}

impl Config {
    /// Reads configuration from the environment, loading `.env` first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            log_format: read_format("SA_LOG_FORMAT"),
            output_format: read_format("SA_OUTPUT_FORMAT"),
        }
    }
}

fn read_format(key: &str) -> Format {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}
