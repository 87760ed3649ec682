use std::{fmt, time::Duration};

use clap::{Args as ClapArgs, Parser};
use culinary_core::domain::common::{
    CulinaryConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
    DEFAULT_SESSION_IDLE_TIMEOUT_SECS, LLMConfig, SessionConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "culinary-api", version, about = "Culinary assistant HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub session: SessionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(
        long = "gemini-api-key",
        env = "GEMINI_API_KEY",
        hide_env_values = true,
        required_unless_present = "legacy_api_key"
    )]
    pub gemini_api_key: Option<String>,

    /// Older deployments export the key as `API_KEY`.
    #[arg(long = "api-key", env = "API_KEY", hide = true, hide_env_values = true)]
    pub legacy_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

impl LlmArgs {
    pub fn api_key(&self) -> String {
        self.gemini_api_key
            .clone()
            .or_else(|| self.legacy_api_key.clone())
            .unwrap_or_default()
    }
}

impl fmt::Debug for LlmArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmArgs")
            .field("gemini_api_key", &"<redacted>")
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .finish()
    }
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SessionArgs {
    /// Seconds a session may sit untouched before it is evicted.
    #[arg(
        long = "session-idle-timeout",
        env = "SESSION_IDLE_TIMEOUT_SECS",
        default_value_t = DEFAULT_SESSION_IDLE_TIMEOUT_SECS
    )]
    pub idle_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for CulinaryConfig {
    fn from(args: Args) -> Self {
        CulinaryConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.api_key(),
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            session: SessionConfig {
                idle_timeout: Duration::from_secs(args.session.idle_timeout_secs),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_flow_into_core_config() {
        let args = Args::try_parse_from([
            "culinary-api",
            "--gemini-api-key",
            "secret",
            "--gemini-model",
            "gemini-test",
            "--gemini-base-url",
            "http://127.0.0.1:9999/v1beta",
            "--server-root-path",
            "/api",
            "--allowed-origins",
            "http://a.test,http://b.test",
            "--session-idle-timeout",
            "900",
        ])
        .unwrap();

        assert_eq!(args.server.root_path, "/api");
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test", "http://b.test"]
        );

        let config = CulinaryConfig::from(args);
        assert_eq!(config.llm.gemini_api_key, "secret");
        assert_eq!(config.llm.gemini_model, "gemini-test");
        assert_eq!(config.llm.gemini_base_url, "http://127.0.0.1:9999/v1beta");
        assert_eq!(config.session.idle_timeout, Duration::from_secs(900));
    }

    #[test]
    fn test_debug_output_hides_api_key() {
        let args = Args::try_parse_from(["culinary-api", "--gemini-api-key", "top-secret"]).unwrap();

        assert!(!format!("{:?}", args).contains("top-secret"));
    }
}
