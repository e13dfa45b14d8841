use clap::Parser;
use std::time::Duration;

use crate::fortune::RetryPolicy;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "hafez-fortune")]
#[command(about = "Hafez fortune backend: Ganjoor verses for Persian, Ollama for everything else")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "HAFEZ_PORT", default_value_t = 8080)]
    pub port: u16,

    // Ollama base url, /api/generate is appended
    #[arg(short, long, env = "OLLAMA_BASE_URL", default_value = "http://localhost:11434")]
    pub ollama_url: String,

    // Model id sent with every generate call
    #[arg(short, long, env = "OLLAMA_MODEL", default_value = "llama3.2")]
    pub model: String,

    // Random Hafez verse endpoint
    #[arg(
        long,
        env = "POETRY_API_URL",
        default_value = "https://ganjgah.ir/api/ganjoor/hafez/faal"
    )]
    pub poetry_url: String,

    // The only origin allowed by CORS
    #[arg(long, env = "CORS_ORIGIN", default_value = "http://localhost:3000")]
    pub cors_origin: String,

    // Connect and read timeout for outbound calls, in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = 30)]
    pub http_timeout: u64,

    // Model call attempts before falling back to the default fortune
    #[arg(long, env = "MODEL_MAX_ATTEMPTS", default_value_t = 3)]
    pub max_attempts: u32,

    // Backoff unit; attempt n waits n * this
    #[arg(long, env = "MODEL_RETRY_DELAY_MS", default_value_t = 1000)]
    pub retry_delay_ms: u64,
}

impl Args {
    pub fn ollama_base_url(&self) -> &str {
        self.ollama_url.trim_end_matches('/')
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            base_delay: Duration::from_millis(self.retry_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_values() {
        let args = Args::try_parse_from(["hafez-fortune"]).unwrap();
        assert_eq!(args.port, 8080);
        assert_eq!(args.ollama_base_url(), "http://localhost:11434");
        assert_eq!(args.poetry_url, "https://ganjgah.ir/api/ganjoor/hafez/faal");
        assert_eq!(args.cors_origin, "http://localhost:3000");
        assert_eq!(args.http_timeout(), Duration::from_secs(30));

        let policy = args.retry_policy();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.base_delay, Duration::from_millis(1000));
    }

    #[test]
    fn trailing_slash_is_dropped_from_ollama_url() {
        let args = Args::try_parse_from([
            "hafez-fortune",
            "--ollama-url",
            "http://gpu-box:11434/",
        ])
        .unwrap();
        assert_eq!(args.ollama_base_url(), "http://gpu-box:11434");
    }
}
