use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub quote_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("TF_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
            .parse()
            .expect("Invalid TF_LISTEN_ADDR");
        let cors_allow = std::env::var("TF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout_ms: u64 = std::env::var("TF_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let quote_timeout_ms: u64 = std::env::var("TF_QUOTE_TIMEOUT_MS")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .unwrap_or(5000);
        Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(request_timeout_ms),
            quote_timeout: Duration::from_millis(quote_timeout_ms),
        }
    }
}
