use std::{env, net::SocketAddr, path::PathBuf};

const DEFAULT_DATA_PATH: &str = "data/state.json";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(env::var("APP_DATA_PATH").ok(), env::var("PORT").ok())
    }

    fn from_vars(data_path: Option<String>, port: Option<String>) -> Self {
        let data_path = data_path
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));
        let port = port
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { data_path, port }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_vars(None, None);
        assert_eq!(config.data_path, PathBuf::from("data/state.json"));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn bad_port_falls_back() {
        let config = Config::from_vars(Some("/tmp/x.json".into()), Some("not-a-port".into()));
        assert_eq!(config.data_path, PathBuf::from("/tmp/x.json"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.addr().port(), 8080);
    }

    #[test]
    fn reads_port() {
        let config = Config::from_vars(Some("  ".into()), Some("3000".into()));
        assert_eq!(config.data_path, PathBuf::from("data/state.json"));
        assert_eq!(config.port, 3000);
    }
}
