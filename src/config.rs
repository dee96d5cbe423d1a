use std::net::{IpAddr, SocketAddr};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_host: IpAddr,
    pub server_port: u16,
    pub environment: Environment,
    pub log_level: String,
    pub frontend_url: String,
}

/// Deployment environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Parse the `ENVIRONMENT` value; anything unrecognised is treated as development.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            _ => Self::Development,
        }
    }

    /// Host to bind when `SERVER_HOST` is not set.
    #[must_use]
    pub const fn default_host(&self) -> &'static str {
        match self {
            Self::Production => "0.0.0.0",
            Self::Development | Self::Staging => "127.0.0.1",
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required: `DATABASE_URL`
    /// Optional with defaults: `DATABASE_MAX_CONNECTIONS`, `SERVER_HOST`, `SERVER_PORT`,
    /// `ENVIRONMENT`, `LOG_LEVEL`, `FRONTEND_URL`
    ///
    /// `PORT` takes precedence over `SERVER_PORT`; the port defaults to 3000.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is not set, or if `SERVER_HOST` / `SERVER_PORT`
    /// or `DATABASE_MAX_CONNECTIONS` contain invalid values.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let database_max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".to_string())
            .parse::<u32>()
            .map_err(|_| anyhow::anyhow!("DATABASE_MAX_CONNECTIONS must be a valid u32"))?;

        let environment = Environment::parse(
            &std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        );

        let server_port = std::env::var("PORT")
            .or_else(|_| std::env::var("SERVER_PORT"))
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("SERVER_PORT / PORT must be a valid u16"))?;

        let server_host = std::env::var("SERVER_HOST")
            .unwrap_or_else(|_| environment.default_host().to_string())
            .parse::<IpAddr>()
            .map_err(|_| anyhow::anyhow!("SERVER_HOST must be a valid IP address"))?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let frontend_url = std::env::var("FRONTEND_URL")
            .unwrap_or_else(|_| "http://localhost:3001".to_string());

        Ok(Self {
            database_url,
            database_max_connections,
            server_host,
            server_port,
            environment,
            log_level,
            frontend_url,
        })
    }

    /// Build the socket address for the server to bind to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: [u8; 4], port: u16) -> Config {
        Config {
            database_url: String::new(),
            database_max_connections: 20,
            server_host: IpAddr::from(host),
            server_port: port,
            environment: Environment::Development,
            log_level: "info".to_string(),
            frontend_url: "http://localhost:3001".to_string(),
        }
    }

    #[test]
    fn test_socket_addr() {
        let addr = config([127, 0, 0, 1], 3000).socket_addr();
        assert_eq!(addr.port(), 3000);
        assert_eq!(addr.ip(), IpAddr::from([127, 0, 0, 1]));
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse(" Staging "), Environment::Staging);
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse("qa"), Environment::Development);
    }

    #[test]
    fn test_default_host() {
        assert_eq!(Environment::Production.default_host(), "0.0.0.0");
        assert_eq!(Environment::Development.default_host(), "127.0.0.1");
        assert_eq!(Environment::Staging.default_host(), "127.0.0.1");
    }
}
