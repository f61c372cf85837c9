//! Listener configuration from the environment.
//! Used by: main.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
        }
    }
}

impl Config {
    /// `BIND_ADDR` takes precedence over `PORT`; both fall back to `0.0.0.0:4000`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::var("BIND_ADDR").ok(), std::env::var("PORT").ok())
    }

    fn from_vars(bind_addr: Option<String>, port: Option<String>) -> Result<Self> {
        if let Some(raw) = bind_addr {
            let addr = raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("BIND_ADDR is not host:port: {raw}")))?;
            return Ok(Self { addr });
        }

        let mut config = Self::default();
        if let Some(raw) = port {
            let port = raw
                .trim()
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("PORT is not a valid port: {raw}")))?;
            config.addr.set_port(port);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_port_4000_on_all_interfaces() -> Result<()> {
        let config = Config::from_vars(None, None)?;
        assert_eq!(config.addr, "0.0.0.0:4000".parse().unwrap());
        Ok(())
    }

    #[test]
    fn port_overrides_default() -> Result<()> {
        let config = Config::from_vars(None, Some("8080".into()))?;
        assert_eq!(config.addr.port(), 8080);
        assert!(config.addr.ip().is_unspecified());
        Ok(())
    }

    #[test]
    fn bind_addr_wins_over_port() -> Result<()> {
        let config = Config::from_vars(Some("127.0.0.1:5000".into()), Some("8080".into()))?;
        assert_eq!(config.addr, "127.0.0.1:5000".parse().unwrap());
        Ok(())
    }

    #[test]
    fn garbage_port_rejected() {
        assert!(matches!(
            Config::from_vars(None, Some("forty".into())),
            Err(Error::Config(_))
        ));
        assert!(Config::from_vars(None, Some("70000".into())).is_err());
    }

    #[test]
    fn garbage_bind_addr_rejected() {
        assert!(matches!(
            Config::from_vars(Some("localhost".into()), None),
            Err(Error::Config(_))
        ));
    }
}
