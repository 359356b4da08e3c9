use std::net::SocketAddr;

use crate::config::ConfigError;

/// Startup and serve failures. Handlers themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error")]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error")]
    Serve(#[source] std::io::Error),
}

impl Error {
    /// Display text followed by every source, joined with ": ".
    pub fn report(&self) -> String {
        let mut out = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            out.push_str(": ");
            out.push_str(&err.to_string());
            source = err.source();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use crate::config::Config;

    #[test]
    fn config_errors_convert_and_keep_their_source() {
        let cfg_err = Config::from_lookup(|_| Some("port".to_string())).unwrap_err();
        let err: Error = cfg_err.into();
        assert_eq!(err.to_string(), "configuration error");
        assert!(err.source().is_some());
    }

    #[test]
    fn report_walks_the_whole_chain() {
        let err: Error = Config::from_lookup(|_| Some("abc".to_string()))
            .unwrap_err()
            .into();
        assert_eq!(
            err.report(),
            "configuration error: invalid PORT value \"abc\": invalid digit found in string"
        );
    }

    #[test]
    fn bind_error_report_names_the_address_and_cause() {
        let source = std::io::Error::from(std::io::ErrorKind::AddrInUse);
        let cause = source.to_string();
        let err = Error::Bind {
            addr: "0.0.0.0:8080".parse().unwrap(),
            source,
        };
        assert_eq!(err.to_string(), "failed to bind 0.0.0.0:8080");
        assert_eq!(err.report(), format!("failed to bind 0.0.0.0:8080: {cause}"));
        assert!(!err.report().contains("Os {"));
    }
}
