use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Couldn't load leptos configuration: {0}")]
    Config(String),
    #[error("Couldn't bind to {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Server stopped unexpectedly")]
    Serve(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_bind_error_keeps_source() {
        let err = SiteError::Bind {
            addr: "0.0.0.0:3000".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        };
        assert_eq!(err.to_string(), "Couldn't bind to 0.0.0.0:3000");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_serve_from_io() {
        let err: SiteError = std::io::Error::other("boom").into();
        assert!(matches!(err, SiteError::Serve(_)));
    }
}
