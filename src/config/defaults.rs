use std::path::PathBuf;

/// Port used when neither config nor `PORT` says otherwise
pub const FALLBACK_PORT: u16 = 3000;

/// Default bind address
pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

/// Default port, honouring the `PORT` environment variable
pub fn default_port() -> u16 {
    port_from_env(std::env::var("PORT").ok().as_deref())
}

/// Parse a port override, falling back when absent or invalid
pub fn port_from_env(value: Option<&str>) -> u16 {
    match value.map(str::trim) {
        Some(raw) => match raw.parse::<u16>() {
            Ok(port) if port != 0 => port,
            _ => {
                log::warn!("Ignoring invalid PORT value '{}'", raw);
                FALLBACK_PORT
            }
        },
        None => FALLBACK_PORT,
    }
}

/// Default content root
pub fn default_content_dir() -> PathBuf {
    PathBuf::from("products")
}

/// Default frontend directory
pub fn default_frontend_dir() -> PathBuf {
    PathBuf::from("frontend")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_from_env() {
        assert_eq!(port_from_env(None), FALLBACK_PORT);
        assert_eq!(port_from_env(Some("8080")), 8080);
        assert_eq!(port_from_env(Some(" 4000 ")), 4000);
        assert_eq!(port_from_env(Some("0")), FALLBACK_PORT);
        assert_eq!(port_from_env(Some("http")), FALLBACK_PORT);
    }
}
