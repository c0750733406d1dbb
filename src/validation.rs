//! Input validation for connection parameters and custom URLs.

use reqwest::Url;

use crate::error::{ListError, Result};

fn invalid(message: String) -> ListError {
    ListError::Config(message)
}

/// Validate an appliance host name or address.
///
/// # Examples
/// ```
/// use adguard_list_manager::validation::validate_host;
/// assert!(validate_host("192.168.1.5").is_ok());
/// assert!(validate_host("adguard.lan").is_ok());
/// assert!(validate_host("").is_err());
/// assert!(validate_host("http://192.168.1.5").is_err());
/// ```
pub fn validate_host(host: &str) -> Result<String> {
    let host = host.trim();
    if host.is_empty() {
        return Err(invalid("Host cannot be empty".to_string()));
    }
    if host.contains("://") {
        return Err(invalid(format!(
            "Host '{}' must not include a scheme (use e.g. 192.168.1.5)",
            host
        )));
    }
    if host.chars().any(|c| c.is_whitespace() || c == '/') {
        return Err(invalid(format!("Host '{}' contains invalid characters", host)));
    }
    Ok(host.to_string())
}

/// Parse and validate a TCP port.
///
/// # Examples
/// ```
/// use adguard_list_manager::validation::validate_port;
/// assert_eq!(validate_port("80").unwrap(), 80);
/// assert!(validate_port("0").is_err());
/// assert!(validate_port("70000").is_err());
/// ```
pub fn validate_port(port: &str) -> Result<u16> {
    let port = port.trim();
    match port.parse::<u16>() {
        Ok(0) => Err(invalid("Port must be between 1 and 65535".to_string())),
        Ok(p) => Ok(p),
        Err(_) => Err(invalid(format!(
            "Invalid port '{}'. Must be between 1 and 65535",
            port
        ))),
    }
}

/// Validate a custom filter-list or index URL.
///
/// # Examples
/// ```
/// use adguard_list_manager::validation::validate_list_url;
/// assert!(validate_list_url("https://example.com/hosts.txt").is_ok());
/// assert!(validate_list_url("ftp://example.com/hosts.txt").is_err());
/// assert!(validate_list_url("not a url").is_err());
/// ```
pub fn validate_list_url(url: &str) -> Result<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(invalid("URL cannot be empty".to_string()));
    }
    let parsed =
        Url::parse(trimmed).map_err(|e| invalid(format!("Invalid URL '{}': {}", trimmed, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("URL '{}' must use http or https", trimmed)));
    }
    Ok(trimmed.to_string())
}

/// Build the appliance base URL from host and port
pub fn base_url(host: &str, port: u16) -> String {
    format!("http://{}:{}", host, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_host_trims() {
        assert_eq!(validate_host("  10.0.0.2 ").unwrap(), "10.0.0.2");
    }

    #[test]
    fn test_validate_host_rejects_path() {
        assert!(validate_host("10.0.0.2/admin").is_err());
        assert!(validate_host("my host").is_err());
    }

    #[test]
    fn test_validate_port_bounds() {
        assert_eq!(validate_port("1").unwrap(), 1);
        assert_eq!(validate_port("65535").unwrap(), 65535);
        assert!(validate_port("65536").is_err());
        assert!(validate_port("-1").is_err());
        assert!(validate_port("eighty").is_err());
        assert!(validate_port("").is_err());
    }

    #[test]
    fn test_validate_list_url() {
        assert_eq!(
            validate_list_url(" http://a/list.txt ").unwrap(),
            "http://a/list.txt"
        );
        assert!(validate_list_url("").is_err());
        assert!(validate_list_url("/relative/path.txt").is_err());
        assert!(validate_list_url("file:///etc/hosts").is_err());
    }

    #[test]
    fn test_failures_are_config_errors() {
        assert!(matches!(validate_host(""), Err(ListError::Config(_))));
        assert!(matches!(validate_port("0"), Err(ListError::Config(_))));
        match validate_list_url("ftp://example.com/hosts.txt") {
            Err(ListError::Config(message)) => assert!(message.contains("http or https")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_base_url() {
        assert_eq!(base_url("192.168.1.5", 80), "http://192.168.1.5:80");
    }
}
