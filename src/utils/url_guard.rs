//! Safety checks for submitted URLs.
//!
//! Rejects non-HTTP(S) schemes and hosts that point at local or private
//! networks, so the service cannot be turned into an open redirector into
//! internal infrastructure. This is not a complete SSRF defense: hostnames
//! that merely resolve to private addresses pass the check.

use std::net::IpAddr;
use url::Url;

/// Maximum accepted URL length, matching the storage column constraint.
pub const MAX_URL_LEN: usize = 2048;

/// Errors that can occur while checking a submitted URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlGuardError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL exceeds {MAX_URL_LEN} characters")]
    TooLong,

    #[error("URLs pointing at local or private networks are not allowed")]
    ForbiddenHost,
}

/// Checks that a candidate URL is an absolute, public http/https URL.
///
/// # Rules
///
/// 1. At most [`MAX_URL_LEN`] characters
/// 2. Parses as an absolute URL with scheme `http` or `https`
/// 3. Host is not `localhost` or a `*.localhost` name
/// 4. IP-literal hosts must not be loopback, unspecified, private
///    (10.0.0.0/8, 172.16.0.0/12, 192.168.0.0/16), link-local
///    (169.254.0.0/16, fe80::/10), or IPv6 unique-local (fc00::/7)
///
/// # Errors
///
/// Returns the matching [`UrlGuardError`] variant; the input is not mutated
/// or stored on failure.
pub fn ensure_public_http_url(input: &str) -> Result<(), UrlGuardError> {
    if input.len() > MAX_URL_LEN {
        return Err(UrlGuardError::TooLong);
    }

    let url = Url::parse(input).map_err(|e| UrlGuardError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlGuardError::UnsupportedProtocol),
    }

    let host = url
        .host_str()
        .ok_or_else(|| UrlGuardError::InvalidFormat("URL has no host".to_string()))?
        .to_ascii_lowercase();

    if host == "localhost" || host.ends_with(".localhost") {
        return Err(UrlGuardError::ForbiddenHost);
    }

    // `host_str` keeps the brackets around IPv6 literals.
    let bare = host.trim_start_matches('[').trim_end_matches(']');
    if let Ok(ip) = bare.parse::<IpAddr>() {
        if is_non_public(ip) {
            return Err(UrlGuardError::ForbiddenHost);
        }
    }

    Ok(())
}

fn is_non_public(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            v4.is_loopback() || v4.is_unspecified() || v4.is_private() || v4.is_link_local()
        }
        IpAddr::V6(v6) => {
            if v6.is_loopback() || v6.is_unspecified() {
                return true;
            }
            if let Some(mapped) = v6.to_ipv4_mapped() {
                return is_non_public(IpAddr::V4(mapped));
            }
            let segments = v6.segments();
            // fc00::/7 unique-local, fe80::/10 link-local.
            (segments[0] & 0xfe00) == 0xfc00 || (segments[0] & 0xffc0) == 0xfe80
        }
    }
}
