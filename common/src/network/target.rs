//! # Scan Target Model
//!
//! The canonical (host, port, category, protocol) endpoint produced by
//! target resolution.
//!
//! Two parsers feed this model:
//! * the address-range expander in [`crate::network::range`], which wins
//!   for bare IPs and CIDR blocks;
//! * the fallback parser here, which splits everything else into one of
//!   four colon-based forms (`scheme://host:port`, `scheme://host`,
//!   `host:port`, bare host), tried in that order.

use std::fmt;

/// A fully or partially specified endpoint to probe.
///
/// `port` and `category` may stay unset until the resolver's completion
/// pass fills them in. `url` is a pass-through for addons that operate on
/// full URLs; the parsers never populate it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: Option<u16>,
    pub category: Option<String>,
    pub protocol: Option<String>,
    pub url: Option<String>,
}

impl Target {
    /// A target with only the host filled in.
    pub fn from_host(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
            category: None,
            protocol: None,
            url: None,
        }
    }

    fn from_parts(host: &str, port: Option<&str>, protocol: Option<&str>) -> Self {
        Self {
            host: host.to_string(),
            port: port.and_then(parse_port),
            // An explicit scheme doubles as the category until the
            // completion pass says otherwise.
            category: protocol.map(str::to_string),
            protocol: protocol.map(str::to_string),
            url: None,
        }
    }
}

impl fmt::Display for Target {
    /// `protocol://host:port`, omitting whichever segments are unset.
    /// A target without a host renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.is_empty() {
            return Ok(());
        }
        if let Some(protocol) = &self.protocol {
            write!(f, "{protocol}://")?;
        }
        write!(f, "{}", self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

/// Extracts a usable port number from a raw token.
///
/// Non-digit characters are stripped before parsing, so `"3306/db"` still
/// yields 3306. Values outside the open interval (0, 65535) collapse to
/// `None`.
pub fn parse_port(raw: &str) -> Option<u16> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let port: u32 = digits.parse().ok()?;
    if port > 0 && port < 65535 {
        Some(port as u16)
    } else {
        None
    }
}

/// Splits a non-address spec into one of the four colon-based forms.
///
/// The last arm is total: every non-empty spec yields exactly one target.
pub fn parse_fallback(spec: &str) -> Target {
    let segments: Vec<&str> = spec.split(':').collect();

    if segments.len() == 3 {
        // mysql://127.0.0.1:3306
        Target::from_parts(
            &segments[1].replace("//", ""),
            Some(segments[2]),
            Some(segments[0]),
        )
    } else if spec.contains("://") {
        // snmp://127.0.0.1
        Target::from_parts(&segments[1].replace("//", ""), None, Some(segments[0]))
    } else if segments.len() > 1 {
        // 127.0.0.1:8080
        Target::from_parts(segments[0], Some(segments[1]), None)
    } else {
        Target::from_host(spec)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_host_port_form() {
        let target: Target = parse_fallback("mysql://127.0.0.1:3306");
        assert_eq!(target.host, "127.0.0.1");
        assert_eq!(target.port, Some(3306));
        assert_eq!(target.protocol.as_deref(), Some("mysql"));
        assert_eq!(target.category.as_deref(), Some("mysql"));
        assert_eq!(target.url, None);
    }

    #[test]
    fn scheme_host_form() {
        let target: Target = parse_fallback("snmp://127.0.0.1");
        assert_eq!(target.host, "127.0.0.1");
        assert_eq!(target.port, None);
        assert_eq!(target.protocol.as_deref(), Some("snmp"));
        assert_eq!(target.category.as_deref(), Some("snmp"));
    }

    #[test]
    fn host_port_form() {
        let target: Target = parse_fallback("127.0.0.1:8080");
        assert_eq!(target.host, "127.0.0.1");
        assert_eq!(target.port, Some(8080));
        assert_eq!(target.protocol, None);
        assert_eq!(target.category, None);
    }

    #[test]
    fn bare_host_form() {
        let target: Target = parse_fallback("scanme.example");
        assert_eq!(target.host, "scanme.example");
        assert_eq!(target.port, None);
        assert_eq!(target.protocol, None);
        assert_eq!(target.category, None);
    }

    #[test]
    fn port_token_is_sanitized() {
        assert_eq!(parse_port("3306"), Some(3306));
        assert_eq!(parse_port("8080/admin"), Some(8080));
        assert_eq!(parse_port("port22"), Some(22));

        // Outside the open interval (0, 65535), or no digits at all.
        assert_eq!(parse_port("0"), None);
        assert_eq!(parse_port("65535"), None);
        assert_eq!(parse_port("70000"), None);
        assert_eq!(parse_port("abc"), None);
        assert_eq!(parse_port(""), None);
    }

    #[test]
    fn path_suffix_in_port_segment_still_parses() {
        let target: Target = parse_fallback("http://10.0.0.1:8080/manager");
        assert_eq!(target.host, "10.0.0.1");
        assert_eq!(target.port, Some(8080));
        assert_eq!(target.protocol.as_deref(), Some("http"));
    }

    #[test]
    fn display_omits_unset_segments() {
        let mut target: Target = parse_fallback("mysql://10.0.0.1:3306");
        assert_eq!(target.to_string(), "mysql://10.0.0.1:3306");

        target.port = None;
        assert_eq!(target.to_string(), "mysql://10.0.0.1");

        assert_eq!(Target::from_host("10.0.0.1").to_string(), "10.0.0.1");
        assert_eq!(Target::from_host("").to_string(), "");
    }

    #[test]
    fn equality_is_structural() {
        let a: Target = parse_fallback("ssh://10.0.0.1:22");
        let b: Target = parse_fallback("ssh://10.0.0.1:22");
        assert_eq!(a, b);

        let mut c: Target = b.clone();
        c.port = Some(2222);
        assert_ne!(a, c);

        let mut d: Target = b.clone();
        d.category = Some("telnet".to_string());
        assert_ne!(a, d);
    }
}
