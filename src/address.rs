use alloc::string::String;
use core::fmt;
use core::net::{IpAddr, Ipv6Addr};
use core::str::FromStr;

use crate::constants::{HOSTNAME_LABEL_MAX_LEN, HOSTNAME_MAX_LEN};
use crate::error::{Field, Reason, ValidationError};

/// Broker address as written by the user, plus what kind of address it is.
///
/// The text is kept as written so that [`BrokerAddress::as_str`] returns the
/// value exactly as configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerAddress {
    text: String,
    kind: AddressKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Ip(IpAddr),
    Hostname,
}

impl BrokerAddress {
    pub fn parse(text: String) -> Result<Self, ValidationError> {
        let kind = classify(&text).map_err(|reason| ValidationError::new(Field::BrokerAddress, reason))?;
        Ok(Self { text, kind })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> AddressKind {
        self.kind
    }

    pub fn ip(&self) -> Option<IpAddr> {
        match self.kind {
            AddressKind::Ip(ip) => Some(ip),
            AddressKind::Hostname => None,
        }
    }

    /// Host part to hand to a resolver or socket: brackets around an IPv6
    /// literal are stripped.
    pub fn host(&self) -> &str {
        self.text
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(&self.text)
    }
}

impl fmt::Display for BrokerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn classify(text: &str) -> Result<AddressKind, Reason> {
    if text.is_empty() {
        return Err(Reason::Empty);
    }

    if let Ok(ip) = IpAddr::from_str(text) {
        return Ok(AddressKind::Ip(ip));
    }

    // [fe80::1] form, as used in URLs
    if let Some(inner) = text.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        return Ipv6Addr::from_str(inner)
            .map(|ip| AddressKind::Ip(IpAddr::V6(ip)))
            .map_err(|_| Reason::Malformed("bracketed address is not an IPv6 literal"));
    }

    check_hostname(text).map(|_| AddressKind::Hostname)
}

fn check_hostname(text: &str) -> Result<(), Reason> {
    // a trailing dot marks a fully qualified name
    let name = text.strip_suffix('.').unwrap_or(text);

    if name.len() > HOSTNAME_MAX_LEN {
        return Err(Reason::Malformed("hostname is longer than 253 characters"));
    }

    for label in name.split('.') {
        if label.is_empty() {
            return Err(Reason::Malformed("hostname contains an empty label"));
        }
        if label.len() > HOSTNAME_LABEL_MAX_LEN {
            return Err(Reason::Malformed("hostname label is longer than 63 characters"));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(Reason::Malformed("hostname label starts or ends with '-'"));
        }
        // underscores show up in real LAN names, so they are let through
        if !label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return Err(Reason::Malformed("not a hostname or IP address"));
        }
    }

    // a numeric top label means a mistyped IPv4 address, not a name
    if name.rsplit('.').next().is_some_and(|top| top.bytes().all(|b| b.is_ascii_digit())) {
        return Err(Reason::Malformed("not a valid IPv4 address"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use core::net::Ipv4Addr;

    fn parse(s: &str) -> Result<BrokerAddress, ValidationError> {
        BrokerAddress::parse(s.to_string())
    }

    #[test]
    fn ipv4_literal() {
        let addr = parse("192.168.1.140").unwrap();
        assert_eq!(addr.ip(), Some(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 140))));
        assert_eq!(addr.as_str(), "192.168.1.140");
    }

    #[test]
    fn ipv6_literals() {
        assert!(parse("::1").unwrap().ip().is_some());
        let bracketed = parse("[fe80::1]").unwrap();
        assert!(bracketed.ip().is_some());
        assert_eq!(bracketed.host(), "fe80::1");
        assert_eq!(bracketed.as_str(), "[fe80::1]");
    }

    #[test]
    fn hostnames() {
        for name in ["broker", "broker.local", "mqtt-01.example.com", "pi_hole.lan", "broker.local."] {
            let addr = parse(name).unwrap();
            assert_eq!(addr.kind(), AddressKind::Hostname, "{name}");
        }
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["my broker", "a..b", "-host", "host-", "[nope]", "broker:1883", "192.168.1.999", ".", "tab\there"] {
            let err = parse(bad).unwrap_err();
            assert_eq!(err.field(), Field::BrokerAddress, "{bad}");
            assert!(matches!(err.reason(), Reason::Malformed(_)), "{bad}");
        }
    }

    #[test]
    fn rejects_empty() {
        let err = parse("").unwrap_err();
        assert_eq!(err.reason(), Reason::Empty);
    }

    #[test]
    fn rejects_overlong_label() {
        let label = "a".repeat(64);
        assert!(parse(&label).is_err());
        assert!(parse(&"a".repeat(63)).is_ok());
    }
}
