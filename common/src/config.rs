//! # Runtime Configuration
//!
//! Read-only knobs for one resolution run. Built once by the caller (CLI
//! or tests) before any resolution or dispatch begins, then shared by
//! reference; nothing in the workspace mutates it afterwards.

use std::collections::HashMap;
use std::time::Duration;

use crate::creds::{self, CredentialSet};
use crate::warn;

/// Category marker that makes a credential set apply to every target.
pub const COMMON_CATEGORY: &str = "common";

/// Service categories with their default probe ports.
pub const DEFAULT_PORTS: &[(&str, u16)] = &[
    ("ssh", 22),
    ("telnet", 23),
    ("ftp", 21),
    ("mysql", 3306),
    ("redis", 6379),
    ("snmp", 161),
    ("tomcat", 8080),
    ("vnc", 5900),
];

#[derive(Clone, Debug)]
pub struct Config {
    /// Global port override; beats the category table, loses to a port
    /// written into the target spec itself.
    pub port: Option<u16>,
    /// Per-attempt timeout for liveness probes.
    pub timeout: Duration,
    /// The category universe used when fanning out unqualified targets.
    pub categories: Vec<String>,
    /// Default port per category, consulted last in port resolution.
    pub port_map: HashMap<String, u16>,
    /// Credential sets carrying this category apply to every target.
    pub common: String,
    /// Ordered credential sets to cross-join against each target.
    pub credentials: Vec<CredentialSet>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: None,
            timeout: Duration::from_secs(3),
            categories: DEFAULT_PORTS
                .iter()
                .map(|(category, _)| (*category).to_string())
                .collect(),
            port_map: DEFAULT_PORTS
                .iter()
                .map(|(category, port)| ((*category).to_string(), *port))
                .collect(),
            common: COMMON_CATEGORY.to_string(),
            credentials: creds::builtin_sets(),
        }
    }
}

impl Config {
    /// Restricts the category universe to `keep`, preserving the configured
    /// order. Unknown names are reported and ignored.
    pub fn restrict_categories(&mut self, keep: &[String]) {
        if keep.is_empty() {
            return;
        }
        for name in keep {
            if !self.categories.iter().any(|category| category == name) {
                warn!("unknown category {name}, ignoring");
            }
        }
        self.categories.retain(|category| keep.contains(category));
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
    fn every_category_has_a_default_port() {
        let cfg: Config = Config::default();
        for category in &cfg.categories {
            assert!(cfg.port_map.contains_key(category), "{category} has no port");
        }
    }

    #[test]
    fn restriction_preserves_configured_order() {
        let mut cfg: Config = Config::default();
        cfg.restrict_categories(&["snmp".to_string(), "ssh".to_string()]);
        // Order follows the category table, not the restriction list.
        assert_eq!(cfg.categories, vec!["ssh".to_string(), "snmp".to_string()]);
    }

    #[test]
    fn unknown_restrictions_are_dropped() {
        let mut cfg: Config = Config::default();
        cfg.restrict_categories(&["gopher".to_string(), "ssh".to_string()]);
        assert_eq!(cfg.categories, vec!["ssh".to_string()]);
    }

    #[test]
    fn empty_restriction_keeps_everything() {
        let mut cfg: Config = Config::default();
        let before: usize = cfg.categories.len();
        cfg.restrict_categories(&[]);
        assert_eq!(cfg.categories.len(), before);
    }
}
