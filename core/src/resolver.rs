//! # Target Resolver
//!
//! Turns raw user-supplied specs into the flat, fully-categorized target
//! list that probing and dispatch consume.
//!
//! Each spec first goes through the address-range expander; whatever the
//! expander rejects falls through to the colon-heuristic parser, so range
//! forms always win over scheme forms. The completion pass then fills
//! ports by precedence (explicit port, then the global override, then the
//! category table) and fans category-less targets out across the
//! configured category universe, one independent clone per category.

use passprobe_common::config::Config;
use passprobe_common::network::range;
use passprobe_common::network::target::{self, Target};
use passprobe_common::warn;
use rayon::prelude::*;
use tracing::debug;

/// Resolves every spec in `specs`, preserving input order.
///
/// Specs are independent, so parsing runs data-parallel; order is restored
/// on collection.
pub fn resolve<S>(specs: &[S], cfg: &Config) -> Vec<Target>
where
    S: AsRef<str> + Sync,
{
    let parsed: Vec<Vec<Target>> = specs
        .par_iter()
        .map(|spec| parse_spec(spec.as_ref()))
        .collect();

    let mut resolved: Vec<Target> = Vec::new();
    for intermediate in parsed.into_iter().flatten() {
        complete(intermediate, cfg, &mut resolved);
    }
    resolved
}

/// Parses one spec into host-level targets, without completion.
fn parse_spec(raw: &str) -> Vec<Target> {
    let spec: &str = raw.trim().trim_end_matches('/');
    if spec.is_empty() {
        warn!("skipping empty target spec");
        return Vec::new();
    }

    debug!("parsing target {spec}");
    match range::expand(spec) {
        Ok(targets) => targets,
        // Not an address or network; the colon heuristics always apply.
        Err(_) => vec![target::parse_fallback(spec)],
    }
}

/// Emits the dispatch-ready variants of `intermediate` into `out`.
///
/// A categorized target resolves its port and passes through unchanged; an
/// uncategorized one becomes an independent clone per known category.
fn complete(intermediate: Target, cfg: &Config, out: &mut Vec<Target>) {
    // Dispatch-ready targets must carry a host; degenerate specs such as
    // ":8080" parse into host-less targets and stop here.
    if intermediate.host.is_empty() {
        warn!("skipping target spec with no host");
        return;
    }

    match intermediate.category.clone() {
        Some(category) => out.push(with_port(intermediate, &category, cfg)),
        None => {
            for category in &cfg.categories {
                let mut variant: Target = intermediate.clone();
                variant.category = Some(category.clone());
                out.push(with_port(variant, category, cfg));
            }
        }
    }
}

/// Port precedence: explicit, then global override, then category table,
/// else unset.
fn with_port(mut target: Target, category: &str, cfg: &Config) -> Target {
    target.port = target
        .port
        .or(cfg.port)
        .or_else(|| cfg.port_map.get(category).copied());
    target
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
    use std::collections::HashMap;

    fn two_category_config() -> Config {
        Config {
            categories: vec!["mysql".to_string(), "snmp".to_string()],
            port_map: HashMap::from([
                ("mysql".to_string(), 3306),
                ("snmp".to_string(), 161),
            ]),
            port: None,
            credentials: Vec::new(),
            ..Config::default()
        }
    }

    #[test]
    fn categorized_target_passes_through_once() {
        let cfg: Config = two_category_config();
        let targets: Vec<Target> = resolve(&["mysql://10.0.0.1:3306"], &cfg);

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].category.as_deref(), Some("mysql"));
        assert_eq!(targets[0].port, Some(3306));
    }

    #[test]
    fn uncategorized_target_fans_out_per_category() {
        let cfg: Config = two_category_config();
        let targets: Vec<Target> = resolve(&["10.0.0.1"], &cfg);

        assert_eq!(targets.len(), cfg.categories.len());
        assert_eq!(targets[0].category.as_deref(), Some("mysql"));
        assert_eq!(targets[0].port, Some(3306));
        assert_eq!(targets[1].category.as_deref(), Some("snmp"));
        assert_eq!(targets[1].port, Some(161));

        // Variants are independent clones of the same host.
        assert_eq!(targets[0].host, targets[1].host);
        assert_ne!(targets[0], targets[1]);
    }

    #[test]
    fn explicit_port_beats_the_global_override() {
        let mut cfg: Config = two_category_config();
        cfg.port = Some(9999);

        let targets: Vec<Target> = resolve(&["10.0.0.1:1234"], &cfg);
        assert!(targets.iter().all(|t| t.port == Some(1234)));
    }

    #[test]
    fn global_override_beats_the_category_table() {
        let mut cfg: Config = two_category_config();
        cfg.port = Some(9999);

        let targets: Vec<Target> = resolve(&["10.0.0.1"], &cfg);
        assert!(targets.iter().all(|t| t.port == Some(9999)));
    }

    #[test]
    fn category_table_is_the_last_resort() {
        let cfg: Config = two_category_config();
        let targets: Vec<Target> = resolve(&["10.0.0.1"], &cfg);
        assert_eq!(targets[0].port, Some(3306));

        let mut bare: Config = two_category_config();
        bare.port_map = HashMap::new();
        let targets: Vec<Target> = resolve(&["10.0.0.1"], &bare);
        assert!(targets.iter().all(|t| t.port.is_none()));
    }

    #[test]
    fn unknown_scheme_leaves_the_port_unset() {
        let cfg: Config = two_category_config();
        let targets: Vec<Target> = resolve(&["gopher://10.0.0.1"], &cfg);

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].category.as_deref(), Some("gopher"));
        assert_eq!(targets[0].port, None);
    }

    #[test]
    fn cidr_specs_expand_before_completion() {
        let cfg: Config = two_category_config();
        let targets: Vec<Target> = resolve(&["192.0.2.0/30"], &cfg);

        // Two usable hosts, fanned out over two categories.
        assert_eq!(targets.len(), 4);
        assert_eq!(targets[0].host, "192.0.2.1");
        assert_eq!(targets[2].host, "192.0.2.2");
    }

    #[test]
    fn input_order_is_preserved() {
        let cfg: Config = two_category_config();
        let targets: Vec<Target> = resolve(&["10.0.0.2", "mysql://10.0.0.1:3306"], &cfg);

        assert_eq!(targets.len(), 3);
        assert_eq!(targets[0].host, "10.0.0.2");
        assert_eq!(targets[1].host, "10.0.0.2");
        assert_eq!(targets[2].host, "10.0.0.1");
    }

    #[test]
    fn specs_are_trimmed_and_trailing_slashes_stripped() {
        let cfg: Config = two_category_config();
        let targets: Vec<Target> = resolve(&["  mysql://10.0.0.1/  "], &cfg);

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].host, "10.0.0.1");
        assert_eq!(targets[0].protocol.as_deref(), Some("mysql"));
    }

    #[test]
    fn degenerate_specs_resolve_to_nothing() {
        let cfg: Config = two_category_config();
        assert!(resolve(&[""], &cfg).is_empty());
        assert!(resolve(&["   "], &cfg).is_empty());
        assert!(resolve(&[":8080"], &cfg).is_empty());
    }
}
