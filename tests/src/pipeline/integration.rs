#![cfg(test)]
use std::time::Duration;

use passprobe_common::config::Config;
use passprobe_common::network::target::Target;
use passprobe_core::{dispatch, probe, resolver};
use passprobe_plugins::Registry;

/// Exercises the resolve → dispatch path for a fully-qualified spec using
/// the built-in configuration and addon registry.
#[test]
fn resolve_then_dispatch_scheme_target() {
    let cfg: Config = Config::default();
    let registry: Registry = Registry::builtin();

    let targets: Vec<Target> = resolver::resolve(&["mysql://127.0.0.1:3306"], &cfg);
    assert_eq!(targets.len(), 1);

    let target: &Target = &targets[0];
    assert_eq!(target.host, "127.0.0.1");
    assert_eq!(target.category.as_deref(), Some("mysql"));
    assert_eq!(target.port, Some(3306));

    let expected: usize = cfg
        .credentials
        .iter()
        .filter(|set| set.category == "mysql" || set.category == cfg.common)
        .map(|set| set.credentials.len())
        .sum();
    assert!(expected > 0, "built-in config has no mysql credentials");

    let jobs = dispatch::build_jobs(target, &cfg, &registry);
    assert_eq!(jobs.len(), expected);
}

#[test]
fn bare_host_fans_out_over_every_category() {
    let cfg: Config = Config::default();

    let targets: Vec<Target> = resolver::resolve(&["203.0.113.9"], &cfg);
    assert_eq!(targets.len(), cfg.categories.len());

    for (target, category) in targets.iter().zip(&cfg.categories) {
        assert_eq!(target.host, "203.0.113.9");
        assert_eq!(target.category.as_deref(), Some(category.as_str()));
        assert_eq!(target.port, cfg.port_map.get(category).copied());
    }
}

#[test]
fn cidr_with_category_restriction() {
    let mut cfg: Config = Config::default();
    cfg.restrict_categories(&["ssh".to_string()]);

    let targets: Vec<Target> = resolver::resolve(&["192.0.2.0/30"], &cfg);
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].host, "192.0.2.1");
    assert_eq!(targets[1].host, "192.0.2.2");
    assert!(
        targets
            .iter()
            .all(|t| t.category.as_deref() == Some("ssh") && t.port == Some(22))
    );
}

/// The prober should see a real listener on the loopback interface.
#[tokio::test]
async fn probe_finds_loopback_listener() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port: u16 = listener.local_addr().unwrap().port();

    let cfg: Config = Config::default();
    let mut target: Target = Target::from_host("127.0.0.1");
    target.port = Some(port);

    assert!(probe::alive(&target, &cfg).await);
}

#[tokio::test]
#[ignore]
async fn probe_times_out_on_unroutable_address() {
    let mut cfg: Config = Config::default();
    cfg.timeout = Duration::from_millis(200);

    let mut target: Target = Target::from_host("203.0.113.1");
    target.port = Some(4444);

    assert!(!probe::alive(&target, &cfg).await);
}
