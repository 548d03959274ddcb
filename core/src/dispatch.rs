//! # Scanner Dispatcher
//!
//! Cross-joins a resolved target with every applicable credential set and
//! asks the category's addon for one job per username/password pair.

use passprobe_common::config::Config;
use passprobe_common::fail;
use passprobe_common::network::target::Target;
use passprobe_plugins::{Registry, ScanJob};
use tracing::debug;

/// Builds the concrete job list for one dispatch-ready target.
///
/// An unset or unregistered category is reported and yields an empty list;
/// callers proceed to the next target. The job count equals the total
/// number of credential entries across the applicable sets, in
/// configuration order.
pub fn build_jobs(target: &Target, cfg: &Config, registry: &Registry) -> Vec<Box<dyn ScanJob>> {
    // The resolver never emits host-less targets; reaching this point
    // without one is a bug upstream, not an input problem.
    assert!(!target.host.is_empty(), "dispatch-ready target has no host");

    let Some(addon) = target
        .category
        .as_deref()
        .and_then(|category| registry.get(category))
    else {
        let category: &str = target.category.as_deref().unwrap_or("?");
        fail!("#{category} {target} is not yet supported.");
        return Vec::new();
    };

    let category: &str = addon.category();
    debug!("creating {category} scanners for {target}");

    let mut jobs: Vec<Box<dyn ScanJob>> = Vec::new();
    for set in &cfg.credentials {
        if set.category != category && set.category != cfg.common {
            continue;
        }
        for cred in &set.credentials {
            jobs.push(addon.make_scanner(set, target, cred.username(), cred.password()));
        }
    }
    jobs
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
