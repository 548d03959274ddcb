use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::*;
use passprobe_common::config::Config;
use passprobe_common::network::target::Target;
use passprobe_core::{dispatch, probe, resolver};
use passprobe_plugins::Registry;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::info_span;

use crate::commands::TargetArgs;
use crate::terminal::print;

const PROBE_WORKERS: usize = 64;

pub async fn scan(args: TargetArgs) -> anyhow::Result<()> {
    let cfg: Arc<Config> = Arc::new(args.to_config());
    let registry = Registry::builtin();

    let start_time: Instant = Instant::now();
    let targets: Vec<Target> = resolver::resolve(&args.targets, &cfg);
    if targets.is_empty() {
        print::no_results();
        return Ok(());
    }

    let ready: Vec<Target> = if args.no_probe {
        targets
    } else {
        probe_all(targets, cfg.clone()).await
    };

    let mut total_jobs: usize = 0;
    for (idx, target) in ready.iter().enumerate() {
        let jobs = dispatch::build_jobs(target, &cfg, &registry);
        if jobs.is_empty() {
            continue;
        }

        print::tree_head(idx, &target.to_string());
        let details: Vec<(String, ColoredString)> = jobs
            .iter()
            .enumerate()
            .map(|(i, job)| (format!("#{i}"), job.describe().normal()))
            .collect();
        print::as_tree_one_level(details);
        total_jobs += jobs.len();
    }

    print_summary(ready.len(), total_jobs, start_time.elapsed());
    Ok(())
}

/// Probes every target on a bounded worker pool, keeping input order.
async fn probe_all(targets: Vec<Target>, cfg: Arc<Config>) -> Vec<Target> {
    let span = info_span!("probing", indicatif.pb_show = true);
    let guard = span.enter();

    let semaphore: Arc<Semaphore> = Arc::new(Semaphore::new(PROBE_WORKERS));
    let mut workers: JoinSet<(usize, bool)> = JoinSet::new();
    for (idx, target) in targets.iter().cloned().enumerate() {
        let cfg = cfg.clone();
        let semaphore = semaphore.clone();
        workers.spawn(async move {
            let Ok(_permit) = semaphore.acquire_owned().await else {
                return (idx, false);
            };
            (idx, probe::alive(&target, &cfg).await)
        });
    }

    let mut alive: Vec<bool> = vec![false; targets.len()];
    while let Some(joined) = workers.join_next().await {
        if let Ok((idx, is_alive)) = joined {
            alive[idx] = is_alive;
        }
    }

    drop(guard);

    targets
        .into_iter()
        .zip(alive)
        .filter_map(|(target, is_alive)| is_alive.then_some(target))
        .collect()
}

fn print_summary(targets: usize, jobs: usize, total_time: Duration) {
    let jobs_str: ColoredString = format!("{jobs} jobs").bold().green();
    let time_str: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let unit: &str = if targets == 1 { "target" } else { "targets" };
    let output: String =
        format!("Dispatch complete: {jobs_str} for {targets} {unit} in {time_str}");

    print::fat_separator();
    print::centerln(&output);
}
