use colored::*;
use passprobe_common::config::Config;
use passprobe_plugins::Registry;

use crate::terminal::print;

pub fn info() -> anyhow::Result<()> {
    let cfg = Config::default();
    let registry = Registry::builtin();

    for category in registry.categories() {
        let port: ColoredString = match cfg.port_map.get(category) {
            Some(port) => port.to_string().yellow(),
            None => "unset".bright_black(),
        };
        print::aligned_line(category, port);
    }

    print::blank();
    let sets: usize = cfg.credentials.len();
    let entries: usize = cfg
        .credentials
        .iter()
        .map(|set| set.credentials.len())
        .sum();
    print::status(format!("{sets} built-in credential sets, {entries} entries"));
    Ok(())
}
