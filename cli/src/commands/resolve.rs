use colored::*;
use passprobe_common::network::target::Target;
use passprobe_common::success;
use passprobe_core::resolver;

use crate::commands::TargetArgs;
use crate::terminal::print;

type Detail = (String, ColoredString);

pub fn resolve(args: TargetArgs) -> anyhow::Result<()> {
    let cfg = args.to_config();
    let targets: Vec<Target> = resolver::resolve(&args.targets, &cfg);

    if targets.is_empty() {
        print::no_results();
        return Ok(());
    }

    for (idx, target) in targets.iter().enumerate() {
        print_target_tree(idx, target);
        if idx + 1 != targets.len() {
            print::blank();
        }
    }

    print::blank();
    let unit: &str = if targets.len() == 1 { "target" } else { "targets" };
    success!("{} {unit} resolved", targets.len());
    Ok(())
}

fn print_target_tree(idx: usize, target: &Target) {
    print::tree_head(idx, &target.host);

    let mut details: Vec<Detail> = vec![(
        "Category".to_string(),
        target.category.as_deref().unwrap_or("?").green(),
    )];
    details.push((
        "Port".to_string(),
        match target.port {
            Some(port) => port.to_string().yellow(),
            None => "unset".bright_black(),
        },
    ));
    if let Some(protocol) = &target.protocol {
        details.push(("Protocol".to_string(), protocol.normal()));
    }

    print::as_tree_one_level(details);
}
