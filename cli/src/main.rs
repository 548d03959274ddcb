mod commands;
mod terminal;

use commands::{CommandLine, Commands, info, resolve, scan};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose);
    print::banner();

    match commands.command {
        Commands::Info => {
            print::header("supported services");
            info::info()
        }
        Commands::Resolve(args) => {
            print::header("resolving targets");
            resolve::resolve(args)
        }
        Commands::Scan(args) => {
            print::header("building scan jobs");
            scan::scan(args).await
        }
    }
}
