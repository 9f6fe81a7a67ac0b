mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, render, sort};
use ipgen_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        verbose: commands.verbose,
        json: commands.json,
    };

    logging::init_logging(&cfg);

    let q_level = cfg.header_q_level();

    match commands.command {
        Commands::Render { family, values } => {
            print::header("rendering fragments", q_level);
            render::render(family.into(), &values, &cfg)
        }
        Commands::Sort { family, reverse, values } => {
            print::header("sorting fragments", q_level);
            sort::sort(family.into(), reverse, &values, &cfg)
        }
        Commands::Check { family, values } => {
            print::header("checking fragments", q_level);
            check::check(family.into(), &values, &cfg)
        }
    }
}
