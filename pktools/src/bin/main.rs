use clap::{Parser, Subcommand};
use pktools::{bag, inspect, party, pc, sections};

#[derive(Parser)]
struct Opts {
    #[command(subcommand)]
    tool: ToolOpts,
}

#[derive(Subcommand)]
enum ToolOpts {
    Inspect(inspect::Opts),
    Sections(sections::Opts),
    Party(party::Opts),
    Bag(bag::Opts),
    Box(pc::Opts),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opts = Opts::parse();
    let mut out = std::io::stdout().lock();
    match opts.tool {
        ToolOpts::Inspect(opts) => inspect::run(opts, &mut out),
        ToolOpts::Sections(opts) => sections::run(opts, &mut out),
        ToolOpts::Party(opts) => party::run(opts, &mut out),
        ToolOpts::Bag(opts) => bag::run(opts, &mut out),
        ToolOpts::Box(opts) => pc::run(opts, &mut out),
    }
}
