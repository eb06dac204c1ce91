use clap::Parser;

use hides::cli::{commands, Args};
use hides::runtime::Runtime;

fn main() -> color_eyre::Result<()> {
    let args = Args::parse();
    let runtime = Runtime::init(args.debug)?;

    let result = commands::run(&args);

    // Device sessions are closed inside `run`; tear down the runtime after them.
    drop(runtime);
    result
}
