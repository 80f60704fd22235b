use clap::Parser;
use stockroom::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
