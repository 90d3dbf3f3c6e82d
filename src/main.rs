use clap::Parser;
use trendbench::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
