use std::process::ExitCode;

use clap::Parser;
use midas::harness;

#[derive(Parser)]
#[command(name = "midas", version, about = "Charm employment application, in your terminal")]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();
    dotenv::dotenv().ok();

    harness::run().into()
}
