mod cli;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use searchsort::input::parse_numbers;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut numbers = parse_numbers(&cli.numbers)?;
    let report = searchsort::run(cli.algorithm.into(), &mut numbers, cli.target.as_deref())?;
    print!("{}", render::render(&report));
    Ok(())
}
