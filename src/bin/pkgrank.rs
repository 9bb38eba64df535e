// src/bin/pkgrank.rs
use clap::Parser;
use colored::Colorize;
use pkgrank_core::cli::{self, Cli};
use pkgrank_core::exit::PkgRankExit;

fn main() -> PkgRankExit {
    let cli = Cli::parse();

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        Cli::command()
            .print_help()
            .map(|()| PkgRankExit::Success)
            .map_err(anyhow::Error::from)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            PkgRankExit::for_error(&e)
        }
    }
}
