// src/bin/cli.rs
use clap::Parser;
use contact_scrape::{cli, error::ScrapeError};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();

    match cli::run(args) {
        Ok(summary) => {
            println!("Wrote {}", summary.path.display());
            Ok(())
        }
        Err(ScrapeError::InvalidInvocation(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(e) => Err(e.into()),
    }
}
