// src/bin/irasuto.rs
use pokedex_scrape::{cli, logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init();

    if let Some(summary) = cli::run("irasuto")? {
        println!("{summary}");
    }
    Ok(())
}
