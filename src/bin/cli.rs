// src/bin/cli.rs
use bb_gamelog::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
