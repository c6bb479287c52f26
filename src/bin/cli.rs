// src/bin/cli.rs
use arcane_prices::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(log::LogTarget::Stderr);
    cli::run()
}
