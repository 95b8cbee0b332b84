//! Tag builder CLI
//!
//! Usage:
//!   tagbuilder div --class box --text 'Hi & bye'
//!   tagbuilder img --attr src=a.png --mode self-closing
//!   tagbuilder --spec button.json --attr disabled

use anyhow::Result;
use clap::Parser;
use tagbuilder_cli::{Cli, run};

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("{}", run(&cli)?);
    Ok(())
}
