//! Print the GraphQL schema definition language for the directory.

use std::io::{self, Write};

use atlas::inbound::graphql::schema_sdl;
use color_eyre::eyre::{Result, WrapErr};

fn main() -> Result<()> {
    color_eyre::install()?;
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", schema_sdl()).wrap_err("write GraphQL schema")?;
    Ok(())
}
