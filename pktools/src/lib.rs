pub mod bag;
pub mod inspect;
pub mod party;
pub mod pc;
pub mod sections;

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use std::{io::Write, path::PathBuf};

pub type RunResult = anyhow::Result<()>;

#[derive(Debug, Args)]
pub struct SaveArgs {
    #[arg(short, long)]
    pub sav: PathBuf,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl SaveArgs {
    pub fn load(&self) -> anyhow::Result<pksav::SaveFile> {
        log::debug!("Loading {}", self.sav.display());
        pksav::SaveFile::new(&self.sav)
            .with_context(|| format!("Failed to load save {}", self.sav.display()))
    }
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> RunResult {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
