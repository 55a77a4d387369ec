use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use phonebook_core::FileSource;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// File with one `name;phone;email` record per line
    pub file: PathBuf,
}

pub fn import_file(ctx: &mut Context<'_>, args: ImportArgs) -> Result<()> {
    let source = FileSource::new(&args.file);
    let added = ctx
        .book
        .import_from(&source)
        .with_context(|| format!("import {}", args.file.display()))?;
    debug!(added = added.len(), total = ctx.book.directory().len(), "import finished");

    if ctx.json {
        print_json(&added)?;
    }
    Ok(())
}
