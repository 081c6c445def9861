//! `tabshelf show` and `tabshelf export`

use anyhow::{bail, Result};
use std::path::Path;

use tabshelf_core::{render_outline, Shelf};

pub async fn show(shelf: &Shelf) -> Result<()> {
    match shelf.snapshot_tree().await? {
        Some(tree) => print!("{}", render_outline(&tree)),
        None => bail!(
            "no snapshot yet, run `tabshelf snapshot` first (root \"{}\")",
            shelf.config().layout.root_title
        ),
    }
    Ok(())
}

pub async fn export(shelf: &Shelf, output: Option<&Path>) -> Result<()> {
    let html = shelf.export_html().await?;
    match output {
        Some(path) => {
            std::fs::write(path, html)?;
            tracing::info!(path = %path.display(), "Exported snapshot");
        }
        None => print!("{}", html),
    }
    Ok(())
}
