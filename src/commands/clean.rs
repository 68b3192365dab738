//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Portfolio;

/// Delete the public directory
pub fn run(site: &Portfolio) -> Result<()> {
    if site.public_dir.exists() {
        fs::remove_dir_all(&site.public_dir)?;
        tracing::info!("Deleted: {:?}", site.public_dir);
    } else {
        tracing::debug!("Nothing to clean at {:?}", site.public_dir);
    }

    Ok(())
}
