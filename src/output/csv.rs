//! CSV output for retrieved sites.

use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;
use log::debug;

use crate::api::types::Site;

/// Writes `sites` to a CSV file at `path`, overwriting any existing file.
///
/// The file starts with a `Site Name,Display Name` header row, followed by
/// one row per site in accumulation order.
pub fn write_sites_csv(path: &Path, sites: &[Site]) -> Result<()> {
    debug!("Writing {} site(s) to {}", sites.len(), path.display());

    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file at {}", path.display()))?;

    writer
        .write_record(["Site Name", "Display Name"])
        .context("Failed to write CSV header")?;

    for site in sites {
        writer
            .write_record([site.name.as_str(), site.display_name.as_str()])
            .context("Failed to write site record")?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}
