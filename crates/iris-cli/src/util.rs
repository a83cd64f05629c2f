use anyhow::Result;
use std::path::Path;

pub fn validate_csv_file(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("csv") => {}
        _ => anyhow::bail!("File must have a .csv extension: {}", path.display()),
    }

    if !path.exists() {
        anyhow::bail!("File does not exist: {}", path.display());
    }

    Ok(())
}

/// Render a feature row the way it is typed: `[5.1, 3.5, 1.4, 0.2]`.
pub fn format_features(row: &[f64]) -> String {
    format!("{:?}", row)
}
