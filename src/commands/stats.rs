//! Statistics, export and import commands

use crate::output::print_statistics;
use crate::storage::SettingsStore;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Print the persisted statistics
pub fn run_stats(store: &SettingsStore) {
    print_statistics(&store.statistics());
}

/// Write the stored settings as an export document to `path`, or stdout if `None`
///
/// # Errors
///
/// Returns an error if storage is disabled, unreadable, or the file cannot be written.
pub fn run_export(store: &SettingsStore, path: Option<&Path>) -> Result<()> {
    let json = store.export().context("could not export settings")?;
    match path {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("could not write {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

/// Replace the stored settings with an export document read from `path`
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid export, or storage is
/// disabled or unwritable.
pub fn run_import(store: &SettingsStore, path: &Path) -> Result<()> {
    let json =
        fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))?;
    store.import(&json).context("could not import settings")?;
    println!("✓ Instellingen geïmporteerd uit {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_to_file_then_import() {
        let dir = std::env::temp_dir();
        let pid = std::process::id();
        let source_path = dir.join(format!("woordpuzzel-stats-src-{pid}.json"));
        let export_path = dir.join(format!("woordpuzzel-stats-export-{pid}.json"));
        let target_path = dir.join(format!("woordpuzzel-stats-dst-{pid}.json"));

        let source = SettingsStore::new(&source_path);
        source.update_high_score(75).unwrap();
        run_export(&source, Some(&export_path)).unwrap();

        let target = SettingsStore::new(&target_path);
        run_import(&target, &export_path).unwrap();
        assert_eq!(target.statistics().high_score, 75);

        for path in [source_path, export_path, target_path] {
            let _ = fs::remove_file(path);
        }
    }

    #[test]
    fn export_fails_when_disabled() {
        assert!(run_export(&SettingsStore::disabled(), None).is_err());
    }

    #[test]
    fn import_missing_file_fails() {
        let store = SettingsStore::disabled();
        assert!(run_import(&store, Path::new("/no/such/export.json")).is_err());
    }
}
