//! Settings store: one configuration file, one group, explicit save.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::keyfile::{write_file_atomic, KeyFile};

/// Errors reported by [`Settings`] and
/// [`SettingsIterator`](crate::SettingsIterator).
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file could not be read or parsed, or the requested group
    /// yields no keys.
    #[error("failed to load settings from {}: {}", .path.display(), .reason)]
    Load { path: PathBuf, reason: String },

    /// The in-memory document could not be rendered back to text.
    #[error("failed to render settings document: {reason}")]
    Serialize { reason: String },

    /// The rendered text could not be persisted to the settings file.
    #[error("failed to write settings to {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Logs and builds the [`SettingsError::Load`] for a failed open.
pub(crate) fn load_error(path: &Path, reason: impl std::fmt::Display) -> SettingsError {
    warn!("failed to load settings from {}: {reason}", path.display());
    SettingsError::Load {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// One configuration file scoped to one group.
///
/// Owns the parsed representation of the whole file. `set` mutates in
/// memory only; [`save`](Settings::save) is the explicit step that writes
/// the document back to disk. Dropping a `Settings` releases the document
/// without touching the file.
#[derive(Debug)]
pub struct Settings {
    path: PathBuf,
    group: String,
    keyfile: KeyFile,
}

impl Settings {
    /// Opens the key file at `path` and scopes the store to `group`.
    ///
    /// The whole file is parsed up front. Comments and entries outside
    /// `group` are kept verbatim so a later [`save`](Settings::save)
    /// round-trips them unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when either argument is empty, the
    /// file cannot be read, or its contents cannot be parsed. The
    /// underlying diagnostic is carried in the error; nothing is retained
    /// on the error path.
    pub fn open(path: impl AsRef<Path>, group: &str) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() || group.is_empty() {
            return Err(load_error(
                path,
                "file path and group name must be non-empty",
            ));
        }

        let text = std::fs::read_to_string(path).map_err(|e| load_error(path, e))?;
        let keyfile = KeyFile::parse(&text).map_err(|e| load_error(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            group: group.to_string(),
            keyfile,
        })
    }

    /// Sets `key` to `value` under this store's group.
    ///
    /// The group and key are created on demand; an existing value is
    /// overwritten. In-memory only; call [`save`](Settings::save) to
    /// persist.
    pub fn set(&mut self, key: &str, value: &str) {
        self.keyfile.set_value(&self.group, key, value);
        debug!("set {key} under group {} (in memory)", self.group);
    }

    /// Current in-memory value of `key` under this store's group, or
    /// `None` when the key is absent.
    pub fn value(&self, key: &str) -> Option<String> {
        self.keyfile.value(&self.group, key)
    }

    /// Serializes the whole document and atomically replaces the file.
    ///
    /// Every group is written back, not just this store's group; comments
    /// and entries this store never touched survive. On any failure the
    /// on-disk file keeps its previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Serialize`] when the document cannot be
    /// rendered (no write is attempted), or [`SettingsError::Write`] when
    /// the replacement write fails.
    pub fn save(&self) -> Result<(), SettingsError> {
        let text = self.keyfile.render().map_err(|e| {
            warn!(
                "failed to render settings document for {}: {e}",
                self.path.display()
            );
            SettingsError::Serialize {
                reason: e.to_string(),
            }
        })?;

        write_file_atomic(&self.path, &text).map_err(|source| {
            warn!(
                "failed to write settings to {}: {source}",
                self.path.display()
            );
            SettingsError::Write {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!("saved settings to {}", self.path.display());
        Ok(())
    }

    /// Path of the underlying settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the group this store is scoped to.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Key names of this store's group in document order, if the group
    /// exists.
    pub(crate) fn group_keys(&self) -> Option<Vec<String>> {
        self.keyfile.keys(&self.group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const FIXTURE: &str = "\
# Managed by the scanner; do not edit while it runs.

[scanner]
plugins_folder = \"/var/lib/plugins\"
plugin_timeout = \"320\"

[daemon]
listen_address = \"127.0.0.1\"
";

    fn fixture_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("settings.toml");
        fs::write(&path, FIXTURE).unwrap();
        path
    }

    #[test]
    fn test_open_rejects_empty_group_name() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let path = fixture_file(&dir);

        // Act
        let result = Settings::open(&path, "");

        // Assert
        assert!(matches!(result, Err(SettingsError::Load { .. })));
    }

    #[test]
    fn test_open_rejects_empty_path() {
        let result = Settings::open("", "scanner");

        assert!(matches!(result, Err(SettingsError::Load { .. })));
    }

    #[test]
    fn test_open_missing_file_is_load_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        let result = Settings::open(&path, "scanner");

        assert!(matches!(result, Err(SettingsError::Load { .. })));
    }

    #[test]
    fn test_open_malformed_file_carries_engine_diagnostic() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[scanner\nplugin_timeout = ").unwrap();

        // Act
        let err = Settings::open(&path, "scanner").unwrap_err();

        // Assert – the engine's parse diagnostic is surfaced, not swallowed
        match err {
            SettingsError::Load { reason, .. } => {
                assert!(!reason.is_empty(), "parse diagnostic must be carried")
            }
            other => panic!("expected Load, got {other:?}"),
        }
    }

    #[test]
    fn test_set_is_in_memory_until_save() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let path = fixture_file(&dir);
        let mut settings = Settings::open(&path, "scanner").unwrap();

        // Act
        settings.set("plugin_timeout", "640");

        // Assert – readable through the store, invisible on disk
        assert_eq!(settings.value("plugin_timeout"), Some("640".to_string()));
        assert_eq!(fs::read_to_string(&path).unwrap(), FIXTURE);
    }

    #[test]
    fn test_save_persists_all_groups_and_comments() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let path = fixture_file(&dir);
        let mut settings = Settings::open(&path, "scanner").unwrap();
        settings.set("plugin_timeout", "640");

        // Act
        settings.save().unwrap();

        // Assert
        let on_disk = fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("plugin_timeout = \"640\""));
        assert!(on_disk.contains("# Managed by the scanner; do not edit while it runs."));
        assert!(on_disk.contains("[daemon]"));
        assert!(on_disk.contains("listen_address = \"127.0.0.1\""));
    }

    #[test]
    fn test_save_to_removed_directory_is_write_error() {
        // Arrange
        let dir = TempDir::new().unwrap();
        let path = fixture_file(&dir);
        let settings = Settings::open(&path, "scanner").unwrap();
        drop(dir); // the destination directory disappears under us

        // Act
        let result = settings.save();

        // Assert
        assert!(matches!(result, Err(SettingsError::Write { .. })));
    }

    #[test]
    fn test_accessors_report_open_arguments() {
        let dir = TempDir::new().unwrap();
        let path = fixture_file(&dir);

        let settings = Settings::open(&path, "scanner").unwrap();

        assert_eq!(settings.path(), path.as_path());
        assert_eq!(settings.group(), "scanner");
    }
}
