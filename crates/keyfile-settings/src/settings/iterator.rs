//! Ordered iteration over the keys of one settings group.
//!
//! The cursor is a small state machine:
//!
//! ```text
//! BeforeFirst ──advance──▶ At(0) ──▶ … ──▶ At(N-1) ──advance──▶ Exhausted
//! ```
//!
//! `Exhausted` is terminal: once `advance` has returned `false` it keeps
//! returning `false`, and the iterator cannot be restarted.

use std::path::Path;

use super::store::{load_error, Settings, SettingsError};

/// Cursor position within the snapshotted key sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// No successful `advance` yet; there is no current key.
    BeforeFirst,
    /// Positioned on the key at this index.
    At(usize),
    /// Advanced past the last key. Terminal.
    Exhausted,
}

/// Single-pass walk over the key names of one group.
///
/// The key sequence is a snapshot taken when the iterator is opened, in
/// the order the keys appear in the file. Values, by contrast, are read
/// from the live document on every [`current_value`] call, so a
/// [`set`](Settings::set) made through [`settings_mut`] after the snapshot
/// is observed. Mutating the group's key set after the snapshot leaves
/// cursor and document out of step; the iterator does not guard against
/// that.
///
/// [`current_value`]: SettingsIterator::current_value
/// [`settings_mut`]: SettingsIterator::settings_mut
#[derive(Debug)]
pub struct SettingsIterator {
    settings: Settings,
    keys: Vec<String>,
    cursor: Cursor,
}

impl SettingsIterator {
    /// Opens the key file at `path` and prepares to iterate the keys of
    /// `group`.
    ///
    /// The cursor starts before the first key; call
    /// [`advance`](SettingsIterator::advance) to reach it.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] under the same conditions as
    /// [`Settings::open`], and additionally when `group` is not present
    /// in the file **or is present but has no keys**. An empty group is
    /// deliberately a load failure rather than an immediately-exhausted
    /// iterator, so callers can tell "group missing or empty" apart from
    /// a successful open. Nothing is retained on the error path.
    pub fn open(path: impl AsRef<Path>, group: &str) -> Result<Self, SettingsError> {
        let settings = Settings::open(&path, group)?;

        let keys = match settings.group_keys() {
            Some(keys) if !keys.is_empty() => keys,
            Some(_) => {
                return Err(load_error(
                    path.as_ref(),
                    format!("group {group:?} has no keys"),
                ))
            }
            None => {
                return Err(load_error(
                    path.as_ref(),
                    format!("group {group:?} not present"),
                ))
            }
        };

        Ok(Self {
            settings,
            keys,
            cursor: Cursor::BeforeFirst,
        })
    }

    /// Moves the cursor forward one key.
    ///
    /// Returns `true` while a key was reached, `false` once the sequence
    /// is exhausted. Exhaustion is permanent: every later call returns
    /// `false` as well.
    pub fn advance(&mut self) -> bool {
        self.cursor = match self.cursor {
            // `keys` is non-empty by construction, so the first key exists.
            Cursor::BeforeFirst => Cursor::At(0),
            Cursor::At(i) if i + 1 < self.keys.len() => Cursor::At(i + 1),
            Cursor::At(_) | Cursor::Exhausted => Cursor::Exhausted,
        };
        matches!(self.cursor, Cursor::At(_))
    }

    /// Name of the key at the cursor.
    ///
    /// # Panics
    ///
    /// Panics when the cursor is not positioned on a key, either before
    /// the first successful [`advance`](SettingsIterator::advance) or
    /// after exhaustion. Always pair this call with a preceding `advance` that
    /// returned `true`.
    pub fn current_name(&self) -> &str {
        match self.cursor {
            Cursor::At(i) => &self.keys[i],
            Cursor::BeforeFirst | Cursor::Exhausted => {
                panic!("cursor is not positioned on a key; call advance() first")
            }
        }
    }

    /// Value of the key at the cursor, read from the live document.
    ///
    /// Returns `None` when the key has been removed from the document
    /// since the snapshot was taken.
    ///
    /// # Panics
    ///
    /// Same contract as [`current_name`](SettingsIterator::current_name).
    pub fn current_value(&self) -> Option<String> {
        self.settings.value(self.current_name())
    }

    /// The embedded settings store.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable access to the embedded settings store, for calling
    /// [`set`](Settings::set) or [`save`](Settings::save) mid-iteration.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }
}

/// `for`-loop surface over the same cursor: each `next` is one `advance`
/// plus the current name/value pair. The trait and the explicit cursor
/// API share one state machine, so they can be mixed freely.
impl Iterator for SettingsIterator {
    type Item = (String, Option<String>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            Some((self.current_name().to_string(), self.current_value()))
        } else {
            None
        }
    }
}
