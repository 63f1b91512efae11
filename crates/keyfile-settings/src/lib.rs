//! # keyfile-settings
//!
//! Group-scoped settings over key files: open one group of a grouped
//! key/value configuration file, iterate the group's keys in document
//! order, read and set values, and write the whole file back to disk
//! atomically.
//!
//! Parsing and serialization of the file format are delegated to a
//! format-preserving engine (`toml_edit`); this crate only adds group
//! scoping, sequential iteration, and atomic persistence on top. Comments
//! and entries outside the opened group survive a load → save round trip
//! verbatim, so a settings file shared with other tools is never clobbered.
//!
//! The crate defines two types:
//!
//! - **[`Settings`]** – one configuration file scoped to one group.
//!   Mutations (`set`) are in memory only; `save` is an explicit, atomic
//!   whole-file replace.
//!
//! - **[`SettingsIterator`]** – an ordered, single-pass walk over the
//!   group's key names, taken as a snapshot at creation time. Values are
//!   read from the live document, so a `set` made during the walk is
//!   observed.
//!
//! # Examples
//!
//! ```rust
//! use keyfile_settings::{Settings, SettingsIterator};
//!
//! # fn main() -> Result<(), keyfile_settings::SettingsError> {
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("scanner.toml");
//! std::fs::write(&path, "# scanner daemon\n[scanner]\nport = \"9391\"\n").unwrap();
//!
//! let mut settings = Settings::open(&path, "scanner")?;
//! settings.set("timeout", "320");
//! settings.save()?;
//!
//! let mut iter = SettingsIterator::open(&path, "scanner")?;
//! while iter.advance() {
//!     println!("{} = {:?}", iter.current_name(), iter.current_value());
//! }
//! # Ok(())
//! # }
//! ```

// The engine adapter stays crate-private; only the settings surface is public.
mod keyfile;
pub mod settings;

// Re-export the public types at the crate root so callers can write
// `keyfile_settings::Settings` instead of `keyfile_settings::settings::Settings`.
pub use settings::{Settings, SettingsError, SettingsIterator};
