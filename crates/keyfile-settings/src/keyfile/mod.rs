//! Key-file engine adapter: parsing, group/key access, atomic writes.
//!
//! # What is a key file? (for beginners)
//!
//! A key file is a plain-text configuration format made of named groups,
//! each holding `key = value` lines, with `#` comment lines in between:
//!
//! ```text
//! # Scanner daemon configuration.
//! [scanner]
//! plugins_folder = "/var/lib/plugins"
//! plugin_timeout = "320"
//! ```
//!
//! The grammar itself (escaping, encoding, comment syntax) is not this
//! crate's business: it is delegated to the `toml_edit` engine, which
//! parses a file into a document that remembers its exact textual layout.
//! That is what makes saves non-destructive: comments and entries this
//! crate never looked at are written back byte-for-byte.
//!
//! Nothing from `toml_edit` crosses this module's boundary; the rest of
//! the crate sees only [`KeyFile`] and [`write_file_atomic`].

mod document;
mod io;

pub use document::KeyFile;
pub use io::write_file_atomic;
