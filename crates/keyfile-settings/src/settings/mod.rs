//! Settings store and group-key iteration.

mod iterator;
mod store;

pub use iterator::SettingsIterator;
pub use store::{Settings, SettingsError};
