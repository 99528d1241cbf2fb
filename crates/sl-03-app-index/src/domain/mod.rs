//! # Domain Layer

pub mod entry;
pub mod errors;
pub mod layout;

pub use entry::IndexEntry;
pub use errors::IndexError;
pub use layout::index_path;
