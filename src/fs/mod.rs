//! Filesystem module

pub mod entry;
pub mod opener;
pub mod ops;

pub use entry::Entry;
pub use opener::FileOpener;
