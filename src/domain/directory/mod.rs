//! Directory domain - the fetch lifecycle and view selection
//!
//! The controller turns a raw, possibly-failing remote fetch into a
//! consistent, cacheable snapshot; view selection maps that snapshot onto
//! the one panel the rendering layer shows.

mod controller;
mod source;
mod view;

pub use controller::{
    CachedDirectory, DEFAULT_CACHE_TTL, DirectoryController, DirectorySnapshot,
};
pub use source::DirectorySource;
pub use view::{DirectoryView, select_view};

#[cfg(test)]
pub use source::mock::MockDirectorySource;
