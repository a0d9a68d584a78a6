//! Search domain - debounced filtering and derived statistics
//!
//! Pure and synchronous apart from the debounce operator; everything here
//! re-derives from its inputs, with no side effects and no I/O.

mod debounce;
mod filter;
mod stats;

pub use debounce::{DEFAULT_SETTLE, QueryDebouncer, QueryInput, query_pipeline};
pub use filter::filter_by_name;
pub use stats::DirectoryStats;
