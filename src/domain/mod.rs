//! Domain layer - Core types and logic

pub mod cache;
pub mod directory;
pub mod error;
pub mod search;
pub mod user;

pub use cache::{Cache, CacheExt};
pub use directory::{
    DirectoryController, DirectorySnapshot, DirectorySource, DirectoryView, select_view,
};
pub use error::DomainError;
pub use search::{DirectoryStats, QueryDebouncer, QueryInput, filter_by_name, query_pipeline};
pub use user::{Address, Company, User, parse_users};
