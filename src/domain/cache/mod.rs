//! Cache domain - the explicit cache service handed to the view controller

mod repository;

pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
