//! Infrastructure layer - implementations touching the outside world

pub mod cache;
pub mod http_client;
pub mod logging;
pub mod upstream;
