//! Browse command - one-shot terminal rendering of the directory view

use std::sync::Arc;
use std::time::Duration;

use clap::Args;

use crate::config::AppConfig;
use crate::domain::directory::{DirectoryController, DirectoryView, select_view};
use crate::domain::search::{DirectoryStats, filter_by_name};
use crate::infrastructure::cache::{InMemoryCache, InMemoryCacheConfig};
use crate::infrastructure::http_client::HttpClient;
use crate::infrastructure::logging;
use crate::infrastructure::upstream::ProxyDirectoryClient;

/// Arguments for the browse command
#[derive(Args, Clone)]
pub struct BrowseArgs {
    /// Gateway base URL to browse against
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    pub gateway: String,

    /// Name filter applied to the listing
    #[arg(long, default_value = "")]
    pub query: String,
}

/// Mount a directory view against a running gateway and print it once
pub async fn run(args: BrowseArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let endpoint = format!("{}/api/users", args.gateway.trim_end_matches('/'));
    let source = Arc::new(ProxyDirectoryClient::new(HttpClient::new(), endpoint));
    let cache = Arc::new(InMemoryCache::with_config(
        InMemoryCacheConfig::default()
            .with_max_capacity(config.cache.max_capacity)
            .with_default_ttl(Duration::from_secs(config.cache.ttl_secs)),
    ));

    let controller = DirectoryController::new(source, cache, "/api/users")
        .with_cache_ttl(Duration::from_secs(config.cache.ttl_secs));

    controller.mount().await;
    let snapshot = controller.snapshot().await;

    let filtered = filter_by_name(&snapshot.users, &args.query);
    let stats = DirectoryStats::compute(&snapshot.users, &filtered);

    match select_view(&snapshot, filtered.len(), &args.query) {
        DirectoryView::Error { message } => {
            anyhow::bail!("Failed to load users: {}", message);
        }
        DirectoryView::NoResults => {
            println!("No users found for '{}'", args.query);
        }
        DirectoryView::Empty => {
            println!("The user directory is currently empty");
        }
        DirectoryView::Populated => {
            println!(
                "{} users, {} shown, {} cities, {} companies",
                stats.total_users,
                stats.filtered_count,
                stats.unique_cities,
                stats.unique_companies
            );
            println!();

            for user in &filtered {
                println!(
                    "#{:<4} {}  <{}>  {}, {}",
                    user.id, user.name, user.email, user.address.city, user.company.name
                );
            }
        }
        // The awaited mount has already resolved; a one-shot view is never
        // observed mid-flight.
        DirectoryView::Loading => {}
    }

    Ok(())
}
