//! CLI module for the Profile Park gateway
//!
//! Provides subcommands for the two ways to use the gateway:
//! - `serve`: gateway API + directory page (default mode)
//! - `browse`: one-shot terminal view of the directory

pub mod browse;
pub mod serve;

use clap::{Parser, Subcommand};

/// Profile Park - searchable directory over an upstream user listing
#[derive(Parser)]
#[command(name = "profile-park")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the gateway API with the directory page (default mode)
    Serve,

    /// Fetch the directory once and print matching entries
    Browse(browse::BrowseArgs),
}
