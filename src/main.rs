use clap::Parser;
use profile_park::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Browse(args) => cli::browse::run(args).await,
    }
}
