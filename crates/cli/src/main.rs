//! Sankalp CLI - operator tools for the portal.
//!
//! # Usage
//!
//! ```bash
//! # Print the sitemap the portal would serve
//! sankalp sitemap --base-url https://sankalp.spectov.in
//!
//! # Print the route table (without the landing paths)
//! sankalp routes --no-landing
//!
//! # List the course catalog
//! sankalp courses
//!
//! # List registrations awaiting review
//! sankalp pending
//!
//! # Approve every awaiting registration for an email
//! sankalp approve student@example.com
//! ```
//!
//! # Commands
//!
//! - `sitemap` - Print `sitemap.xml`
//! - `routes` - Print the public route table
//! - `courses` - List courses from the backend
//! - `pending` - List pending registrations
//! - `approve` - Approve a student's registrations

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sankalp")]
#[command(author, version, about = "Sankalp 2.0 portal tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sitemap served at /sitemap.xml
    Sitemap {
        /// Public base URL of the site
        #[arg(long, env = "PORTAL_BASE_URL")]
        base_url: String,

        /// Leave out the keyword landing paths
        #[arg(long)]
        no_landing: bool,
    },
    /// Print the public route table
    Routes {
        /// Leave out the keyword landing paths
        #[arg(long)]
        no_landing: bool,
    },
    /// List courses from the backend
    Courses,
    /// List registrations awaiting review
    Pending,
    /// Approve every awaiting registration for an email
    Approve {
        /// Student email address
        email: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Sitemap {
            base_url,
            no_landing,
        } => commands::site::sitemap(&base_url, !no_landing)?,
        Commands::Routes { no_landing } => commands::site::routes(!no_landing)?,
        Commands::Courses => commands::backend::courses().await?,
        Commands::Pending => commands::backend::pending().await?,
        Commands::Approve { email } => commands::backend::approve(&email).await?,
    }
    Ok(())
}
