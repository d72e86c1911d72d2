//! Estate Admin CLI
//!
//! Inspect the dashboard from a terminal:
//! - List screens and their titles
//! - Resolve records the way a page shell would
//! - Filter the bundled collections
//! - Exercise the session bootstrap against a backend

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use estate_admin::config::{generate_default_config, AppConfig, LoggingConfig};
use estate_admin::domain::{Entity, Money};
use estate_admin::filter::{DateRange, ListFilter, PriceRange};
use estate_admin::mock;
use estate_admin::page::{trail_text, PageShell, Screen};
use estate_admin::resolver::{MockCollection, RestResolver, Strategy};
use estate_admin::session::{BootstrapOutcome, HttpSession, SessionBootstrap};

#[derive(Parser)]
#[command(name = "estate-admin")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Real-estate CRM admin dashboard tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (default: standard locations, then environment)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every dashboard screen
    Screens,

    /// Show the title and breadcrumbs of a screen
    Title {
        /// Screen name, e.g. client-details
        screen: String,
    },

    /// Resolve a record the way its details screen does
    Resolve {
        collection: Collection,
        id: String,
        /// Fetch from the REST API instead of the bundled records
        #[arg(long)]
        remote: bool,
    },

    /// Filter a bundled collection
    List {
        collection: Collection,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long = "type")]
        kind: Option<String>,
        /// Lower price bound in major units
        #[arg(long)]
        min_price: Option<f64>,
        /// Upper price bound in major units
        #[arg(long)]
        max_price: Option<f64>,
        /// Created on or after (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Created on or before (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Request the session cookie from the configured backend
    Session,

    /// Print the default config file
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Collection {
    Clients,
    Leads,
    Properties,
    Developments,
    Users,
    Transfers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::load_default(),
    };
    init_tracing(&config.logging);

    match cli.command {
        Commands::Screens => {
            println!("{:<26} {:<36} {}", "Name", "Path", "Title");
            println!("{}", "-".repeat(100));
            for screen in Screen::all() {
                println!(
                    "{:<26} {:<36} {}",
                    screen.name(),
                    screen.path(),
                    screen.title(&config.app_name)
                );
            }
        }

        Commands::Title { screen } => {
            let screen = Screen::from_name(&screen)
                .with_context(|| format!("unknown screen '{}', see `estate-admin screens`", screen))?;
            println!("{}", screen.title(&config.app_name));
            println!("{}", trail_text(&screen.breadcrumbs()));
        }

        Commands::Resolve {
            collection,
            id,
            remote,
        } => match collection {
            Collection::Clients => {
                resolve(Screen::ClientDetails, mock::clients(), &id, remote, &config).await?
            }
            Collection::Leads => {
                resolve(Screen::LeadDetails, mock::leads(), &id, remote, &config).await?
            }
            Collection::Properties => {
                resolve(Screen::PropertyDetails, mock::properties(), &id, remote, &config).await?
            }
            Collection::Developments => {
                resolve(Screen::DevelopmentDetails, mock::developments(), &id, remote, &config)
                    .await?
            }
            Collection::Users => {
                resolve(Screen::UserProfile, mock::users(), &id, remote, &config).await?
            }
            Collection::Transfers => {
                resolve(Screen::WalletTransferDetails, mock::transfers(), &id, remote, &config)
                    .await?
            }
        },

        Commands::List {
            collection,
            name,
            status,
            kind,
            min_price,
            max_price,
            from,
            to,
        } => {
            let filter = ListFilter {
                name,
                status,
                kind,
                price: PriceRange {
                    min: min_price.map(Money::from_major),
                    max: max_price.map(Money::from_major),
                },
                created: DateRange { from, to },
            };

            match collection {
                Collection::Clients => print_records(&mock::clients(), &filter, &config),
                Collection::Leads => print_records(&mock::leads(), &filter, &config),
                Collection::Properties => print_records(&mock::properties(), &filter, &config),
                Collection::Developments => {
                    print_records(&mock::developments(), &filter, &config)
                }
                Collection::Users => print_records(&mock::users(), &filter, &config),
                Collection::Transfers => print_records(&mock::transfers(), &filter, &config),
            }
        }

        Commands::Session => {
            let session = HttpSession::new(&config.api).context("building HTTP client")?;
            let bootstrap = SessionBootstrap::from_config(&config.api);

            println!("GET {}", bootstrap.url());
            let outcome = tokio::select! {
                outcome = bootstrap.run(&session) => outcome,
                _ = tokio::signal::ctrl_c() => {
                    bootstrap.cancel();
                    BootstrapOutcome::Cancelled
                }
            };

            match &outcome {
                BootstrapOutcome::Established => println!("Session established"),
                BootstrapOutcome::Failed(reason) => println!("Session bootstrap failed: {}", reason),
                BootstrapOutcome::Cancelled => println!("Session bootstrap cancelled"),
                BootstrapOutcome::Skipped => println!("Session bootstrap already ran"),
            }

            match session.xsrf_token(&config.api.base_url) {
                Some(_) => println!("XSRF-TOKEN cookie received"),
                None => println!("No XSRF-TOKEN cookie"),
            }
        }

        Commands::Config => {
            print!("{}", generate_default_config());
        }
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("estate_admin={}", logging.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn resolve<E>(
    screen: Screen,
    records: MockCollection<E>,
    id: &str,
    remote: bool,
    config: &AppConfig,
) -> anyhow::Result<()>
where
    E: Entity + Serialize + DeserializeOwned,
{
    let strategy = if remote {
        Strategy::fetch(RestResolver::<E>::new(&config.api)?)
    } else {
        Strategy::lookup(records)
    };
    let shell = PageShell::with_strategy(screen, strategy);

    println!("{}", shell.title(config));
    let mut renders = shell.renders(id);
    while let Some(props) = renders.next().await {
        println!("{}", serde_json::to_string_pretty(&props)?);
    }

    Ok(())
}

fn print_records<E: Entity>(records: &MockCollection<E>, filter: &ListFilter, config: &AppConfig) {
    println!("GET {}", filter.request_url::<E>(&config.api));
    println!();

    let matched = records.filter(filter);

    if matched.is_empty() {
        println!("No {} match.", E::COLLECTION);
        return;
    }

    println!(
        "{:<8} {:<24} {:<20} {:<14} {:>16}",
        "ID", "Name", "Status", "Type", "Price"
    );
    println!("{}", "-".repeat(86));
    for record in matched {
        println!(
            "{:<8} {:<24} {:<20} {:<14} {:>16}",
            record.id(),
            record.display_name(),
            record.status().unwrap_or("-"),
            record.kind().unwrap_or("-"),
            record
                .price()
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
    }
}
