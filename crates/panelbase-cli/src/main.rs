mod display;

use anyhow::Context;
use clap::{Parser, Subcommand};
use panelbase_core::{Organizations, SiteRecord};
use panelbase_store::ConnectionSpec;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "panelbase",
    version,
    about = "Outdoor-media organization catalog and database bootstrap"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Connect to and health-check named MongoDB databases.
    Connect {
        /// Database as NAME=URI. Repeatable; the env var takes a `;`-separated list.
        #[arg(
            long = "db",
            value_name = "NAME=URI",
            env = "PANELBASE_DATABASES",
            value_delimiter = ';',
            required = true,
            value_parser = parse_connection_spec,
        )]
        databases: Vec<ConnectionSpec>,
    },
    /// List supported organizations.
    Orgs {
        /// Only this catalog group.
        #[arg(long)]
        group: Option<String>,
        /// Hide archived organizations.
        #[arg(long)]
        active: bool,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Print the default record template as JSON.
    Template,
    /// Print field descriptors as JSON.
    Fields {
        /// Only descriptors required for this capability.
        #[arg(long)]
        capability: Option<String>,
    },
}

fn parse_connection_spec(s: &str) -> Result<ConnectionSpec, String> {
    s.parse().map_err(|e: panelbase_store::StoreError| e.to_string())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("panelbase v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let orgs = Organizations::new();

    match cli.command {
        Command::Connect { databases } => {
            let clients = panelbase_store::initialize(databases)?;
            let mut names: Vec<&String> = clients.keys().collect();
            names.sort();
            for name in names {
                println!("{name}: ok");
            }
        }
        Command::Orgs {
            group,
            active,
            json,
        } => {
            let groups = match &group {
                Some(name) => vec![(name.as_str(), orgs.group(name)?)],
                None => orgs
                    .supported_organizations()
                    .iter()
                    .map(|g| (g.name, g.sites))
                    .collect(),
            };

            if json {
                let out: serde_json::Map<String, serde_json::Value> = groups
                    .iter()
                    .map(|(name, sites)| {
                        let sites = filter_sites(sites, active);
                        let value = serde_json::to_value(sites)?;
                        Ok::<_, serde_json::Error>((name.to_string(), value))
                    })
                    .collect::<Result<_, serde_json::Error>>()
                    .context("serializing organizations")?;
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for (name, sites) in groups {
                    display::print_group(name, &filter_sites(sites, active));
                }
            }
        }
        Command::Template => {
            let template = orgs.default_template();
            println!("{}", serde_json::to_string_pretty(&template)?);
        }
        Command::Fields { capability } => {
            let fields: Vec<_> = match &capability {
                Some(c) => orgs.fields_required_for(c).collect(),
                None => orgs.fields().iter().collect(),
            };
            println!("{}", serde_json::to_string_pretty(&fields)?);
        }
    }

    Ok(())
}

fn filter_sites(sites: &[SiteRecord], active_only: bool) -> Vec<&SiteRecord> {
    sites
        .iter()
        .filter(|s| !active_only || s.is_active())
        .collect()
}
