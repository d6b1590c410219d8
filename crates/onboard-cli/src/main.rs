mod clients;
mod draft_file;
mod entry;
mod manage;
mod table;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use onboard_core::{AppConfig, RecordType};
use onboard_store::RecordStore;
use tracing_subscriber::EnvFilter;

use crate::manage::ManageCommands;

#[derive(Debug, Parser)]
#[command(name = "onboard")]
#[command(about = "Client onboarding records and exports")]
struct Cli {
    /// Client records file (overrides `ONBOARD_DATA_PATH`)
    #[arg(long, global = true)]
    data_path: Option<PathBuf>,
    /// Directory for spreadsheet and CSV exports (overrides `ONBOARD_EXPORT_DIR`)
    #[arg(long, global = true)]
    export_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Record a client onboarding from a draft file
    Onboard {
        /// YAML draft with the form values
        #[arg(long)]
        draft: PathBuf,
        /// Save the record without writing a spreadsheet
        #[arg(long)]
        no_export: bool,
    },
    /// Record a client pitch (competitor analysis and social listening only)
    Pitch {
        /// YAML draft with the form values
        #[arg(long)]
        draft: PathBuf,
        /// Save the record without writing a spreadsheet
        #[arg(long)]
        no_export: bool,
    },
    /// Add brands to an existing organization
    Update {
        /// Organization to update
        #[arg(long)]
        org: String,
        /// YAML draft with the reports and brands to add
        #[arg(long)]
        draft: PathBuf,
        /// Save the record without writing a spreadsheet
        #[arg(long)]
        no_export: bool,
    },
    /// Edit, delete or export stored records
    Manage {
        #[command(subcommand)]
        command: ManageCommands,
    },
    /// Overview of every client brand
    Clients {
        /// Also write the overview to `clients_data.csv`
        #[arg(long)]
        csv: bool,
    },
    /// List organizations with their brands
    Orgs,
}

/// Store and export location shared by every workflow.
#[derive(Debug, Clone)]
pub(crate) struct Context {
    pub store: RecordStore,
    pub export_dir: PathBuf,
}

impl Context {
    pub(crate) fn new(store: RecordStore, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            export_dir: export_dir.into(),
        }
    }

    fn from_config(config: &AppConfig) -> Self {
        Self::new(RecordStore::from_config(config), config.export_dir.clone())
    }

    /// Write an export file into the export directory and return its path.
    pub(crate) fn write_export(&self, file_name: &str, bytes: &[u8]) -> anyhow::Result<PathBuf> {
        Ok(onboard_export::write_bytes(&self.export_dir, file_name, bytes)?)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = onboard_core::load_app_config()?
        .with_overrides(cli.data_path.clone(), cli.export_dir.clone());
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(
        env = %config.env,
        data_path = %config.data_path.display(),
        export_dir = %config.export_dir.display(),
        "loaded config"
    );

    let ctx = Context::from_config(&config);
    match cli.command {
        Some(Commands::Onboard { draft, no_export }) => {
            entry::run_entry(&ctx, RecordType::Onboard, &draft, !no_export)?;
        }
        Some(Commands::Pitch { draft, no_export }) => {
            entry::run_entry(&ctx, RecordType::Pitch, &draft, !no_export)?;
        }
        Some(Commands::Update {
            org,
            draft,
            no_export,
        }) => {
            entry::run_update(&ctx, &org, &draft, !no_export)?;
        }
        Some(Commands::Manage { command }) => manage::run_manage(&ctx, command)?,
        Some(Commands::Clients { csv }) => {
            clients::run_clients(&ctx, csv)?;
        }
        Some(Commands::Orgs) => clients::run_orgs(&ctx),
        None => println!("no command given; run `onboard --help` for usage"),
    }

    Ok(())
}
