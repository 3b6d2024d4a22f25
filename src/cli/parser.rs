use crate::export::{DEFAULT_EXPORT_FILE, ExportFormat};
use clap::{Parser, Subcommand};

/// Command-line interface definition for damagelog
/// CLI application to record warehouse damage reports in a CSV log
#[derive(Parser)]
#[command(
    name = "damagelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple damage reporting CLI: record warehouse damage reports and review aggregate statistics",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or a custom store)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the damage log and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Submit a new damage report
    Submit {
        /// Date of the incident (YYYY-MM-DD); defaults to today
        #[arg(long = "date", help = "Date of the incident (YYYY-MM-DD), default today")]
        date: Option<String>,

        /// Product SKU or PLU
        #[arg(long = "sku", help = "Product SKU or PLU")]
        sku: String,

        /// Product name
        #[arg(long = "product", help = "Product name")]
        product: String,

        /// Quantity damaged
        #[arg(long = "qty", help = "Quantity damaged")]
        quantity: i32,

        /// Type of damage
        #[arg(
            long = "damage",
            help = "Type of damage: crushed, leaking, broken-packaging, spoiled, other"
        )]
        damage: String,

        /// Storage zone
        #[arg(long = "zone", help = "Storage zone: dry, cooler, freezer, loading-dock")]
        zone: String,

        /// Responsible team
        #[arg(
            long = "team",
            help = "Responsible team: receiving, shipping, stocking, replens, unknown"
        )]
        team: String,

        /// Optional notes
        #[arg(long = "notes", help = "Optional notes")]
        notes: Option<String>,
    },

    /// Render the damage dashboard (counts, charts, full log)
    Dashboard {
        #[arg(long = "team", help = "Filter by team (repeatable)")]
        teams: Vec<String>,

        #[arg(long = "zone", help = "Filter by storage zone (repeatable)")]
        zones: Vec<String>,

        #[arg(long = "damage", help = "Filter by damage type (repeatable)")]
        damage_types: Vec<String>,
    },

    /// Export the (filtered) damage log
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", default_value = DEFAULT_EXPORT_FILE)]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,

        #[arg(long = "team", help = "Filter by team (repeatable)")]
        teams: Vec<String>,

        #[arg(long = "zone", help = "Filter by storage zone (repeatable)")]
        zones: Vec<String>,

        #[arg(long = "damage", help = "Filter by damage type (repeatable)")]
        damage_types: Vec<String>,
    },
}
