use crate::core::update::VisitField;
use crate::export::ExportFormat;
use crate::models::ShiftType;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rvisitlog
/// CLI application to classify shift visits and assign work teams
#[derive(Parser)]
#[command(
    name = "rvisitlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Classify shift visits extracted from scanned records and assign work teams by day parity",
    long_about = None
)]
pub struct Cli {
    /// Override the working collection path (useful for tests or parallel datasets)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Shift filter used by `list`.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ShiftFilter {
    Day,
    Night,
}

impl ShiftFilter {
    pub fn shift_type(&self) -> ShiftType {
        match self {
            ShiftFilter::Day => ShiftType::Diurno,
            ShiftFilter::Night => ShiftType::Noturno,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty collection
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Classify raw visits from an extracted CSV and add them to the collection
    Classify {
        /// CSV file with date,time,location columns (DD/MM/YYYY, HH:MM:SS)
        input: String,

        #[arg(long = "replace", help = "Replace the collection instead of appending")]
        replace: bool,

        #[arg(long = "print", help = "Print the classified visits after ingest")]
        print: bool,
    },

    /// Assign teams to classified visits by shift type and day parity
    Assign {
        #[arg(long = "day-even", help = "Team for day shifts on even days")]
        day_even: Option<String>,

        #[arg(long = "day-odd", help = "Team for day shifts on odd days")]
        day_odd: Option<String>,

        #[arg(long = "night-even", help = "Team for night shifts on even days")]
        night_even: Option<String>,

        #[arg(long = "night-odd", help = "Team for night shifts on odd days")]
        night_odd: Option<String>,
    },

    /// Update a single field of one visit
    Set {
        /// Visit id (as shown by `list` or in exports)
        id: String,

        #[arg(long = "field", help = "Field to update: date, time, location or team")]
        field: VisitField,

        #[arg(long = "value", help = "New value for the field")]
        value: String,
    },

    /// Delete one visit from the collection
    Del {
        /// Visit id
        id: String,

        #[arg(long = "force", help = "Delete without confirmation")]
        force: bool,
    },

    /// List classified visits
    List {
        #[arg(long = "shift", help = "Show only day or night shifts")]
        shift: Option<ShiftFilter>,

        #[arg(long = "team", help = "Show only visits assigned to this team")]
        team: Option<String>,

        #[arg(
            long = "range",
            help = "Filter by shift date: DD/MM/YYYY, MM/YYYY, YYYY or start:end"
        )]
        range: Option<String>,

        #[arg(long = "summary", help = "Print dataset totals after the table")]
        summary: bool,
    },

    /// Export the classified collection
    Export {
        #[arg(long = "format", help = "Output format")]
        format: ExportFormat,

        #[arg(long = "out", help = "Output file path")]
        out: String,

        #[arg(
            long = "range",
            help = "Filter by shift date: DD/MM/YYYY, MM/YYYY, YYYY or start:end"
        )]
        range: Option<String>,

        #[arg(long = "force", help = "Overwrite the output file without asking")]
        force: bool,
    },
}
