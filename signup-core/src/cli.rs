//! CLI argument parsing for the signup wizard
//!
//! Makes the TUI the default entry point when no subcommand is provided.

use crate::config::Variant;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "signup")]
#[command(about = "🧾 Subscription signup wizard")]
#[command(long_about = "🧾 Subscription signup wizard\n\n\
    Personal info, plan and billing cadence, add-ons, then a summary to confirm.\n\n\
    Run without arguments to launch the interactive TUI wizard.\n\
    Or use `submit` to fill the wizard from the command line.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Which wizard to run
    #[arg(long, value_enum, default_value_t = Variant::Full, global = true)]
    pub variant: Variant,

    /// Load plans, add-ons and steps from a TOML catalog instead of the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Dump TUI step render text to stdout and exit
    #[arg(long, global = true)]
    pub dump_tui: bool,

    /// Write logs to this file (recommended while the TUI is running)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 📝 Fill every step from arguments, then confirm (non-interactive)
    Submit {
        /// Full name
        #[arg(long, default_value = "")]
        name: String,

        /// Email address
        #[arg(long, default_value = "")]
        email: String,

        /// Phone number
        #[arg(long, default_value = "")]
        phone: String,

        /// Plan id (e.g. arcade, advance, pro)
        #[arg(long)]
        plan: Option<String>,

        /// Bill yearly instead of monthly
        #[arg(long)]
        yearly: bool,

        /// Add-on id (repeatable, e.g. online-services)
        #[arg(long = "add-on")]
        add_ons: Vec<String>,

        /// Print the final summary as JSON instead of the render transcript
        #[arg(long)]
        json: bool,
    },

    /// 📋 List plans and add-ons with their prices
    Catalog,
}
