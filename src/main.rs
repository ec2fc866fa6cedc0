mod commands;
mod config;
mod input;
mod render;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "timeblock")]
#[command(about = "Keep a conflict-free schedule of one-time and recurring tasks")]
struct Cli {
    /// Schedule file to operate on (defaults to the configured path)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a one-time task
    Add {
        name: Option<String>,

        /// Task category: Visit, Shopping or Appointment
        #[arg(short, long)]
        kind: Option<String>,

        /// Date (YYYYMMDD or YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Start time (decimal hours like "9.5", or "9:30")
        #[arg(short, long)]
        start: Option<String>,

        /// Length (decimal hours like "1.5", or "1h 30m")
        #[arg(long)]
        duration: Option<String>,
    },
    /// Add a recurring task
    Repeat {
        name: Option<String>,

        /// Task category: Class, Study, Sleep, Exercise, Work or Meal
        #[arg(short, long)]
        kind: Option<String>,

        /// First date (YYYYMMDD or YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Last date of the series
        #[arg(short, long)]
        until: Option<String>,

        /// Start time (decimal hours like "9.5", or "9:30")
        #[arg(short, long)]
        start: Option<String>,

        /// Length (decimal hours like "1.5", or "1h 30m")
        #[arg(long)]
        duration: Option<String>,

        /// Cadence: "daily" or "weekly"
        #[arg(short, long)]
        every: Option<String>,
    },
    /// Cancel one occurrence of a recurring task
    Cancel {
        /// Date of the occurrence (YYYYMMDD or YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Start time of the occurrence
        #[arg(short, long)]
        start: Option<String>,

        /// Length of the cancelled slot
        #[arg(long)]
        duration: Option<String>,
    },
    /// Remove a task by name
    Remove { name: String },
    /// Show one task
    Show { name: String },
    /// List the whole schedule
    List,
    /// Edit a task's name, date or times
    Edit { name: String },
    /// Merge tasks from another schedule file
    Import { path: PathBuf },
    /// Write the schedule to another file
    Export { path: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let schedule = config::schedule_path(cli.file)?;

    match cli.command {
        Commands::Add {
            name,
            kind,
            date,
            start,
            duration,
        } => commands::add::run(&schedule, name, kind, date, start, duration),
        Commands::Repeat {
            name,
            kind,
            date,
            until,
            start,
            duration,
            every,
        } => commands::repeat::run(&schedule, name, kind, date, until, start, duration, every),
        Commands::Cancel {
            date,
            start,
            duration,
        } => commands::cancel::run(&schedule, date, start, duration),
        Commands::Remove { name } => commands::remove::run(&schedule, &name),
        Commands::Show { name } => commands::show::run(&schedule, &name),
        Commands::List => commands::list::run(&schedule),
        Commands::Edit { name } => commands::edit::run(&schedule, &name),
        Commands::Import { path } => commands::import::run(&schedule, &path),
        Commands::Export { path } => commands::export::run(&schedule, &path),
    }
}
