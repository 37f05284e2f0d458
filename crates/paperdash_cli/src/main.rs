//! `paperdash` command-line entry point.
//!
//! # Responsibility
//! - Parse arguments and the optional config file.
//! - Start file logging when a log directory is configured.
//! - Report failures on stderr with a non-zero exit code.

mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use paperdash_core::{init_logging, load_config};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "paperdash")]
#[command(version, about = "Research paper dashboard and project store", long_about = None)]
struct Cli {
    /// JSON config file; defaults apply when it does not exist.
    #[arg(long, global = true, default_value = "paperdash.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the dashboard from a data file or the project store
    Render {
        /// Dataset file (`.json` or `.csv`); falls back to the store
        #[arg(long)]
        data: Option<PathBuf>,
        /// Project store path; overrides `db_path` from the config
        #[arg(long)]
        db: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = RenderFormat::Html)]
        format: RenderFormat,
        /// Months shown in the Gantt grid
        #[arg(long)]
        months: Option<usize>,
        /// Reference date, `YYYY-MM-DD[ HH:MM[:SS]]`; defaults to now
        #[arg(long)]
        now: Option<String>,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Replace the stored projects with the contents of a file
    Import {
        /// `.json` or `.csv` file
        file: PathBuf,
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Write the stored projects to a file
    Export {
        file: PathBuf,
        #[arg(long)]
        db: Option<PathBuf>,
        /// Defaults to the file extension, then JSON
        #[arg(long, value_enum)]
        format: Option<DataFormat>,
    },
    /// Manage stored projects
    Project {
        #[arg(long, global = true)]
        db: Option<PathBuf>,
        #[command(subcommand)]
        command: ProjectCommands,
    },
}

#[derive(Subcommand)]
enum ProjectCommands {
    /// Create an empty project
    Add { name: String },
    /// Rename a project given by name or id
    Rename { project: String, new_name: String },
    /// Delete a project given by name or id
    Delete { project: String },
    /// List stored projects
    List,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RenderFormat {
    Html,
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DataFormat {
    Json,
    Csv,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("paperdash: {err}");
            return ExitCode::from(2);
        }
    };

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, &log_dir.to_string_lossy()) {
            eprintln!("paperdash: logging disabled: {err}");
        }
    }

    match commands::run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_command module=cli status=error");
            eprintln!("paperdash: {err}");
            ExitCode::FAILURE
        }
    }
}
