pub mod add;
pub mod export;
pub mod init;
pub mod out;
pub mod report;
pub mod sewadars;
pub mod share;

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Record a sewadar check-in, optionally with an immediate check-out")]
    Add(add::AddArgs),
    #[command(about = "Mark an active entry out")]
    Out(out::OutArgs),
    #[command(about = "Display the daily attendance log")]
    Report(report::ReportArgs),
    #[command(about = "Manage the sewadar roster")]
    Sewadars(sewadars::SewadarsArgs),
    #[command(about = "Export a report or the roster to CSV, JSON or Excel")]
    Export(export::ExportArgs),
    #[command(about = "Render a shareable text summary for a date")]
    Share(share::ShareArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Out(args) => out::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Sewadars(args) => sewadars::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Share(args) => share::cmd(args),
        }
    }
}

/// Parses a date argument: 'today' (case-insensitive) or 'YYYY-MM-DD'.
///
/// Every command takes its date from this active date context rather than
/// assuming the wall clock, so entries can be recorded for past dates.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.eq_ignore_ascii_case("today") {
        Ok(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(date_str.to_string())))
    }
}
