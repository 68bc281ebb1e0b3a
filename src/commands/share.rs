//! Render a plain-text report summary for sharing.
//!
//! Prints the summary to stdout, or writes it to a file with `--output`
//! so it can be handed to a messaging app.

use crate::commands::parse_date;
use crate::db::records::Records;
use crate::libs::formatter::format_report_date;
use crate::libs::messages::Message;
use crate::libs::report::DailyReport;
use crate::msg_print;
use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ShareArgs {
    /// Date the summary covers (YYYY-MM-DD or 'today')
    #[arg(long, short, default_value = "today")]
    date: String,

    /// Write the summary to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ShareArgs) -> Result<()> {
    let date = parse_date(&args.date)?;

    let records = Records::new()?.fetch_all()?;
    let text = DailyReport::build(&records, date).share_text();

    match args.output {
        Some(path) => fs::write(&path, text)?,
        None => {
            msg_print!(Message::ShareTextHeader(format_report_date(date)), true);
            print!("{}", text);
        }
    }
    Ok(())
}
