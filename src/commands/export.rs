//! Export a date's report, the roster, or both.

use crate::commands::parse_date;
use crate::db::records::Records;
use crate::db::sewadars::Sewadars;
use crate::libs::export::{ExportData, ExportFormat, Exporter};
use crate::libs::report::DailyReport;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(long, short, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Which dataset to export
    #[arg(long, value_enum, default_value = "report")]
    data: ExportData,

    /// Date the report covers (YYYY-MM-DD or 'today')
    #[arg(long, short, default_value = "today")]
    date: String,

    /// Output file path; defaults to a timestamped name in the current
    /// directory
    #[arg(long, short)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let date = parse_date(&args.date)?;

    // The exporter is handed an already date-filtered record sequence;
    // layout past that point is its own business.
    let records = Records::new()?.fetch_all()?;
    let report = DailyReport::build(&records, date);
    let roster = Sewadars::new()?.fetch_all()?;

    Exporter::new(args.format, args.output).export(args.data, &report, &roster)
}
