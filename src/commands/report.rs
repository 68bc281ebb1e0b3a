//! Display the daily attendance log.

use crate::commands::parse_date;
use crate::db::records::Records;
use crate::db::sewadars::Sewadars;
use crate::libs::formatter::{format_day, format_report_date, RecordGroup};
use crate::libs::messages::Message;
use crate::libs::report::DailyReport;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Date to report on (YYYY-MM-DD or 'today')
    #[arg(long, short, default_value = "today")]
    date: String,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let date = parse_date(&args.date)?;

    let records = Records::new()?.fetch_all()?;
    let report = DailyReport::build(&records, date);

    msg_print!(Message::ReportHeader(format_report_date(date)), true);

    if report.is_empty() {
        msg_info!(Message::NoEntriesForDate(format_day(date)));
        return Ok(());
    }

    // Most-recent-first, the way the daily overview lists entries.
    let mut entries = report.entries.clone();
    entries.reverse();
    View::records(&entries.format())?;

    let roster = Sewadars::new()?.fetch_all()?;
    msg_print!(Message::ActiveTally {
        active: report.active,
        roster: roster.len(),
    });
    Ok(())
}
