//! Close an active entry by setting its end time.
//!
//! With no `--time` the form pre-fills from the current wall clock with the
//! minute rounded down to the nearest five, matching how out-times are
//! written up at the counters.

use crate::commands::parse_date;
use crate::db::records::Records;
use crate::libs::formatter::format_clock;
use crate::libs::messages::Message;
use crate::libs::time_input::{parse_canonical, TimeInput};
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Args)]
pub struct OutArgs {
    /// Record id to mark out (as shown in the report table); omit to pick
    /// from the date's active entries
    #[arg(long, short)]
    id: Option<i64>,

    /// Out time as canonical HH:MM; defaults to now, rounded down to five
    /// minutes
    #[arg(long, short)]
    time: Option<String>,

    /// Date whose active entries to offer (YYYY-MM-DD or 'today')
    #[arg(long, short, default_value = "today")]
    date: String,
}

pub fn cmd(args: OutArgs) -> Result<()> {
    let mut records = Records::new()?;

    let id = match args.id {
        Some(id) => id,
        None => pick_active(&mut records, &args.date)?,
    };

    let canonical = args.time.unwrap_or_else(|| TimeInput::now().to_canonical());
    let end = parse_canonical(&canonical)?;

    let record = records.mark_out(id, end)?;
    msg_success!(Message::EntryMarkedOut {
        name: record.sewadar_name,
        time: format_clock(record.end),
    });
    Ok(())
}

/// Offers the date's active entries for selection. Mark-out is only ever
/// offered for records without an end time.
fn pick_active(records: &mut Records, date_str: &str) -> Result<i64> {
    let date = parse_date(date_str)?;
    let entries = records.fetch_date(date)?;
    let active: Vec<_> = entries.iter().filter(|r| r.is_active()).collect();
    if active.is_empty() {
        msg_bail_anyhow!(Message::NoActiveEntries(date.to_string()));
    }

    let items: Vec<String> = active
        .iter()
        .map(|r| format!("{}: {} at {} (in {})", r.id, r.sewadar_name, r.counter, format_clock(Some(r.start))))
        .collect();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectActiveEntry.to_string())
        .items(&items)
        .default(0)
        .interact()?;
    Ok(active[choice].id)
}
