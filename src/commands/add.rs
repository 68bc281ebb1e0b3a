//! Record a new attendance entry.
//!
//! Fully scriptable via flags, or interactive when the sewadar or counter
//! is omitted: the sewadar is found by search-then-pick (the match list
//! only appears once a non-empty query has been typed), the counter field
//! offers the suggestion list while accepting free text, and the in/out
//! times are entered on the 12-hour form with field clamping on commit.

use crate::commands::parse_date;
use crate::db::records::Records;
use crate::db::sewadars::Sewadars;
use crate::libs::config::Config;
use crate::libs::counter::{filter_counters, CounterLabel};
use crate::libs::messages::Message;
use crate::libs::record::NewEntry;
use crate::libs::sewadar::{filter_sewadars, Sewadar};
use crate::libs::time_input::{clamp_field, parse_canonical, sanitize_digits, ClockField, Meridiem, TimeInput};
use crate::{msg_bail_anyhow, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Sewadar id; omit to search the roster interactively
    #[arg(long, short)]
    sewadar: Option<String>,

    /// Counter (sewa spot); omit to pick from the suggestion list
    #[arg(long, short)]
    counter: Option<String>,

    /// Check-in time as canonical HH:MM (defaults to the configured in-time)
    #[arg(long)]
    r#in: Option<String>,

    /// Check-out time as canonical HH:MM; omit to leave the entry on duty
    #[arg(long)]
    out: Option<String>,

    /// Date to record the entry under (YYYY-MM-DD or 'today')
    #[arg(long, short, default_value = "today")]
    date: String,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?;
    let date = parse_date(&args.date)?;

    let roster = Sewadars::new()?.fetch_all()?;
    if roster.is_empty() {
        msg_bail_anyhow!(Message::RosterEmpty);
    }

    let interactive = args.sewadar.is_none() || args.counter.is_none();

    let sewadar_id = match args.sewadar {
        Some(id) => id,
        None => pick_sewadar(&roster)?,
    };
    let counter = match args.counter {
        Some(counter) => counter,
        None => pick_counter(&config.counters)?,
    };

    let (start, end) = if interactive && args.r#in.is_none() && args.out.is_none() {
        prompt_times(&config)?
    } else {
        (args.r#in.unwrap_or_else(|| config.default_in.clone()), args.out)
    };

    let entry = NewEntry::validate(&roster, &sewadar_id, &counter, date, &start, end.as_deref())?;
    let record = Records::new()?.insert(&entry)?;

    msg_success!(Message::EntryAdded {
        name: record.sewadar_name,
        counter: record.counter,
    });
    Ok(())
}

/// Search-then-pick over the roster. The match list is only shown once the
/// query is non-empty; an empty or unmatched query re-prompts.
fn pick_sewadar(roster: &[Sewadar]) -> Result<String> {
    let theme = ColorfulTheme::default();
    loop {
        let search: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptSewadarSearch.to_string())
            .allow_empty(true)
            .interact_text()?;
        let search = search.trim().to_string();
        if search.is_empty() {
            continue;
        }
        let matches = filter_sewadars(roster, &search);
        if matches.is_empty() {
            msg_warning!(Message::NoSewadarMatches(search));
            continue;
        }
        let names: Vec<&str> = matches.iter().map(|s| s.name.as_str()).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt(Message::SelectSewadar.to_string())
            .items(&names)
            .default(0)
            .interact()?;
        return Ok(matches[choice].id.clone());
    }
}

/// Counter entry with the suggestion list layered on top of free text.
fn pick_counter(known: &[String]) -> Result<String> {
    let theme = ColorfulTheme::default();
    loop {
        let input: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptCounter.to_string())
            .allow_empty(true)
            .interact_text()?;
        let input = input.trim().to_string();
        if input.is_empty() {
            continue;
        }
        if let CounterLabel::Known(label) = CounterLabel::resolve(known, &input) {
            return Ok(label);
        }
        let suggestions = filter_counters(known, &input);
        if suggestions.is_empty() {
            return Ok(input);
        }
        let mut items = vec![format!("Use \"{}\"", input)];
        items.extend(suggestions.iter().cloned());
        let choice = Select::with_theme(&theme)
            .with_prompt(Message::PromptCounter.to_string())
            .items(&items)
            .default(0)
            .interact()?;
        if choice == 0 {
            return Ok(input);
        }
        return Ok(suggestions[choice - 1].clone());
    }
}

/// Prompts the in-time and, behind a confirmation, an immediate out-time.
fn prompt_times(config: &Config) -> Result<(String, Option<String>)> {
    let default_in = TimeInput::from_time(parse_canonical(&config.default_in)?);
    let in_time = prompt_time("In time", &default_in)?;

    let has_out = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Mark out time immediately?")
        .default(false)
        .interact()?;
    if !has_out {
        return Ok((in_time.to_canonical(), None));
    }

    let default_out = TimeInput::from_time(parse_canonical(&config.default_out)?);
    let out_time = prompt_time("Out time", &default_out)?;
    Ok((in_time.to_canonical(), Some(out_time.to_canonical())))
}

/// One pass over the 12-hour form: hour and minute are sanitized as typed
/// input would be and clamped on commit, the meridiem is a two-way pick.
fn prompt_time(label: &str, default: &TimeInput) -> Result<TimeInput> {
    let theme = ColorfulTheme::default();

    let hour: String = Input::with_theme(&theme)
        .with_prompt(format!("{} hour (1-12)", label))
        .default(default.hour.clone())
        .interact_text()?;
    let hour = clamp_field(ClockField::Hour, &sanitize_digits(&hour));

    let minute: String = Input::with_theme(&theme)
        .with_prompt(format!("{} minute (0-59)", label))
        .default(default.minute.clone())
        .interact_text()?;
    let minute = clamp_field(ClockField::Minute, &sanitize_digits(&minute));

    let period_choice = Select::with_theme(&theme)
        .with_prompt(format!("{} period", label))
        .items(&["AM", "PM"])
        .default(match default.period {
            Meridiem::Am => 0,
            Meridiem::Pm => 1,
        })
        .interact()?;
    let period = if period_choice == 0 { Meridiem::Am } else { Meridiem::Pm };

    Ok(TimeInput {
        hour,
        minute,
        period,
    })
}
