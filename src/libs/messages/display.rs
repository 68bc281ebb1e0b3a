//! Display implementation for sewalog application messages.
//!
//! The single place all user-facing text is defined. Each `Message` variant
//! maps to one formatted string; commands never embed literal message text.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === ENTRY MESSAGES ===
            Message::EntryAdded { name, counter } => format!("Entry added: {} at {}", name, counter),
            Message::EntryMarkedOut { name, time } => format!("{} marked out at {}", name, time),
            Message::NoEntriesForDate(date) => format!("No entries for {} yet.", date),
            Message::ActiveTally { active, roster } => format!("Active sewadars: {} / {} total team", active, roster),
            Message::NoActiveEntries(date) => format!("No active entries for {}.", date),
            Message::SelectActiveEntry => "Select entry to mark out".to_string(),

            // === ROSTER MESSAGES ===
            Message::SewadarAdded(name) => format!("Sewadar '{}' added to the roster.", name),
            Message::SewadarExists(id) => format!("A sewadar with id '{}' is already on the roster.", id),
            Message::RosterEmpty => "The roster is empty. Add sewadars with 'sewalog sewadars add'.".to_string(),
            Message::NoSewadarMatches(search) => format!("No sewadar matches '{}'.", search),
            Message::SelectSewadar => "Select sewadar".to_string(),
            Message::PromptSewadarSearch => "Sewadar name (search)".to_string(),
            Message::PromptCounter => "Counter (enter or pick a location)".to_string(),

            // === REPORT MESSAGES ===
            Message::ReportHeader(date) => format!("Jalpan Sewa Record - {}", date),
            Message::ShareTextHeader(date) => format!("Share text for {}:", date),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
            Message::ExportingAllData => "Exporting report and roster...".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::PromptCounterList => "Counters (comma-separated suggestion list)".to_string(),
            Message::PromptDefaultInTime => "Default in-time (HH:MM, 24-hour)".to_string(),
            Message::PromptDefaultOutTime => "Default out-time (HH:MM, 24-hour)".to_string(),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidDate(input) => format!("'{}' is not a valid date. Use YYYY-MM-DD or 'today'.", input),
        };
        write!(f, "{}", text)
    }
}
