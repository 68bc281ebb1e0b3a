//! Roster management: list, search, and add sewadars.
//!
//! The roster is reference data for the attendance workflows; these
//! commands are the only place it is created or extended.

use crate::db::sewadars::Sewadars;
use crate::libs::messages::Message;
use crate::libs::sewadar::{filter_sewadars, Sewadar};
use crate::libs::view::View;
use crate::{msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SewadarsArgs {
    #[command(subcommand)]
    command: Option<SewadarsCommand>,
}

#[derive(Debug, Subcommand)]
enum SewadarsCommand {
    #[command(about = "List the roster")]
    List,
    #[command(about = "Search the roster by name")]
    Search { query: String },
    #[command(about = "Add a sewadar to the roster")]
    Add { id: String, name: String },
}

pub fn cmd(args: SewadarsArgs) -> Result<()> {
    match args.command.unwrap_or(SewadarsCommand::List) {
        SewadarsCommand::List => {
            let roster = Sewadars::new()?.fetch_all()?;
            if roster.is_empty() {
                msg_info!(Message::RosterEmpty);
                return Ok(());
            }
            View::roster(&roster)
        }
        SewadarsCommand::Search { query } => {
            let roster = Sewadars::new()?.fetch_all()?;
            let matches = filter_sewadars(&roster, &query);
            if matches.is_empty() {
                msg_info!(Message::NoSewadarMatches(query));
                return Ok(());
            }
            View::roster(&matches)
        }
        SewadarsCommand::Add { id, name } => {
            let sewadar = Sewadar::new(&id, &name);
            if Sewadars::new()?.insert(&sewadar)? {
                msg_success!(Message::SewadarAdded(sewadar.name));
            } else {
                msg_warning!(Message::SewadarExists(sewadar.id));
            }
            Ok(())
        }
    }
}
