//! # Sewalog - Sewadar Attendance Logging
//!
//! A command-line utility for recording sewadar check-ins and check-outs
//! at service counters and producing daily attendance reports.
//!
//! ## Features
//!
//! - **Attendance Entry**: Record check-ins with optional immediate
//!   check-out, for today or any back-dated day
//! - **Mark Out**: Close active entries, pre-filled from the wall clock
//! - **Daily Reports**: Per-date log table with an on-duty tally
//! - **Roster Management**: List, search, and extend the sewadar roster
//! - **Data Export**: Export reports and the roster to CSV, JSON, and Excel
//! - **Share Summaries**: Plain-text report summaries for messaging
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sewalog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
