//! Data export for attendance reports and the roster.
//!
//! Follows the contract of the record core: the exporter is handed an
//! already date-filtered, well-formed record sequence (a [`DailyReport`])
//! and decides layout on its own. Three formats are supported:
//!
//! - **CSV** for spreadsheet import and simple parsing
//! - **JSON** for programmatic processing and backup
//! - **Excel** for hand-outs, with header formatting and auto-sized columns
//!
//! File names default to `sewalog_export_<timestamp>.<ext>` when no output
//! path is given.

use crate::libs::formatter::{format_report_date, FormattedRecord, RecordGroup};
use crate::libs::messages::Message;
use crate::libs::report::DailyReport;
use crate::libs::sewadar::Sewadar;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

/// Which dataset to export.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// The selected date's attendance report.
    Report,
    /// The sewadar roster.
    Roster,
    /// Report and roster together.
    All,
}

/// Serializable daily report: summary counts plus pre-formatted rows.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportReport {
    pub date: String,
    pub total_entries: usize,
    pub on_duty: usize,
    pub entries: Vec<FormattedRecord>,
}

impl ExportReport {
    fn build(report: &DailyReport) -> Self {
        ExportReport {
            date: format_report_date(report.date),
            total_entries: report.entries.len(),
            on_duty: report.active,
            entries: report.entries.format(),
        }
    }
}

/// Serializable roster row.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportSewadar {
    pub id: String,
    pub name: String,
}

/// Export handler carrying the chosen format and output destination.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; with no custom path a timestamped default name
    /// with the format-appropriate extension is generated.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("sewalog_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Dispatches to the handler for the requested dataset.
    pub fn export(&self, data_type: ExportData, report: &DailyReport, roster: &[Sewadar]) -> Result<()> {
        match data_type {
            ExportData::Report => self.export_report(report),
            ExportData::Roster => self.export_roster(roster),
            ExportData::All => self.export_all(report, roster),
        }
    }

    fn export_report(&self, report: &DailyReport) -> Result<()> {
        let data = ExportReport::build(report);

        match self.format {
            ExportFormat::Csv => self.export_report_csv(&data)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&data)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_report_excel(&data)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_roster(&self, roster: &[Sewadar]) -> Result<()> {
        let rows: Vec<ExportSewadar> = roster
            .iter()
            .map(|s| ExportSewadar {
                id: s.id.clone(),
                name: s.name.clone(),
            })
            .collect();

        match self.format {
            ExportFormat::Csv => self.export_roster_csv(&rows)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.export_roster_excel(&rows)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    /// Exports report and roster together. JSON combines both into one
    /// document; CSV and Excel write sibling files with descriptive
    /// suffixes.
    fn export_all(&self, report: &DailyReport, roster: &[Sewadar]) -> Result<()> {
        msg_info!(Message::ExportingAllData);

        if let ExportFormat::Json = self.format {
            let rows: Vec<ExportSewadar> = roster
                .iter()
                .map(|s| ExportSewadar {
                    id: s.id.clone(),
                    name: s.name.clone(),
                })
                .collect();
            let all_data = serde_json::json!({
                "export_date": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                "daily_report": ExportReport::build(report),
                "roster": rows,
            });

            let json = serde_json::to_string_pretty(&all_data)?;
            File::create(&self.output_path)?.write_all(json.as_bytes())?;
        } else {
            let base = self.output_path.file_stem().unwrap_or_default().to_string_lossy().to_string();
            let ext = self.output_path.extension().unwrap_or_default().to_string_lossy().to_string();

            let report_path = self.output_path.with_file_name(format!("{}_report.{}", base, ext));
            let roster_path = self.output_path.with_file_name(format!("{}_roster.{}", base, ext));

            Exporter::new(self.format, Some(report_path)).export_report(report)?;
            Exporter::new(self.format, Some(roster_path)).export_roster(roster)?;

            return Ok(());
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_report_csv(&self, data: &ExportReport) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["ATTENDANCE", data.date.as_str(), "", "", ""])?;
        wtr.write_record(["ID", "Sewadar Name", "Sewa Spot", "Time In", "Time Out"])?;
        for entry in &data.entries {
            wtr.write_record([
                entry.id.to_string(),
                entry.sewadar.clone(),
                entry.counter.clone(),
                entry.time_in.clone(),
                entry.time_out.clone(),
            ])?;
        }

        wtr.write_record(["", "", "", "", ""])?;
        wtr.write_record(["SUMMARY", "", "", "", ""])?;
        wtr.write_record(["Total Entries", data.total_entries.to_string().as_str(), "", "", ""])?;
        wtr.write_record(["On Duty", data.on_duty.to_string().as_str(), "", "", ""])?;

        wtr.flush()?;
        Ok(())
    }

    fn export_roster_csv(&self, rows: &[ExportSewadar]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "Name"])?;

        for row in rows {
            wtr.write_record([row.id.clone(), row.name.clone()])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_report_excel(&self, data: &ExportReport) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        let title_format = Format::new().set_bold().set_font_size(14.0);

        worksheet.write_string_with_format(0, 0, &format!("Jalpan Sewa Record - {}", data.date), &title_format)?;
        worksheet.write_string_with_format(2, 0, "ID", &header_format)?;
        worksheet.write_string_with_format(2, 1, "Sewadar Name", &header_format)?;
        worksheet.write_string_with_format(2, 2, "Sewa Spot", &header_format)?;
        worksheet.write_string_with_format(2, 3, "Time In", &header_format)?;
        worksheet.write_string_with_format(2, 4, "Time Out", &header_format)?;

        let mut row = 3;
        for entry in &data.entries {
            worksheet.write_number(row, 0, entry.id as f64)?;
            worksheet.write_string(row, 1, &entry.sewadar)?;
            worksheet.write_string(row, 2, &entry.counter)?;
            worksheet.write_string(row, 3, &entry.time_in)?;
            worksheet.write_string(row, 4, &entry.time_out)?;
            row += 1;
        }

        row += 1;
        worksheet.write_string(row, 0, "Total Entries")?;
        worksheet.write_number(row, 1, data.total_entries as f64)?;
        row += 1;
        worksheet.write_string(row, 0, "On Duty")?;
        worksheet.write_number(row, 1, data.on_duty as f64)?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_roster_excel(&self, rows: &[ExportSewadar]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "ID", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Name", &header_format)?;

        for (i, sewadar) in rows.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_string(row, 0, &sewadar.id)?;
            worksheet.write_string(row, 1, &sewadar.name)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
