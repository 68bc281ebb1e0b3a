use crate::libs::formatter::FormattedRecord;
use crate::libs::sewadar::Sewadar;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn records(records: &[FormattedRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "SEWADAR NAME", "SEWA SPOT", "TIME IN", "TIME OUT"]);
        for record in records {
            table.add_row(row![record.id, record.sewadar, record.counter, record.time_in, record.time_out]);
        }
        table.printstd();

        Ok(())
    }

    pub fn roster(sewadars: &[Sewadar]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME"]);
        for sewadar in sewadars {
            table.add_row(row![sewadar.id, sewadar.name]);
        }
        table.printstd();

        Ok(())
    }
}
