#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use sewalog::libs::formatter::{format_clock, format_day, format_report_date, FormattedRecord, RecordGroup, ACTIVE_MARKER};
    use sewalog::libs::record::AttendanceRecord;

    fn record(id: i64, end: Option<(u32, u32)>) -> AttendanceRecord {
        AttendanceRecord {
            id,
            sewadar_id: "s1".to_string(),
            sewadar_name: "Gurpreet Kaur".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            counter: "Tea".to_string(),
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end: end.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()),
        }
    }

    #[test]
    fn test_format_clock_twelve_hour_display() {
        assert_eq!(format_clock(NaiveTime::from_hms_opt(0, 0, 0)), "12:00 AM");
        assert_eq!(format_clock(NaiveTime::from_hms_opt(13, 5, 0)), "1:05 PM");
        assert_eq!(format_clock(NaiveTime::from_hms_opt(9, 0, 0)), "9:00 AM");
        assert_eq!(format_clock(NaiveTime::from_hms_opt(12, 0, 0)), "12:00 PM");
        assert_eq!(format_clock(NaiveTime::from_hms_opt(23, 59, 0)), "11:59 PM");
    }

    #[test]
    fn test_format_clock_absent_renders_empty() {
        assert_eq!(format_clock(None), "");
    }

    #[test]
    fn test_format_dates() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(format_report_date(date), "7 August 2026");
        assert_eq!(format_day(date), "Aug 7");
    }

    #[test]
    fn test_record_group_formats_rows() {
        let records = vec![record(1, Some((17, 30))), record(2, None)];
        let rows = records.format();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sewadar, "Gurpreet Kaur");
        assert_eq!(rows[0].counter, "Tea");
        assert_eq!(rows[0].time_in, "9:00 AM");
        assert_eq!(rows[0].time_out, "5:30 PM");
    }

    #[test]
    fn test_record_group_marks_active_rows() {
        let records = vec![record(7, None)];
        let rows = records.format();
        assert_eq!(rows[0].id, 7);
        assert_eq!(rows[0].time_out, ACTIVE_MARKER);
    }

    #[test]
    fn test_formatted_record_serialization() {
        let row = FormattedRecord {
            id: 3,
            sewadar: "Harjit Singh".to_string(),
            counter: "Dessert".to_string(),
            time_in: "9:00 AM".to_string(),
            time_out: "ACTIVE".to_string(),
        };

        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"id\":3"));
        assert!(json.contains("\"sewadar\":\"Harjit Singh\""));
        assert!(json.contains("\"time_out\":\"ACTIVE\""));

        let deserialized: FormattedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, row.id);
        assert_eq!(deserialized.counter, row.counter);
        assert_eq!(deserialized.time_in, row.time_in);
    }
}
