#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use sewalog::db::records::Records;
    use sewalog::libs::error::EntryError;
    use sewalog::libs::record::NewEntry;
    use sewalog::libs::sewadar::Sewadar;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests share the HOME variable, so they take turns.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct RecordsTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for RecordsTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            RecordsTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    fn roster() -> Vec<Sewadar> {
        vec![Sewadar::new("s1", "Gurpreet Kaur"), Sewadar::new("s2", "Harjit Singh")]
    }

    fn entry(sewadar: &str, counter: &str, date: NaiveDate, start: &str, end: Option<&str>) -> NewEntry {
        NewEntry::validate(&roster(), sewadar, counter, date, start, end).unwrap()
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_insert_and_fetch_date(_ctx: &mut RecordsTestContext) {
        let mut records = Records::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

        let record = records.insert(&entry("s1", "Tea", date, "09:00", None)).unwrap();
        assert_eq!(record.sewadar_name, "Gurpreet Kaur");
        assert!(record.is_active());

        let fetched = records.fetch_date(date).unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0], record);
        assert_eq!(fetched[0].start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert!(fetched[0].end.is_none());
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_insert_with_immediate_end(_ctx: &mut RecordsTestContext) {
        let mut records = Records::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

        let record = records.insert(&entry("s2", "Dessert", date, "09:00", Some("13:00"))).unwrap();
        assert!(!record.is_active());
        assert_eq!(record.end, NaiveTime::from_hms_opt(13, 0, 0));
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_ids_are_unique_across_dates(_ctx: &mut RecordsTestContext) {
        let mut records = Records::new().unwrap();
        let day_one = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let day_two = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

        let a = records.insert(&entry("s1", "Tea", day_one, "09:00", None)).unwrap();
        let b = records.insert(&entry("s1", "Tea", day_two, "09:00", None)).unwrap();
        let c = records.insert(&entry("s2", "Dessert", day_one, "10:00", None)).unwrap();

        assert_ne!(a.id, b.id);
        assert_ne!(a.id, c.id);
        assert_ne!(b.id, c.id);
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_back_dated_entry_lands_on_its_date(_ctx: &mut RecordsTestContext) {
        let mut records = Records::new().unwrap();
        let past = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();

        records.insert(&entry("s1", "Special Counter", past, "08:30", None)).unwrap();

        let fetched = records.fetch_date(past).unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].date, past);
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_fetch_date_preserves_insertion_order(_ctx: &mut RecordsTestContext) {
        let mut records = Records::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

        for (sewadar, start) in [("s1", "08:00"), ("s2", "09:00"), ("s1", "10:00")] {
            records.insert(&entry(sewadar, "Tea", date, start, None)).unwrap();
        }

        let fetched = records.fetch_date(date).unwrap();
        let starts: Vec<String> = fetched.iter().map(|r| r.start.format("%H:%M").to_string()).collect();
        assert_eq!(starts, vec!["08:00", "09:00", "10:00"]);
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_mark_out_sets_end_once(_ctx: &mut RecordsTestContext) {
        let mut records = Records::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

        let record = records.insert(&entry("s1", "Tea", date, "09:00", None)).unwrap();
        let end = NaiveTime::from_hms_opt(17, 30, 0).unwrap();

        let closed = records.mark_out(record.id, end).unwrap();
        assert_eq!(closed.end, Some(end));

        // Everything except the end time is untouched.
        assert_eq!(closed.id, record.id);
        assert_eq!(closed.sewadar_id, record.sewadar_id);
        assert_eq!(closed.sewadar_name, record.sewadar_name);
        assert_eq!(closed.date, record.date);
        assert_eq!(closed.counter, record.counter);
        assert_eq!(closed.start, record.start);
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_mark_out_unknown_id_is_not_found(_ctx: &mut RecordsTestContext) {
        let mut records = Records::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        records.insert(&entry("s1", "Tea", date, "09:00", None)).unwrap();

        let end = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        let err = records.mark_out(999, end).unwrap_err();
        assert_eq!(err.downcast_ref::<EntryError>(), Some(&EntryError::RecordNotFound(999)));

        // The record set is unchanged.
        let fetched = records.fetch_date(date).unwrap();
        assert_eq!(fetched.len(), 1);
        assert!(fetched[0].is_active());
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_mark_out_twice_is_rejected(_ctx: &mut RecordsTestContext) {
        let mut records = Records::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

        let record = records.insert(&entry("s1", "Tea", date, "09:00", None)).unwrap();
        let first = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
        let second = NaiveTime::from_hms_opt(18, 0, 0).unwrap();

        records.mark_out(record.id, first).unwrap();
        let err = records.mark_out(record.id, second).unwrap_err();
        assert_eq!(err.downcast_ref::<EntryError>(), Some(&EntryError::RecordAlreadyClosed(record.id)));

        // The original end time stands.
        let fetched = records.fetch_by_id(record.id).unwrap().unwrap();
        assert_eq!(fetched.end, Some(first));
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_fetch_all_spans_dates(_ctx: &mut RecordsTestContext) {
        let mut records = Records::new().unwrap();
        let day_one = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let day_two = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

        records.insert(&entry("s1", "Tea", day_one, "09:00", None)).unwrap();
        records.insert(&entry("s2", "Dessert", day_two, "09:00", None)).unwrap();

        assert_eq!(records.fetch_all().unwrap().len(), 2);
    }
}
