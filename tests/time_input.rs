#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use sewalog::libs::error::EntryError;
    use sewalog::libs::time_input::{clamp_field, parse_canonical, sanitize_digits, ClockField, Meridiem, TimeInput};

    #[test]
    fn test_to_canonical_twelve_hour_rule() {
        // 12 AM is midnight, 12 PM stays noon, other PM hours gain 12.
        assert_eq!(TimeInput::new("12", "00", Meridiem::Am).to_canonical(), "00:00");
        assert_eq!(TimeInput::new("12", "00", Meridiem::Pm).to_canonical(), "12:00");
        assert_eq!(TimeInput::new("09", "00", Meridiem::Am).to_canonical(), "09:00");
        assert_eq!(TimeInput::new("05", "00", Meridiem::Pm).to_canonical(), "17:00");
        assert_eq!(TimeInput::new("11", "59", Meridiem::Pm).to_canonical(), "23:59");
        assert_eq!(TimeInput::new("1", "05", Meridiem::Am).to_canonical(), "01:05");
    }

    #[test]
    fn test_to_canonical_pads_minute_as_given() {
        assert_eq!(TimeInput::new("9", "5", Meridiem::Am).to_canonical(), "09:05");
        assert_eq!(TimeInput::new("9", "30", Meridiem::Am).to_canonical(), "09:30");
    }

    #[test]
    fn test_to_canonical_unparsable_hour_degrades_to_zero() {
        assert_eq!(TimeInput::new("", "30", Meridiem::Am).to_canonical(), "00:30");
        assert_eq!(TimeInput::new("xx", "30", Meridiem::Am).to_canonical(), "00:30");
        // PM still applies to the degraded hour.
        assert_eq!(TimeInput::new("", "30", Meridiem::Pm).to_canonical(), "12:30");
    }

    #[test]
    fn test_to_time_valid_and_invalid() {
        let time = TimeInput::new("05", "30", Meridiem::Pm).to_time().unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(17, 30, 0).unwrap());

        // An out-of-range minute survives to_canonical and is caught here.
        let result = TimeInput::new("05", "75", Meridiem::Pm).to_time();
        assert_eq!(result, Err(EntryError::InvalidTime("17:75".to_string())));
    }

    #[test]
    fn test_clamp_field_hour_range() {
        assert_eq!(clamp_field(ClockField::Hour, "0"), "01");
        assert_eq!(clamp_field(ClockField::Hour, "13"), "12");
        assert_eq!(clamp_field(ClockField::Hour, "99"), "12");
        assert_eq!(clamp_field(ClockField::Hour, "7"), "07");
        assert_eq!(clamp_field(ClockField::Hour, "12"), "12");
    }

    #[test]
    fn test_clamp_field_minute_range() {
        assert_eq!(clamp_field(ClockField::Minute, "-5"), "00");
        assert_eq!(clamp_field(ClockField::Minute, "60"), "59");
        assert_eq!(clamp_field(ClockField::Minute, "5"), "05");
        assert_eq!(clamp_field(ClockField::Minute, "0"), "00");
    }

    #[test]
    fn test_clamp_field_is_idempotent() {
        for raw in ["0", "7", "13", "99"] {
            let once = clamp_field(ClockField::Hour, raw);
            assert_eq!(clamp_field(ClockField::Hour, &once), once);
        }
        for raw in ["-5", "5", "60"] {
            let once = clamp_field(ClockField::Minute, raw);
            assert_eq!(clamp_field(ClockField::Minute, &once), once);
        }
    }

    #[test]
    fn test_clamp_field_unparsable_is_noop() {
        assert_eq!(clamp_field(ClockField::Hour, ""), "");
        assert_eq!(clamp_field(ClockField::Hour, "ab"), "ab");
        assert_eq!(clamp_field(ClockField::Minute, "1x"), "1x");
    }

    #[test]
    fn test_sanitize_digits() {
        assert_eq!(sanitize_digits("1a2b3"), "12");
        assert_eq!(sanitize_digits("07"), "07");
        assert_eq!(sanitize_digits("1234"), "12");
        assert_eq!(sanitize_digits("--"), "");
    }

    #[test]
    fn test_from_time_rounds_down_to_five_minutes() {
        let input = TimeInput::from_time(NaiveTime::from_hms_opt(14, 37, 0).unwrap());
        assert_eq!(input.hour, "02");
        assert_eq!(input.minute, "35");
        assert_eq!(input.period, Meridiem::Pm);
    }

    #[test]
    fn test_from_time_midnight_and_noon() {
        let midnight = TimeInput::from_time(NaiveTime::from_hms_opt(0, 3, 0).unwrap());
        assert_eq!(midnight.hour, "12");
        assert_eq!(midnight.minute, "00");
        assert_eq!(midnight.period, Meridiem::Am);

        let noon = TimeInput::from_time(NaiveTime::from_hms_opt(12, 59, 0).unwrap());
        assert_eq!(noon.hour, "12");
        assert_eq!(noon.minute, "55");
        assert_eq!(noon.period, Meridiem::Pm);
    }

    #[test]
    fn test_from_time_round_trips_through_canonical() {
        let input = TimeInput::from_time(NaiveTime::from_hms_opt(17, 30, 0).unwrap());
        assert_eq!(input.to_canonical(), "17:30");
    }

    #[test]
    fn test_parse_canonical_bounds() {
        assert!(parse_canonical("00:00").is_ok());
        assert!(parse_canonical("23:59").is_ok());
        assert_eq!(parse_canonical("24:00"), Err(EntryError::InvalidTime("24:00".to_string())));
        assert_eq!(parse_canonical("12:60"), Err(EntryError::InvalidTime("12:60".to_string())));
        assert_eq!(parse_canonical("noon"), Err(EntryError::InvalidTime("noon".to_string())));
    }
}
