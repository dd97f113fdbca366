#[cfg(test)]
mod tests {
    use stempel::libs::time_sum::{TimeSum, TimeSumError};

    #[test]
    fn test_new_is_zero() {
        let sum = TimeSum::new();
        assert_eq!(sum.as_minutes(), 0);
        assert_eq!(sum.to_string(), "0:00");
        assert!(!sum.is_negative());
    }

    #[test]
    fn test_add_then_subtract_round_trip() {
        // Any (h, m) added and subtracted again must cancel exactly,
        // including minute components far past 59.
        for hours in 0..6 {
            for minutes in 0..150 {
                let mut sum = TimeSum::new();
                sum.add(hours, minutes).unwrap();
                sum.subtract(hours, minutes).unwrap();
                assert_eq!(sum.as_minutes(), 0, "h={} m={}", hours, minutes);
            }
        }
    }

    #[test]
    fn test_subtract_chain_canonical_display() {
        let mut sum = TimeSum::new();
        sum.add(4, 20).unwrap();

        sum.subtract(0, 140).unwrap();
        assert_eq!(sum.as_minutes(), 120);
        assert_eq!(sum.to_string(), "2:00");

        sum.subtract(1, 75).unwrap();
        assert_eq!(sum.as_minutes(), -15);
        assert_eq!(sum.to_string(), "-0:15");

        sum.subtract(1, 50).unwrap();
        assert_eq!(sum.as_minutes(), -125);
        assert_eq!(sum.to_string(), "-2:05");
    }

    #[test]
    fn test_add_or_subtract_signed_chain() {
        let mut sum = TimeSum::from_minutes(-125);

        sum.add_or_subtract(Some(&TimeSum::from_minutes(150)));
        assert_eq!(sum.as_minutes(), 25);
        assert_eq!(sum.to_string(), "0:25");

        sum.add_or_subtract(Some(&TimeSum::from_minutes(-85)));
        assert_eq!(sum.as_minutes(), -60);
        assert_eq!(sum.to_string(), "-1:00");

        sum.add_or_subtract(None);
        assert_eq!(sum.as_minutes(), -60);
    }

    #[test]
    fn test_negative_components_rejected() {
        let mut sum = TimeSum::new();
        assert!(matches!(sum.add(-1, 0), Err(TimeSumError::NegativeComponent { .. })));
        assert!(matches!(sum.subtract(0, -30), Err(TimeSumError::NegativeComponent { .. })));
        assert_eq!(sum.as_minutes(), 0);
    }

    #[test]
    fn test_set_converts_negative_human_form() {
        // set(-2, 5) means minus two hours five minutes.
        let mut sum = TimeSum::new();
        sum.set(-2, 5).unwrap();
        assert_eq!(sum.as_minutes(), -125);
        assert_eq!(sum.to_string(), "-2:05");

        sum.set(0, 45).unwrap();
        assert_eq!(sum.as_minutes(), 45);

        sum.set(-1, 0).unwrap();
        assert_eq!(sum.as_minutes(), -60);
        assert_eq!(sum.to_string(), "-1:00");
    }

    #[test]
    fn test_set_rejects_minutes_out_of_range() {
        let mut sum = TimeSum::new();
        assert_eq!(sum.set(2, 60), Err(TimeSumError::MinutesOutOfRange(60)));
        assert_eq!(sum.set(0, -1), Err(TimeSumError::MinutesOutOfRange(-1)));
    }

    #[test]
    fn test_from_minutes_display() {
        assert_eq!(TimeSum::from_minutes(0).to_string(), "0:00");
        assert_eq!(TimeSum::from_minutes(-1).to_string(), "-0:01");
        assert_eq!(TimeSum::from_minutes(-15).to_string(), "-0:15");
        assert_eq!(TimeSum::from_minutes(-60).to_string(), "-1:00");
        assert_eq!(TimeSum::from_minutes(-61).to_string(), "-1:01");
        assert_eq!(TimeSum::from_minutes(601).to_string(), "10:01");
    }

    #[test]
    fn test_parse_hour_minute_form() {
        assert_eq!("1:15".parse::<TimeSum>().unwrap().as_minutes(), 75);
        assert_eq!("-0:45".parse::<TimeSum>().unwrap().as_minutes(), -45);
        assert_eq!("0:00".parse::<TimeSum>().unwrap().as_minutes(), 0);
        assert_eq!("12:05".parse::<TimeSum>().unwrap().as_minutes(), 725);
    }

    #[test]
    fn test_parse_plain_minutes() {
        assert_eq!("90".parse::<TimeSum>().unwrap().as_minutes(), 90);
        assert_eq!("-30".parse::<TimeSum>().unwrap().as_minutes(), -30);
        assert_eq!("+45".parse::<TimeSum>().unwrap().as_minutes(), 45);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "-", "1:5", "1:345", "1:-5", "abc", "1h30", ":30", "1:xx"] {
            assert!(input.parse::<TimeSum>().is_err(), "accepted {:?}", input);
        }
    }
}
