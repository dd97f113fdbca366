#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, Weekday};
    use stempel::libs::flexi_reset::FlexiReset;

    fn days_of_2018() -> impl Iterator<Item = NaiveDate> {
        NaiveDate::from_ymd_opt(2018, 1, 1).unwrap().iter_days().take_while(|day| day.year() == 2018)
    }

    #[test]
    fn test_reset_day_counts_over_2018() {
        let expectations = [
            (FlexiReset::None, 0),
            (FlexiReset::Daily, 365),
            (FlexiReset::Weekly, 53), // 2018 started on a Monday
            (FlexiReset::Monthly, 12),
            (FlexiReset::Quarterly, 4),
            (FlexiReset::HalfYearly, 2),
            (FlexiReset::Yearly, 1),
        ];

        for (policy, expected) in expectations {
            let count = days_of_2018().filter(|&day| policy.is_reset_day(day)).count();
            assert_eq!(count, expected, "{}", policy);
        }
    }

    #[test]
    fn test_reset_days_fall_on_period_starts() {
        for day in days_of_2018() {
            assert_eq!(FlexiReset::Weekly.is_reset_day(day), day.weekday() == Weekday::Mon);
            assert_eq!(FlexiReset::Monthly.is_reset_day(day), day.day() == 1);
            assert_eq!(
                FlexiReset::Quarterly.is_reset_day(day),
                day.day() == 1 && matches!(day.month(), 1 | 4 | 7 | 10)
            );
            assert_eq!(FlexiReset::HalfYearly.is_reset_day(day), day.day() == 1 && matches!(day.month(), 1 | 7));
            assert_eq!(FlexiReset::Yearly.is_reset_day(day), day == NaiveDate::from_ymd_opt(2018, 1, 1).unwrap());
        }
    }

    #[test]
    fn test_last_reset_day_weekly_alignment() {
        for day in days_of_2018() {
            let last = FlexiReset::Weekly.last_reset_day(day);
            assert_eq!(last.weekday(), Weekday::Mon);
            assert!(last <= day);
            assert!((day - last).num_days() < 7);
        }

        // Spot check: a Wednesday maps to its Monday.
        let wednesday = NaiveDate::from_ymd_opt(2018, 6, 13).unwrap();
        assert_eq!(FlexiReset::Weekly.last_reset_day(wednesday), NaiveDate::from_ymd_opt(2018, 6, 11).unwrap());
    }

    #[test]
    fn test_last_reset_day_monthly_alignment() {
        for day in days_of_2018() {
            let last = FlexiReset::Monthly.last_reset_day(day);
            assert_eq!(last.day(), 1);
            assert_eq!(last.month(), day.month());
            assert_eq!(last.year(), day.year());
        }
    }

    #[test]
    fn test_last_reset_day_quarter_alignment() {
        for day in days_of_2018() {
            let last = FlexiReset::Quarterly.last_reset_day(day);
            assert_eq!(last.day(), 1);
            assert!(matches!(last.month(), 1 | 4 | 7 | 10));
            assert_eq!((last.month() - 1) / 3, (day.month() - 1) / 3);
            assert_eq!(last.year(), day.year());
        }

        let late_may = NaiveDate::from_ymd_opt(2018, 5, 30).unwrap();
        assert_eq!(FlexiReset::Quarterly.last_reset_day(late_may), NaiveDate::from_ymd_opt(2018, 4, 1).unwrap());
    }

    #[test]
    fn test_last_reset_day_half_year_alignment() {
        for day in days_of_2018() {
            let last = FlexiReset::HalfYearly.last_reset_day(day);
            assert_eq!(last.day(), 1);
            assert!(matches!(last.month(), 1 | 7));
            assert_eq!((last.month() - 1) / 6, (day.month() - 1) / 6);
            assert_eq!(last.year(), day.year());
        }

        let december = NaiveDate::from_ymd_opt(2018, 12, 31).unwrap();
        assert_eq!(FlexiReset::HalfYearly.last_reset_day(december), NaiveDate::from_ymd_opt(2018, 7, 1).unwrap());
    }

    #[test]
    fn test_last_reset_day_daily_is_identity() {
        for day in days_of_2018() {
            assert_eq!(FlexiReset::Daily.last_reset_day(day), day);
        }
    }

    #[test]
    fn test_none_and_yearly_anchor_at_origin() {
        // YEARLY marks January 1st as a reset day but its window start
        // stays pinned at the origin, same as NONE; the caller clamps to
        // the first recorded day.
        let day = NaiveDate::from_ymd_opt(2018, 8, 15).unwrap();
        assert_eq!(FlexiReset::None.last_reset_day(day), NaiveDate::MIN);
        assert_eq!(FlexiReset::Yearly.last_reset_day(day), NaiveDate::MIN);
    }

    #[test]
    fn test_serde_uses_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&FlexiReset::HalfYearly).unwrap(), "\"HALF_YEARLY\"");
        assert_eq!(serde_json::from_str::<FlexiReset>("\"QUARTERLY\"").unwrap(), FlexiReset::Quarterly);
    }
}
