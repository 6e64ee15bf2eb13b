use chrono::{NaiveDate, Weekday};
use inventorist::constants::{
    GREETING_AFTERNOON, GREETING_EVENING, GREETING_MORNING, TIP_FRIDAY, TIP_GENERIC, TIP_MONDAY,
};
use inventorist::utils::datetime::{format_long_date, greeting_for_hour, tip_for_weekday};

#[test]
fn test_greeting_boundaries() {
    assert_eq!(greeting_for_hour(0), GREETING_MORNING);
    assert_eq!(greeting_for_hour(9), GREETING_MORNING);
    assert_eq!(greeting_for_hour(11), GREETING_MORNING);
    assert_eq!(greeting_for_hour(12), GREETING_AFTERNOON);
    assert_eq!(greeting_for_hour(15), GREETING_AFTERNOON);
    assert_eq!(greeting_for_hour(17), GREETING_AFTERNOON);
    assert_eq!(greeting_for_hour(18), GREETING_EVENING);
    assert_eq!(greeting_for_hour(20), GREETING_EVENING);
    assert_eq!(greeting_for_hour(23), GREETING_EVENING);
}

#[test]
fn test_tip_for_weekday() {
    assert_eq!(tip_for_weekday(Weekday::Mon), TIP_MONDAY);
    assert_eq!(tip_for_weekday(Weekday::Fri), TIP_FRIDAY);
    for day in [Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Sat, Weekday::Sun] {
        assert_eq!(tip_for_weekday(day), TIP_GENERIC);
    }
}

#[test]
fn test_format_long_date() {
    let date = NaiveDate::from_ymd_opt(2025, 8, 27).unwrap();
    assert_eq!(format_long_date(date), "Wednesday, August 27");

    let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    assert_eq!(format_long_date(new_year), "Thursday, January 1");
}
