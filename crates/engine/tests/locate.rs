mod support;

use chrono::NaiveDate;

use support::{at, year};

#[test]
fn school_morning_resolves_to_filler() {
    let year = year();
    let m = year
        .current_period(at("1970-01-19T06:00:00Z"))
        .expect("in span");
    assert_eq!(m.period().name(), "Before class");
    assert_eq!(m.day().day_type(), "SchoolDay");
    assert!(!m.is_counted());
    assert!(!m.is_last());
}

#[test]
fn exception_week_overrides_default() {
    let year = year();
    // Monday the 5th falls in the week tagged 1970-01-04, which the
    // exception remaps to AllHoliday.
    let m = year
        .current_period(at("1970-01-05T10:00:00Z"))
        .expect("in span");
    assert_eq!(m.period().name(), "Holiday");
    assert_eq!(m.day().day_type(), "HolidayDay");
    assert!(m.is_last());
}

#[test]
fn weekend_resolves_via_default_week() {
    let year = year();
    let m = year
        .current_period(at("1970-01-17T12:00:00Z"))
        .expect("in span");
    assert_eq!(m.period().name(), "Weekend");
    assert_eq!(m.day().day_type(), "WeekendDay");
}

#[test]
fn period_boundary_is_exclusive_of_the_nominal_end() {
    let year = year();
    let before = year
        .current_period(at("1970-01-19T07:59:59.999Z"))
        .expect("in span");
    assert_eq!(before.period().name(), "Before class");

    let after = year
        .current_period(at("1970-01-19T08:00:00.000Z"))
        .expect("in span");
    assert_eq!(after.period().name(), "Period 1");
}

#[test]
fn anchored_bounds_use_the_minus_one_millisecond_convention() {
    let year = year();
    let m = year
        .current_period(at("1970-01-19T08:30:00Z"))
        .expect("in span");
    assert_eq!(m.start(), at("1970-01-19T08:00:00.000Z"));
    assert_eq!(m.end(), at("1970-01-19T08:59:59.999Z"));
}

#[test]
fn final_period_owns_through_end_of_day() {
    let year = year();
    let m = year
        .current_period(at("1970-01-19T23:59:59.999Z"))
        .expect("in span");
    assert_eq!(m.period().name(), "After class");
    assert!(m.is_last());
    assert_eq!(m.end(), at("1970-01-19T23:59:59.999Z"));
}

#[test]
fn adjacent_periods_never_share_a_millisecond() {
    let year = year();
    // Sweep a school day at boundary instants on both sides of each
    // nominal transition.
    let transitions = ["08:00", "09:00", "09:10", "10:10", "11:00", "12:00"];
    for hhmm in transitions {
        let nominal = at(&format!("1970-01-19T{hhmm}:00.000Z"));
        let last_owned = nominal.plus(-1, belltower_instant::TimeUnit::Millis);
        let before = year.current_period(last_owned).expect("in span");
        let after = year.current_period(nominal).expect("in span");
        assert_ne!(
            before.period().name(),
            after.period().name(),
            "transition at {hhmm} did not change periods"
        );
        assert_eq!(before.end(), last_owned);
        assert_eq!(after.start(), nominal);
    }
}

#[test]
fn outside_the_span_resolves_to_none() {
    let year = year();
    assert!(year.current_period(at("1969-12-25T12:00:00Z")).is_none());
    assert!(year.current_period(at("1971-01-07T12:00:00Z")).is_none());
}

#[test]
fn span_metadata() {
    let year = year();
    assert_eq!(year.first_day(), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
    assert_eq!(year.last_day(), NaiveDate::from_ymd_opt(1970, 12, 31).unwrap());
    assert_eq!(year.first_period(), 1);
    assert_eq!(year.last_period(), 3);
    // 1969-12-28 through 1971-01-02 is 53 Sundays.
    assert_eq!(year.week_count(), 53);
    assert_eq!(year.day_template_count(), 3);
    assert_eq!(year.week_template_count(), 2);
}
