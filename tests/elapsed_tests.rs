use chrono::{Duration, TimeZone, Utc};
use elapsed::{
    Config, ElapsedError, StringTable, TimeDivision, elapsed, elapsed_since, format_between,
    format_delta, format_duration, format_since, format_std,
};

const SECOND: i64 = 1000;
const MINUTE: i64 = SECOND * 60;
const HOUR: i64 = MINUTE * 60;
const DAY: i64 = HOUR * 24;
const MONTH: i64 = DAY * 30;
const YEAR: i64 = MONTH * 12;

fn fmt(duration: i64) -> String {
    format_duration(duration, &Config::default()).unwrap()
}

fn fmt_with(duration: i64, config: &Config) -> String {
    format_duration(duration, config).unwrap()
}

#[test]
fn test_below_one_second_is_epsilon() {
    assert_eq!(fmt(3), "Moments ago");
}

#[test]
fn test_zero_is_epsilon() {
    assert_eq!(fmt(0), "Moments ago");
}

#[test]
fn test_one_second() {
    assert_eq!(fmt(SECOND), "1 second ago");
}

#[test]
fn test_between_one_and_two_seconds() {
    assert_eq!(fmt(SECOND + 500), "1 second ago");
}

#[test]
fn test_seconds_ago() {
    assert_eq!(fmt(10 * SECOND), "10 seconds ago");
}

#[test]
fn test_one_minute() {
    assert_eq!(fmt(MINUTE), "1 minute ago");
}

#[test]
fn test_between_one_and_two_minutes() {
    assert_eq!(fmt(MINUTE + 2000), "1 minute ago");
}

#[test]
fn test_minutes_ago() {
    assert_eq!(fmt(10 * MINUTE), "10 minutes ago");
}

#[test]
fn test_one_hour() {
    assert_eq!(fmt(HOUR), "1 hour ago");
    assert_eq!(fmt(HOUR + 2000), "1 hour ago");
}

#[test]
fn test_hours_ago() {
    assert_eq!(fmt(10 * HOUR), "10 hours ago");
}

#[test]
fn test_one_day() {
    assert_eq!(fmt(DAY), "1 day ago");
    assert_eq!(fmt(DAY + 2000), "1 day ago");
}

#[test]
fn test_one_month() {
    assert_eq!(fmt(MONTH), "1 month ago");
    assert_eq!(fmt(MONTH + 2000), "1 month ago");
}

#[test]
fn test_months_ago() {
    assert_eq!(fmt(10 * MONTH), "10 months ago");
}

#[test]
fn test_one_year() {
    assert_eq!(fmt(YEAR), "1 year ago");
    assert_eq!(fmt(YEAR + 2000), "1 year ago");
}

#[test]
fn test_years_ago() {
    assert_eq!(fmt(10 * YEAR), "10 years ago");
    assert_eq!(fmt(900 * YEAR), "900 years ago");
}

#[test]
fn test_millis_threshold_promotes_to_second() {
    assert_eq!(fmt(749), "Moments ago");
    assert_eq!(fmt(750), "1 second ago");
    assert_eq!(fmt(900), "1 second ago");
}

#[test]
fn test_millis_threshold_rounds_seconds_up() {
    assert_eq!(fmt(SECOND + 900), "2 seconds ago");
    assert_eq!(fmt(SECOND + 750), "2 seconds ago");
    assert_eq!(fmt(SECOND + 749), "1 second ago");
}

#[test]
fn test_seconds_threshold() {
    assert_eq!(fmt(44 * SECOND), "44 seconds ago");
    assert_eq!(fmt(45 * SECOND), "1 minute ago");
    assert_eq!(fmt(46 * SECOND), "1 minute ago");
    assert_eq!(fmt(MINUTE + 46 * SECOND), "2 minutes ago");
    assert_eq!(fmt(MINUTE + 45 * SECOND - 1), "1 minute ago");
}

#[test]
fn test_minutes_threshold() {
    assert_eq!(fmt(46 * MINUTE), "1 hour ago");
    assert_eq!(fmt(HOUR + 46 * MINUTE), "2 hours ago");
    assert_eq!(fmt(HOUR + 45 * MINUTE - 1), "1 hour ago");
}

#[test]
fn test_hours_threshold() {
    assert_eq!(fmt(23 * HOUR), "1 day ago");
    assert_eq!(fmt(DAY + 23 * HOUR), "2 days ago");
    assert_eq!(fmt(DAY + 22 * HOUR - 1), "1 day ago");
}

#[test]
fn test_days_threshold() {
    assert_eq!(fmt(25 * DAY), "25 days ago");
    assert_eq!(fmt(27 * DAY), "1 month ago");
    assert_eq!(fmt(MONTH + 27 * DAY), "2 months ago");
    assert_eq!(fmt(MONTH + 26 * DAY - 1), "1 month ago");
}

#[test]
fn test_months_threshold() {
    assert_eq!(fmt(11 * MONTH), "1 year ago");
    assert_eq!(fmt(YEAR + 11 * MONTH), "2 years ago");
    assert_eq!(fmt(YEAR + 11 * MONTH - 1), "1 year ago");
}

#[test]
fn test_exact_threshold_promotes_every_division() {
    for division in TimeDivision::ALL {
        let Some(sup) = division.super_division() else {
            continue;
        };
        let duration = division.threshold_millis() as i64;
        assert_eq!(
            fmt_with(duration, &min_millis()),
            format!("1 {} ago", sup.name()),
            "{division} at threshold"
        );
    }
}

#[test]
fn test_sub_threshold_rounding_every_division() {
    for division in TimeDivision::ALL {
        let Some(sub) = division.sub_division() else {
            continue;
        };
        let duration = (division.millis() + sub.threshold_millis()) as i64;
        assert_eq!(
            fmt_with(duration, &min_millis()),
            format!("2 {}s ago", division.name())
        );
        assert_eq!(
            fmt_with(duration - 1, &min_millis()),
            format!("1 {} ago", division.name())
        );
    }
}

fn min_millis() -> Config {
    Config::builder()
        .min_division(TimeDivision::Millisecond)
        .build()
        .unwrap()
}

#[test]
fn test_millisecond_minimum_shows_milliseconds() {
    let config = min_millis();
    assert_eq!(fmt_with(1, &config), "1 millisecond ago");
    assert_eq!(fmt_with(3, &config), "3 milliseconds ago");
    assert_eq!(fmt_with(0, &config), "Moments ago");
}

#[test]
fn test_minimum_clamp_walks_the_whole_chain() {
    let config = Config::builder()
        .min_division(TimeDivision::Hour)
        .build()
        .unwrap();
    // Seconds sit two levels below hours.
    assert_eq!(fmt_with(30 * SECOND, &config), "Moments ago");
    assert_eq!(fmt_with(500, &config), "Moments ago");
    assert_eq!(fmt_with(10 * MINUTE, &config), "Moments ago");
    assert_eq!(fmt_with(46 * MINUTE, &config), "1 hour ago");
    assert_eq!(fmt_with(3 * HOUR, &config), "3 hours ago");
}

#[test]
fn test_promotion_into_minimum_division_is_displayed() {
    let config = Config::builder()
        .min_division(TimeDivision::Minute)
        .build()
        .unwrap();
    assert_eq!(fmt_with(44 * SECOND, &config), "Moments ago");
    assert_eq!(fmt_with(50 * SECOND, &config), "1 minute ago");
}

#[test]
fn test_max_division_caps_display_unit() {
    let config = Config::builder()
        .max_division(TimeDivision::Day)
        .build()
        .unwrap();
    assert_eq!(fmt_with(27 * DAY, &config), "27 days ago");
    assert_eq!(fmt_with(900 * YEAR, &config), "324000 days ago");

    let seconds_only = Config::builder()
        .max_division(TimeDivision::Second)
        .build()
        .unwrap();
    assert_eq!(fmt_with(2 * HOUR, &seconds_only), "7200 seconds ago");
}

#[test]
fn test_negative_duration_is_invalid() {
    let result = format_duration(-1, &Config::default());
    assert!(matches!(result, Err(ElapsedError::InvalidArgument(_))));
    assert!(matches!(elapsed(-SECOND), Err(ElapsedError::InvalidArgument(_))));
    assert!(matches!(
        format_delta(Duration::seconds(-5), &Config::default()),
        Err(ElapsedError::InvalidArgument(_))
    ));
}

#[test]
fn test_between_timestamps() {
    let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let to = from + Duration::hours(5);
    assert_eq!(
        format_between(from, to, &Config::default()).unwrap(),
        "5 hours ago"
    );
    assert_eq!(
        format_between(from, from, &Config::default()).unwrap(),
        "Moments ago"
    );
}

#[test]
fn test_between_reversed_timestamps_is_invalid() {
    let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let to = from - Duration::minutes(1);
    let result = format_between(from, to, &Config::default());
    assert!(matches!(result, Err(ElapsedError::InvalidArgument(_))));
}

#[test]
fn test_since_defaults_to_now() {
    let t = Utc::now() - Duration::days(3);
    assert_eq!(format_since(t, &Config::default()).unwrap(), "3 days ago");
    assert_eq!(elapsed_since(t).unwrap(), "3 days ago");
}

#[test]
fn test_since_future_timestamp_is_invalid() {
    let t = Utc::now() + Duration::hours(5);
    assert!(matches!(
        format_since(t, &Config::default()),
        Err(ElapsedError::InvalidArgument(_))
    ));
}

#[test]
fn test_std_duration() {
    let config = Config::default();
    assert_eq!(
        format_std(std::time::Duration::from_secs(10), &config).unwrap(),
        "10 seconds ago"
    );
    assert!(matches!(
        format_std(std::time::Duration::MAX, &config),
        Err(ElapsedError::InvalidArgument(_))
    ));
}

#[test]
fn test_french_locale() {
    let config = Config::builder().locale("fr").build().unwrap();
    assert_eq!(fmt_with(3, &config), "Il y a quelques instants");
    assert_eq!(fmt_with(SECOND, &config), "Il y a 1 seconde");
    assert_eq!(fmt_with(10 * MONTH, &config), "Il y a 10 mois");
    assert_eq!(fmt_with(2 * YEAR, &config), "Il y a 2 ans");
}

#[test]
fn test_spanish_locale() {
    let config = Config::builder().locale("es").build().unwrap();
    assert_eq!(fmt_with(0, &config), "Hace unos momentos");
    assert_eq!(fmt_with(DAY, &config), "Hace 1 día");
    assert_eq!(fmt_with(10 * MONTH, &config), "Hace 10 meses");
}

#[test]
fn test_custom_strings_render_placeholder() {
    let mut strings = StringTable::builtin();
    strings.insert("en", "seconds_ago", "{num}s");
    strings.insert("en", "epsilon", "just now");
    let config = Config::builder().strings(strings).build().unwrap();
    assert_eq!(fmt_with(10 * SECOND, &config), "10s");
    assert_eq!(fmt_with(10, &config), "just now");
    assert_eq!(fmt_with(SECOND, &config), "1 second ago");
}

#[test]
fn test_results_are_never_empty() {
    let config = min_millis();
    for duration in [0, 1, 749, 750, 999, SECOND, 59 * MINUTE, 3 * DAY, 40 * YEAR] {
        assert!(!fmt_with(duration, &config).is_empty());
        assert!(!fmt(duration).is_empty());
    }
}

#[test]
fn test_config_shared_across_threads() {
    let config = Config::default();
    std::thread::scope(|s| {
        let handles: Vec<_> = (1..=8)
            .map(|n| {
                let config = &config;
                s.spawn(move || format_duration(n * 10 * SECOND, config).unwrap())
            })
            .collect();
        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results[0], "10 seconds ago");
        assert_eq!(results[3], "40 seconds ago");
        assert_eq!(results[7], "1 minute ago");
    });
}
