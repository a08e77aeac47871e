use sleepwise_types::{BedtimeConsistency, CaffeineUse, Exercise, ScreenUse, SleepSession};

pub const AVOID_SCREENS: &str = "Avoid screens 1 hour before bed";
pub const AVOID_CAFFEINE: &str = "Avoid caffeine after 4:00 PM";
pub const AVOID_EVENING_EXERCISE: &str = "Avoid intense exercise in the evening";
pub const KEEP_BEDTIME: &str = "Go to bed at the same time every night";
pub const GO_TO_BED_EARLIER: &str = "Try going to bed 30 minutes earlier";

/// Tips that close every report.
pub const GENERIC_TIPS: [&str; 2] = [
    "Maintain a consistent sleep/wake schedule",
    "Do 5 minutes of deep breathing before bed",
];

/// Below this many hours the report asks for an earlier bedtime.
pub const SHORT_SLEEP_HOURS: f64 = 7.5;

/// One line per habit still worth changing, in a fixed order, then [`GENERIC_TIPS`].
pub fn suggestions(session: &SleepSession, hours_slept: f64) -> Vec<String> {
    let conditional = [
        (session.screen_use != ScreenUse::No, AVOID_SCREENS),
        (session.caffeine_use == CaffeineUse::Yes, AVOID_CAFFEINE),
        (session.exercise == Exercise::Yes, AVOID_EVENING_EXERCISE),
        (session.bedtime_consistency == BedtimeConsistency::No, KEEP_BEDTIME),
        (hours_slept < SHORT_SLEEP_HOURS, GO_TO_BED_EARLIER),
    ];

    conditional
        .into_iter()
        .filter_map(|(applies, tip)| applies.then_some(tip))
        .chain(GENERIC_TIPS)
        .map(String::from)
        .collect()
}
