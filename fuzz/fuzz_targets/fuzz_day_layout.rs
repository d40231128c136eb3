#![no_main]

use arbitrary::Arbitrary;
use daygrid_core::{CalendarEvent, Interval, Timestamp};
use daygrid_day::{DayConfig, DisplayMode, FitMode, HoursFormat, lay_out_day};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Copy, Arbitrary)]
struct Event {
    start: u16,
    len: u16,
    all_day: bool,
}

impl Interval for Event {
    fn begin(&self) -> Timestamp {
        Timestamp::EPOCH.saturating_add_minutes(i64::from(self.start % 1440))
    }

    fn end(&self) -> Timestamp {
        self.begin().saturating_add_minutes(i64::from(self.len % 1440))
    }
}

impl CalendarEvent for Event {
    fn is_all_day(&self) -> bool {
        self.all_day
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    start_hour: u8,
    end_hour: u8,
    fit: u8,
    fit_to_container: bool,
    labels: bool,
    width: u16,
    height: u16,
    events: Vec<Event>,
}

fuzz_target!(|input: Input| {
    if input.events.len() > 256 {
        return;
    }
    let fit = match input.fit % 3 {
        0 => FitMode::Auto,
        1 => FitMode::BoundsAdaptive,
        _ => FitMode::BoundsStrict,
    };
    let config = DayConfig::default()
        .window(u32::from(input.start_hour % 25), u32::from(input.end_hour % 25))
        .fit(fit)
        .display(if input.fit_to_container {
            DisplayMode::FitToContainer
        } else {
            DisplayMode::Expand
        })
        .hours(if input.labels {
            HoursFormat::Complete
        } else {
            HoursFormat::None
        });

    // Invalid configs and sizes must come back as errors, never panics.
    let Ok(layout) = lay_out_day(
        input.events.iter().copied(),
        &config,
        f64::from(input.width),
        f64::from(input.height),
    ) else {
        return;
    };

    assert_eq!(
        layout.all_day.len() + layout.timed.len() + layout.outside_window.len(),
        input.events.len()
    );
    assert!(layout.window.start < layout.window.end);
    assert!(layout.window.end <= 24);
    for event_box in &layout.timed {
        assert!(event_box.bounds.width > 0.0);
        assert!(event_box.bounds.height > 0.0);
    }
});
