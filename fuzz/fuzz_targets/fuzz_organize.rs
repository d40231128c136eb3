#![no_main]

use arbitrary::Arbitrary;
use daygrid_core::Timestamp;
use daygrid_layout::{intersects, organize};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    width: u16,
    events: Vec<(u16, u8)>,
}

fuzz_target!(|input: Input| {
    if input.events.len() > 512 {
        return;
    }
    let width = f64::from(input.width.max(1));
    // Minute offsets keep collisions frequent; lengths may be zero.
    let events: Vec<_> = input
        .events
        .iter()
        .map(|&(start, len)| {
            let begin = Timestamp::EPOCH.saturating_add_minutes(i64::from(start % 1440));
            (begin, begin.saturating_add_minutes(i64::from(len)))
        })
        .collect();

    let out = organize(events.clone(), width).expect("well-formed input");
    assert_eq!(out.len(), events.len(), "cardinality changed");

    for (p, e) in out.iter().zip(&events) {
        assert_eq!(p.event, *e, "order changed");
        let pl = p.placement;
        assert!(pl.span >= 1 && pl.column + pl.span <= pl.columns, "span out of range");
        assert!((0.0..1.0).contains(&p.offset), "offset out of range");
        assert!(p.width > 0.0 && p.width <= 1.0, "width out of range");
    }

    for (i, a) in out.iter().enumerate() {
        for b in &out[i + 1..] {
            let same_cell = a.placement.run == b.placement.run
                && a.placement.column_range().start < b.placement.column_range().end
                && b.placement.column_range().start < a.placement.column_range().end;
            if same_cell {
                assert!(!intersects(&a.event, &b.event), "overlapping boxes collide");
            }
        }
    }

    let again = organize(out.iter().map(|p| p.event).collect::<Vec<_>>(), width)
        .expect("well-formed input");
    assert_eq!(again, out, "layout is not idempotent");
});
