//! Linear search
//!
//! Scans left to right, skipping empty slots, with a `pointer` step per
//! visited index. Returns early on a match; a miss ends in an explicit
//! not-found step rather than an error.

use crate::model::{Highlights, Slot, Step, StepRecorder};

pub fn steps(snapshot: &[Slot], target: i64) -> Vec<Step> {
    let mut rec = StepRecorder::new();

    rec.record(
        snapshot,
        Highlights::none(),
        format!("Starting Linear Search. Target: {}.", target),
    );

    for (i, slot) in snapshot.iter().enumerate() {
        let Some(element) = slot else { continue };

        rec.record(
            snapshot,
            Highlights {
                pointer: Some(i),
                ..Highlights::default()
            },
            format!("Checking index {}. Is {} equal to {}?", i, element.value, target),
        );

        if element.value == target {
            rec.record(
                snapshot,
                Highlights {
                    success: vec![i],
                    ..Highlights::default()
                },
                format!("Target {} found at index {}.", target, i),
            );
            return rec.finish();
        }
    }

    rec.record(
        snapshot,
        Highlights::none(),
        format!("Target {} not found in the array. Search concluded.", target),
    );
    rec.finish()
}
