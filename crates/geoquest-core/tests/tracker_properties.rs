//! Property tests for the tracker's score invariant: whatever sequence of
//! events arrives, the score is always exactly award x completed count.

use geoquest_core::catalog::builtin_quests;
use geoquest_core::tracker::{QuestTracker, TrackerSettings};
use proptest::prelude::*;

// Roughly one degree of latitude in meters on the reference sphere
const METERS_PER_DEGREE_LAT: f64 = 111_195.0;

#[derive(Debug, Clone)]
enum Event {
    /// Position fix `offset_m` meters north of quest `quest_idx`
    Fix { quest_idx: usize, offset_m: f64 },
    Attempt { quest_idx: usize },
    SelectCorrect,
    SelectWrong,
    Submit,
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        (0usize..10, 0.0f64..100.0)
            .prop_map(|(quest_idx, offset_m)| Event::Fix { quest_idx, offset_m }),
        (0usize..10).prop_map(|quest_idx| Event::Attempt { quest_idx }),
        Just(Event::SelectCorrect),
        Just(Event::SelectWrong),
        Just(Event::Submit),
    ]
}

proptest! {
    #[test]
    fn score_always_tracks_completed_count(events in prop::collection::vec(event(), 0..60)) {
        let mut tracker =
            QuestTracker::new(builtin_quests(), TrackerSettings::default()).unwrap();

        for event in events {
            match event {
                Event::Fix { quest_idx, offset_m } => {
                    let quest = &tracker.quests()[quest_idx];
                    let latitude = quest.latitude + offset_m / METERS_PER_DEGREE_LAT;
                    let longitude = quest.longitude;
                    let _ = tracker.record_position(latitude, longitude, 5.0);
                }
                Event::Attempt { quest_idx } => {
                    let id = tracker.quests()[quest_idx].id;
                    let _ = tracker.attempt_quest(id);
                }
                Event::SelectCorrect => {
                    if let Some(id) = tracker.open_quest() {
                        let answer = tracker
                            .quests()
                            .iter()
                            .find(|q| q.id == id)
                            .unwrap()
                            .answer
                            .clone();
                        let _ = tracker.select_option(answer);
                    }
                }
                Event::SelectWrong => {
                    let _ = tracker.select_option("definitely not an option");
                }
                Event::Submit => {
                    let _ = tracker.submit_answer();
                }
            }

            let progress = tracker.progress();
            prop_assert_eq!(progress.score, 10 * progress.completed as u32);
            prop_assert!(progress.completed <= progress.total);

            // A completed quest is never the open one
            if let Some(id) = tracker.open_quest() {
                let open = tracker.quests().iter().find(|q| q.id == id).unwrap();
                prop_assert!(!open.completed);
            }
        }
    }
}
