//! Event generator tests

use chrono::{TimeZone, Utc};
use uplift_config::Config;
use uplift_model::{Arm, Country, DeviceType, EventType, Session};
use uplift_sinks::MemorySink;
use uuid::Uuid;

use crate::seeded_rng;

use super::*;

fn sample_session(treatment: Arm, length: f64) -> Session {
    Session {
        session_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        session_start: Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap(),
        session_length: length,
        device_type: DeviceType::Mobile,
        country: Country::Us,
        experiment_id: "feed_ranking_v2".into(),
        treatment,
    }
}

fn generator() -> EventGenerator {
    let config = Config::default();
    EventGenerator::new(&config.experiment, &config.simulation)
}

#[test]
fn test_at_least_one_impression() {
    let generator = generator();
    let mut rng = seeded_rng(Some(2));
    // Minimum-length session still yields >= 1 impression
    let session = sample_session(Arm::Control, 2.0);
    let mut sink = MemorySink::new();
    let counts = generator
        .generate_session(&mut rng, &session, 0.05, &mut sink)
        .unwrap();
    assert!(counts.impressions >= 1);
    assert_eq!(counts.total() as usize, sink.events.len());
}

#[test]
fn test_timestamps_within_session_window() {
    let generator = generator();
    let mut rng = seeded_rng(Some(4));
    let session = sample_session(Arm::Control, 10.0);
    let mut sink = MemorySink::new();
    generator
        .generate_session(&mut rng, &session, 0.05, &mut sink)
        .unwrap();

    let window_end = session.session_start + chrono::Duration::seconds(600);
    for event in &sink.events {
        assert!(event.timestamp >= session.session_start);
        assert!(event.timestamp <= window_end);
    }
}

#[test]
fn test_co_emitted_events_share_pin_and_timestamp() {
    let generator = generator();
    let mut rng = seeded_rng(Some(6));
    let session = sample_session(Arm::Treatment, 10.0);
    let mut sink = MemorySink::new();
    // Propensity 1.0 forces a save for every impression
    generator
        .generate_session(&mut rng, &session, 1.0, &mut sink)
        .unwrap();

    for pair in sink.events.windows(2) {
        if pair[1].event_type != EventType::Impression {
            assert_eq!(pair[1].pin_id, pair[0].pin_id);
            assert_eq!(pair[1].timestamp, pair[0].timestamp);
        }
    }

    let impressions = sink
        .events
        .iter()
        .filter(|e| e.event_type == EventType::Impression)
        .count();
    let saves = sink
        .events
        .iter()
        .filter(|e| e.event_type == EventType::Save)
        .count();
    assert_eq!(impressions, saves);
}

#[test]
fn test_board_id_only_on_saves() {
    let generator = generator();
    let mut rng = seeded_rng(Some(8));
    let mut sink = MemorySink::new();
    for _ in 0..200 {
        let session = sample_session(Arm::Control, 10.0);
        generator
            .generate_session(&mut rng, &session, 1.0, &mut sink)
            .unwrap();
    }

    let mut boards = 0usize;
    let mut saves = 0usize;
    for event in &sink.events {
        if event.event_type == EventType::Save {
            saves += 1;
            if event.board_id.is_some() {
                boards += 1;
            }
        } else {
            assert!(event.board_id.is_none(), "board_id on {:?}", event.event_type);
        }
    }
    // ~1% of saves carry a board; with thousands of saves this stays well
    // inside a loose band.
    let fraction = boards as f64 / saves as f64;
    assert!(fraction > 0.001 && fraction < 0.05, "board fraction {}", fraction);
}

#[test]
fn test_click_rate_near_configured_probability() {
    let generator = generator();
    let mut rng = seeded_rng(Some(10));
    let mut sink = MemorySink::new();
    for _ in 0..300 {
        let session = sample_session(Arm::Control, 10.0);
        generator
            .generate_session(&mut rng, &session, 0.05, &mut sink)
            .unwrap();
    }

    let impressions = sink
        .events
        .iter()
        .filter(|e| e.event_type == EventType::Impression)
        .count() as f64;
    let clicks = sink
        .events
        .iter()
        .filter(|e| e.event_type == EventType::Click)
        .count() as f64;
    let ctr = clicks / impressions;
    assert!((0.08..=0.14).contains(&ctr), "ctr {} outside band", ctr);
}

#[test]
fn test_denormalized_fields_match_session() {
    let generator = generator();
    let mut rng = seeded_rng(Some(12));
    let session = sample_session(Arm::Treatment, 5.0);
    let mut sink = MemorySink::new();
    generator
        .generate_session(&mut rng, &session, 0.5, &mut sink)
        .unwrap();

    for event in &sink.events {
        assert_eq!(event.session_id, session.session_id);
        assert_eq!(event.user_id, session.user_id);
        assert_eq!(event.treatment, session.treatment);
        assert_eq!(event.device_type, session.device_type);
        assert_eq!(event.country, session.country);
        assert_eq!(event.experiment_id, session.experiment_id);
    }
}
