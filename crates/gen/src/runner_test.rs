//! End-to-end simulation tests

use std::collections::{HashMap, HashSet};

use uplift_config::Config;
use uplift_model::EventType;
use uplift_sinks::MemorySink;

use crate::seeded_rng;

use super::*;

fn run_scenario(users: u64, days: u32, seed: u64) -> (RunStats, MemorySink) {
    let mut config = Config::default();
    config.population.num_users = users;
    config.simulation.num_days = days;
    let simulator = Simulator::new(&config).unwrap();
    let mut rng = seeded_rng(Some(seed));
    let mut sink = MemorySink::new();
    let stats = simulator.run(&mut rng, &mut sink).unwrap();
    (stats, sink)
}

#[test]
fn test_end_to_end_scenario() {
    // Demo-sized run: 100 users, 2 days, 50/50 split.
    let (stats, sink) = run_scenario(100, 2, 42);

    assert_eq!(stats.users, 100);
    assert_eq!(sink.users.len(), 100);

    // At least one session per user-day
    assert!(stats.sessions >= 200);
    assert_eq!(sink.sessions.len() as u64, stats.sessions);

    // Every session has at least one impression
    let mut impressions_per_session: HashMap<_, u64> = HashMap::new();
    for event in &sink.events {
        if event.event_type == EventType::Impression {
            *impressions_per_session.entry(event.session_id).or_default() += 1;
        }
    }
    for session in &sink.sessions {
        assert!(
            impressions_per_session.get(&session.session_id).copied().unwrap_or(0) >= 1,
            "session without impressions"
        );
    }

    // Combined click-through rate lands near the configured 0.10/0.103
    let ctr = stats.clicks as f64 / stats.impressions as f64;
    assert!((0.08..=0.14).contains(&ctr), "ctr {} outside band", ctr);
}

#[test]
fn test_referential_integrity() {
    let (_, sink) = run_scenario(50, 2, 7);

    let users: HashMap<_, _> = sink.users.iter().map(|u| (u.user_id, u)).collect();
    let sessions: HashMap<_, _> = sink.sessions.iter().map(|s| (s.session_id, s)).collect();

    for session in &sink.sessions {
        let owner = users.get(&session.user_id).expect("session with unknown user");
        assert_eq!(session.device_type, owner.device_type);
        assert_eq!(session.country, owner.country);
        assert_eq!(session.treatment, owner.treatment);
        assert_eq!(session.experiment_id, owner.experiment_id);
    }

    for event in &sink.events {
        let session = sessions.get(&event.session_id).expect("event with unknown session");
        assert_eq!(event.user_id, session.user_id);
        assert_eq!(event.device_type, session.device_type);
        assert_eq!(event.country, session.country);
        assert_eq!(event.treatment, session.treatment);
    }
}

#[test]
fn test_stats_match_sink_contents() {
    let (stats, sink) = run_scenario(30, 3, 21);

    let count = |t: EventType| sink.events.iter().filter(|e| e.event_type == t).count() as u64;
    assert_eq!(stats.impressions, count(EventType::Impression));
    assert_eq!(stats.clicks, count(EventType::Click));
    assert_eq!(stats.saves, count(EventType::Save));
    assert_eq!(stats.events, sink.events.len() as u64);
    assert_eq!(
        stats.boards,
        sink.events.iter().filter(|e| e.board_id.is_some()).count() as u64
    );
}

#[test]
fn test_board_id_only_on_save_events() {
    let (_, sink) = run_scenario(100, 2, 33);
    for event in &sink.events {
        if event.board_id.is_some() {
            assert_eq!(event.event_type, EventType::Save);
        }
    }
}

#[test]
fn test_zero_days_yields_no_sessions_or_events() {
    let (stats, sink) = run_scenario(20, 0, 1);
    assert_eq!(stats.users, 20);
    assert_eq!(stats.sessions, 0);
    assert_eq!(stats.events, 0);
    assert!(sink.sessions.is_empty());
    assert!(sink.events.is_empty());
}

#[test]
fn test_zero_users_yields_nothing() {
    let (stats, sink) = run_scenario(0, 7, 1);
    assert_eq!(stats, RunStats::default());
    assert_eq!(sink.record_count(), 0);
}

#[test]
fn test_session_ids_unique_across_run() {
    let (_, sink) = run_scenario(50, 2, 11);
    let ids: HashSet<_> = sink.sessions.iter().map(|s| s.session_id).collect();
    assert_eq!(ids.len(), sink.sessions.len());
}
