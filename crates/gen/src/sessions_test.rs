//! Session generator tests

use chrono::{NaiveDate, TimeZone, Utc};
use uplift_config::Config;
use uplift_model::{Arm, Country, DeviceType, User};
use uuid::Uuid;

use crate::seeded_rng;

use super::*;

fn sample_user() -> User {
    User {
        user_id: Uuid::new_v4(),
        device_type: DeviceType::Desktop,
        country: Country::Ca,
        new_user: false,
        pre_period_saves: 3,
        join_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        experiment_id: "feed_ranking_v2".into(),
        treatment: Arm::Treatment,
        save_prob_user: 0.052,
    }
}

#[test]
fn test_at_least_one_session_per_day() {
    let config = Config::default();
    let generator = SessionGenerator::new(&config.simulation).unwrap();
    let mut rng = seeded_rng(Some(5));
    let user = sample_user();
    let now = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();

    for day in 0..config.simulation.num_days {
        let sessions = generator.generate_day(&mut rng, &user, now, day);
        assert!(!sessions.is_empty());
    }
}

#[test]
fn test_session_length_clipped() {
    let config = Config::default();
    let generator = SessionGenerator::new(&config.simulation).unwrap();
    let mut rng = seeded_rng(Some(9));
    let user = sample_user();
    let now = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();

    for day in 0..config.simulation.num_days {
        for session in generator.generate_day(&mut rng, &user, now, day) {
            assert!(
                (2.0..=10.0).contains(&session.session_length),
                "length {} outside clip range",
                session.session_length
            );
        }
    }
}

#[test]
fn test_denormalized_fields_match_owner() {
    let config = Config::default();
    let generator = SessionGenerator::new(&config.simulation).unwrap();
    let mut rng = seeded_rng(Some(13));
    let user = sample_user();
    let now = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();

    for session in generator.generate_day(&mut rng, &user, now, 0) {
        assert_eq!(session.user_id, user.user_id);
        assert_eq!(session.device_type, user.device_type);
        assert_eq!(session.country, user.country);
        assert_eq!(session.experiment_id, user.experiment_id);
        assert_eq!(session.treatment, user.treatment);
    }
}

#[test]
fn test_session_start_anchored_to_day() {
    let config = Config::default();
    let generator = SessionGenerator::new(&config.simulation).unwrap();
    let mut rng = seeded_rng(Some(17));
    let user = sample_user();
    let now = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();

    // Most recent day (offset num_days - 1) anchors at `now`, with up to
    // 1440 minutes subtracted.
    let last_day = config.simulation.num_days - 1;
    for session in generator.generate_day(&mut rng, &user, now, last_day) {
        assert!(session.session_start <= now);
        assert!(now - session.session_start <= chrono::Duration::minutes(1440));
    }

    // Oldest day anchors num_days - 1 days back.
    let anchor = now - chrono::Duration::days((config.simulation.num_days - 1) as i64);
    for session in generator.generate_day(&mut rng, &user, now, 0) {
        assert!(session.session_start <= anchor);
        assert!(anchor - session.session_start <= chrono::Duration::minutes(1440));
    }
}
