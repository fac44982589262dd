//! Event generation
//!
//! Per session: `max(1, floor(session_length × U(rate_min, rate_max)))`
//! impressions. Each impression always emits an `impression` event; a
//! `click` and a `save` may be co-emitted for the same pin via independent
//! Bernoulli draws (not mutually exclusive, not conditional on each other).
//! A save additionally carries a `board_id` with the configured board-create
//! probability.

use chrono::Duration;
use rand::Rng;
use uuid::Uuid;

use uplift_config::{ExperimentConfig, SimulationConfig};
use uplift_model::{Event, EventType, Session};

use crate::error::Result;
use uplift_sinks::RecordSink;

/// Per-session event tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventCounts {
    /// Impression events emitted
    pub impressions: u64,
    /// Click events emitted
    pub clicks: u64,
    /// Save events emitted
    pub saves: u64,
    /// Save events that carried a board_id
    pub boards: u64,
}

impl EventCounts {
    /// Total events emitted
    pub fn total(&self) -> u64 {
        self.impressions + self.clicks + self.saves
    }

    /// Accumulate another tally into this one
    pub fn add(&mut self, other: EventCounts) {
        self.impressions += other.impressions;
        self.clicks += other.clicks;
        self.saves += other.saves;
        self.boards += other.boards;
    }
}

/// Generator for event records
pub struct EventGenerator {
    click_prob_control: f64,
    click_prob_treatment: f64,
    board_create_prob: f64,
    rate_min: f64,
    rate_max: f64,
}

impl EventGenerator {
    /// Build a generator from validated config
    pub fn new(experiment: &ExperimentConfig, simulation: &SimulationConfig) -> Self {
        Self {
            click_prob_control: experiment.click_prob(false),
            click_prob_treatment: experiment.click_prob(true),
            board_create_prob: experiment.board_create_prob,
            rate_min: simulation.impressions_per_minute_min,
            rate_max: simulation.impressions_per_minute_max,
        }
    }

    /// Generate and emit all events for one session.
    ///
    /// `save_prob` is the owning user's latent save propensity. Events are
    /// streamed straight into the sink; only the tallies are returned.
    pub fn generate_session<R: Rng, S: RecordSink>(
        &self,
        rng: &mut R,
        session: &Session,
        save_prob: f64,
        sink: &mut S,
    ) -> Result<EventCounts> {
        let rate = rng.gen_range(self.rate_min..=self.rate_max);
        let num_impressions = ((session.session_length * rate).floor() as u64).max(1);
        let window_secs = (session.session_length * 60.0) as i64;
        let click_prob = if session.treatment.is_treatment() {
            self.click_prob_treatment
        } else {
            self.click_prob_control
        };

        let mut counts = EventCounts::default();

        for _ in 0..num_impressions {
            let timestamp = session.session_start + Duration::seconds(rng.gen_range(0..=window_secs));
            let pin_id = Uuid::new_v4();

            sink.write_event(&self.make_event(session, timestamp, pin_id, EventType::Impression, None))?;
            counts.impressions += 1;

            if rng.gen_bool(click_prob) {
                sink.write_event(&self.make_event(session, timestamp, pin_id, EventType::Click, None))?;
                counts.clicks += 1;
            }

            // Independent of the click draw
            if rng.gen_bool(save_prob) {
                let board_id = if rng.gen_bool(self.board_create_prob) {
                    counts.boards += 1;
                    Some(Uuid::new_v4())
                } else {
                    None
                };
                sink.write_event(&self.make_event(session, timestamp, pin_id, EventType::Save, board_id))?;
                counts.saves += 1;
            }
        }

        Ok(counts)
    }

    /// Build one event denormalized from its session
    fn make_event(
        &self,
        session: &Session,
        timestamp: chrono::DateTime<chrono::Utc>,
        pin_id: Uuid,
        event_type: EventType,
        board_id: Option<Uuid>,
    ) -> Event {
        Event {
            event_id: Uuid::new_v4(),
            user_id: session.user_id,
            timestamp,
            session_id: session.session_id,
            event_type,
            pin_id,
            board_id,
            experiment_id: session.experiment_id.clone(),
            treatment: session.treatment,
            device_type: session.device_type,
            country: session.country,
        }
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;
