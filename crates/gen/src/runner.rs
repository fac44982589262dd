//! Simulation runner
//!
//! Orchestrates the three generation levels and streams every record into a
//! sink as it is produced. The walk is bounded: O(users × days × sessions ×
//! impressions) emissions, then a final flush.

use chrono::Utc;
use rand::Rng;

use uplift_config::Config;
use uplift_sinks::RecordSink;

use crate::error::Result;
use crate::events::{EventCounts, EventGenerator};
use crate::population::PopulationGenerator;
use crate::sessions::SessionGenerator;

/// Tallies for one complete run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Users emitted
    pub users: u64,
    /// Sessions emitted
    pub sessions: u64,
    /// Events emitted (all types)
    pub events: u64,
    /// Impression events
    pub impressions: u64,
    /// Click events
    pub clicks: u64,
    /// Save events
    pub saves: u64,
    /// Saves that created a board
    pub boards: u64,
}

impl RunStats {
    fn record_session_events(&mut self, counts: EventCounts) {
        self.events += counts.total();
        self.impressions += counts.impressions;
        self.clicks += counts.clicks;
        self.saves += counts.saves;
        self.boards += counts.boards;
    }
}

/// End-to-end generation pipeline
pub struct Simulator {
    population: PopulationGenerator,
    sessions: SessionGenerator,
    events: EventGenerator,
}

impl Simulator {
    /// Build all generators from validated config
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            population: PopulationGenerator::new(&config.experiment, &config.population)?,
            sessions: SessionGenerator::new(&config.simulation)?,
            events: EventGenerator::new(&config.experiment, &config.simulation),
        })
    }

    /// Run the full simulation, streaming records into `sink`.
    ///
    /// Each user's sessions and events are emitted immediately after the
    /// user, so peak memory is one user's worth of sessions regardless of
    /// population size. No ordering is guaranteed across users.
    pub fn run<R: Rng, S: RecordSink>(&self, rng: &mut R, sink: &mut S) -> Result<RunStats> {
        let now = Utc::now();
        let today = now.date_naive();
        let num_users = self.population.num_users();
        let num_days = self.sessions.num_days();

        tracing::info!(num_users, num_days, "simulation starting");

        let mut stats = RunStats::default();

        for _ in 0..num_users {
            let user = self.population.generate_user(rng, today);
            sink.write_user(&user)?;
            stats.users += 1;

            for day in 0..num_days {
                for session in self.sessions.generate_day(rng, &user, now, day) {
                    sink.write_session(&session)?;
                    stats.sessions += 1;

                    let counts = self.events.generate_session(
                        rng,
                        &session,
                        user.save_prob_user,
                        sink,
                    )?;
                    stats.record_session_events(counts);
                }
            }
        }

        sink.finish()?;

        tracing::info!(
            users = stats.users,
            sessions = stats.sessions,
            events = stats.events,
            impressions = stats.impressions,
            clicks = stats.clicks,
            saves = stats.saves,
            "simulation complete"
        );

        Ok(stats)
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
