//! Uplift Generation Engine
//!
//! The three-level simulation behind the synthetic experiment dataset:
//!
//! 1. **Population**: N users with sampled attributes, hash-bucketed into
//!    `control`/`treatment`, each with a latent save propensity
//! 2. **Sessions**: a Poisson-distributed number of sessions per user per
//!    simulated day
//! 3. **Events**: per-impression Bernoulli draws for click and save,
//!    co-located on the impression's pin and timestamp
//!
//! All randomness flows through an explicitly passed generator, so a fixed
//! seed reproduces the aggregate statistical distributions. Identifiers are
//! fresh UUIDv4 values regardless of seed.
//!
//! # Usage
//!
//! ```no_run
//! use uplift_config::Config;
//! use uplift_gen::{seeded_rng, Simulator};
//! use uplift_sinks::MemorySink;
//!
//! let config = Config::default();
//! let simulator = Simulator::new(&config).unwrap();
//! let mut rng = seeded_rng(Some(42));
//! let mut sink = MemorySink::new();
//! let stats = simulator.run(&mut rng, &mut sink).unwrap();
//! println!("{} events", stats.events);
//! ```

mod bucket;
mod error;
mod events;
mod population;
mod runner;
mod sessions;

pub use bucket::{assign_arm, bucket_for};
pub use error::{GenError, Result};
pub use events::{EventCounts, EventGenerator};
pub use population::PopulationGenerator;
pub use runner::{RunStats, Simulator};
pub use sessions::SessionGenerator;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Build the run RNG: seeded for reproducible distributions, or OS entropy
/// when no seed is configured.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
