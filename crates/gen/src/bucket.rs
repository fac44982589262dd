//! Hash-based experiment bucketing
//!
//! Arm assignment is a pure function of `(user_id, experiment_id)`:
//! reproducible, order-independent, and free of shared RNG state. The exact
//! recipe is compatibility-sensitive: any change to the hash algorithm,
//! separator, or modulus reshuffles which users land in which arm:
//!
//! 1. MD5 over the UTF-8 bytes of `"{user_id}:{experiment_id}"`
//! 2. Digest read as a 128-bit big-endian unsigned integer
//! 3. `mod 100`; bucket `< control_pct` is control, else treatment

use md5::{Digest, Md5};

use uplift_model::Arm;

/// Hash bucket in [0, 100) for a (user, experiment) pair
pub fn bucket_for(user_id: &str, experiment_id: &str) -> u8 {
    let mut hasher = Md5::new();
    hasher.update(user_id.as_bytes());
    hasher.update(b":");
    hasher.update(experiment_id.as_bytes());
    let digest: [u8; 16] = hasher.finalize().into();
    (u128::from_be_bytes(digest) % 100) as u8
}

/// Assign a (user, experiment) pair to an arm.
///
/// `control_pct` is the percentage of the hash space given to control;
/// 0 sends everyone to treatment, 100 sends everyone to control.
pub fn assign_arm(user_id: &str, experiment_id: &str, control_pct: u8) -> Arm {
    if bucket_for(user_id, experiment_id) < control_pct {
        Arm::Control
    } else {
        Arm::Treatment
    }
}
