//! Uplift Data Model
//!
//! Entity types shared across the generator, sinks, and analytics:
//!
//! - **User**: population member with experiment assignment and save propensity
//! - **Session**: one app session belonging to a user
//! - **Event**: impression/click/save emitted within a session
//!
//! Relationships: User 1-* Session 1-* Event. All three are immutable once
//! emitted (append-only generation, no updates).
//!
//! Field order on the record structs is the CSV column order downstream
//! consumers read by name, so reorder with care.

mod arm;
mod dimensions;
mod event;
mod session;
mod user;

pub use arm::Arm;
pub use dimensions::{Country, DeviceType};
pub use event::{Event, EventType};
pub use session::Session;
pub use user::User;
