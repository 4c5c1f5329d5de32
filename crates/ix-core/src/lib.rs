//! `ix-core` — foundational types for the `rust_ix` intersection framework.
//!
//! This crate is a dependency of every other `ix-*` crate.  It intentionally
//! has no `ix-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`approach`] | `Approach` enum and its compass relations               |
//! | [`movement`] | `Movement`, `TurnKind`                                  |
//! | [`conflict`] | The static conflicts-with relation over movements       |
//! | [`ids`]      | `VehicleId`                                             |
//! | [`rng`]      | `VehicleRng` (per-vehicle deterministic RNG)            |
//! | [`error`]    | `IxError`, `IxResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod approach;
pub mod conflict;
pub mod error;
pub mod ids;
pub mod movement;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use approach::Approach;
pub use error::{IxError, IxResult};
pub use ids::VehicleId;
pub use movement::{Movement, TurnKind};
pub use rng::VehicleRng;
