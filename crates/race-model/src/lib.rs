//! `race-model` — entity model for the rust_race workspace.
//!
//! Cars, tracks, and corners are split into an immutable *specification*
//! (what the entity is capable of) and mutable *state* (where it is right
//! now).  Specifications are validated once, at construction, so the
//! simulation core never has to defend against zero accelerations or
//! inverted corner markers mid-run.
//!
//! | Module     | Contents                                   |
//! |------------|--------------------------------------------|
//! | [`car`]    | `CarSpec`, `CarState`, `Car`               |
//! | [`corner`] | `Corner`, `CornerKind`                     |
//! | [`track`]  | `Track`                                    |
//! | [`error`]  | `ModelError`, `ModelResult`                |

pub mod car;
pub mod corner;
pub mod error;
pub mod track;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use car::{Car, CarSpec, CarState};
pub use corner::{Corner, CornerKind};
pub use error::{ModelError, ModelResult};
pub use track::Track;
