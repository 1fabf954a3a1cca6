//! Envelopes: control signals that shape a note over time.
//!
//! Envelopes here are plain signals of time. A note's gate length is fixed at
//! construction, so the whole shape (including release) is known up front and
//! evaluation stays pure.

mod adsr;
mod curve;

pub use adsr::Adsr;
pub use curve::Curve;
