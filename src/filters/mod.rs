//! Post-processing stages applied to a curvature profile.
//!
//! Every stage is a pure function over a slice of samples that returns a new
//! profile of the same length, so stages can be chained in any order while
//! keeping index alignment with the source points.
//!
//! - [`smooth`] – centered moving average.
//! - [`quantize`] – snap to curvature brackets derived from a lateral
//!   acceleration limit (see [`build_bracket_table`]).
//! - [`denoise`] – absorb runs shorter than a minimum length.
//! - [`rate_limit`] – bound the change between consecutive samples.
//!
//! All stages reject non-finite samples and return an empty profile for an
//! empty input.

pub mod denoise;
pub mod quantize;
pub mod rate_limit;
pub mod smooth;

pub use denoise::denoise;
pub use quantize::{build_bracket_table, quantize, BracketTable, RoundPolicy, UNBOUNDED};
pub use rate_limit::rate_limit;
pub use smooth::smooth;
