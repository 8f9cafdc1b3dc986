//! pi-core: shared foundation for the parabolic inlet workspace.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real, Vec3, tolerances, float helpers)
//! - axis (Cartesian axis selector)
//! - error (shared error types)

pub mod axis;
pub mod error;
pub mod numeric;
pub mod units;

pub use axis::Axis;
pub use error::{PiError, PiResult};
pub use numeric::*;
pub use units::*;
