//! pi-bc: parabolic inflow boundary condition.
//!
//! Provides:
//! - `ParabolicProfile`, the pure profile evaluator
//! - `ParabolicInlet`, an adapter implementing `VectorPatchCondition`
//!   with the single-update-per-pass guard
//! - flow parameter helpers (Reynolds number / kinematic viscosity)
//!
//! # Example
//!
//! ```
//! use pi_bc::{ParabolicInlet, ParabolicProfile, PatchFaces, VectorPatchCondition};
//! use pi_core::Vec3;
//!
//! let mut inlet = ParabolicInlet::new("In", ParabolicProfile::default());
//! let centres = [Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.205, 0.0)];
//! let mut values = [Vec3::zeros(); 2];
//!
//! inlet
//!     .update_coeffs(PatchFaces::new("In", &centres), &mut values)
//!     .unwrap();
//!
//! assert_eq!(values[0].x, 0.0);
//! assert!((values[1].x - 1.2038).abs() < 1e-3);
//! ```

pub mod error;
pub mod flow;
pub mod inlet;
pub mod profile;
pub mod traits;

// Re-exports
pub use error::{BcError, BcResult};
pub use inlet::{ParabolicInlet, UpdateState};
pub use profile::ParabolicProfile;
pub use traits::{PatchFaces, UpdateOutcome, VectorPatchCondition};
