//! Parabolic (Poiseuille-like) inflow profile between two parallel walls.

use crate::error::{BcError, BcResult};
use pi_core::numeric::{ensure_finite, ensure_positive};
use pi_core::units::{Length, Velocity};
use pi_core::{Axis, Real, Vec3};

/// Default reference velocity (m/s).
pub const DEFAULT_U_MAX: Real = 0.8025;
/// Default channel height (m).
pub const DEFAULT_HEIGHT: Real = 0.41;
/// Default shape multiplier.
pub const DEFAULT_SHAPE_C: Real = 6.0;

/// Parameters of a parabolic velocity profile.
///
/// For a wall-normal coordinate `y` measured from the lower wall:
///
/// ```text
/// u(y) = C * u_max * y * (h - y) / h^2
/// ```
///
/// The profile is zero at `y = 0` and `y = h` and peaks at `C * u_max / 4` on
/// the centreline. The velocity always points along `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParabolicProfile {
    u_max: Real,
    h: Real,
    c: Real,
    axis: Axis,
    /// Cached `C * u_max / h^2`
    scale: Real,
}

impl ParabolicProfile {
    /// Create a profile, rejecting non-physical parameters.
    ///
    /// `u_max` and `h` must be finite and positive, `c` finite, and `axis`
    /// must not be `X` (the flow direction).
    pub fn new(u_max: Real, h: Real, c: Real, axis: Axis) -> BcResult<Self> {
        let u_max = ensure_positive(u_max, "u_max")?;
        let h = ensure_positive(h, "channel height")?;
        let c = ensure_finite(c, "shape multiplier")?;
        if axis == Axis::X {
            return Err(BcError::InvalidArg {
                what: "wall-normal axis cannot be the flow axis (x)",
            });
        }
        Ok(Self {
            u_max,
            h,
            c,
            axis,
            scale: c * u_max / (h * h),
        })
    }

    /// Create a profile from unit-carrying quantities.
    pub fn from_quantities(u_max: Velocity, h: Length, c: Real, axis: Axis) -> BcResult<Self> {
        Self::new(u_max.value, h.value, c, axis)
    }

    pub fn u_max(&self) -> Real {
        self.u_max
    }

    pub fn height(&self) -> Real {
        self.h
    }

    pub fn shape_c(&self) -> Real {
        self.c
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Streamwise speed at wall-normal coordinate `y`.
    #[inline]
    pub fn speed_at(&self, y: Real) -> Real {
        self.scale * (y * (self.h - y))
    }

    /// Velocity vector at a face centre.
    #[inline]
    pub fn velocity_at(&self, position: &Vec3) -> Vec3 {
        Vec3::new(self.speed_at(self.axis.component(position)), 0.0, 0.0)
    }

    /// Write one velocity per face centre into `out`.
    ///
    /// `out` must have the same length as `centres`; on mismatch nothing is
    /// written.
    pub fn evaluate_into(&self, centres: &[Vec3], out: &mut [Vec3]) -> BcResult<()> {
        if centres.len() != out.len() {
            return Err(BcError::SizeMismatch {
                patch: String::from("<profile>"),
                faces: centres.len(),
                values: out.len(),
            });
        }
        for (value, centre) in out.iter_mut().zip(centres) {
            *value = self.velocity_at(centre);
        }
        Ok(())
    }

    /// Allocating variant of [`evaluate_into`](Self::evaluate_into).
    pub fn evaluate(&self, centres: &[Vec3]) -> Vec<Vec3> {
        centres.iter().map(|c| self.velocity_at(c)).collect()
    }

    /// Centreline value, `C * u_max / 4`.
    pub fn peak(&self) -> Real {
        self.c * self.u_max / 4.0
    }

    /// Mean speed over `[0, h]`, `C * u_max / 6`.
    pub fn bulk_velocity(&self) -> Real {
        self.c * self.u_max / 6.0
    }

    /// Volumetric flow rate per unit depth (m^2/s), `C * u_max * h / 6`.
    pub fn flow_rate_per_depth(&self) -> Real {
        self.bulk_velocity() * self.h
    }
}

impl Default for ParabolicProfile {
    fn default() -> Self {
        let (u_max, h, c) = (DEFAULT_U_MAX, DEFAULT_HEIGHT, DEFAULT_SHAPE_C);
        Self {
            u_max,
            h,
            c,
            axis: Axis::Y,
            scale: c * u_max / (h * h),
        }
    }
}
