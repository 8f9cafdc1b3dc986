//! Reynolds number relations for setting up an inflow case.
//!
//! All three helpers use `Re = U * L / nu` with `L` the characteristic
//! length of the obstacle (cylinder diameter).

use crate::error::BcResult;
use pi_core::numeric::ensure_positive;
use pi_core::units::{KinVisc, Length, Velocity, m2ps, mps};

/// Characteristic length used when none is given (m).
pub const DEFAULT_CHARACTERISTIC_LENGTH_M: f64 = 0.01;

/// Kinematic viscosity that yields `re` for the given velocity and length.
pub fn kinematic_viscosity_from_reynolds(
    re: f64,
    velocity: Velocity,
    length: Length,
) -> BcResult<KinVisc> {
    let re = ensure_positive(re, "Reynolds number")?;
    let u = ensure_positive(velocity.value, "velocity")?;
    let l = ensure_positive(length.value, "characteristic length")?;
    Ok(m2ps(u * l / re))
}

/// Reynolds number for the given velocity, length and viscosity.
pub fn reynolds_number(velocity: Velocity, length: Length, nu: KinVisc) -> BcResult<f64> {
    let u = ensure_positive(velocity.value, "velocity")?;
    let l = ensure_positive(length.value, "characteristic length")?;
    let nu = ensure_positive(nu.value, "kinematic viscosity")?;
    Ok(u * l / nu)
}

/// Velocity that yields `re` for the given viscosity and length.
pub fn velocity_from_reynolds(re: f64, nu: KinVisc, length: Length) -> BcResult<Velocity> {
    let re = ensure_positive(re, "Reynolds number")?;
    let nu = ensure_positive(nu.value, "kinematic viscosity")?;
    let l = ensure_positive(length.value, "characteristic length")?;
    Ok(mps(re * nu / l))
}
