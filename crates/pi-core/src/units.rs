// pi-core/src/units.rs

use uom::si::f64::{
    KinematicViscosity as UomKinematicViscosity, Length as UomLength, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type KinVisc = UomKinematicViscosity;
pub type Length = UomLength;
pub type Velocity = UomVelocity;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn m2ps(v: f64) -> KinVisc {
    use uom::si::kinematic_viscosity::square_meter_per_second;
    KinVisc::new::<square_meter_per_second>(v)
}
