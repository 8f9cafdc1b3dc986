//! Turning case definitions into runtime objects.

use crate::schema::{Case, FlowDef, InletDef, SweepDef};
use crate::{CaseError, CaseResult};
use pi_bc::flow::{kinematic_viscosity_from_reynolds, velocity_from_reynolds};
use pi_bc::{ParabolicInlet, ParabolicProfile};
use pi_core::units::{KinVisc, Velocity, m, m2ps, mps};

impl InletDef {
    pub fn profile(&self) -> CaseResult<ParabolicProfile> {
        Ok(ParabolicProfile::new(
            self.u_max_mps,
            self.height_m,
            self.shape_c,
            self.axis,
        )?)
    }

    /// Construct the patch condition described by this definition.
    pub fn build(&self) -> CaseResult<ParabolicInlet> {
        Ok(ParabolicInlet::new(self.patch.clone(), self.profile()?)
            .with_diagnostics(self.diagnostics))
    }
}

impl Case {
    /// Build the condition for one patch by name.
    pub fn build_inlet(&self, patch: &str) -> CaseResult<ParabolicInlet> {
        self.inlet(patch)
            .ok_or_else(|| CaseError::UnknownPatch {
                patch: patch.to_string(),
            })?
            .build()
    }

    /// Build every inlet, in file order.
    pub fn build_inlets(&self) -> CaseResult<Vec<ParabolicInlet>> {
        self.inlets.iter().map(InletDef::build).collect()
    }
}

impl FlowDef {
    /// Kinematic viscosity giving `reynolds` at `velocity_mps` over the
    /// characteristic length.
    pub fn kinematic_viscosity(&self) -> CaseResult<KinVisc> {
        Ok(kinematic_viscosity_from_reynolds(
            self.reynolds,
            mps(self.velocity_mps),
            m(self.characteristic_length_m),
        )?)
    }
}

/// One run of a parameter sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepCase {
    /// 1-based run number
    pub run: usize,
    pub nu: f64,
    pub re: f64,
}

impl SweepCase {
    /// Directory-style label, e.g. `run_Re100_nu0.001` or `run_Re100_nu1e-05`.
    ///
    /// Small and large magnitudes use a two-digit signed exponent so labels
    /// line up with run directories written by the batch scripts.
    pub fn label(&self) -> String {
        format!("run_Re{}_nu{}", label_number(self.re), label_number(self.nu))
    }
}

/// Shortest round-trip decimal, switching to `1e-05` style below 1e-4 and
/// from 1e16 up.
fn label_number(v: f64) -> String {
    let mag = v.abs();
    if v == 0.0 || !v.is_finite() || (1e-4..1e16).contains(&mag) {
        return format!("{v}");
    }
    let sci = format!("{v:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci.clone();
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exp),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

impl SweepDef {
    /// Runs in file order.
    pub fn cases(&self) -> Vec<SweepCase> {
        self.nu
            .iter()
            .zip(&self.re)
            .enumerate()
            .map(|(i, (&nu, &re))| SweepCase { run: i + 1, nu, re })
            .collect()
    }

    /// Inlet velocity implied by `Re * nu / L` for one run.
    pub fn velocity(&self, case: &SweepCase) -> CaseResult<Velocity> {
        Ok(velocity_from_reynolds(
            case.re,
            m2ps(case.nu),
            m(self.characteristic_length_m),
        )?)
    }
}
