//! Case validation logic.

use crate::schema::{Case, FlowDef, InletDef, LATEST_VERSION, SweepDef};
use pi_core::Axis;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate patch: {patch}")]
    DuplicatePatch { patch: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Sweep arrays differ in length: nu has {nu}, Re has {re}")]
    SweepLengthMismatch { nu: usize, re: usize },

    #[error("Sweep arrays cannot be empty")]
    EmptySweep,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_case(case: &Case) -> Result<(), ValidationError> {
    if case.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    let mut patches = HashSet::new();
    for inlet in &case.inlets {
        if !patches.insert(&inlet.patch) {
            return Err(ValidationError::DuplicatePatch {
                patch: inlet.patch.clone(),
            });
        }
        validate_inlet(inlet)?;
    }

    if let Some(flow) = &case.flow {
        validate_flow(flow)?;
    }

    if let Some(sweep) = &case.sweep {
        validate_sweep(sweep)?;
    }

    Ok(())
}

fn validate_inlet(inlet: &InletDef) -> Result<(), ValidationError> {
    let context = |field: &str| format!("inlet '{}' {}", inlet.patch, field);

    if inlet.patch.trim().is_empty() {
        return Err(invalid("inlet patch", &inlet.patch, "must not be empty"));
    }
    require_positive(&context("u_max_mps"), inlet.u_max_mps)?;
    require_positive(&context("height_m"), inlet.height_m)?;
    if !inlet.shape_c.is_finite() {
        return Err(invalid(&context("shape_c"), inlet.shape_c, "must be finite"));
    }
    if inlet.axis == Axis::X {
        return Err(invalid(
            &context("axis"),
            inlet.axis,
            "wall-normal axis cannot be the flow axis",
        ));
    }
    Ok(())
}

fn validate_flow(flow: &FlowDef) -> Result<(), ValidationError> {
    require_positive("flow reynolds", flow.reynolds)?;
    require_positive("flow velocity_mps", flow.velocity_mps)?;
    require_positive("flow characteristic_length_m", flow.characteristic_length_m)?;
    Ok(())
}

fn validate_sweep(sweep: &SweepDef) -> Result<(), ValidationError> {
    if sweep.nu.len() != sweep.re.len() {
        return Err(ValidationError::SweepLengthMismatch {
            nu: sweep.nu.len(),
            re: sweep.re.len(),
        });
    }
    if sweep.nu.is_empty() {
        return Err(ValidationError::EmptySweep);
    }
    for (i, (&nu, &re)) in sweep.nu.iter().zip(&sweep.re).enumerate() {
        require_positive(&format!("sweep nu[{i}]"), nu)?;
        require_positive(&format!("sweep Re[{i}]"), re)?;
    }
    require_positive(
        "sweep characteristic_length_m",
        sweep.characteristic_length_m,
    )?;
    Ok(())
}

fn require_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(field, value, "must be positive"));
    }
    Ok(())
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
