//! Case schema definitions.

use pi_bc::flow::DEFAULT_CHARACTERISTIC_LENGTH_M;
use pi_bc::profile::{DEFAULT_HEIGHT, DEFAULT_SHAPE_C, DEFAULT_U_MAX};
use pi_core::Axis;
use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    #[serde(default = "default_version")]
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub inlets: Vec<InletDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<FlowDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<SweepDef>,
}

impl Case {
    pub fn inlet(&self, patch: &str) -> Option<&InletDef> {
        self.inlets.iter().find(|i| i.patch == patch)
    }
}

/// Parabolic inlet parameters for one patch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InletDef {
    pub patch: String,
    #[serde(default = "default_u_max")]
    pub u_max_mps: f64,
    #[serde(default = "default_height")]
    pub height_m: f64,
    #[serde(default = "default_shape_c")]
    pub shape_c: f64,
    #[serde(default)]
    pub axis: Axis,
    #[serde(default)]
    pub diagnostics: bool,
}

impl InletDef {
    /// Inlet on `patch` with the default profile parameters.
    pub fn with_defaults(patch: impl Into<String>) -> Self {
        Self {
            patch: patch.into(),
            u_max_mps: DEFAULT_U_MAX,
            height_m: DEFAULT_HEIGHT,
            shape_c: DEFAULT_SHAPE_C,
            axis: Axis::Y,
            diagnostics: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowDef {
    pub reynolds: f64,
    pub velocity_mps: f64,
    #[serde(default = "default_characteristic_length")]
    pub characteristic_length_m: f64,
}

/// Paired viscosity / Reynolds number runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SweepDef {
    pub nu: Vec<f64>,
    #[serde(rename = "Re")]
    pub re: Vec<f64>,
    #[serde(default = "default_characteristic_length")]
    pub characteristic_length_m: f64,
}

fn default_version() -> u32 {
    LATEST_VERSION
}

fn default_u_max() -> f64 {
    DEFAULT_U_MAX
}

fn default_height() -> f64 {
    DEFAULT_HEIGHT
}

fn default_shape_c() -> f64 {
    DEFAULT_SHAPE_C
}

fn default_characteristic_length() -> f64 {
    DEFAULT_CHARACTERISTIC_LENGTH_M
}
