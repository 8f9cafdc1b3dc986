//! Host-facing capability trait for vector-valued patch conditions.

use crate::error::BcResult;
use pi_core::Vec3;

/// Borrowed view of one boundary patch: its name and face centres.
///
/// The host owns the geometry; conditions only read it during an update.
#[derive(Clone, Copy, Debug)]
pub struct PatchFaces<'a> {
    pub name: &'a str,
    pub centres: &'a [Vec3],
}

impl<'a> PatchFaces<'a> {
    pub fn new(name: &'a str, centres: &'a [Vec3]) -> Self {
        Self { name, centres }
    }

    pub fn len(&self) -> usize {
        self.centres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centres.is_empty()
    }
}

/// Result of an update request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Values were computed and written for this many faces.
    Written { faces: usize },
    /// The condition was already fresh in this pass; nothing was written.
    Skipped,
}

/// Trait for boundary conditions that impose a vector value on each face of a
/// patch.
///
/// The host calls `update_coeffs` at most once per evaluation pass that
/// matters; repeated calls in the same pass must be no-ops. `mark_stale` is
/// called by the host at the start of every new pass.
pub trait VectorPatchCondition: Send + Sync {
    /// Patch name for debugging and identification.
    fn name(&self) -> &str;

    /// Whether values have already been written in the current pass.
    fn is_updated(&self) -> bool;

    /// Compute and write one value per face into `values`.
    ///
    /// # Arguments
    /// * `patch` - Face centres of the patch, owned by the host
    /// * `values` - Output storage, index aligned with `patch.centres`
    ///
    /// # Returns
    /// `Skipped` if already updated in this pass, otherwise `Written`.
    fn update_coeffs(
        &mut self,
        patch: PatchFaces<'_>,
        values: &mut [Vec3],
    ) -> BcResult<UpdateOutcome>;

    /// Reset to the stale state at the start of a new pass.
    fn mark_stale(&mut self);
}
