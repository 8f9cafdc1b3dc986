//! Fixed-value inlet condition imposing a parabolic profile on one patch.

use crate::error::{BcError, BcResult};
use crate::profile::ParabolicProfile;
use crate::traits::{PatchFaces, UpdateOutcome, VectorPatchCondition};
use pi_core::Vec3;
use tracing::debug;

/// Per-pass update state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateState {
    #[default]
    Stale,
    Fresh,
}

/// Parabolic inflow condition bound to a named patch.
///
/// Values are written at most once per evaluation pass: a second
/// `update_coeffs` before `mark_stale` returns `UpdateOutcome::Skipped`
/// without touching the output.
///
/// With `diagnostics` enabled, lifecycle events are emitted as `tracing`
/// debug events under the `pi_bc::inlet` target.
#[derive(Debug)]
pub struct ParabolicInlet {
    patch: String,
    profile: ParabolicProfile,
    state: UpdateState,
    diagnostics: bool,
}

impl ParabolicInlet {
    /// Create an inlet for `patch`, initially stale.
    pub fn new(patch: impl Into<String>, profile: ParabolicProfile) -> Self {
        Self {
            patch: patch.into(),
            profile,
            state: UpdateState::Stale,
            diagnostics: false,
        }
    }

    /// Enable or disable lifecycle diagnostics.
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        if enabled {
            debug!(patch = %self.patch, "construct parabolic inlet");
        }
        self
    }

    /// Same parameters bound to another patch, reset to stale.
    pub fn rebind(&self, patch: impl Into<String>) -> Self {
        let rebound = Self {
            patch: patch.into(),
            profile: self.profile,
            state: UpdateState::Stale,
            diagnostics: self.diagnostics,
        };
        if rebound.diagnostics {
            debug!(from = %self.patch, to = %rebound.patch, "rebind parabolic inlet");
        }
        rebound
    }

    pub fn profile(&self) -> &ParabolicProfile {
        &self.profile
    }

    pub fn state(&self) -> UpdateState {
        self.state
    }

    pub fn diagnostics(&self) -> bool {
        self.diagnostics
    }
}

impl Clone for ParabolicInlet {
    fn clone(&self) -> Self {
        if self.diagnostics {
            debug!(patch = %self.patch, "copy parabolic inlet");
        }
        Self {
            patch: self.patch.clone(),
            profile: self.profile,
            state: self.state,
            diagnostics: self.diagnostics,
        }
    }
}

impl Drop for ParabolicInlet {
    fn drop(&mut self) {
        if self.diagnostics {
            debug!(patch = %self.patch, "destroy parabolic inlet");
        }
    }
}

impl VectorPatchCondition for ParabolicInlet {
    fn name(&self) -> &str {
        &self.patch
    }

    fn is_updated(&self) -> bool {
        self.state == UpdateState::Fresh
    }

    fn update_coeffs(
        &mut self,
        patch: PatchFaces<'_>,
        values: &mut [Vec3],
    ) -> BcResult<UpdateOutcome> {
        if self.is_updated() {
            return Ok(UpdateOutcome::Skipped);
        }

        if self.diagnostics {
            debug!(patch = %self.patch, faces = patch.len(), "update parabolic inlet");
        }

        self.profile
            .evaluate_into(patch.centres, values)
            .map_err(|e| match e {
                BcError::SizeMismatch { faces, values, .. } => BcError::SizeMismatch {
                    patch: patch.name.to_string(),
                    faces,
                    values,
                },
                other => other,
            })?;

        self.state = UpdateState::Fresh;
        Ok(UpdateOutcome::Written { faces: patch.len() })
    }

    fn mark_stale(&mut self) {
        self.state = UpdateState::Stale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centres() -> Vec<Vec3> {
        [0.0, 0.1025, 0.205, 0.3075, 0.41]
            .iter()
            .map(|&y| Vec3::new(0.0, y, 0.0))
            .collect()
    }

    #[test]
    fn starts_stale() {
        let inlet = ParabolicInlet::new("In", ParabolicProfile::default());
        assert_eq!(inlet.state(), UpdateState::Stale);
        assert!(!inlet.is_updated());
        assert_eq!(inlet.name(), "In");
    }

    #[test]
    fn update_writes_then_marks_fresh() {
        let mut inlet = ParabolicInlet::new("In", ParabolicProfile::default());
        let c = centres();
        let mut values = vec![Vec3::zeros(); c.len()];

        let outcome = inlet
            .update_coeffs(PatchFaces::new("In", &c), &mut values)
            .unwrap();

        assert_eq!(outcome, UpdateOutcome::Written { faces: 5 });
        assert!(inlet.is_updated());
        assert_eq!(values[0].x, 0.0);
        assert_eq!(values[4].x, 0.0);
        assert!(values[2].x > values[1].x);
    }

    #[test]
    fn size_mismatch_reports_patch_and_stays_stale() {
        let mut inlet = ParabolicInlet::new("In", ParabolicProfile::default());
        let c = centres();
        let mut values = vec![Vec3::zeros(); 2];

        let err = inlet
            .update_coeffs(PatchFaces::new("In", &c), &mut values)
            .unwrap_err();

        assert_eq!(
            err,
            BcError::SizeMismatch {
                patch: "In".into(),
                faces: 5,
                values: 2
            }
        );
        assert!(!inlet.is_updated());
    }

    #[test]
    fn rebind_resets_state_and_keeps_profile() {
        let profile = ParabolicProfile::new(1.0, 1.0, 4.0, pi_core::Axis::Z).unwrap();
        let mut inlet = ParabolicInlet::new("In", profile).with_diagnostics(true);
        let c = centres();
        let mut values = vec![Vec3::zeros(); c.len()];
        inlet
            .update_coeffs(PatchFaces::new("In", &c), &mut values)
            .unwrap();

        let other = inlet.rebind("In2");
        assert_eq!(other.name(), "In2");
        assert_eq!(other.state(), UpdateState::Stale);
        assert_eq!(other.profile(), &profile);
        assert!(other.diagnostics());
    }

    #[test]
    fn clone_keeps_state() {
        let mut inlet = ParabolicInlet::new("In", ParabolicProfile::default());
        let mut values: Vec<Vec3> = Vec::new();
        inlet
            .update_coeffs(PatchFaces::new("In", &[]), &mut values)
            .unwrap();
        let copy = inlet.clone();
        assert!(copy.is_updated());
        assert_eq!(copy.name(), "In");
    }

    mod diagnostics {
        use super::*;
        use std::io;
        use std::sync::{Arc, Mutex};
        use tracing_subscriber::fmt::MakeWriter;

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        impl<'a> MakeWriter<'a> for Captured {
            type Writer = Captured;

            fn make_writer(&'a self) -> Self::Writer {
                self.clone()
            }
        }

        fn capture(f: impl FnOnce()) -> String {
            let out = Captured::default();
            let subscriber = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::DEBUG)
                .with_ansi(false)
                .with_writer(out.clone())
                .finish();
            tracing::subscriber::with_default(subscriber, f);
            let bytes = out.0.lock().unwrap().clone();
            String::from_utf8(bytes).unwrap()
        }

        fn full_lifecycle(diagnostics: bool) {
            let mut inlet = ParabolicInlet::new("In", ParabolicProfile::default())
                .with_diagnostics(diagnostics);
            let c = centres();
            let mut values = vec![Vec3::zeros(); c.len()];
            inlet
                .update_coeffs(PatchFaces::new("In", &c), &mut values)
                .unwrap();
            let copy = inlet.clone();
            let moved = copy.rebind("In2");
            drop(moved);
        }

        #[test]
        fn enabled_emits_every_lifecycle_event() {
            let log = capture(|| full_lifecycle(true));
            for msg in [
                "construct parabolic inlet",
                "update parabolic inlet",
                "copy parabolic inlet",
                "rebind parabolic inlet",
                "destroy parabolic inlet",
            ] {
                assert!(log.contains(msg), "missing '{msg}' in:\n{log}");
            }
            assert!(log.contains("faces=5"));
            assert!(log.contains("to=In2"));
            // copy, rebound and original are all dropped
            assert_eq!(log.matches("destroy parabolic inlet").count(), 3);
        }

        #[test]
        fn disabled_is_silent() {
            let log = capture(|| full_lifecycle(false));
            assert!(log.is_empty(), "unexpected output:\n{log}");
        }
    }
}
