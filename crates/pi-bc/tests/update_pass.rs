use pi_bc::{
    ParabolicInlet, ParabolicProfile, PatchFaces, UpdateOutcome, UpdateState,
    VectorPatchCondition,
};
use pi_core::{Axis, Vec3};

fn inlet_faces(n: usize, h: f64) -> Vec<Vec3> {
    (0..n)
        .map(|i| {
            let y = (i as f64 + 0.5) * h / n as f64;
            Vec3::new(-0.2, y, 0.005)
        })
        .collect()
}

#[test]
fn second_update_in_same_pass_writes_nothing() {
    let mut inlet = ParabolicInlet::new("In", ParabolicProfile::default());
    let faces = inlet_faces(16, 0.41);
    let mut values = vec![Vec3::zeros(); faces.len()];

    let first = inlet
        .update_coeffs(PatchFaces::new("In", &faces), &mut values)
        .unwrap();
    assert_eq!(first, UpdateOutcome::Written { faces: 16 });

    // Host clobbers the field; a guarded update must not restore it.
    let sentinel = Vec3::new(-1.0, -1.0, -1.0);
    values.iter_mut().for_each(|v| *v = sentinel);

    let second = inlet
        .update_coeffs(PatchFaces::new("In", &faces), &mut values)
        .unwrap();
    assert_eq!(second, UpdateOutcome::Skipped);
    assert!(values.iter().all(|v| *v == sentinel));
}

#[test]
fn update_after_mark_stale_is_deterministic() {
    let mut inlet = ParabolicInlet::new("In", ParabolicProfile::default());
    let faces = inlet_faces(32, 0.41);
    let mut first = vec![Vec3::zeros(); faces.len()];
    let mut second = vec![Vec3::zeros(); faces.len()];

    inlet
        .update_coeffs(PatchFaces::new("In", &faces), &mut first)
        .unwrap();
    inlet.mark_stale();
    assert_eq!(inlet.state(), UpdateState::Stale);
    inlet
        .update_coeffs(PatchFaces::new("In", &faces), &mut second)
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn host_drives_conditions_through_trait_objects() {
    let base = ParabolicInlet::new("In", ParabolicProfile::default());
    let side = ParabolicInlet::new(
        "Side",
        ParabolicProfile::new(2.0, 0.1, 4.0, Axis::Z).unwrap(),
    );
    let mut conditions: Vec<Box<dyn VectorPatchCondition>> =
        vec![Box::new(base.rebind("In")), Box::new(side)];

    let in_faces = inlet_faces(8, 0.41);
    let side_faces: Vec<Vec3> = (0..4)
        .map(|i| Vec3::new(0.0, 5.0, i as f64 * 0.1 / 3.0))
        .collect();
    let mut in_values = vec![Vec3::zeros(); in_faces.len()];
    let mut side_values = vec![Vec3::zeros(); side_faces.len()];

    for pass in 0..3 {
        for c in conditions.iter_mut() {
            c.mark_stale();
        }
        let (a, b) = conditions.split_at_mut(1);
        let wa = a[0]
            .update_coeffs(PatchFaces::new("In", &in_faces), &mut in_values)
            .unwrap();
        let wb = b[0]
            .update_coeffs(PatchFaces::new("Side", &side_faces), &mut side_values)
            .unwrap();
        assert_eq!(wa, UpdateOutcome::Written { faces: 8 }, "pass {pass}");
        assert_eq!(wb, UpdateOutcome::Written { faces: 4 }, "pass {pass}");
        assert!(conditions.iter().all(|c| c.is_updated()));
    }

    // Side patch walls sit at z = 0 and z = 0.1
    assert_eq!(side_values[0].x, 0.0);
    assert!(side_values[3].x.abs() < 1e-12);
    assert!(side_values[1].x > 0.0);
    assert!(in_values.iter().all(|v| v.y == 0.0 && v.z == 0.0));
}

#[test]
fn empty_patch_is_not_an_error() {
    let mut inlet = ParabolicInlet::new("Empty", ParabolicProfile::default());
    let mut values: Vec<Vec3> = Vec::new();
    let outcome = inlet
        .update_coeffs(PatchFaces::new("Empty", &[]), &mut values)
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::Written { faces: 0 });
    assert!(values.is_empty());
}
