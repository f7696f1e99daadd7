//! Property-based invariant tests for arrangement layouts and transitions.
//!
//! 1. Generators are pure: same count, bit-identical output
//! 2. Sphere points lie on the configured radius
//! 3. Table and grid never exceed capacity; sphere and helix cover every item
//! 4. After a superseding request, no transition targets the old arrangement
//! 5. Items without a target keep their exact position

use arrangement_wasm::layout::{LayoutConfig, SphereConfig, compute_layout, compute_sphere_layout};
use arrangement_wasm::{Arrangement, Scene, SceneConfig};
use glam::Vec3;
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arrangement_strategy() -> impl Strategy<Value = Arrangement> {
    prop_oneof![
        Just(Arrangement::Table),
        Just(Arrangement::Sphere),
        Just(Arrangement::Helix),
        Just(Arrangement::Grid),
    ]
}

fn bits(positions: &[Vec3]) -> Vec<[u32; 3]> {
    positions.iter().map(|p| p.to_array().map(f32::to_bits)).collect()
}

fn settle(scene: &mut Scene) {
    let mut frames = 0;
    while scene.advance(16.0).unwrap() > 0 {
        frames += 1;
        assert!(frames < 10_000);
    }
}

fn quiet_scene() -> Scene {
    Scene::new(SceneConfig {
        initial_arrangement: None,
        ..SceneConfig::default()
    })
    .unwrap()
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn generators_are_deterministic(n in 0usize..600, arrangement in arrangement_strategy()) {
        let config = LayoutConfig::default();
        let a = compute_layout(arrangement, n, &config);
        let b = compute_layout(arrangement, n, &config);
        prop_assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn sphere_points_on_surface(n in 1usize..2000) {
        for p in compute_sphere_layout(n, &SphereConfig::default()) {
            prop_assert!((p.length() - 1200.0).abs() < 0.05);
        }
    }

    #[test]
    fn output_length_matches_capacity(n in 0usize..600) {
        let config = LayoutConfig::default();
        prop_assert_eq!(compute_layout(Arrangement::Table, n, &config).len(), n.min(200));
        prop_assert_eq!(compute_layout(Arrangement::Grid, n, &config).len(), n.min(200));
        prop_assert_eq!(compute_layout(Arrangement::Sphere, n, &config).len(), n);
        prop_assert_eq!(compute_layout(Arrangement::Helix, n, &config).len(), n);
    }

    #[test]
    fn newest_request_wins(
        n in 1usize..260,
        first in arrangement_strategy(),
        second in arrangement_strategy(),
        elapsed in 0.0f64..2500.0,
    ) {
        let mut scene = quiet_scene();
        scene.load(n).unwrap();

        scene.request_arrangement(first, None).unwrap();
        scene.advance(elapsed).unwrap();
        scene.request_arrangement(second, None).unwrap();

        let targets = scene.targets(second).to_vec();
        for tr in scene.controller().transitions() {
            prop_assert_eq!(tr.to, targets[tr.item]);
        }

        settle(&mut scene);
        for (i, target) in targets.iter().enumerate() {
            prop_assert_eq!(scene.item_position(i).unwrap(), *target);
        }
    }

    #[test]
    fn untargeted_items_keep_position(
        n in 201usize..320,
        arrangement in prop_oneof![Just(Arrangement::Table), Just(Arrangement::Grid)],
    ) {
        let mut scene = quiet_scene();
        scene.load(n).unwrap();
        let before: Vec<Vec3> = scene.positions().iter().collect();

        scene.request_arrangement(arrangement, None).unwrap();
        settle(&mut scene);

        for i in 200..n {
            prop_assert_eq!(scene.item_position(i).unwrap(), before[i]);
        }
    }
}
