//! Drives item positions toward arrangement targets over time.
//!
//! The controller is the only writer of item positions. It keeps its own
//! clock, advanced by the host once per frame through [`advance`], so the
//! visual duration of a move depends on elapsed time and not on frame rate.
//!
//! A new [`transition_to`] drops every in-flight transition before creating
//! the new set. Each item then starts from wherever the last tick left it.
//!
//! [`advance`]: TransitionController::advance
//! [`transition_to`]: TransitionController::transition_to

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{Easing, Transition};
use crate::error::{self, Result};
use crate::scene::ItemPositions;

/// Configuration for transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Duration used when a request does not give one (default: 2000).
    pub duration: f64,
    /// Curve shared by every transition (default: exponential in-out).
    pub easing: Easing,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: 2000.0,
            easing: Easing::ExponentialInOut,
        }
    }
}

impl TransitionConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        error::validate_duration(self.duration).map(|_| ())
    }
}

/// Per-item transition driver.
#[derive(Debug, Clone)]
pub struct TransitionController {
    /// Live positions, one per item.
    positions: ItemPositions,
    /// In-flight transitions, at most one per item.
    transitions: Vec<Transition>,
    /// Accumulated elapsed time.
    clock: f64,
    easing: Easing,
    default_duration: f64,
}

impl TransitionController {
    /// Create a controller with no items.
    pub fn new(config: &TransitionConfig) -> Self {
        Self {
            positions: ItemPositions::new(),
            transitions: Vec::new(),
            clock: 0.0,
            easing: config.easing,
            default_duration: config.duration,
        }
    }

    /// Replace the item batch. Cancels all in-flight transitions.
    pub fn reset_items(&mut self, positions: &[Vec3]) -> Result<()> {
        let positions = ItemPositions::from_positions(positions)?;
        self.transitions.clear();
        self.positions = positions;
        Ok(())
    }

    /// Start moving every item that has a target toward it.
    ///
    /// `targets[i]` is the destination of item `i`; items at or beyond
    /// `targets.len()` are left untouched. `duration` falls back to the
    /// configured default. Returns the number of transitions created.
    pub fn transition_to(&mut self, targets: &[Vec3], duration: Option<f64>) -> Result<usize> {
        let duration = error::validate_duration(duration.unwrap_or(self.default_duration))?;

        let cancelled = self.transitions.len();
        self.transitions.clear();

        let now = self.clock;
        let positions = &self.positions;
        self.transitions.extend(
            targets
                .iter()
                .take(positions.len())
                .enumerate()
                .filter_map(|(item, &to)| {
                    positions.get(item).map(|from| Transition {
                        item,
                        from,
                        to,
                        start_time: now,
                        duration,
                    })
                }),
        );

        log::debug!(
            "transition: {} started over {duration}, {cancelled} cancelled, {} items untargeted",
            self.transitions.len(),
            self.positions.len() - self.transitions.len(),
        );
        Ok(self.transitions.len())
    }

    /// Advance the clock by `dt` and write the new position of every moving
    /// item. Returns the number of transitions still running.
    pub fn advance(&mut self, dt: f64) -> Result<usize> {
        let dt = error::validate_elapsed(dt)?;
        if self.transitions.is_empty() {
            return Ok(0);
        }

        self.clock += dt;
        let now = self.clock;

        for tr in &self.transitions {
            self.positions.set(tr.item, tr.position_at(now, self.easing));
        }
        self.transitions.retain(|tr| !tr.is_complete(now));

        if self.transitions.is_empty() {
            log::trace!("transition: all items settled at t={now}");
        }
        Ok(self.transitions.len())
    }

    /// Live positions.
    pub fn positions(&self) -> &ItemPositions {
        &self.positions
    }

    /// Whether any item is still moving.
    pub fn is_animating(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Number of in-flight transitions.
    pub fn active_count(&self) -> usize {
        self.transitions.len()
    }

    /// In-flight transitions.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Current clock value.
    pub fn clock(&self) -> f64 {
        self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller_with(positions: &[Vec3]) -> TransitionController {
        let mut controller = TransitionController::new(&TransitionConfig::default());
        controller.reset_items(positions).unwrap();
        controller
    }

    #[test]
    fn test_reaches_targets_exactly() {
        let mut controller = controller_with(&[Vec3::ZERO, Vec3::ONE]);
        let targets = [Vec3::new(10.0, 20.0, 30.0), Vec3::new(-5.0, 0.5, 7.25)];

        assert_eq!(controller.transition_to(&targets, None).unwrap(), 2);
        for _ in 0..200 {
            controller.advance(16.0).unwrap();
        }

        assert!(!controller.is_animating());
        assert_eq!(controller.positions().get(0), Some(targets[0]));
        assert_eq!(controller.positions().get(1), Some(targets[1]));
    }

    #[test]
    fn test_duration_is_time_based() {
        // Same total elapsed time, different frame rates: same result.
        let targets = [Vec3::new(100.0, 0.0, 0.0)];

        let mut fast = controller_with(&[Vec3::ZERO]);
        fast.transition_to(&targets, Some(1000.0)).unwrap();
        for _ in 0..50 {
            fast.advance(10.0).unwrap();
        }

        let mut slow = controller_with(&[Vec3::ZERO]);
        slow.transition_to(&targets, Some(1000.0)).unwrap();
        for _ in 0..5 {
            slow.advance(100.0).unwrap();
        }

        let a = fast.positions().get(0).unwrap();
        let b = slow.positions().get(0).unwrap();
        assert!((a - b).length() < 1e-3, "{a} vs {b}");
        assert!((a.x - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_completion_at_duration() {
        let mut controller = controller_with(&[Vec3::ZERO]);
        controller.transition_to(&[Vec3::X], Some(100.0)).unwrap();
        assert_eq!(controller.advance(99.0).unwrap(), 1);
        assert_eq!(controller.advance(1.0).unwrap(), 0);
        assert_eq!(controller.positions().get(0), Some(Vec3::X));
    }

    #[test]
    fn test_untargeted_items_untouched() {
        let start = [Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), Vec3::new(-4.0, 5.0, -6.0)];
        let mut controller = controller_with(&start);

        assert_eq!(controller.transition_to(&[Vec3::splat(50.0)], None).unwrap(), 1);
        controller.advance(5000.0).unwrap();

        assert_eq!(controller.positions().get(0), Some(Vec3::splat(50.0)));
        assert_eq!(controller.positions().get(1), Some(start[1]));
        assert_eq!(controller.positions().get(2), Some(start[2]));
    }

    #[test]
    fn test_new_request_supersedes_from_live_position() {
        let mut controller = controller_with(&[Vec3::ZERO]);
        controller.transition_to(&[Vec3::new(1000.0, 0.0, 0.0)], Some(1000.0)).unwrap();
        controller.advance(500.0).unwrap();
        let midway = controller.positions().get(0).unwrap();
        assert!(midway.x > 0.0 && midway.x < 1000.0);

        let second = Vec3::new(0.0, -1000.0, 0.0);
        assert_eq!(controller.transition_to(&[second], Some(1000.0)).unwrap(), 1);
        assert_eq!(controller.active_count(), 1);
        assert_eq!(controller.transitions()[0].from, midway);
        assert_eq!(controller.transitions()[0].to, second);

        // Never moves further toward the first target.
        let mut prev_x = midway.x;
        for _ in 0..100 {
            controller.advance(16.0).unwrap();
            let x = controller.positions().get(0).unwrap().x;
            assert!(x <= prev_x);
            prev_x = x;
        }
        assert_eq!(controller.positions().get(0), Some(second));
    }

    #[test]
    fn test_zero_duration_snaps_on_next_tick() {
        let mut controller = controller_with(&[Vec3::ZERO]);
        controller.transition_to(&[Vec3::ONE], Some(0.0)).unwrap();
        assert_eq!(controller.positions().get(0), Some(Vec3::ZERO));
        assert_eq!(controller.advance(0.0).unwrap(), 0);
        assert_eq!(controller.positions().get(0), Some(Vec3::ONE));
    }

    #[test]
    fn test_invalid_input_leaves_state_alone() {
        let mut controller = controller_with(&[Vec3::ZERO]);
        controller.transition_to(&[Vec3::ONE], Some(100.0)).unwrap();

        assert!(controller.transition_to(&[Vec3::NEG_ONE], Some(-1.0)).is_err());
        assert!(controller.transition_to(&[Vec3::NEG_ONE], Some(f64::NAN)).is_err());
        assert_eq!(controller.transitions()[0].to, Vec3::ONE);

        assert!(controller.advance(-16.0).is_err());
        assert!(controller.advance(f64::NAN).is_err());
        assert_eq!(controller.clock(), 0.0);

        assert!(controller.reset_items(&[Vec3::new(f32::INFINITY, 0.0, 0.0)]).is_err());
        assert_eq!(controller.positions().len(), 1);
        assert!(controller.is_animating());
    }

    #[test]
    fn test_reset_cancels() {
        let mut controller = controller_with(&[Vec3::ZERO]);
        controller.transition_to(&[Vec3::ONE], None).unwrap();
        controller.reset_items(&[Vec3::ZERO, Vec3::ZERO]).unwrap();
        assert!(!controller.is_animating());
        assert_eq!(controller.positions().len(), 2);
    }
}
