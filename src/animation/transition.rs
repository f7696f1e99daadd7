//! A single item's eased move from one position to another.

use glam::Vec3;

use super::Easing;

/// Linear interpolation between two positions.
#[inline]
pub fn lerp_vec3(t: f32, start: Vec3, end: Vec3) -> Vec3 {
    start + (end - start) * t
}

/// One item's in-flight move.
///
/// Times are on the controller's clock, in the same units as the
/// durations passed to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Index of the item being moved.
    pub item: usize,
    /// Position when the transition was created.
    pub from: Vec3,
    /// Target position.
    pub to: Vec3,
    /// Controller clock at creation.
    pub start_time: f64,
    /// Length of the move.
    pub duration: f64,
}

impl Transition {
    /// Raw elapsed fraction in `[0, 1]` at clock time `now`.
    #[inline]
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time) / self.duration).clamp(0.0, 1.0) as f32
    }

    /// Whether the move has finished at clock time `now`.
    #[inline]
    pub fn is_complete(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Item position at clock time `now`. Exactly `to` once complete.
    #[inline]
    pub fn position_at(&self, now: f64, easing: Easing) -> Vec3 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        lerp_vec3(easing.apply(t), self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transition {
        Transition {
            item: 0,
            from: Vec3::ZERO,
            to: Vec3::new(100.0, -50.0, 10.0),
            start_time: 1000.0,
            duration: 2000.0,
        }
    }

    #[test]
    fn test_progress() {
        let tr = sample();
        assert_eq!(tr.progress(0.0), 0.0);
        assert_eq!(tr.progress(1000.0), 0.0);
        assert_eq!(tr.progress(2000.0), 0.5);
        assert_eq!(tr.progress(3000.0), 1.0);
        assert_eq!(tr.progress(9000.0), 1.0);
    }

    #[test]
    fn test_lands_exactly() {
        let tr = Transition {
            from: Vec3::new(0.1, 0.2, 0.3),
            to: Vec3::new(1234.567, -987.654, 0.001),
            ..sample()
        };
        assert_eq!(tr.position_at(3000.0, Easing::ExponentialInOut), tr.to);
    }

    #[test]
    fn test_midpoint_linear() {
        let tr = sample();
        assert_eq!(tr.position_at(2000.0, Easing::Linear), Vec3::new(50.0, -25.0, 5.0));
    }

    #[test]
    fn test_zero_duration_is_immediately_complete() {
        let tr = Transition {
            duration: 0.0,
            ..sample()
        };
        assert!(tr.is_complete(tr.start_time));
        assert_eq!(tr.position_at(tr.start_time, Easing::default()), tr.to);
    }
}
