//! Attraction / repulsion relative to the reference point, and edge wrapping.

use glam::Vec2;

use crate::{Bounds, FieldParams};

/// Displacement a particle receives from the reference point in one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Force {
    /// Particle sits exactly on the reference point.
    None,
    /// Pushed away; the caller adds jitter on top.
    Repel(Vec2),
    /// Pulled toward the reference point.
    Attract(Vec2),
}

impl Force {
    pub fn displacement(self) -> Vec2 {
        match self {
            Force::None => Vec2::ZERO,
            Force::Repel(d) | Force::Attract(d) => d,
        }
    }
}

/// Force for a particle whose offset to the reference point is `offset`
/// (reference minus particle position).
///
/// Inside the repulsion threshold the push falls off as `strength / distance`;
/// outside it the pull grows linearly with distance.
pub fn force_toward(offset: Vec2, params: &FieldParams) -> Force {
    let distance = offset.length();
    if distance == 0.0 || !distance.is_finite() {
        return Force::None;
    }
    let direction = offset / distance;

    if distance < params.repulsion_threshold {
        let magnitude = params.repulsion_strength / distance;
        Force::Repel(-direction * magnitude)
    } else {
        let magnitude = params.attraction_strength * (distance / 100.0);
        Force::Attract(direction * magnitude)
    }
}

/// Toroidal wrap: leaving one edge re-enters from the opposite one.
pub fn wrap(position: Vec2, bounds: Bounds) -> Vec2 {
    let mut p = position;
    if p.x < 0.0 {
        p.x = bounds.width;
    } else if p.x > bounds.width {
        p.x = 0.0;
    }
    if p.y < 0.0 {
        p.y = bounds.height;
    } else if p.y > bounds.height {
        p.y = 0.0;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_has_no_force() {
        let params = FieldParams::default();
        let force = force_toward(Vec2::ZERO, &params);
        assert_eq!(force, Force::None);
        assert_eq!(force.displacement(), Vec2::ZERO);
    }

    #[test]
    fn test_repulsion_inside_threshold() {
        let params = FieldParams::default();
        // Reference point half a threshold to the right of the particle.
        let offset = Vec2::new(params.repulsion_threshold / 2.0, 0.0);
        let force = force_toward(offset, &params);
        assert!(matches!(force, Force::Repel(_)));
        let d = force.displacement();
        assert!(d.dot(offset) < 0.0, "expected push away, got {d:?}");
        let expected = params.repulsion_strength / offset.length();
        assert!((d.length() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_attraction_outside_threshold() {
        let params = FieldParams::default();
        let offset = Vec2::new(0.0, -2.0 * params.repulsion_threshold);
        let force = force_toward(offset, &params);
        assert!(matches!(force, Force::Attract(_)));
        let d = force.displacement();
        assert!(d.dot(offset) > 0.0, "expected pull toward, got {d:?}");
        let expected = params.attraction_strength * offset.length() / 100.0;
        assert!((d.length() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_threshold_boundary_attracts() {
        let params = FieldParams::default();
        let offset = Vec2::new(params.repulsion_threshold, 0.0);
        assert!(matches!(force_toward(offset, &params), Force::Attract(_)));
    }

    #[test]
    fn test_wrap_edges() {
        let bounds = Bounds::new(640.0, 384.0);
        assert_eq!(wrap(Vec2::new(640.5, 10.0), bounds), Vec2::new(0.0, 10.0));
        assert_eq!(wrap(Vec2::new(-0.1, 10.0), bounds), Vec2::new(640.0, 10.0));
        assert_eq!(wrap(Vec2::new(5.0, 400.0), bounds), Vec2::new(5.0, 0.0));
        assert_eq!(wrap(Vec2::new(5.0, -3.0), bounds), Vec2::new(5.0, 384.0));
        assert_eq!(wrap(Vec2::new(640.0, 384.0), bounds), Vec2::new(640.0, 384.0));
    }
}
