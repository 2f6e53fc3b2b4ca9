//! Ray tests against a die's visual bounds.

use bevy_math::DVec3;

/// Distance along the ray to the first hit of the sphere, or `None` on a miss.
/// A ray starting inside the sphere hits at distance 0.
pub fn ray_sphere_hit(origin: DVec3, direction: DVec3, center: DVec3, radius: f64) -> Option<f64> {
    let direction = direction.try_normalize()?;
    let to_center = center - origin;
    if to_center.length_squared() <= radius * radius {
        return Some(0.0);
    }

    let along = to_center.dot(direction);
    if along < 0.0 {
        return None;
    }
    let closest_sq = to_center.length_squared() - along * along;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }
    Some(along - (radius_sq - closest_sq).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_through_center_hits_front_surface() {
        let hit = ray_sphere_hit(DVec3::new(0.0, 0.0, 5.0), DVec3::NEG_Z, DVec3::ZERO, 1.0);
        assert_eq!(hit, Some(4.0));
    }

    #[test]
    fn ray_beside_the_sphere_misses() {
        let origin = DVec3::new(1.5, 0.0, 5.0);
        assert_eq!(ray_sphere_hit(origin, DVec3::NEG_Z, DVec3::ZERO, 1.0), None);
    }

    #[test]
    fn ray_pointing_away_misses() {
        assert_eq!(
            ray_sphere_hit(DVec3::new(0.0, 0.0, 5.0), DVec3::Z, DVec3::ZERO, 1.0),
            None
        );
    }

    #[test]
    fn origin_inside_counts_as_hit() {
        assert_eq!(
            ray_sphere_hit(DVec3::new(0.2, 0.0, 0.0), DVec3::X, DVec3::ZERO, 1.0),
            Some(0.0)
        );
    }

    #[test]
    fn zero_direction_never_hits() {
        assert_eq!(
            ray_sphere_hit(DVec3::new(0.0, 0.0, 5.0), DVec3::ZERO, DVec3::ZERO, 1.0),
            None
        );
    }
}
