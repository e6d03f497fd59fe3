//! Spherical angle <-> Cartesian vector conversion
//!
//! The viewer parameterizes the state vector by the polar angle theta
//! (measured from +Y) and the azimuthal angle phi (measured from +X
//! toward +Z), both in degrees to match the UI sliders.

use glam::Vec3;

/// Convert spherical angles (degrees) to a unit Cartesian vector.
///
/// Total over all real inputs; the result is unit-length by
/// construction. Callers typically keep `theta_deg` in [0, 180] and
/// `phi_deg` in [0, 360).
pub fn spherical_to_cartesian(theta_deg: f32, phi_deg: f32) -> Vec3 {
    let theta = theta_deg.to_radians();
    let phi = phi_deg.to_radians();

    Vec3::new(
        theta.sin() * phi.cos(),
        theta.cos(),
        theta.sin() * phi.sin(),
    )
}

/// Convert a Cartesian vector to spherical angles (degrees).
///
/// Returns `(theta_deg, phi_deg)` with theta in [0, 180] and phi in
/// [0, 360). The input need not be unit-length but must be non-zero;
/// a zero vector is a caller-contract violation. At the poles
/// (v parallel to Y) phi degenerates to 0.
pub fn cartesian_to_spherical(v: Vec3) -> (f32, f32) {
    debug_assert!(v.length_squared() > 0.0, "zero vector has no direction");
    let n = v.normalize();

    // Clamp against floating drift pushing |y| just past 1
    let theta = n.y.clamp(-1.0, 1.0).acos();

    let mut phi = n.z.atan2(n.x);
    if phi < 0.0 {
        phi += 2.0 * std::f32::consts::PI;
    }

    (theta.to_degrees(), phi.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-5;

    fn assert_vec3_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < TOL, "{a} != {b}");
    }

    #[test]
    fn test_cardinal_directions() {
        assert_vec3_near(spherical_to_cartesian(90.0, 0.0), Vec3::X);
        assert_vec3_near(spherical_to_cartesian(0.0, 0.0), Vec3::Y);
        assert_vec3_near(spherical_to_cartesian(90.0, 90.0), Vec3::Z);
        assert_vec3_near(spherical_to_cartesian(180.0, 0.0), Vec3::NEG_Y);
    }

    #[test]
    fn test_unit_length() {
        for theta in [0.0, 30.0, 45.0, 90.0, 135.0, 180.0] {
            for phi in [0.0, 60.0, 90.0, 180.0, 270.0, 359.0] {
                let v = spherical_to_cartesian(theta, phi);
                assert!((v.length() - 1.0).abs() < TOL, "theta={theta} phi={phi}");
            }
        }
    }

    #[test]
    fn test_south_pole_angles() {
        let (theta, phi) = cartesian_to_spherical(Vec3::new(0.0, -1.0, 0.0));
        assert!((theta - 180.0).abs() < TOL);
        assert!(phi.abs() < TOL);
    }

    #[test]
    fn test_phi_wraps_into_positive_range() {
        // Pointing toward -Z: atan2 gives -90 degrees, shifted to 270
        let (_, phi) = cartesian_to_spherical(Vec3::new(0.0, 0.0, -1.0));
        assert!((phi - 270.0).abs() < 1e-3);
    }

    #[test]
    fn test_round_trip() {
        for theta in [10.0, 45.0, 90.0, 120.0, 170.0] {
            for phi in [0.0, 45.0, 135.0, 200.0, 330.0] {
                let v = spherical_to_cartesian(theta, phi);
                let (t, p) = cartesian_to_spherical(v);
                let back = spherical_to_cartesian(t, p);
                assert!((back - v).length() < 1e-4, "theta={theta} phi={phi}");
            }
        }
    }

    #[test]
    fn test_non_unit_input_normalized() {
        let (theta, phi) = cartesian_to_spherical(Vec3::new(3.0, 0.0, 0.0));
        assert!((theta - 90.0).abs() < 1e-3);
        assert!(phi.abs() < 1e-3);
    }
}
