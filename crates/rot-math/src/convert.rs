//! Conversions between rotation representations: axis-angle, Euler angles,
//! and 3x3 rotation matrices.
//!
//! All conversions use one fixed convention: column-vector application
//! (`v' = M · v`), right-handed axes, and normalize-before-convert. Under
//! this convention `from_matrix3(q.to_matrix3())` reproduces `q` up to sign
//! and `q.to_matrix3() * v == q.rotate_vector(v)`.

use nalgebra::{Matrix3, Matrix4, Vector3};

use crate::Quat;

/// The numerically dominant diagonal term of a rotation matrix, used to pick
/// the extraction branch in [`Quat::from_matrix3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dominant {
    X,
    Y,
    Z,
}

/// Picks the largest diagonal element. Only consulted when the trace is not
/// positive, so exactly one of the three symmetric branches applies.
fn dominant_diagonal(m: &Matrix3<f64>) -> Dominant {
    if m[(0, 0)] > m[(1, 1)] && m[(0, 0)] > m[(2, 2)] {
        Dominant::X
    } else if m[(1, 1)] > m[(2, 2)] {
        Dominant::Y
    } else {
        Dominant::Z
    }
}

/// Shared scale factor of every extraction branch: `s = sqrt(d + 1) * 2`,
/// where `d` is the trace or a diagonal difference. The dominant component is
/// then `s / 4` and the others are off-diagonal terms divided by `s`.
fn branch_scale(d: f64) -> f64 {
    (d + 1.0).sqrt() * 2.0
}

impl Quat {
    /// Creates a rotation of `angle_degrees` about `axis`.
    ///
    /// The axis is normalized internally; a zero axis yields the identity.
    ///
    /// # Example
    ///
    /// ```
    /// use nalgebra::Vector3;
    /// use rot_math::Quat;
    ///
    /// let q = Quat::from_axis_angle(&Vector3::z(), 180.0);
    /// assert!((q.z - 1.0).abs() < 1e-10);
    /// assert!(q.w.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn from_axis_angle(axis: &Vector3<f64>, angle_degrees: f64) -> Self {
        let norm = axis.norm();
        if norm <= f64::EPSILON {
            return Self::identity();
        }
        let axis = axis / norm;

        let half = angle_degrees.to_radians() / 2.0;
        let s = half.sin();
        Self::new(axis.x * s, axis.y * s, axis.z * s, half.cos())
    }

    /// Creates a rotation from Euler angles in degrees.
    ///
    /// Pitch is about X, yaw about Y, roll about Z, composed in the fixed
    /// order `roll * yaw * pitch`: pitch is applied first, then yaw, then
    /// roll. The order is part of this library's contract; reordering the
    /// factors produces a different rotation.
    #[must_use]
    pub fn from_euler(pitch: f64, yaw: f64, roll: f64) -> Self {
        let qx = Self::from_axis_angle(&Vector3::x(), pitch);
        let qy = Self::from_axis_angle(&Vector3::y(), yaw);
        let qz = Self::from_axis_angle(&Vector3::z(), roll);
        (qz * qy * qx).normalize()
    }

    /// Converts this quaternion to a 3x3 rotation matrix.
    ///
    /// The input is normalized first, so the returned matrix is orthonormal
    /// even for a denormalized (but nonzero) quaternion.
    #[must_use]
    pub fn to_matrix3(&self) -> Matrix3<f64> {
        let q = self.normalize();
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);

        let xx = x * x;
        let xy = x * y;
        let xz = x * z;
        let yy = y * y;
        let yz = y * z;
        let zz = z * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        #[rustfmt::skip]
        let m = Matrix3::new(
            1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz),       2.0 * (xz + wy),
            2.0 * (xy + wz),       1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx),
            2.0 * (xz - wy),       2.0 * (yz + wx),       1.0 - 2.0 * (xx + yy),
        );
        m
    }

    /// Converts this quaternion to a homogeneous 4x4 rotation matrix.
    #[must_use]
    pub fn to_matrix4(&self) -> Matrix4<f64> {
        self.to_matrix3().to_homogeneous()
    }

    /// Extracts a quaternion from a 3x3 rotation matrix.
    ///
    /// Uses the branch-on-trace algorithm: when the trace is positive the
    /// scalar part dominates and is extracted directly; otherwise the branch
    /// for the largest diagonal element is taken. The four-way split is what
    /// keeps every divisor well away from zero for any valid rotation matrix,
    /// including 180° rotations where the trace-only formula breaks down.
    ///
    /// The result is normalized before returning. The matrix must be a
    /// proper rotation (orthonormal, det = +1); the output for anything else
    /// is unspecified.
    ///
    /// # Example
    ///
    /// ```
    /// use nalgebra::Vector3;
    /// use rot_math::Quat;
    ///
    /// let q = Quat::from_axis_angle(&Vector3::new(1.0, 2.0, -1.0), 73.0);
    /// let back = Quat::from_matrix3(&q.to_matrix3());
    /// // Round-trips up to sign.
    /// assert!((q.dot(&back).abs() - 1.0).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn from_matrix3(m: &Matrix3<f64>) -> Self {
        let trace = m[(0, 0)] + m[(1, 1)] + m[(2, 2)];

        let q = if trace > 0.0 {
            let s = branch_scale(trace);
            Self::new(
                (m[(2, 1)] - m[(1, 2)]) / s,
                (m[(0, 2)] - m[(2, 0)]) / s,
                (m[(1, 0)] - m[(0, 1)]) / s,
                0.25 * s,
            )
        } else {
            match dominant_diagonal(m) {
                Dominant::X => {
                    let s = branch_scale(m[(0, 0)] - m[(1, 1)] - m[(2, 2)]);
                    Self::new(
                        0.25 * s,
                        (m[(0, 1)] + m[(1, 0)]) / s,
                        (m[(0, 2)] + m[(2, 0)]) / s,
                        (m[(2, 1)] - m[(1, 2)]) / s,
                    )
                }
                Dominant::Y => {
                    let s = branch_scale(m[(1, 1)] - m[(0, 0)] - m[(2, 2)]);
                    Self::new(
                        (m[(0, 1)] + m[(1, 0)]) / s,
                        0.25 * s,
                        (m[(1, 2)] + m[(2, 1)]) / s,
                        (m[(0, 2)] - m[(2, 0)]) / s,
                    )
                }
                Dominant::Z => {
                    let s = branch_scale(m[(2, 2)] - m[(0, 0)] - m[(1, 1)]);
                    Self::new(
                        (m[(0, 2)] + m[(2, 0)]) / s,
                        (m[(1, 2)] + m[(2, 1)]) / s,
                        0.25 * s,
                        (m[(1, 0)] - m[(0, 1)]) / s,
                    )
                }
            }
        };

        q.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_quat_eq_up_to_sign(a: &Quat, b: &Quat) {
        assert_relative_eq!(a.dot(b).abs(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn identity_converts_to_identity_matrix() {
        let m = Quat::identity().to_matrix3();
        assert_relative_eq!(m, Matrix3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn matrix_roundtrip_general_rotations() {
        let cases = [
            (Vector3::new(1.0, 0.0, 0.0), 45.0),
            (Vector3::new(0.0, 1.0, 0.0), 120.0),
            (Vector3::new(1.0, -2.0, 3.0), 77.5),
            (Vector3::new(-1.0, -1.0, -1.0), 310.0),
        ];

        for (axis, angle) in cases {
            let q = Quat::from_axis_angle(&axis, angle);
            let back = Quat::from_matrix3(&q.to_matrix3());
            assert_quat_eq_up_to_sign(&q, &back);
        }
    }

    #[test]
    fn matrix_roundtrip_half_turns() {
        // 180° rotations have trace -1 and exercise the three diagonal
        // branches; the trace-only formula would divide by zero here.
        let axes = [
            Vector3::x(),
            Vector3::y(),
            Vector3::z(),
            Vector3::new(1.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 1.0),
            Vector3::new(1.0, 0.0, 1.0),
        ];

        for axis in axes {
            let q = Quat::from_axis_angle(&axis, 180.0);
            let back = Quat::from_matrix3(&q.to_matrix3());
            assert_quat_eq_up_to_sign(&q, &back);
        }
    }

    #[test]
    fn from_matrix3_result_is_unit() {
        let q = Quat::from_axis_angle(&Vector3::new(0.2, 0.5, -1.0), 193.0);
        let back = Quat::from_matrix3(&q.to_matrix3());
        assert!(back.is_unit());
    }

    #[test]
    fn to_matrix3_normalizes_its_input() {
        let q = Quat::from_axis_angle(&Vector3::new(1.0, 2.0, 3.0), 62.0);
        let scaled = q * 4.0;
        assert_relative_eq!(q.to_matrix3(), scaled.to_matrix3(), epsilon = 1e-12);
    }

    #[test]
    fn matrix_action_matches_rotate_vector() {
        let q = Quat::from_axis_angle(&Vector3::new(3.0, -1.0, 2.0), 141.0);
        let v = Vector3::new(0.5, -2.0, 1.5);

        let by_matrix = q.to_matrix3() * v;
        let by_quat = q.rotate_vector(&v);

        assert_relative_eq!(by_matrix.x, by_quat.x, epsilon = 1e-10);
        assert_relative_eq!(by_matrix.y, by_quat.y, epsilon = 1e-10);
        assert_relative_eq!(by_matrix.z, by_quat.z, epsilon = 1e-10);
    }

    #[test]
    fn to_matrix3_is_orthonormal() {
        let q = Quat::from_axis_angle(&Vector3::new(1.0, 5.0, -2.0), 99.0);
        let m = q.to_matrix3();

        assert_relative_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn axis_angle_half_turn_about_z() {
        let q = Quat::from_axis_angle(&Vector3::z(), 180.0);
        assert_relative_eq!(q.z, 1.0, epsilon = 1e-10);
        assert_relative_eq!(q.w, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn axis_angle_normalizes_axis() {
        let a = Quat::from_axis_angle(&Vector3::new(0.0, 0.0, 10.0), 90.0);
        let b = Quat::from_axis_angle(&Vector3::z(), 90.0);
        assert_quat_eq_up_to_sign(&a, &b);
    }

    #[test]
    fn axis_angle_zero_axis_is_identity() {
        let q = Quat::from_axis_angle(&Vector3::zeros(), 90.0);
        assert_eq!(q, Quat::identity());
    }

    #[test]
    fn euler_composition_order_is_roll_yaw_pitch() {
        let (pitch, yaw, roll) = (31.0, -47.0, 112.0);
        let q = Quat::from_euler(pitch, yaw, roll);

        let qx = Quat::from_axis_angle(&Vector3::x(), pitch);
        let qy = Quat::from_axis_angle(&Vector3::y(), yaw);
        let qz = Quat::from_axis_angle(&Vector3::z(), roll);
        let reference = qz * qy * qx;

        assert_quat_eq_up_to_sign(&q, &reference);

        // The reversed order is a genuinely different rotation.
        let reversed = qx * qy * qz;
        assert!((q.dot(&reversed).abs() - 1.0).abs() > 1e-6);
    }

    #[test]
    fn euler_single_axis_matches_axis_angle() {
        assert_quat_eq_up_to_sign(
            &Quat::from_euler(35.0, 0.0, 0.0),
            &Quat::from_axis_angle(&Vector3::x(), 35.0),
        );
        assert_quat_eq_up_to_sign(
            &Quat::from_euler(0.0, 35.0, 0.0),
            &Quat::from_axis_angle(&Vector3::y(), 35.0),
        );
        assert_quat_eq_up_to_sign(
            &Quat::from_euler(0.0, 0.0, 35.0),
            &Quat::from_axis_angle(&Vector3::z(), 35.0),
        );
    }

    #[test]
    fn to_matrix4_embeds_rotation_block() {
        let q = Quat::from_axis_angle(&Vector3::y(), 90.0);
        let m4 = q.to_matrix4();
        let m3 = q.to_matrix3();

        for row in 0..3 {
            for col in 0..3 {
                assert_relative_eq!(m4[(row, col)], m3[(row, col)], epsilon = 1e-12);
            }
        }
        assert_relative_eq!(m4[(3, 3)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(m4[(0, 3)], 0.0, epsilon = 1e-12);
        assert_relative_eq!(m4[(3, 0)], 0.0, epsilon = 1e-12);
    }
}
