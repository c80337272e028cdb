//! Quaternion interpolation: LERP, NLERP, and SLERP.
//!
//! Both [`Quat::nlerp`] and [`Quat::slerp`] correct for the double cover
//! before blending: when the endpoints lie in opposite hemispheres
//! (`dot < 0`) the second endpoint is negated so the blend follows the short
//! arc. The flip happens before the near-parallel threshold check in SLERP;
//! the two steps are not interchangeable.

use crate::Quat;

/// Cosine threshold above which SLERP falls back to LERP. Near-parallel
/// endpoints make `sin(angle)` vanish in the SLERP weights.
const NEARLY_PARALLEL: f64 = 0.95;

impl Quat {
    /// Linear interpolation `a + clamp(t, 0, 1) · (b - a)`.
    ///
    /// The result is **not** renormalized and is generally not unit length
    /// even for unit endpoints; it is the raw building block for
    /// [`Quat::nlerp`] and the near-parallel branch of [`Quat::slerp`].
    /// It also blends component-wise, so antipodal endpoints take the long
    /// arc — use the other two for rotation interpolation.
    #[must_use]
    pub fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        *a + (*b - *a) * t
    }

    /// Normalized linear interpolation along the shortest arc.
    ///
    /// If the endpoints lie in opposite hemispheres (`dot < 0`), `b` is
    /// negated first — `q` and `-q` are the same rotation, and blending
    /// toward the nearer representative keeps the path short. The result is
    /// normalized, so it is a valid rotation for unit endpoints.
    #[must_use]
    pub fn nlerp(a: &Self, b: &Self, t: f64) -> Self {
        let b = if a.dot(b) < 0.0 { -*b } else { *b };
        Self::lerp(a, &b, t).normalize()
    }

    /// Spherical linear interpolation along the shortest arc.
    ///
    /// Constant angular velocity in `t`. The antipodal correction (negate
    /// `b` when `dot < 0`) is applied first; if the corrected endpoints are
    /// nearly parallel (`cos ≥ 0.95`) the blend falls back to normalized
    /// LERP, since the spherical weights divide by a vanishing `sin(angle)`
    /// there.
    ///
    /// # Example
    ///
    /// ```
    /// use nalgebra::Vector3;
    /// use rot_math::Quat;
    ///
    /// let a = Quat::identity();
    /// let b = Quat::from_axis_angle(&Vector3::y(), 90.0);
    /// let mid = Quat::slerp(&a, &b, 0.5);
    /// assert!((mid.angle().to_degrees() - 45.0).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn slerp(a: &Self, b: &Self, t: f64) -> Self {
        let mut cos_angle = a.dot(b);

        // Shortest-path correction, before the threshold check below.
        let b = if cos_angle < 0.0 {
            cos_angle = -cos_angle;
            -*b
        } else {
            *b
        };

        if cos_angle >= NEARLY_PARALLEL {
            return Self::lerp(a, &b, t).normalize();
        }

        let angle = cos_angle.acos();
        let sin_angle = angle.sin();
        let weight_a = ((1.0 - t) * angle).sin() / sin_angle;
        let weight_b = (t * angle).sin() / sin_angle;
        *a * weight_a + b * weight_b
    }
}
