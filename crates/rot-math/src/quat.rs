//! The quaternion value type and its algebra.

use std::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::{Vector3, Vector4};

use crate::MathError;

/// Above this |w|, `acos` loses precision and [`Quat::angle`] switches to the
/// `asin`-based form.
const NEAR_UNIT_W: f64 = 0.999;

/// Tolerance on `length_squared - 1` for [`Quat::is_unit`].
const UNIT_TOLERANCE: f64 = 1e-6;

/// A quaternion `w + xi + yj + zk`, used to represent 3D rotations.
///
/// The type does not enforce unit length; operations that can denormalize
/// (composition of non-unit quaternions, [`Quat::lerp`]) leave it to the
/// caller to [`Quat::normalize`] before using the result as a rotation.
/// The identity rotation is `(0, 0, 0, 1)`.
///
/// `q` and `-q` represent the same rotation (the double cover of SO(3)), so
/// comparisons between rotations must be made up to sign or through their
/// action on a vector.
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use rot_math::Quat;
///
/// // 180 degrees about Z sends (2, 0, 0) to (-2, 0, 0).
/// let q = Quat::from_axis_angle(&Vector3::z(), 180.0);
/// let p = q.rotate_vector(&Vector3::new(2.0, 0.0, 0.0));
/// assert!((p.x + 2.0).abs() < 1e-5);
/// assert!(p.y.abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    /// Coefficient of `i`.
    pub x: f64,
    /// Coefficient of `j`.
    pub y: f64,
    /// Coefficient of `k`.
    pub z: f64,
    /// Scalar part.
    pub w: f64,
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quat {
    /// Creates a quaternion from its four components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// The identity rotation `(0, 0, 0, 1)`.
    ///
    /// # Example
    ///
    /// ```
    /// use nalgebra::Vector3;
    /// use rot_math::Quat;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(Quat::identity().rotate_vector(&v), v);
    /// ```
    #[must_use]
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Returns the component at `index` (0 = x, 1 = y, 2 = z, 3 = w), or
    /// `None` if the index is out of range.
    ///
    /// The non-panicking counterpart of `q[index]`.
    #[must_use]
    pub const fn get(&self, index: usize) -> Option<f64> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            3 => Some(self.w),
            _ => None,
        }
    }

    /// The vector (imaginary) part `(x, y, z)`.
    #[must_use]
    pub const fn vector_part(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// All four components as a vector `(x, y, z, w)`.
    #[must_use]
    pub const fn coords(&self) -> Vector4<f64> {
        Vector4::new(self.x, self.y, self.z, self.w)
    }

    /// Dot product of two quaternions.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Squared length `x² + y² + z² + w²`.
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Whether this quaternion has unit length, within a small tolerance.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        (self.length_squared() - 1.0).abs() < UNIT_TOLERANCE
    }

    /// The conjugate `(-x, -y, -z, w)`.
    ///
    /// For a unit quaternion the conjugate is also the inverse.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// The multiplicative inverse, `conjugate / length_squared`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroLength`] if the quaternion has zero length.
    ///
    /// # Example
    ///
    /// ```
    /// use rot_math::Quat;
    ///
    /// let q = Quat::new(1.0, 2.0, 3.0, 4.0);
    /// let inv = q.inverse()?;
    /// let id = q * inv;
    /// assert!((id.w - 1.0).abs() < 1e-10);
    /// assert!(id.x.abs() < 1e-10);
    /// # Ok::<(), rot_math::MathError>(())
    /// ```
    pub fn inverse(&self) -> Result<Self, MathError> {
        let len_sq = self.length_squared();
        if len_sq <= f64::EPSILON {
            return Err(MathError::ZeroLength);
        }
        Ok(self.conjugate() / len_sq)
    }

    /// Returns this quaternion scaled to unit length.
    ///
    /// A zero-length input yields the identity quaternion; use
    /// [`Quat::try_normalize`] to surface that case as an error instead.
    #[must_use]
    pub fn normalize(&self) -> Self {
        self.try_normalize().unwrap_or_else(|_| Self::identity())
    }

    /// Returns this quaternion scaled to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::ZeroLength`] if the quaternion has zero length.
    pub fn try_normalize(&self) -> Result<Self, MathError> {
        let len = self.length();
        if len <= f64::EPSILON {
            return Err(MathError::ZeroLength);
        }
        Ok(*self / len)
    }

    /// The principal rotation angle in radians, in `[0, 2π]`.
    ///
    /// Requires a unit quaternion. Near the identity (`|w|` close to 1) the
    /// naive `2·acos(w)` loses precision, so this switches to an `asin` form
    /// on the vector-part magnitude there.
    #[must_use]
    pub fn angle(&self) -> f64 {
        if self.w.abs() > NEAR_UNIT_W {
            let half = self.vector_part().norm().min(1.0).asin();
            if self.w >= 0.0 {
                2.0 * half
            } else {
                2.0 * (std::f64::consts::PI - half)
            }
        } else {
            2.0 * self.w.clamp(-1.0, 1.0).acos()
        }
    }

    /// The angle in radians between this rotation and `other`.
    ///
    /// Both quaternions must be unit length.
    #[must_use]
    pub fn angle_to(&self, other: &Self) -> f64 {
        2.0 * self.dot(other).clamp(-1.0, 1.0).acos()
    }

    /// Rotates a vector by this quaternion.
    ///
    /// Uses the closed form `v + 2w(u×v) + 2(u×(u×v))` with `u = (x, y, z)`,
    /// which avoids the two full quaternion products of the sandwich
    /// `q · (v, 0) · q⁻¹` while producing the same result for unit `q`.
    #[must_use]
    pub fn rotate_vector(&self, v: &Vector3<f64>) -> Vector3<f64> {
        let u = self.vector_part();
        let uv = u.cross(v);
        let uuv = u.cross(&uv);
        v + (uv * self.w + uuv) * 2.0
    }

    /// Rotates the xyz part of a homogeneous vector, passing `w` through.
    #[must_use]
    pub fn rotate_vector4(&self, v: &Vector4<f64>) -> Vector4<f64> {
        let rotated = self.rotate_vector(&v.xyz());
        Vector4::new(rotated.x, rotated.y, rotated.z, v.w)
    }

    /// Composes an axis-angle rotation onto this one.
    ///
    /// Builds a quaternion for `angle_degrees` about `axis` and applies it
    /// after `self`, so the result is `from_axis_angle(axis, angle) * self`.
    #[must_use]
    pub fn rotate_about(&self, axis: &Vector3<f64>, angle_degrees: f64) -> Self {
        Self::from_axis_angle(axis, angle_degrees) * *self
    }
}

impl Index<usize> for Quat {
    type Output = f64;

    /// Accesses a component by index (0 = x, 1 = y, 2 = z, 3 = w).
    ///
    /// # Panics
    ///
    /// Panics if `index > 3`. Use [`Quat::get`] for a fallible lookup.
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("quaternion component index out of range: {index}"),
        }
    }
}

impl Add for Quat {
    type Output = Self;

    fn add(self, q: Self) -> Self {
        Self::new(self.x + q.x, self.y + q.y, self.z + q.z, self.w + q.w)
    }
}

impl Sub for Quat {
    type Output = Self;

    fn sub(self, q: Self) -> Self {
        Self::new(self.x - q.x, self.y - q.y, self.z - q.z, self.w - q.w)
    }
}

impl Neg for Quat {
    type Output = Self;

    /// Negates all four components. The result represents the same rotation.
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul for Quat {
    type Output = Self;

    /// Hamilton product. Non-commutative: `q * p` is the rotation that
    /// applies `p` first, then `q`.
    fn mul(self, q: Self) -> Self {
        let p = self;
        Self::new(
            p.w * q.x + p.x * q.w + p.y * q.z - p.z * q.y,
            p.w * q.y + p.y * q.w + p.z * q.x - p.x * q.z,
            p.w * q.z + p.z * q.w + p.x * q.y - p.y * q.x,
            p.w * q.w - p.x * q.x - p.y * q.y - p.z * q.z,
        )
    }
}

impl Mul<f64> for Quat {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl Mul<Quat> for f64 {
    type Output = Quat;

    fn mul(self, q: Quat) -> Quat {
        q * self
    }
}

impl Div<f64> for Quat {
    type Output = Self;

    fn div(self, s: f64) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s, self.w / s)
    }
}

impl AddAssign for Quat {
    fn add_assign(&mut self, q: Self) {
        *self = *self + q;
    }
}

impl SubAssign for Quat {
    fn sub_assign(&mut self, q: Self) {
        *self = *self - q;
    }
}

impl MulAssign for Quat {
    fn mul_assign(&mut self, q: Self) {
        *self = *self * q;
    }
}

impl MulAssign<f64> for Quat {
    fn mul_assign(&mut self, s: f64) {
        *self = *self * s;
    }
}

impl DivAssign<f64> for Quat {
    fn div_assign(&mut self, s: f64) {
        *self = *self / s;
    }
}
