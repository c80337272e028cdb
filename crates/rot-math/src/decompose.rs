//! Composition and decomposition of affine 4x4 transforms.
//!
//! A transform built as `translation · rotation · scale` can be split back
//! into those three parts: translation from the last column, scale as the
//! norms of the three basis columns of the rotation×scale block, and Euler
//! angles read off the normalized rotation block. [`decompose`] and
//! [`compose`] are inverses of each other for nonzero scales, and the Euler
//! convention matches [`Quat::from_euler`] so the recovered angles rebuild
//! the same rotation through either path.

use nalgebra::{Matrix3, Matrix4, Vector3};

use crate::{MathError, Quat};

/// The translation / rotation / scale parts of an affine transform.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decomposition {
    /// Translation component.
    pub translation: Vector3<f64>,
    /// Rotation as Euler angles in degrees: pitch (X), yaw (Y), roll (Z),
    /// applied in that order. Yaw is reported in `[-90°, 90°]`.
    pub rotation: Vector3<f64>,
    /// Scale along each local basis axis. Always positive.
    pub scale: Vector3<f64>,
}

impl Decomposition {
    /// The rotation part as a quaternion.
    #[must_use]
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

/// Builds the transform `T(translation) · R(rotation) · S(scale)`.
///
/// `rotation` is Euler angles in degrees, interpreted exactly as
/// [`Quat::from_euler`] does. This is the inverse of [`decompose`] for
/// nonzero scales.
#[must_use]
pub fn compose(
    translation: &Vector3<f64>,
    rotation: &Vector3<f64>,
    scale: &Vector3<f64>,
) -> Matrix4<f64> {
    Matrix4::new_translation(translation)
        * Quat::from_euler(rotation.x, rotation.y, rotation.z).to_matrix4()
        * Matrix4::new_nonuniform_scaling(scale)
}

/// Splits an affine transform into translation, rotation, and scale.
///
/// The top-left 3x3 block must be a rotation times a positive scale;
/// reflections and shear are not recovered.
///
/// # Errors
///
/// Returns [`MathError::ZeroScale`] if any basis column of the 3x3 block has
/// zero length, since the rotation cannot be normalized out of it. Callers
/// get the error instead of a silently NaN-filled result.
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use rot_math::{compose, decompose};
///
/// let m = compose(
///     &Vector3::new(1.0, 2.0, 3.0),
///     &Vector3::new(0.0, 90.0, 0.0),
///     &Vector3::new(2.0, 2.0, 2.0),
/// );
/// let parts = decompose(&m)?;
/// assert!((parts.translation.x - 1.0).abs() < 1e-10);
/// assert!((parts.rotation.y - 90.0).abs() < 1e-6);
/// assert!((parts.scale.z - 2.0).abs() < 1e-10);
/// # Ok::<(), rot_math::MathError>(())
/// ```
pub fn decompose(m: &Matrix4<f64>) -> Result<Decomposition, MathError> {
    let translation = Vector3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)]);

    // Basis columns of the rotation×scale block carry the scale as their
    // lengths.
    let mut basis = [Vector3::zeros(); 3];
    let mut scale = Vector3::zeros();
    for (axis, column) in basis.iter_mut().enumerate() {
        *column = Vector3::new(m[(0, axis)], m[(1, axis)], m[(2, axis)]);
        let len = column.norm();
        if len <= f64::EPSILON {
            return Err(MathError::ZeroScale { axis });
        }
        scale[axis] = len;
        *column /= len;
    }

    let r = Matrix3::from_columns(&basis);

    // R = Rz(roll) · Ry(yaw) · Rx(pitch), so the bottom row isolates yaw and
    // pitch and the first column isolates roll.
    let pitch = r[(2, 1)].atan2(r[(2, 2)]);
    let yaw = (-r[(2, 0)]).atan2(r[(2, 1)].hypot(r[(2, 2)]));
    let roll = r[(1, 0)].atan2(r[(0, 0)]);

    Ok(Decomposition {
        translation,
        rotation: Vector3::new(pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees()),
        scale,
    })
}
