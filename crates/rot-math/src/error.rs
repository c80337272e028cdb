//! Error types for rotation math operations.

/// Errors that can occur during quaternion and decomposition operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MathError {
    /// A zero-length quaternion was passed to an operation that requires a
    /// nonzero length (inversion, normalization).
    #[error("quaternion has zero length")]
    ZeroLength,

    /// A transform matrix has a zero scale component, so its rotation cannot
    /// be separated from its scale.
    #[error("transform has zero scale along axis {axis}")]
    ZeroScale {
        /// The basis axis (0 = x, 1 = y, 2 = z) whose scale vanished.
        axis: usize,
    },
}
