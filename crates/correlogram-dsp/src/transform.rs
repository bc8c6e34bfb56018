// SPDX-License-Identifier: LGPL-3.0-or-later

//! Output nonlinearity applied to each correlation coefficient.

/// Nonlinearity applied to a coefficient before it is stored in the matrix.
///
/// The default, [`Transform::RectifiedQuartic`], zeroes weak and negative
/// correlation and sharply emphasises strong positive correlation, which is
/// what makes periodicity structure stand out in a correlogram plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    /// `r > 0 ? r⁴ : 0`. Maps any coefficient into `[0, 1]`.
    #[default]
    RectifiedQuartic,
    /// `max(r, 0)`. Keeps positive correlation linear.
    Rectified,
    /// The raw coefficient, unchanged.
    Raw,
}

impl Transform {
    /// Apply the nonlinearity to a single coefficient.
    #[inline]
    pub fn apply(self, r: f32) -> f32 {
        match self {
            Transform::RectifiedQuartic => {
                if r > 0.0 {
                    let sq = r * r;
                    sq * sq
                } else {
                    0.0
                }
            }
            Transform::Rectified => r.max(0.0),
            Transform::Raw => r,
        }
    }
}
