//! # Axis Reorientation
//!
//! Models arrive in whatever frame their author used; catalog entries can
//! name the axis that should point up in the viewport. Reorientation is a
//! direct matrix assignment on the displayed object, never a re-derived
//! translation/rotation/scale.

use glam::{Mat4, Vec4};
use serde::{Deserialize, Serialize};

/// A requested re-basis of the model's local frame.
///
/// Serialized as the single letters `"X"`, `"Y"`, `"Z"` to match the
/// catalog wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Parses a catalog axis letter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use step_scene::Axis;
    ///
    /// assert_eq!(Axis::from_letter("Z"), Some(Axis::Z));
    /// assert_eq!(Axis::from_letter("w"), None);
    /// ```
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "X" => Some(Axis::X),
            "Y" => Some(Axis::Y),
            "Z" => Some(Axis::Z),
            _ => None,
        }
    }

    /// Returns the catalog letter for this axis.
    pub fn letter(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    /// Returns the fixed basis-permutation matrix for this axis.
    ///
    /// The matrix remaps the named model axis onto the viewport's vertical
    /// axis (+Y) by swapping basis vectors; no scaling or translation. The
    /// viewport is Y-up, so `Axis::Y` is the identity.
    pub fn matrix(self) -> Mat4 {
        match self {
            Axis::X => Mat4::from_cols(Vec4::Y, Vec4::X, Vec4::Z, Vec4::W),
            Axis::Y => Mat4::IDENTITY,
            Axis::Z => Mat4::from_cols(Vec4::X, Vec4::Z, Vec4::Y, Vec4::W),
        }
    }
}
