//! Hex grid geometry in cube coordinates.
//!
//! Every hex on the board is addressed by three integer axes `(q, r, s)` with
//! the constraint `q + r + s == 0`. The same type doubles as a direction
//! vector: the six neighbors of a hex are reached by adding one of the unit
//! vectors enumerated by [`HexDirection`].
//!
//! # Example
//!
//! ```
//! use wsim_core::hex::{CubeCoordinate, HexDirection};
//!
//! let start = CubeCoordinate::new(0, 1, -1).unwrap();
//! let next = start + HexDirection::NorthEast.vector();
//!
//! assert_eq!(next, CubeCoordinate::new(1, 0, -1).unwrap());
//! assert_eq!(start.distance(next), 1);
//! ```

use std::fmt;
use std::ops::{Add, Mul};

use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WsimError};

/// A validated cube coordinate.
///
/// Backed by an [`IVec3`] laid out as `(q, r, s)`. The zero-sum invariant is
/// checked on construction and deserialization. Addition and scaling of valid
/// coordinates keep it as long as no component leaves the `i32` range; the
/// `checked_*` variants report that case instead of overflowing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CubeRepr", into = "CubeRepr")]
pub struct CubeCoordinate(IVec3);

impl CubeCoordinate {
    /// The board origin `(0, 0, 0)`.
    pub const ORIGIN: Self = Self(IVec3::ZERO);

    /// Creates a coordinate, rejecting triples that do not sum to zero.
    ///
    /// # Errors
    ///
    /// Returns [`WsimError::InvalidCoordinate`] when `q + r + s != 0`.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self> {
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            return Err(WsimError::InvalidCoordinate { q, r, s });
        }
        Ok(Self(IVec3::new(q, r, s)))
    }

    /// Creates a coordinate from the two independent axes, deriving `s`.
    ///
    /// # Panics
    ///
    /// Overflows when `-q - r` does not fit in an `i32`.
    #[must_use]
    pub const fn from_axial(q: i32, r: i32) -> Self {
        Self(IVec3::new(q, r, -q - r))
    }

    /// Returns the `q` component.
    #[must_use]
    pub const fn q(self) -> i32 {
        self.0.x
    }

    /// Returns the `r` component.
    #[must_use]
    pub const fn r(self) -> i32 {
        self.0.y
    }

    /// Returns the `s` component.
    #[must_use]
    pub const fn s(self) -> i32 {
        self.0.z
    }

    /// Multiplies every component by `k`.
    ///
    /// # Panics
    ///
    /// Overflows when a scaled component does not fit in an `i32`; use
    /// [`checked_scale`](Self::checked_scale) near the edges of the range.
    #[must_use]
    pub fn scale(self, k: i32) -> Self {
        Self(self.0 * k)
    }

    /// Multiplies every component by `k`, or `None` on overflow.
    #[must_use]
    pub fn checked_scale(self, k: i32) -> Option<Self> {
        Some(Self(IVec3::new(
            self.q().checked_mul(k)?,
            self.r().checked_mul(k)?,
            self.s().checked_mul(k)?,
        )))
    }

    /// Componentwise sum, or `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(Self(IVec3::new(
            self.q().checked_add(rhs.q())?,
            self.r().checked_add(rhs.r())?,
            self.s().checked_add(rhs.s())?,
        )))
    }

    /// Number of hex steps between two coordinates.
    ///
    /// Total over every pair of valid coordinates: with a zero-sum delta the
    /// distance equals the largest axis delta, which always fits in a `u32`.
    #[must_use]
    pub fn distance(self, other: Self) -> u32 {
        let dq = (i64::from(self.q()) - i64::from(other.q())).unsigned_abs();
        let dr = (i64::from(self.r()) - i64::from(other.r())).unsigned_abs();
        let ds = (i64::from(self.s()) - i64::from(other.s())).unsigned_abs();
        u32::try_from(dq.max(dr).max(ds)).unwrap_or(u32::MAX)
    }

    /// The adjacent hex in `direction`.
    #[must_use]
    pub fn neighbor(self, direction: HexDirection) -> Self {
        self + direction.vector()
    }
}

impl Default for CubeCoordinate {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// # Panics
///
/// Overflows when a summed component does not fit in an `i32`; use
/// [`CubeCoordinate::checked_add`] near the edges of the range.
impl Add for CubeCoordinate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<i32> for CubeCoordinate {
    type Output = Self;

    fn mul(self, k: i32) -> Self {
        self.scale(k)
    }
}

impl fmt::Display for CubeCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q(), self.r(), self.s())
    }
}

/// Wire form of a coordinate; validated on the way in.
#[derive(Serialize, Deserialize)]
struct CubeRepr {
    q: i32,
    r: i32,
    s: i32,
}

impl TryFrom<CubeRepr> for CubeCoordinate {
    type Error = WsimError;

    fn try_from(repr: CubeRepr) -> Result<Self> {
        Self::new(repr.q, repr.r, repr.s)
    }
}

impl From<CubeCoordinate> for CubeRepr {
    fn from(coord: CubeCoordinate) -> Self {
        Self {
            q: coord.q(),
            r: coord.r(),
            s: coord.s(),
        }
    }
}

/// The six unit directions of a pointy-top hex grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexDirection {
    /// `(1, -1, 0)`
    NorthEast,
    /// `(1, 0, -1)`
    East,
    /// `(0, 1, -1)`
    SouthEast,
    /// `(-1, 1, 0)`
    SouthWest,
    /// `(-1, 0, 1)`
    West,
    /// `(0, -1, 1)`
    NorthWest,
}

impl HexDirection {
    /// All directions, clockwise from north-east.
    pub const ALL: [Self; 6] = [
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// The unit cube vector for this direction.
    #[must_use]
    pub const fn vector(self) -> CubeCoordinate {
        match self {
            Self::NorthEast => CubeCoordinate::from_axial(1, -1),
            Self::East => CubeCoordinate::from_axial(1, 0),
            Self::SouthEast => CubeCoordinate::from_axial(0, 1),
            Self::SouthWest => CubeCoordinate::from_axial(-1, 1),
            Self::West => CubeCoordinate::from_axial(-1, 0),
            Self::NorthWest => CubeCoordinate::from_axial(0, -1),
        }
    }
}

impl From<HexDirection> for CubeCoordinate {
    fn from(direction: HexDirection) -> Self {
        direction.vector()
    }
}
