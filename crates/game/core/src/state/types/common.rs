use std::fmt;

use crate::config::GameConfig;

/// Discrete grid position expressed in cell coordinates.
///
/// `x` is the row and `y` the column, so moving up or down changes `x` and
/// moving left or right changes `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Returns true if both coordinates lie in `[0, MAP_SIZE)`.
    pub fn in_bounds(self) -> bool {
        let size = GameConfig::MAP_SIZE as i32;
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_the_whole_map_and_nothing_else() {
        let last = GameConfig::MAP_SIZE as i32 - 1;

        assert!(Position::ORIGIN.in_bounds());
        assert!(Position::new(last, last).in_bounds());
        assert!(!Position::new(-1, 0).in_bounds());
        assert!(!Position::new(0, -1).in_bounds());
        assert!(!Position::new(last + 1, 0).in_bounds());
        assert!(!Position::new(0, last + 1).in_bounds());
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() {
        let far = Position::new(i32::MAX, i32::MIN);
        assert_eq!(far.offset(1, -1), far);
        assert!(!far.offset(1, -1).in_bounds());
    }
}
