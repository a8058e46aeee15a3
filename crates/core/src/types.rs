use serde::{Deserialize, Serialize};

/// Cell coordinate in the public response: `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn from_row_col(row: usize, col: usize) -> Self {
        Self { x: col, y: row }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Top, Direction::Right, Direction::Bottom, Direction::Left];

    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    pub const CLOSED: Walls = Walls { top: true, right: true, bottom: true, left: true };

    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
        }
    }

    pub fn open(&mut self, direction: Direction) {
        match direction {
            Direction::Top => self.top = false,
            Direction::Right => self.right = false,
            Direction::Bottom => self.bottom = false,
            Direction::Left => self.left = false,
        }
    }

    pub fn standing(&self) -> usize {
        Direction::ALL.iter().filter(|&&direction| self.has(direction)).count()
    }

    /// One bit per standing wall, top = bit 0 through left = bit 3.
    pub fn bits(&self) -> u8 {
        u8::from(self.top)
            | (u8::from(self.right) << 1)
            | (u8::from(self.bottom) << 2)
            | (u8::from(self.left) << 3)
    }
}

/// An orthogonal neighbor of some cell, tagged with the direction leading to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_pairs_top_with_bottom_and_left_with_right() {
        assert_eq!(Direction::Top.opposite(), Direction::Bottom);
        assert_eq!(Direction::Bottom.opposite(), Direction::Top);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn opening_walls_updates_count_and_bits() {
        let mut walls = Walls::CLOSED;
        assert_eq!(walls.standing(), 4);
        assert_eq!(walls.bits(), 0b1111);

        walls.open(Direction::Right);
        walls.open(Direction::Left);
        assert_eq!(walls.standing(), 2);
        assert!(walls.has(Direction::Top));
        assert!(!walls.has(Direction::Right));
        assert_eq!(walls.bits(), 0b0101);
    }

    #[test]
    fn point_maps_row_to_y_and_column_to_x() {
        assert_eq!(Point::from_row_col(3, 7), Point { x: 7, y: 3 });
    }
}
