//! Block state property values.

use steel_utils::BlockPos;
use steel_utils::math::Vector3;

/// One of the six block faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// -Y
    Down,
    /// +Y
    Up,
    /// -Z
    North,
    /// +Z
    South,
    /// -X
    West,
    /// +X
    East,
}

impl Direction {
    /// All directions in vanilla's 3D data order.
    pub const VALUES: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The unit step of this direction.
    #[must_use]
    pub const fn offset(self) -> Vector3<i32> {
        match self {
            Direction::Down => Vector3::new(0, -1, 0),
            Direction::Up => Vector3::new(0, 1, 0),
            Direction::North => Vector3::new(0, 0, -1),
            Direction::South => Vector3::new(0, 0, 1),
            Direction::West => Vector3::new(-1, 0, 0),
            Direction::East => Vector3::new(1, 0, 0),
        }
    }

    /// The neighbour of `pos` on this side.
    #[must_use]
    pub const fn relative(self, pos: &BlockPos) -> BlockPos {
        let step = self.offset();
        pos.offset(step.x, step.y, step.z)
    }

    /// The opposite face.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// The face pointing along the axis with the largest magnitude of `v`.
    #[must_use]
    pub fn nearest(v: &Vector3<f64>) -> Direction {
        let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());
        if ax >= ay && ax >= az {
            if v.x < 0.0 { Direction::West } else { Direction::East }
        } else if ay >= az {
            if v.y < 0.0 { Direction::Down } else { Direction::Up }
        } else if v.z < 0.0 {
            Direction::North
        } else {
            Direction::South
        }
    }
}
