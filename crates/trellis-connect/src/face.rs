/// Axis of a face normal. Y is the vertical axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn is_horizontal(self) -> bool {
        !matches!(self, Axis::Y)
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Y)
    }
}

/// The six axis-aligned directions. Compass mapping: PosY up, NegY down,
/// PosX east, NegX west, PosZ south, NegZ north.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosY = 0,
    NegY = 1,
    PosX = 2,
    NegX = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosY,
        Face::NegY,
        Face::PosX,
        Face::NegX,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `Face` value.
    /// Falls back to `PosY` for out-of-range indices.
    #[inline]
    pub fn from_index(i: usize) -> Face {
        match i {
            0 => Face::PosY,
            1 => Face::NegY,
            2 => Face::PosX,
            3 => Face::NegX,
            4 => Face::PosZ,
            5 => Face::NegZ,
            _ => Face::PosY,
        }
    }

    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::PosY => Face::NegY,
            Face::NegY => Face::PosY,
            Face::PosX => Face::NegX,
            Face::NegX => Face::PosX,
            Face::PosZ => Face::NegZ,
            Face::NegZ => Face::PosZ,
        }
    }

    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Face::PosY | Face::NegY => Axis::Y,
            Face::PosX | Face::NegX => Axis::X,
            Face::PosZ | Face::NegZ => Axis::Z,
        }
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::PosY => (0, 1, 0),
            Face::NegY => (0, -1, 0),
            Face::PosX => (1, 0, 0),
            Face::NegX => (-1, 0, 0),
            Face::PosZ => (0, 0, 1),
            Face::NegZ => (0, 0, -1),
        }
    }

    /// Rotates this face 90 degrees about `axis`. A face lying on the
    /// rotation axis maps to itself.
    #[inline]
    pub fn rotated_around(self, axis: Axis) -> Face {
        match axis {
            Axis::X => match self {
                Face::NegZ => Face::NegY,
                Face::NegY => Face::PosZ,
                Face::PosZ => Face::PosY,
                Face::PosY => Face::NegZ,
                f => f,
            },
            Axis::Y => match self {
                Face::NegZ => Face::PosX,
                Face::PosX => Face::PosZ,
                Face::PosZ => Face::NegX,
                Face::NegX => Face::NegZ,
                f => f,
            },
            Axis::Z => match self {
                Face::PosY => Face::PosX,
                Face::PosX => Face::NegY,
                Face::NegY => Face::NegX,
                Face::NegX => Face::PosY,
                f => f,
            },
        }
    }
}
