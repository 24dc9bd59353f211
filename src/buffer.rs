// --- File: buffer.rs ---
use crate::grid::Grid;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Front {
    A,
    B,
}

/// Two grids of equal size that alternate between being the front
/// (authoritative) and back (scratch) buffer. Swapping flips the role only.
#[derive(Debug)]
pub struct DoubleBuffer {
    a: Grid,
    b: Grid,
    front: Front,
}

impl DoubleBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            a: Grid::new(width, height),
            b: Grid::new(width, height),
            front: Front::A,
        }
    }

    #[inline]
    pub fn front(&self) -> &Grid {
        match self.front {
            Front::A => &self.a,
            Front::B => &self.b,
        }
    }

    #[cfg(test)]
    pub fn back(&self) -> &Grid {
        match self.front {
            Front::A => &self.b,
            Front::B => &self.a,
        }
    }

    #[inline]
    pub fn front_mut(&mut self) -> &mut Grid {
        match self.front {
            Front::A => &mut self.a,
            Front::B => &mut self.b,
        }
    }

    #[inline]
    pub fn back_mut(&mut self) -> &mut Grid {
        match self.front {
            Front::A => &mut self.b,
            Front::B => &mut self.a,
        }
    }

    /// Borrows front for reading and back for writing at the same time.
    #[inline]
    pub fn split(&mut self) -> (&Grid, &mut Grid) {
        match self.front {
            Front::A => (&self.a, &mut self.b),
            Front::B => (&self.b, &mut self.a),
        }
    }

    #[inline]
    pub fn swap(&mut self) {
        self.front = match self.front {
            Front::A => Front::B,
            Front::B => Front::A,
        };
    }
}
