// --- File: grid.rs ---
use crate::constants::{BIG_BANG_OUTCOMES, THANOS_OUTCOMES};
use crate::utils::wrap_coord;
use rand::Rng;

/// Fixed-size board of cells, stored row-major.
///
/// Coordinates wrap on both axes, so any `isize` pair addresses a cell. The
/// generation step relies on this for toroidal lookups and masks edges itself
/// when the board is bounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero. Board sizes are validated by the
    /// config layer before a grid is ever built.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: isize, y: isize) -> usize {
        wrap_coord(x, self.width) + wrap_coord(y, self.height) * self.width
    }

    #[inline]
    pub fn get(&self, x: isize, y: isize) -> bool {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: isize, y: isize, alive: bool) {
        let index = self.index(x, y);
        self.cells[index] = alive;
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    // --- Mutations ---

    /// Sparks life in dead cells: each one independently comes alive with
    /// probability 1/11. Live cells are left alone.
    pub fn big_bang<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut().filter(|cell| !**cell) {
            *cell = rng.gen_range(0..BIG_BANG_OUTCOMES) == 0;
        }
    }

    pub fn invert(&mut self) {
        for cell in &mut self.cells {
            *cell = !*cell;
        }
    }

    /// Kills each live cell with probability 1/2. Dead cells stay dead.
    pub fn thanos<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut().filter(|cell| **cell) {
            *cell = rng.gen_range(0..THANOS_OUTCOMES) == 0;
        }
    }
}
