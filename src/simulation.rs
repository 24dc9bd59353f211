// --- File: simulation.rs ---
use crate::buffer::DoubleBuffer;
use crate::constants::{ROWS_PER_CHAR, SEED_FREQUENCY};
use crate::grid::Grid;
use rand::Rng;
use rand::rngs::StdRng;

pub type SimRng = StdRng;

// --- Generation Step ---

/// Counts the live neighbours of `(x, y)`.
///
/// On a bounded board, offsets that would cross an edge are skipped instead of
/// wrapping. All four edge flags are always computed.
#[inline]
pub(crate) fn neighbour_count(grid: &Grid, x: isize, y: isize, wrap: bool) -> u8 {
    let left = wrap | (x != 0);
    let up = wrap | (y != 0);
    let right = wrap | (x != grid.width() as isize - 1);
    let down = wrap | (y != grid.height() as isize - 1);

    let neighbours = [
        (left && up, -1, -1),
        (left, -1, 0),
        (left && down, -1, 1),
        (up, 0, -1),
        (down, 0, 1),
        (right && up, 1, -1),
        (right, 1, 0),
        (right && down, 1, 1),
    ];

    neighbours
        .iter()
        .filter(|&&(included, dx, dy)| included && grid.get(x + dx, y + dy))
        .count() as u8
}

/// Writes the next generation of `current` into `next` (B3/S23).
///
/// Every cell of `next` is overwritten; `current` is only read.
pub fn next_generation(current: &Grid, next: &mut Grid, wrap: bool) {
    assert!(
        current.width() == next.width() && current.height() == next.height(),
        "generation buffers differ in size: {}x{} vs {}x{}",
        current.width(),
        current.height(),
        next.width(),
        next.height()
    );

    for y in 0..current.height() as isize {
        for x in 0..current.width() as isize {
            let count = neighbour_count(current, x, y, wrap);
            let alive = matches!((current.get(x, y), count), (_, 3) | (true, 2));
            next.set(x, y, alive);
        }
    }
}

// --- Simulation ---

/// The running board: a double buffer seeded with random life.
#[derive(Debug)]
pub struct Simulation {
    buffer: DoubleBuffer,
    generation: u64,
}

impl Simulation {
    /// Builds a `width` x `height` board (height in automaton rows) and seeds
    /// roughly one cell in four alive.
    ///
    /// # Panics
    ///
    /// Panics if a dimension is zero or `height` is odd, since every terminal
    /// row renders two automaton rows.
    pub fn new<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        assert!(
            height % ROWS_PER_CHAR == 0,
            "board height must be even, got {}",
            height
        );
        let mut buffer = DoubleBuffer::new(width, height);

        let seed = buffer.back_mut();
        for y in 0..height as isize {
            for x in 0..width as isize {
                seed.set(x, y, rng.gen_range(0..=SEED_FREQUENCY) == 0);
            }
        }
        buffer.swap();

        log::debug!(
            "Seeded {}x{} board with {} live cells",
            width,
            height,
            buffer.front().population()
        );

        Self {
            buffer,
            generation: 0,
        }
    }

    #[inline]
    pub fn front(&self) -> &Grid {
        self.buffer.front()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advances exactly one generation.
    pub fn tick(&mut self, wrap: bool) {
        let (current, next) = self.buffer.split();
        next_generation(current, next, wrap);
        self.buffer.swap();
        self.generation += 1;
    }

    // --- Instant edits on the front buffer (no generation passes) ---

    pub fn big_bang<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.buffer.front_mut().big_bang(rng);
    }

    pub fn invert(&mut self) {
        self.buffer.front_mut().invert();
    }

    pub fn thanos<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.buffer.front_mut().thanos(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn grid_with(width: usize, height: usize, live: &[(isize, isize)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(x, y) in live {
            grid.set(x, y, true);
        }
        grid
    }

    fn simulation_with(width: usize, height: usize, live: &[(isize, isize)]) -> Simulation {
        let mut buffer = DoubleBuffer::new(width, height);
        *buffer.front_mut() = grid_with(width, height, live);
        Simulation {
            buffer,
            generation: 0,
        }
    }

    #[test]
    fn next_generation_leaves_source_untouched_and_is_deterministic() {
        let mut rng = SimRng::seed_from_u64(11);
        let mut source = Grid::new(16, 12);
        source.big_bang(&mut rng);
        source.big_bang(&mut rng);
        let snapshot = source.clone();

        for wrap in [true, false] {
            let mut first = Grid::new(16, 12);
            let mut second = Grid::new(16, 12);
            second.invert();
            next_generation(&source, &mut first, wrap);
            next_generation(&source, &mut second, wrap);
            assert_eq!(source, snapshot);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn blinker_oscillates_on_bounded_board() {
        let horizontal = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let vertical = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);

        let mut next = Grid::new(5, 5);
        next_generation(&horizontal, &mut next, false);
        assert_eq!(next, vertical);

        let mut after = Grid::new(5, 5);
        next_generation(&next, &mut after, false);
        assert_eq!(after, horizontal);
    }

    #[test]
    fn block_is_still_life() {
        let block = grid_with(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let mut next = Grid::new(4, 4);
        next_generation(&block, &mut next, true);
        assert_eq!(next, block);
    }

    #[test]
    fn bounded_corner_never_sees_the_far_edge() {
        let mut full = Grid::new(4, 4);
        full.invert();
        assert_eq!(neighbour_count(&full, 0, 0, false), 3);
        assert_eq!(neighbour_count(&full, 3, 3, false), 3);
        assert_eq!(neighbour_count(&full, 0, 1, false), 5);
        assert_eq!(neighbour_count(&full, 0, 0, true), 8);

        let opposite = grid_with(4, 4, &[(3, 3), (3, 0), (0, 3)]);
        assert_eq!(neighbour_count(&opposite, 0, 0, false), 0);
        assert_eq!(neighbour_count(&opposite, 0, 0, true), 3);
    }

    #[test]
    fn wrapping_corner_spawns_across_edges() {
        // Three cells around the corner, only adjacent through the wrap.
        let live = [(3, 3), (3, 0), (0, 3)];
        let corners = grid_with(4, 4, &live);

        let mut wrapped = Grid::new(4, 4);
        next_generation(&corners, &mut wrapped, true);
        assert!(wrapped.get(0, 0));

        let mut bounded = Grid::new(4, 4);
        next_generation(&corners, &mut bounded, false);
        assert!(!bounded.get(0, 0));
    }

    #[test]
    fn tiny_wrapping_board_is_accepted() {
        let mut full = Grid::new(2, 2);
        full.invert();
        // Each neighbour offset lands on one of the four cells, self included.
        assert_eq!(neighbour_count(&full, 0, 0, true), 8);
        let mut next = Grid::new(2, 2);
        next_generation(&full, &mut next, true);
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn new_simulation_seeds_about_a_quarter() {
        let mut rng = SimRng::seed_from_u64(5);
        let sim = Simulation::new(100, 100, &mut rng);
        let live = sim.front().population();
        assert!(live > 2000 && live < 3000, "live cells: {}", live);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    #[should_panic]
    fn odd_height_is_rejected() {
        let mut rng = SimRng::seed_from_u64(0);
        Simulation::new(4, 3, &mut rng);
    }

    #[test]
    fn tick_advances_front_by_one_generation() {
        let mut sim = simulation_with(5, 6, &[(1, 2), (2, 2), (3, 2)]);
        sim.tick(false);
        assert_eq!(sim.front(), &grid_with(5, 6, &[(2, 1), (2, 2), (2, 3)]));
        assert_eq!(sim.generation(), 1);
        sim.tick(false);
        assert_eq!(sim.front(), &grid_with(5, 6, &[(1, 2), (2, 2), (3, 2)]));
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn mutations_edit_front_in_place() {
        let mut rng = SimRng::seed_from_u64(9);
        let mut sim = simulation_with(4, 4, &[(0, 0)]);

        sim.invert();
        assert_eq!(sim.front().population(), 15);
        assert!(!sim.front().get(0, 0));

        sim.thanos(&mut rng);
        assert!(!sim.front().get(0, 0));
        assert!(sim.front().population() <= 15);

        let before = sim.front().clone();
        sim.big_bang(&mut rng);
        for y in 0..4 {
            for x in 0..4 {
                if before.get(x, y) {
                    assert!(sim.front().get(x, y));
                }
            }
        }
        assert_eq!(sim.generation(), 0);
    }
}
