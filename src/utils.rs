// --- Helper Functions ---

/// Maps any signed coordinate onto `0..len`, wrapping negatives and overflow.
#[inline]
pub fn wrap_coord(coord: isize, len: usize) -> usize {
    coord.rem_euclid(len as isize) as usize
}
