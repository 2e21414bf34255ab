use crate::prelude::MoveDir1D;

/// Utility function for calculating bounded and possibly wrapped offsets.
///
/// Returns [None] when `modulus` is zero, or when moving without wrapping would leave the
/// range `0..modulus`.
pub fn idx_offset(
    index: usize,
    offset: usize,
    dir: &MoveDir1D,
    modulus: usize,
    wrap: bool,
) -> Option<usize> {
    if modulus == 0 {
        return None;
    }

    match (dir, wrap) {
        (MoveDir1D::Next, true) => {
            let offset = offset % modulus;
            let new = (index + offset) % modulus;

            Some(new)
        },
        (MoveDir1D::Previous, true) => {
            let offset = offset % modulus;
            let new = (modulus + index - offset) % modulus;

            Some(new)
        },
        (MoveDir1D::Next, false) => {
            let new = index.saturating_add(offset);

            if new >= modulus {
                None
            } else {
                Some(new)
            }
        },
        (MoveDir1D::Previous, false) => index.checked_sub(offset),
    }
}

/// Index of the item at the far end of a list when moving in `dir`.
#[inline]
pub(crate) fn idx_edge(dir: &MoveDir1D, len: usize) -> usize {
    match dir {
        MoveDir1D::Next => len.saturating_sub(1),
        MoveDir1D::Previous => 0,
    }
}
