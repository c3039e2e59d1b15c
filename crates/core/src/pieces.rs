//! Pieces module - the shape catalog
//!
//! Every tetromino lives in the same fixed 5x5 mask regardless of its real
//! bounding box, so rotation is a single index remap with no per-shape tables.

use crate::types::{PieceKind, MASK_SIZE};

/// Occupancy mask of a piece, indexed `[row][col]`.
pub type Mask = [[bool; MASK_SIZE]; MASK_SIZE];

const fn mask(rows: [&[u8; MASK_SIZE]; MASK_SIZE]) -> Mask {
    let mut out = [[false; MASK_SIZE]; MASK_SIZE];
    let mut r = 0;
    while r < MASK_SIZE {
        let mut c = 0;
        while c < MASK_SIZE {
            out[r][c] = rows[r][c] == b'X';
            c += 1;
        }
        r += 1;
    }
    out
}

/// The catalog, in `PieceKind::ALL` order.
static SHAPES: [Mask; 7] = [
    // I
    mask([b".....", b".....", b"XXXX.", b".....", b"....."]),
    // O
    mask([b".....", b".....", b".XX..", b".XX..", b"....."]),
    // T
    mask([b".....", b".....", b".XXX.", b"..X..", b"....."]),
    // L
    mask([b".....", b".....", b"XXX..", b"X....", b"....."]),
    // J
    mask([b".....", b".....", b"XXX..", b"..X..", b"....."]),
    // S
    mask([b".....", b".....", b".XX..", b"XX...", b"....."]),
    // Z
    mask([b".....", b".....", b"XX...", b".XX..", b"....."]),
];

/// All seven catalog masks, in catalog order.
pub fn shapes() -> &'static [Mask; 7] {
    &SHAPES
}

/// Catalog mask for a single kind.
pub fn shape(kind: PieceKind) -> &'static Mask {
    &SHAPES[kind.index()]
}

/// Rotate a mask 90° clockwise inside its fixed frame.
///
/// `rotated[row][col] = original[4 - col][row]`
pub fn rotate_cw(original: &Mask) -> Mask {
    let mut rotated = [[false; MASK_SIZE]; MASK_SIZE];
    for (row, out_row) in rotated.iter_mut().enumerate() {
        for (col, cell) in out_row.iter_mut().enumerate() {
            *cell = original[MASK_SIZE - 1 - col][row];
        }
    }
    rotated
}

/// Iterate occupied `(col, row)` offsets of a mask.
pub fn occupied(mask: &Mask) -> impl Iterator<Item = (usize, usize)> + '_ {
    mask.iter().enumerate().flat_map(|(row, cells)| {
        cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(col, _)| (col, row))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_four_cells() {
        for (i, m) in shapes().iter().enumerate() {
            assert_eq!(occupied(m).count(), 4, "shape {} is not a tetromino", i);
        }
    }

    #[test]
    fn o_shape_cells() {
        let cells: Vec<_> = occupied(shape(PieceKind::O)).collect();
        assert_eq!(cells, vec![(1, 2), (2, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn rotate_i_becomes_vertical() {
        let rotated = rotate_cw(shape(PieceKind::I));
        let cells: Vec<_> = occupied(&rotated).collect();
        // Row 2 of the original becomes column 2 after a clockwise turn.
        assert_eq!(cells, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn four_rotations_is_identity() {
        for m in shapes() {
            let back = rotate_cw(&rotate_cw(&rotate_cw(&rotate_cw(m))));
            assert_eq!(&back, m);
        }
    }

    #[test]
    fn rotation_does_not_touch_catalog() {
        let before = *shape(PieceKind::T);
        let _ = rotate_cw(shape(PieceKind::T));
        assert_eq!(*shape(PieceKind::T), before);
    }
}
