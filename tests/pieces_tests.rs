//! Pieces tests - shape catalog, collision and rotation

use term_tetris::core::pieces::{occupied, rotate_cw, shape, shapes};
use term_tetris::core::{Board, Piece};
use term_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn cells(piece: &Piece) -> Vec<(i32, i32)> {
    piece.cells().collect()
}

// ============== Catalog Tests ==============

#[test]
fn test_catalog_order_and_size() {
    assert_eq!(shapes().len(), 7);
    for kind in PieceKind::ALL {
        assert_eq!(shape(kind), &shapes()[kind.index()]);
    }
}

#[test]
fn test_catalog_cells() {
    let expect: [(PieceKind, [(usize, usize); 4]); 7] = [
        (PieceKind::I, [(0, 2), (1, 2), (2, 2), (3, 2)]),
        (PieceKind::O, [(1, 2), (2, 2), (1, 3), (2, 3)]),
        (PieceKind::T, [(1, 2), (2, 2), (3, 2), (2, 3)]),
        (PieceKind::L, [(0, 2), (1, 2), (2, 2), (0, 3)]),
        (PieceKind::J, [(0, 2), (1, 2), (2, 2), (2, 3)]),
        (PieceKind::S, [(1, 2), (2, 2), (0, 3), (1, 3)]),
        (PieceKind::Z, [(0, 2), (1, 2), (1, 3), (2, 3)]),
    ];
    for (kind, want) in expect {
        let got: Vec<_> = occupied(shape(kind)).collect();
        assert_eq!(got, want.to_vec(), "{:?}", kind);
    }
}

// ============== Collision Tests ==============

#[test]
fn test_spawn_does_not_collide_on_empty_board() {
    let board = Board::standard();
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, BOARD_WIDTH);
        assert_eq!((piece.x, piece.y), (3, 0));
        assert!(!piece.collides(&board), "{:?}", kind);
    }
}

#[test]
fn test_collides_with_walls() {
    let board = Board::standard();
    let i = Piece::spawn(PieceKind::I, BOARD_WIDTH);
    // I spans mask columns 0-3.
    assert!(!Piece { x: 0, ..i }.collides(&board));
    assert!(Piece { x: -1, ..i }.collides(&board));
    assert!(!Piece { x: 6, ..i }.collides(&board));
    assert!(Piece { x: 7, ..i }.collides(&board));
}

#[test]
fn test_collides_with_floor() {
    let board = Board::standard();
    let o = Piece::spawn(PieceKind::O, BOARD_WIDTH);
    // O occupies mask rows 2-3, so y = 16 rests on the floor.
    assert!(!o.moved(0, BOARD_HEIGHT as i32 - 4).collides(&board));
    assert!(o.moved(0, BOARD_HEIGHT as i32 - 3).collides(&board));
}

#[test]
fn test_collides_with_filled_cell() {
    let mut board = Board::standard();
    let t = Piece::spawn(PieceKind::T, BOARD_WIDTH);
    board.set(5, 3, true);
    assert!(t.collides(&board));
    board.set(5, 3, false);
    board.set(5, 4, true);
    assert!(!t.collides(&board));
    assert!(t.moved(0, 1).collides(&board));
}

#[test]
fn test_collision_matches_cellwise_definition() {
    let mut board = Board::standard();
    for x in 0..BOARD_WIDTH {
        if x % 3 == 0 {
            board.set(x, 12, true);
        }
    }
    for kind in PieceKind::ALL {
        for turns in 0..4 {
            let mut piece = Piece::spawn(kind, BOARD_WIDTH);
            for _ in 0..turns {
                piece = piece.rotated_cw();
            }
            for y in -5..BOARD_HEIGHT as i32 {
                for x in -5..BOARD_WIDTH as i32 {
                    let p = Piece { x, y, ..piece };
                    let expected = p.cells().any(|(cx, cy)| {
                        cx < 0
                            || cx >= BOARD_WIDTH as i32
                            || cy >= BOARD_HEIGHT as i32
                            || (cy >= 0 && board.is_occupied(cx as usize, cy as usize))
                    });
                    assert_eq!(p.collides(&board), expected, "{:?} at ({}, {})", kind, x, y);
                }
            }
        }
    }
}

// ============== Rotation Tests ==============

#[test]
fn test_rotation_keeps_position() {
    let t = Piece::spawn(PieceKind::T, BOARD_WIDTH);
    let r = t.rotated_cw();
    assert_eq!((r.x, r.y), (t.x, t.y));
    assert_eq!(r.kind, t.kind);
    assert_ne!(r.mask, t.mask);
}

#[test]
fn test_rotation_formula() {
    for m in shapes() {
        let r = rotate_cw(m);
        for row in 0..5 {
            for col in 0..5 {
                assert_eq!(r[row][col], m[4 - col][row]);
            }
        }
    }
}

#[test]
fn test_four_rotations_identity() {
    for kind in PieceKind::ALL {
        let p = Piece::spawn(kind, BOARD_WIDTH);
        let back = p.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(back, p);
    }
}

#[test]
fn test_t_rotation_cells() {
    let t = Piece::spawn(PieceKind::T, BOARD_WIDTH).rotated_cw();
    // Stem points left after a clockwise turn of the downward-pointing T.
    assert_eq!(cells(&t), vec![(5, 1), (4, 2), (5, 2), (5, 3)]);
}
