use super::*;
use crate::error::EngineError;

#[test]
fn test_mark_rotation() {
    assert_eq!(Mark::PlayerA.next(2), Mark::PlayerB);
    assert_eq!(Mark::PlayerB.next(2), Mark::PlayerA);
    assert_eq!(Mark::PlayerB.next(3), Mark::PlayerC);
    assert_eq!(Mark::PlayerC.next(3), Mark::PlayerA);
    assert_eq!(Mark::Empty.next(2), Mark::Empty);
}

#[test]
fn test_mark_opponents() {
    assert_eq!(Mark::PlayerA.opponents(2), vec![Mark::PlayerB]);
    assert_eq!(Mark::PlayerB.opponents(3), vec![Mark::PlayerC, Mark::PlayerA]);
    assert_eq!(Mark::PlayerC.opponents(3), vec![Mark::PlayerA, Mark::PlayerB]);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(4, 4);
    assert_eq!(pos.to_index(8), 36);
    assert_eq!(Pos::from_index(36, 8), pos);
    assert_eq!(Pos::new(14, 14).to_index(15), 224);
}

#[test]
fn test_in_bounds() {
    assert!(in_bounds(0, 0, 5));
    assert!(in_bounds(4, 4, 5));
    assert!(!in_bounds(-1, 0, 5));
    assert!(!in_bounds(0, -1, 5));
    assert!(!in_bounds(5, 0, 5));
    assert!(!in_bounds(0, 5, 5));
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 2);
    assert_eq!(pos.offset(1, -1, 2, 5), Some(Pos::new(2, 0)));
    assert_eq!(pos.offset(1, -1, 3, 5), None);
    assert_eq!(pos.offset(-1, 0, 1, 5), None);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_board_too_small() {
    assert_eq!(
        Board::new(4).unwrap_err(),
        EngineError::InvalidBoardSize { size: 4 }
    );
    assert!(Board::new(5).is_ok());
}

#[test]
fn test_from_cells_length_checked() {
    let err = Board::from_cells(5, vec![Mark::Empty; 24]).unwrap_err();
    assert_eq!(err, EngineError::CellCountMismatch { cells: 24 });
}

#[test]
fn test_apply_is_pure() {
    let board = Board::new(8).unwrap();
    let mv = Move::new(Pos::new(3, 5), Mark::PlayerA, 0);
    let next = board.apply(&mv).unwrap();

    assert!(board.is_empty());
    assert_eq!(next.get(Pos::new(3, 5)), Mark::PlayerA);
    assert_eq!(next.mark_count(), 1);
    assert_eq!(next.empty_count(), 63);
}

#[test]
fn test_apply_out_of_bounds() {
    let board = Board::new(8).unwrap();
    let mv = Move::new(Pos::new(8, 0), Mark::PlayerA, 0);
    assert_eq!(
        board.apply(&mv).unwrap_err(),
        EngineError::OutOfBounds {
            row: 8,
            col: 0,
            size: 8
        }
    );
}

#[test]
fn test_apply_occupied_and_empty_mark() {
    let board = Board::new(5)
        .unwrap()
        .apply(&Move::new(Pos::new(2, 2), Mark::PlayerB, 0))
        .unwrap();
    assert_eq!(
        board
            .apply(&Move::new(Pos::new(2, 2), Mark::PlayerA, 1))
            .unwrap_err(),
        EngineError::CellOccupied { row: 2, col: 2 }
    );
    assert_eq!(
        board
            .apply(&Move::new(Pos::new(0, 0), Mark::Empty, 1))
            .unwrap_err(),
        EngineError::InvalidMark
    );
}

#[test]
fn test_place_and_clear_track_count() {
    let mut board = Board::new(5).unwrap();
    let pos = Pos::new(1, 1);
    board.place(pos, Mark::PlayerA);
    board.place(pos, Mark::PlayerB);
    assert_eq!(board.mark_count(), 1);
    board.clear(pos);
    assert!(board.is_empty());
}

#[test]
fn test_from_rows_and_display() {
    let rows = ["X....", ".O...", "..Y..", ".....", "....."];
    let board = Board::from_rows(&rows).unwrap();
    assert_eq!(board.get(Pos::new(2, 2)), Mark::PlayerC);
    assert_eq!(board.mark_count(), 3);
    assert_eq!(board.to_string(), rows.join("\n") + "\n");
}

#[test]
fn test_full_board() {
    let board = Board::from_cells(5, vec![Mark::PlayerA; 25]).unwrap();
    assert!(board.is_full());
    assert_eq!(board.empty_positions().count(), 0);
}

#[test]
fn test_center() {
    assert_eq!(Board::new(8).unwrap().center(), Pos::new(4, 4));
    assert_eq!(Board::new(15).unwrap().center(), Pos::new(7, 7));
}

#[test]
fn test_wire_format() {
    let mut board = Board::new(5).unwrap();
    board.place(Pos::new(0, 1), Mark::PlayerA);
    board.place(Pos::new(0, 2), Mark::PlayerB);
    let state = BoardState::from(&board);
    let json = state.to_json();

    assert!(json.starts_with(r#"["","X","O","","""#));
    let parsed = BoardState::from_json(&json).unwrap();
    assert_eq!(parsed.to_board().unwrap(), board);
}

#[test]
fn test_wire_rejects_non_square() {
    let state = BoardState::from_json(r#"["","","X"]"#).unwrap();
    assert_eq!(
        state.to_board().unwrap_err(),
        EngineError::CellCountMismatch { cells: 3 }
    );
}

#[test]
fn test_wire_rejects_small_board() {
    let state = BoardState {
        cells: vec![Mark::Empty; 16],
    };
    assert_eq!(
        Board::try_from(&state).unwrap_err(),
        EngineError::InvalidBoardSize { size: 4 }
    );
}

#[test]
fn test_wire_unknown_symbol() {
    assert!(BoardState::from_json(r#"["Z"]"#).is_err());
}

#[test]
fn test_move_serde_keys() {
    let mv = Move::new(Pos::new(4, 4), Mark::PlayerA, 7);
    let json = serde_json::to_string(&mv).unwrap();
    assert_eq!(json, r#"{"row":4,"col":4,"mark":"X","sequenceIndex":7}"#);
}

#[test]
fn test_mark_from_str() {
    assert_eq!("X".parse::<Mark>(), Ok(Mark::PlayerA));
    assert_eq!(" Y ".parse::<Mark>(), Ok(Mark::PlayerC));
    assert_eq!(
        "".parse::<Mark>(),
        Err(EngineError::InvalidSymbol(String::new()))
    );
    assert_eq!(
        "Z".parse::<Mark>(),
        Err(EngineError::InvalidSymbol("Z".to_string()))
    );
}
