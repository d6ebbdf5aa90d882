//! Tests for the log-replay rules engine.

use strictly_rematch::{
    Move, MoveLog, PlayerRegistry, Position, RoundResult, Square, Symbol, current_turn,
    derive_winner, is_draw, reconstruct_board,
};

fn log_of(cells: &[(usize, usize)]) -> MoveLog {
    cells
        .iter()
        .enumerate()
        .map(|(i, (r, c))| {
            let symbol = if i % 2 == 0 { Symbol::X } else { Symbol::O };
            Move::new(Position::new(*r, *c), symbol)
        })
        .collect()
}

#[test]
fn test_empty_log() {
    let log = MoveLog::new();
    let board = reconstruct_board(&log);
    let result = derive_winner(&board, &PlayerRegistry::default());

    assert!(Position::ALL.iter().all(|p| board.is_empty(*p)));
    assert_eq!(current_turn(&log), Symbol::X);
    assert_eq!(result, RoundResult::NoResult);
    assert!(!is_draw(&log, &result));
}

#[test]
fn test_single_x_move() {
    let log = log_of(&[(0, 0)]);
    let board = reconstruct_board(&log);

    assert_eq!(board.get(Position::new(0, 0)), Square::Occupied(Symbol::X));
    assert_eq!(current_turn(&log), Symbol::O);
}

#[test]
fn test_row_win() {
    // X: (0,0) (0,1) (0,2); O: (1,0) (2,2)
    let log = log_of(&[(0, 0), (1, 0), (0, 1), (2, 2), (0, 2)]);
    let registry = PlayerRegistry::default();
    let result = derive_winner(&reconstruct_board(&log), &registry);

    assert_eq!(
        result,
        RoundResult::Win {
            symbol: Symbol::X,
            name: registry.name(Symbol::X).to_string(),
        }
    );
    assert!(!is_draw(&log, &result));
}

#[test]
fn test_column_win_for_o() {
    // X: (0,0) (0,2) (2,2); O: (0,1) (1,1) (2,1)
    let log = log_of(&[(0, 0), (0, 1), (0, 2), (1, 1), (2, 2), (2, 1)]);
    let result = derive_winner(&reconstruct_board(&log), &PlayerRegistry::new("Ada", "Grace"));
    assert_eq!(result.winner(), Some(Symbol::O));
    assert_eq!(result.to_string(), "Grace won!");
}

#[test]
fn test_full_board_draw() {
    // X O X
    // X O O
    // O X X
    let log = log_of(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    let result = derive_winner(&reconstruct_board(&log), &PlayerRegistry::default());

    assert_eq!(log.len(), 9);
    assert_eq!(result, RoundResult::NoResult);
    assert!(is_draw(&log, &result));
}

#[test]
fn test_win_on_last_cell_is_not_draw() {
    // X O X
    // O X O
    // O X X   <- X completes the main diagonal on the ninth move
    let log = log_of(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    let result = derive_winner(&reconstruct_board(&log), &PlayerRegistry::default());

    assert_eq!(result.winner(), Some(Symbol::X));
    assert!(!is_draw(&log, &result));
}

#[test]
fn test_replay_order_does_not_change_board() {
    let log = log_of(&[(1, 1), (0, 0), (2, 2), (0, 2)]);
    let mut reversed: Vec<_> = log.moves().to_vec();
    reversed.reverse();

    assert_eq!(
        reconstruct_board(&log),
        reconstruct_board(&MoveLog::from_moves(reversed))
    );
}

#[test]
fn test_move_log_json_rejects_off_board_positions() {
    let off_board = r#"[{"position":{"row":0,"col":4},"symbol":"X"}]"#;
    assert!(serde_json::from_str::<MoveLog>(off_board).is_err());

    let far_off = r#"[{"position":{"row":5,"col":0},"symbol":"X"}]"#;
    assert!(serde_json::from_str::<MoveLog>(far_off).is_err());

    let valid = r#"[{"position":{"row":1,"col":1},"symbol":"X"}]"#;
    let log: MoveLog = serde_json::from_str(valid).unwrap();
    assert_eq!(log.moves(), &[Move::new(Position::new(1, 1), Symbol::X)]);
    assert_eq!(
        reconstruct_board(&log).get(Position::new(1, 1)),
        Square::Occupied(Symbol::X)
    );
}
