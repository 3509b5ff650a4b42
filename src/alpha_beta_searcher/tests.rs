use super::*;
use crate::board::Square;
use crate::draughts_position;

fn sq(algebraic: &str) -> Square {
    Square::from_algebraic(algebraic).unwrap()
}

/// Plain minimax without pruning, used as the reference for the searcher.
fn minimax(board: &Board, depth: u8, maximizing: bool, difficulty: Difficulty) -> f32 {
    if depth == 0 || board.is_terminal() {
        return evaluate::score(board, difficulty);
    }

    let color = if maximizing { Color::Dark } else { Color::Light };
    let scores = successors(board, color).map(|successor| {
        minimax(&successor, depth - 1, !maximizing, difficulty)
    });

    if maximizing {
        scores.fold(f32::NEG_INFINITY, f32::max)
    } else {
        scores.fold(f32::INFINITY, f32::min)
    }
}

fn midgame() -> Board {
    draughts_position! {
        .o.o....
        ....o.o.
        .o...x..
        ..o.....
        .x.x....
        ..O...x.
        .x...x..
        x.....X.
    }
}

#[test]
fn test_starting_position_successors() {
    let board = Board::starting_position();

    let dark: Vec<Board> = successors(&board, Color::Dark).collect();
    assert_eq!(dark.len(), 7);

    // row-major: the a6 man is the first dark piece that can move
    let mut expected = board.clone();
    expected.move_piece(sq("a6"), sq("b5")).unwrap();
    assert_eq!(dark[0], expected);

    assert_eq!(successors(&board, Color::Light).count(), 7);
}

#[test]
fn test_capturing_piece_restricts_successors() {
    let board = draughts_position! {
        ........
        ........
        ........
        ...o....
        ..x.....
        ......x.
        x.......
        ........
    };

    let boards: Vec<Board> = successors(&board, Color::Dark).collect();
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].count(Color::Light), 0);
    assert!(boards[0].is_occupied(sq("e3")));
    assert!(!boards[0].is_occupied(sq("c5")));
    // the pieces that could only step stay put
    assert!(boards[0].is_occupied(sq("g6")));
    assert!(boards[0].is_occupied(sq("a7")));
}

#[test]
fn test_jump_chain_forks() {
    let board = draughts_position! {
        ........
        ........
        ........
        ...o.o..
        ........
        .....o..
        ......x.
        ........
    };

    let boards: Vec<Board> = successors(&board, Color::Dark).collect();
    assert_eq!(boards.len(), 2);

    // over f6 to e5, then over d4 to c3 or over f4 to g3
    assert!(boards[0].is_occupied(sq("c3")));
    assert!(boards[0].is_occupied(sq("f4")));
    assert!(boards[1].is_occupied(sq("g3")));
    assert!(boards[1].is_occupied(sq("d4")));
    for successor in boards.iter() {
        assert_eq!(successor.count(Color::Light), 1);
        assert_eq!(successor.count(Color::Dark), 1);
        assert!(!successor.is_occupied(sq("e5")));
    }
}

#[test]
fn test_promotion_ends_the_chain() {
    let board = draughts_position! {
        ........
        ...o.o..
        ..x.....
        ........
        ........
        ........
        ........
        ........
    };

    let boards: Vec<Board> = successors(&board, Color::Dark).collect();
    assert_eq!(boards.len(), 1);

    let crowned = &boards[0];
    assert!(crowned.get(sq("e1")).unwrap().is_king());
    assert_eq!(crowned.count(Color::Light), 1);
    // the new king could jump f2 right away, but the turn is over
    assert!(crowned.legal_moves(sq("e1")).has_captures());
    assert!(crowned.is_occupied(sq("f2")));
}

#[test]
fn test_identical_boards_are_yielded_once() {
    // the king can run the loop of four jumps either way round
    let board = draughts_position! {
        ........
        ........
        ..X.....
        .o.o....
        ........
        .o.o....
        ........
        ........
    };

    let boards: Vec<Board> = successors(&board, Color::Dark).collect();
    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].count(Color::Light), 0);
    assert!(boards[0].get(sq("c3")).unwrap().is_king());
}

#[test]
fn test_search_matches_minimax() {
    let positions = [Board::starting_position(), midgame()];

    for difficulty in Difficulty::ALL.iter().copied() {
        for (index, board) in positions.iter().enumerate() {
            let max_depth = if index == 0 { 4 } else { 3 };
            for depth in 1..=max_depth {
                for &maximizing in [true, false].iter() {
                    let mut searcher = AlphaBetaSearcher::new(difficulty);
                    let (score, best) = searcher.search(
                        board,
                        depth,
                        maximizing,
                        f32::NEG_INFINITY,
                        f32::INFINITY,
                    );

                    assert_eq!(
                        score,
                        minimax(board, depth, maximizing, difficulty),
                        "position {} depth {} maximizing {} {}",
                        index,
                        depth,
                        maximizing,
                        difficulty
                    );
                    assert_eq!(
                        minimax(&best, depth - 1, !maximizing, difficulty),
                        score
                    );
                }
            }
        }
    }
}

#[test]
fn test_search_from_starting_position() {
    let board = Board::starting_position();
    let mut searcher = AlphaBetaSearcher::new(Difficulty::Easy);

    let (score, best) = searcher.best_successor(&board, 1, true).unwrap();
    assert_eq!(score, 0.);
    // every reply keeps material level, so the first one enumerated is kept
    assert_eq!(best, successors(&board, Color::Dark).next().unwrap());
    assert_eq!(searcher.searched_position_count(), 8);
    assert_eq!(searcher.termination_count(), 0);
    assert_eq!(searcher.last_score(), Some(0.));
    assert!(searcher.last_search_duration().is_some());
}

#[test]
fn test_search_prefers_the_longer_chain() {
    let board = draughts_position! {
        ........
        ........
        ........
        ...o....
        ........
        .o...o..
        ..x...x.
        ........
    };
    let mut searcher = AlphaBetaSearcher::new(Difficulty::Easy);

    // c7 takes b6 alone, g7 takes f6 then d4
    let (score, best) = searcher.best_successor(&board, 1, true).unwrap();
    assert_eq!(score, 1.);
    assert_eq!(best.count(Color::Light), 1);
    assert!(best.is_occupied(sq("c3")));
    assert!(best.is_occupied(sq("c7")));
    assert!(best.is_occupied(sq("b6")));
}

#[test]
fn test_pruning_happens() {
    let board = Board::starting_position();
    let mut searcher = AlphaBetaSearcher::new(Difficulty::Medium);

    searcher.best_successor(&board, 3, true).unwrap();
    assert!(searcher.termination_count() > 0);
}

#[test]
fn test_terminal_board_is_its_own_result() {
    let board = draughts_position! {
        ........
        ........
        ........
        ........
        ...x....
        ........
        ........
        ........
    };
    let mut searcher = AlphaBetaSearcher::new(Difficulty::Easy);

    let (score, best) = searcher.search(&board, 3, false, f32::NEG_INFINITY, f32::INFINITY);
    assert_eq!(score, 1.);
    assert_eq!(best, board);
    assert_eq!(searcher.searched_position_count(), 1);

    assert_eq!(
        searcher.best_successor(&board, 3, true),
        Err(SearchError::NoAvailableMoves)
    );
}

#[test]
fn test_depth_too_low() {
    let mut searcher = AlphaBetaSearcher::new(Difficulty::Hard);
    assert_eq!(
        searcher.best_successor(&Board::starting_position(), 0, true),
        Err(SearchError::DepthTooLow)
    );
}

fn assert_tallies_match_grid(board: &Board) {
    for color in Color::ALL {
        let pieces: Vec<_> = board.pieces(color).collect();
        let kings = pieces.iter().filter(|piece| piece.is_king()).count();
        assert_eq!(board.count(color) as usize, pieces.len(), "{}", board);
        assert_eq!(board.kings(color) as usize, kings, "{}", board);
        assert!(board.kings(color) <= board.count(color));
    }
}

#[test]
fn test_tallies_match_the_grid_after_every_turn() {
    for start in &[Board::starting_position(), midgame()] {
        assert_tallies_match_grid(start);

        let mut frontier = vec![start.clone()];
        let mut color = Color::Dark;
        for _ in 0..3 {
            let next: Vec<Board> = frontier
                .iter()
                .flat_map(|board| successors(board, color).collect::<Vec<_>>())
                .collect();
            next.iter().for_each(assert_tallies_match_grid);
            frontier = next;
            color = color.opposite();
        }
        assert!(!frontier.is_empty());
    }
}
