//! Game Flow Integration Tests
//!
//! Whole games driven through the public engine APIs:
//! - Chess turn alternation, mates and computer playouts
//! - Minesweeper win and loss
//! - Sudoku solve from a generated puzzle
//! - 2048 move sequences

use chess_engine::move_gen::{all_legal_moves, is_in_check};
use chess_engine::{ChessGame, Color, GameStatus, Square};
use game_2048::{Direction, Game, Grid};
use minesweeper::{Board, GameState, RevealOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sudoku::{generate, Difficulty};

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn play(game: &mut ChessGame, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        assert!(
            game.try_move(sq(from), sq(to)).is_some(),
            "{}{} should be legal",
            from,
            to
        );
    }
}

// ============================================================================
// Chess
// ============================================================================

#[test]
fn test_turns_alternate() {
    let mut game = ChessGame::new();
    assert_eq!(game.turn(), Color::White);
    play(&mut game, &[("e2", "e4")]);
    assert_eq!(game.turn(), Color::Black);
    assert!(
        game.try_move(sq("d2"), sq("d4")).is_none(),
        "White cannot move twice in a row"
    );
    play(&mut game, &[("e7", "e5")]);
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn test_scholars_mate() {
    let mut game = ChessGame::new();
    play(
        &mut game,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("f1", "c4"),
            ("b8", "c6"),
            ("d1", "h5"),
            ("g8", "f6"),
            ("h5", "f7"),
        ],
    );
    assert_eq!(
        game.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
    assert!(game.is_over());
    assert_eq!(game.captured().len(), 1, "The f7 pawn was captured");
    assert!(game.select(sq("e8")).is_empty(), "No interaction after mate");
}

#[test]
fn test_computer_playout_stays_legal() {
    for seed in 0..4 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = ChessGame::new();
        while !game.is_over() && game.history().len() < 150 {
            let mover = game.turn();
            let mv = game.computer_move(&mut rng).expect("Side to move has a move");
            assert_eq!(mv.piece.color, mover);
            assert!(
                !is_in_check(game.board(), mover),
                "Computer move {} left its own king attacked",
                mv
            );
        }
        if let GameStatus::Checkmate { winner } = game.status() {
            assert!(all_legal_moves(game.board(), winner.opponent(), game.last_move()).is_empty());
        }
    }
}

// ============================================================================
// Minesweeper
// ============================================================================

#[test]
fn test_minesweeper_clear_board_wins() {
    let mut board = Board::with_mines(5, 5, &[(0, 0), (4, 4)]).unwrap();
    for row in 0..5 {
        for col in 0..5 {
            if (row, col) != (0, 0) && (row, col) != (4, 4) {
                board.reveal(row, col);
            }
        }
    }
    assert_eq!(board.state(), GameState::Won);
}

#[test]
fn test_minesweeper_generated_mine_explodes() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut board = Board::generate(6, 6, 5, &mut rng).unwrap();
    let (row, col) = (0..6)
        .flat_map(|r| (0..6).map(move |c| (r, c)))
        .find(|&(r, c)| board.cell(r, c).unwrap().is_mine)
        .unwrap();
    assert_eq!(board.reveal(row, col), RevealOutcome::Exploded);
    assert_eq!(board.state(), GameState::Lost);
}

// ============================================================================
// Sudoku
// ============================================================================

#[test]
fn test_sudoku_fill_from_solution() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut puzzle = generate(Difficulty::Medium, &mut rng);
    assert_eq!(puzzle.filled_count(), 31);
    let solution = *puzzle.solution();
    for row in 0..9 {
        for col in 0..9 {
            if !puzzle.is_original(row, col) {
                assert!(puzzle.set_cell(row, col, solution[row][col]));
            }
        }
    }
    assert!(puzzle.is_solved());
    assert!(puzzle.conflicts().is_empty());
}

// ============================================================================
// 2048
// ============================================================================

#[test]
fn test_2048_game_until_stuck_or_limit() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut game = Game::new(&mut rng);
    let mut last_score = 0;
    for turn in 0..2000 {
        if game.is_lost() {
            break;
        }
        let direction = Direction::all()[turn % 4];
        let outcome = game.step(direction, &mut rng);
        assert_eq!(game.score(), last_score + outcome.score_delta);
        last_score = game.score();
    }
    assert!(game.max_tile() >= 4);
}

#[test]
fn test_2048_resume_from_rows() {
    let grid = Grid::from_rows(&[4, 4, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
    let mut game = Game::from_grid(grid);
    let mut rng = StdRng::seed_from_u64(0);
    let outcome = game.step(Direction::Left, &mut rng);
    assert_eq!(outcome.score_delta, 8);
    assert_eq!(game.grid().get(0, 0), 8);
    assert_eq!(game.grid().get(0, 1), 8, "Merged 8 does not merge again");
}
