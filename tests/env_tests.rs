//! End-to-end scenarios through the reset/step contract.

use gomoku_env::core::{Action, Cell, Coord, EnvConfig, GameRng, PlayerId};
use gomoku_env::env::{play_random_episode, Environment, GomokuEnv};
use gomoku_env::rules::{Outcome, TranspositionSet};
use gomoku_env::{Error, IllegalMoveReason};

fn env(board_size: usize, num_win: usize) -> GomokuEnv {
    GomokuEnv::new(EnvConfig::new(board_size, num_win)).unwrap()
}

fn action(x: usize, y: usize, board_size: usize) -> Action {
    Action::encode(Coord::new(x, y), board_size)
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_top_row_win() {
    let mut env = env(3, 3);
    env.reset();

    let moves = [(0, 0), (1, 0), (0, 1), (2, 2), (0, 2)];
    let mut last = None;
    for (x, y) in moves {
        last = Some(env.step(action(x, y, 3)).unwrap());
    }

    let step = last.unwrap();
    assert!(step.done);
    assert_eq!(step.result, 1);
    assert_eq!(step.state.winner(), Some(PlayerId::new(0)));
}

#[test]
fn test_full_board_draw() {
    let mut env = env(3, 3);
    env.reset();

    // 0 1 0
    // 0 1 1
    // 1 0 0
    let order = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    for (i, &a) in order.iter().enumerate() {
        let step = env.step(Action(a)).unwrap();
        assert_eq!(step.done, i == order.len() - 1, "move {i}");
    }

    let state = env.state();
    assert!(state.is_done());
    assert_eq!(state.result(), 0);
    assert_eq!(state.outcome(), Outcome::Draw);
}

#[test]
fn test_occupied_cell_leaves_state_unchanged() {
    let mut env = env(3, 3);
    env.step(Action(4)).unwrap();
    let before = env.state().clone();

    let err = env.step(Action(4)).unwrap_err();
    assert_eq!(
        err,
        Error::IllegalMove {
            action: 4,
            player: PlayerId::new(1),
            reason: IllegalMoveReason::Occupied,
        }
    );
    assert_eq!(env.state(), &before);
}

#[test]
fn test_reset_is_always_empty() {
    let mut env = env(5, 4);
    let mut rng = GameRng::new(3);

    for _ in 0..5 {
        play_random_episode(&mut env, &mut rng).unwrap();
        let state = env.reset();

        assert!(state.board().cells().iter().all(|c| *c == Cell::Empty));
        assert_eq!(state.turn(), 0);
        assert!(!state.is_done());
        assert_eq!(state.current_player(), PlayerId::new(0));
    }
}

#[test]
fn test_three_player_turn_order() {
    let mut env = GomokuEnv::new(EnvConfig::new(5, 4).with_num_player(3)).unwrap();
    let mut players = vec![env.reset().current_player().0];

    for a in [0, 6, 12, 18, 24] {
        let step = env.step(Action(a)).unwrap();
        players.push(step.state.current_player().0);
    }

    assert_eq!(players, vec![0, 1, 2, 0, 1, 2]);
}

// =============================================================================
// Controller behaviour
// =============================================================================

#[test]
fn test_step_after_win_is_rejected() {
    let mut env = env(3, 3);
    for a in [0, 3, 1, 4, 2] {
        env.step(Action(a)).unwrap();
    }

    assert!(matches!(
        env.step(Action(8)),
        Err(Error::EpisodeFinished { turn: 5 })
    ));

    env.reset();
    assert!(env.step(Action(8)).is_ok());
}

#[test]
fn test_out_of_range_action() {
    let mut env = env(4, 3);
    let err = env.step(Action(16)).unwrap_err();

    assert!(matches!(
        err,
        Error::IllegalMove {
            reason: IllegalMoveReason::OutOfRange,
            ..
        }
    ));
    assert_eq!(env.state().turn(), 0);
}

#[test]
fn test_longer_board_five_in_a_row() {
    let n = 9;
    let mut env = env(n, 5);

    // Player 0 builds a diagonal, player 1 answers along the top row.
    let mut result = None;
    for i in 0..5 {
        let step = env.step(action(i + 2, i + 2, n)).unwrap();
        if step.done {
            result = Some(step);
            break;
        }
        env.step(action(0, i, n)).unwrap();
    }

    let step = result.expect("diagonal should win");
    assert_eq!(step.result, 1);
    assert_eq!(step.state.turn(), 9);
}

#[test]
fn test_states_from_parallel_envs_are_independent() {
    let config = EnvConfig::new(7, 4);
    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            std::thread::spawn(move || {
                let mut env = GomokuEnv::new(config).unwrap();
                let mut rng = GameRng::new(seed);
                play_random_episode(&mut env, &mut rng).unwrap()
            })
        })
        .collect();

    for (seed, handle) in handles.into_iter().enumerate() {
        let episode = handle.join().unwrap();
        let mut env = GomokuEnv::new(config).unwrap();
        let replay = play_random_episode(&mut env, &mut GameRng::new(seed as u64)).unwrap();
        assert_eq!(episode, replay);
    }
}

#[test]
fn test_transpositions_across_episodes() {
    let mut seen = TranspositionSet::new();
    let mut env = env(3, 3);

    for order in [[0, 4, 8], [8, 4, 0]] {
        env.reset();
        for a in order {
            env.step(Action(a)).unwrap();
        }
        seen.insert(env.state());
    }

    assert_eq!(seen.len(), 1);
}
