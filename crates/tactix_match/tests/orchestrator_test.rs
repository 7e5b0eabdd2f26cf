//! End-to-end orchestration tests with scripted and heuristic players.

use std::time::Duration;
use tactix_core::invariants::{InvariantSet, ProtocolInvariants};
use tactix_core::{GameStatus, Mark, Position};
use tactix_match::{GameEvent, HeuristicPlayer, Orchestrator, ScriptedPlayer};
use tokio::sync::mpsc;

fn drain(rx: &mut mpsc::UnboundedReceiver<GameEvent>) -> Vec<GameEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_scripted_game_plays_to_win() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let player_x = Box::new(ScriptedPlayer::new(
        "Scripted X",
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
    ));
    let player_o = Box::new(ScriptedPlayer::new(
        "Scripted O",
        [Position::Center, Position::MiddleRight],
    ));
    let mut orchestrator = Orchestrator::new(player_x, player_o, tx);

    let status = orchestrator.run_game().await.expect("game completes");

    assert_eq!(status, GameStatus::Won(Mark::X));
    assert_eq!(orchestrator.score().wins_for(Mark::X), 1);
    assert_eq!(orchestrator.score().total(), 1);
    assert!(ProtocolInvariants::check_all(orchestrator.game()).is_ok());

    let events = drain(&mut rx);
    let moves = events
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveMade { .. }))
        .count();
    assert_eq!(moves, 5);
    assert!(matches!(
        events.last(),
        Some(GameEvent::GameOver {
            status: GameStatus::Won(Mark::X),
            line: Some([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        })
    ));
}

#[tokio::test]
async fn test_rejected_move_is_reprompted_without_state_change() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    // X tries the already-taken top-left a second time; the orchestrator
    // re-prompts and the script continues with valid moves.
    let player_x = Box::new(ScriptedPlayer::new(
        "Scripted X",
        [
            Position::TopLeft,
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
        ],
    ));
    let player_o = Box::new(ScriptedPlayer::new(
        "Scripted O",
        [Position::Center, Position::MiddleRight],
    ));
    let mut orchestrator = Orchestrator::new(player_x, player_o, tx);

    let status = orchestrator.run_game().await.expect("game completes");

    assert_eq!(status, GameStatus::Won(Mark::X));
    // Only accepted moves make it into history and events
    assert_eq!(orchestrator.game().history().len(), 5);
    let events = drain(&mut rx);
    let moves = events
        .iter()
        .filter(|e| matches!(e, GameEvent::MoveMade { .. }))
        .count();
    assert_eq!(moves, 5);
}

#[tokio::test]
async fn test_restart_preserves_tally() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    // Scripts long enough for two games; both end in an X win via the
    // top row.
    let x_script = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
    ];
    let o_script = [
        Position::Center,
        Position::MiddleRight,
        Position::Center,
        Position::MiddleRight,
    ];
    let player_x = Box::new(ScriptedPlayer::new("Scripted X", x_script));
    let player_o = Box::new(ScriptedPlayer::new("Scripted O", o_script));
    let mut orchestrator = Orchestrator::new(player_x, player_o, tx);

    let score = orchestrator.play_series(2).await.expect("series completes");

    assert_eq!(score.wins_for(Mark::X), 2);
    assert_eq!(score.total(), 2);

    let events = drain(&mut rx);
    let game_overs = events
        .iter()
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .count();
    assert_eq!(game_overs, 2);
}

#[tokio::test]
async fn test_heuristic_self_play_series_completes() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let player_x = Box::new(HeuristicPlayer::new("X", Mark::X, Duration::ZERO));
    let player_o = Box::new(HeuristicPlayer::new("O", Mark::O, Duration::ZERO));
    let mut orchestrator = Orchestrator::new(player_x, player_o, tx);

    let score = orchestrator.play_series(20).await.expect("series completes");

    // Every game reached a terminal state and was tallied exactly once
    assert_eq!(score.total(), 20);
    assert!(orchestrator.game().is_terminal());
    let history_len = orchestrator.game().history().len();
    assert!((5..=9).contains(&history_len));
    assert!(ProtocolInvariants::check_all(orchestrator.game()).is_ok());
    drain(&mut rx);
}
