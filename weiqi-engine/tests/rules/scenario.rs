use weiqi_engine::{Engine, GoError, Intersection, Ko, Stone};

use crate::common::{at, init_tracing, play_all};

/// Black (2,2) is surrounded one stone at a time; White's fourth stone takes it
/// and Black cannot retake at once.
#[test]
fn lone_stone_captured_then_ko_blocks_retake() {
    init_tracing();
    let mut engine = Engine::new(5);

    // Black's in-between moves stay well away from the action
    play_all(
        &mut engine,
        &[(2, 2), (2, 1), (0, 0), (2, 3), (4, 4), (1, 2), (0, 4)],
    );
    assert_eq!(engine.captured().white, 0);
    assert_eq!(engine.captured().black, 0);
    assert_eq!(engine.current_turn(), Stone::White);

    assert!(engine.place_stone(3, 2));
    assert_eq!(engine.captured().white, 1);
    assert_eq!(engine.captured().black, 0);
    assert_eq!(at(&engine, (2, 2)), Intersection::Empty);
    assert_eq!(at(&engine, (3, 2)), Intersection::White);
    assert_eq!(
        engine.ko(),
        Some(&Ko {
            pos: (2, 2),
            illegal: Stone::Black
        })
    );

    assert!(!engine.place_stone(2, 2));
    assert_eq!(engine.try_play((2, 2)), Err(GoError::KoViolation));
    assert_eq!(engine.current_turn(), Stone::Black);
}

#[test]
fn empty_board_after_two_passes_is_jigo() {
    let mut engine = Engine::new(5);
    assert!(engine.pass_turn());
    assert!(engine.pass_turn());
    assert!(engine.is_game_over());

    let score = engine.score();
    assert_eq!(score.score, 0);
    assert_eq!(score.result(), "Jigo");
    assert_eq!(score.ownership.len(), 25);
    assert!(score.ownership.iter().all(|o| o.is_empty()));
}

#[test]
fn short_game_scored_end_to_end() {
    let mut engine = Engine::new(5);
    // Black walls off column 1, White column 3
    play_all(
        &mut engine,
        &[(1, 0), (3, 0), (1, 1), (3, 1), (1, 2), (3, 2), (1, 3), (3, 3), (1, 4), (3, 4)],
    );
    engine.pass_turn();
    engine.pass_turn();

    let score = engine.score();
    assert_eq!(score.black.stones, 5);
    assert_eq!(score.black.territory, 5);
    assert_eq!(score.white.stones, 5);
    assert_eq!(score.white.territory, 5);
    assert_eq!(score.score, 0);
    assert_eq!(score.ownership[2], Intersection::Empty);
    assert_eq!(score.ownership[0], Intersection::Black);
    assert_eq!(score.ownership[4], Intersection::White);
}

#[test]
fn view_serializes_for_front_ends() {
    let mut engine = Engine::new(3);
    engine.place_stone(0, 0);
    engine.place_stone(2, 2);

    let json = serde_json::to_value(engine.view()).unwrap();
    assert_eq!(json["size"], 3);
    assert_eq!(json["stones"][0], 1);
    assert_eq!(json["stones"][8], -1);
    assert_eq!(json["game_over"], false);
    assert_eq!(json["turn"], 1);
}
