use weiqi_engine::{Engine, Stage, Stone};

#[test]
fn single_pass_hands_over_the_turn() {
    let mut engine = Engine::new(9);
    assert!(engine.pass_turn());
    assert!(!engine.is_game_over());
    assert_eq!(engine.stage(), Stage::WhiteToPlay);
}

#[test]
fn consecutive_passes_end_the_game() {
    let mut engine = Engine::new(9);
    engine.place_stone(4, 4);
    assert!(engine.pass_turn());
    assert!(engine.pass_turn());
    assert!(engine.is_game_over());
    assert_eq!(engine.stage(), Stage::Done);
}

#[test]
fn pass_after_game_over_is_refused() {
    let mut engine = Engine::new(9);
    engine.pass_turn();
    engine.pass_turn();
    let turn = engine.current_turn();

    assert!(!engine.pass_turn());
    assert!(!engine.place_stone(0, 0));
    assert_eq!(engine.current_turn(), turn);
}

#[test]
fn passes_separated_by_a_move_do_not_end_the_game() {
    let mut engine = Engine::new(9);
    engine.pass_turn();
    assert!(engine.place_stone(3, 3));
    engine.pass_turn();
    assert!(!engine.is_game_over());
    assert_eq!(engine.current_turn(), Stone::White);
}

#[test]
fn reset_after_game_over() {
    let mut engine = Engine::new(9);
    engine.pass_turn();
    engine.pass_turn();
    engine.reset();

    assert!(!engine.is_game_over());
    assert_eq!(engine.stage(), Stage::BlackToPlay);
    assert!(engine.place_stone(0, 0));
}
