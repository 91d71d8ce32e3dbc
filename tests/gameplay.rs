use rand::SeedableRng;
use rand::rngs::StdRng;
use term_snake::game::{
    Action, Board, Direction, EndReason, FoodSpawn, GameConfig, GameEngine, GameState, Position,
    Snake,
};

fn engine(config: GameConfig) -> GameEngine<StdRng> {
    GameEngine::with_rng(config, StdRng::seed_from_u64(42))
}

fn state_with(body: Vec<Position>, heading: Option<Direction>, food: Position) -> GameState {
    GameState::new(
        Snake::from_segments(body, heading).expect("snake needs a body"),
        food,
        Board::new(40, 20),
        100,
    )
}

#[test]
fn opening_moves_on_default_board() {
    let mut engine = engine(GameConfig::default());
    let mut state = state_with(vec![Position::new(20, 10)], None, Position::new(5, 5));

    let first = engine.advance(&mut state, Action::Move(Direction::Right));
    assert!(!first.info.moved);
    assert_eq!(state.heading(), Some(Direction::Right));
    assert_eq!(state.snake.body, vec![Position::new(20, 10)]);

    let second = engine.advance(&mut state, Action::Move(Direction::Right));
    assert!(second.info.moved);
    assert_eq!(state.snake.body, vec![Position::new(21, 10)]);
    assert_eq!(state.length(), 1);
}

#[test]
fn idle_ticks_before_first_input_change_nothing() {
    let mut engine = engine(GameConfig::default());
    let mut state = state_with(vec![Position::new(20, 10)], None, Position::new(5, 5));
    let before = state.clone();

    for _ in 0..10 {
        let result = engine.advance(&mut state, Action::Continue);
        assert!(!result.info.moved);
    }

    assert_eq!(state, before);
}

#[test]
fn reversal_requests_are_ignored() {
    let mut engine = engine(GameConfig::default());
    let mut state = state_with(
        vec![Position::new(10, 10), Position::new(10, 11)],
        Some(Direction::Up),
        Position::new(5, 5),
    );

    engine.advance(&mut state, Action::Move(Direction::Down));

    assert_eq!(state.heading(), Some(Direction::Up));
    assert_eq!(state.snake.head(), Position::new(10, 9));
    assert!(!state.terminated);
}

#[test]
fn left_wall_ends_the_game() {
    let mut engine = engine(GameConfig::default());
    let mut state = state_with(
        vec![Position::new(1, 7)],
        Some(Direction::Down),
        Position::new(5, 5),
    );

    let result = engine.advance(&mut state, Action::Move(Direction::Left));

    assert!(result.terminated);
    assert!(state.terminated);
    assert_eq!(state.end_reason, Some(EndReason::Wall));
}

#[test]
fn every_wall_is_deadly() {
    let cases = [
        (Position::new(39, 10), Direction::Right),
        (Position::new(20, 1), Direction::Up),
        (Position::new(20, 19), Direction::Down),
        (Position::new(1, 10), Direction::Left),
    ];

    for (head, heading) in cases {
        let mut engine = engine(GameConfig::default());
        let mut state = state_with(vec![head], Some(heading), Position::new(5, 5));
        let result = engine.advance(&mut state, Action::Continue);
        assert_eq!(result.info.end_reason, Some(EndReason::Wall), "{heading:?}");
    }
}

#[test]
fn eating_grows_and_respawns_food_inside() {
    let mut engine = engine(GameConfig::default());
    let old_food = Position::new(12, 10);
    let mut state = state_with(
        vec![Position::new(11, 10), Position::new(10, 10)],
        Some(Direction::Right),
        old_food,
    );

    let result = engine.advance(&mut state, Action::Continue);

    assert!(result.info.ate_food);
    assert_eq!(state.length(), 3);
    assert_ne!(state.food, old_food);
    assert!(state.board.is_interior(state.food));
}

#[test]
fn anywhere_policy_still_grows() {
    let config = GameConfig {
        food_spawn: FoodSpawn::Anywhere,
        ..Default::default()
    };
    let mut engine = engine(config);
    let mut state = state_with(
        vec![Position::new(11, 10)],
        Some(Direction::Right),
        Position::new(12, 10),
    );

    engine.advance(&mut state, Action::Continue);

    assert_eq!(state.length(), 2);
    assert!(state.board.is_interior(state.food));
}

#[test]
fn running_into_own_body_ends_the_game() {
    let mut engine = engine(GameConfig::default());
    let mut state = state_with(
        vec![
            Position::new(10, 10),
            Position::new(10, 11),
            Position::new(11, 10),
            Position::new(12, 10),
        ],
        Some(Direction::Up),
        Position::new(5, 5),
    );

    let result = engine.advance(&mut state, Action::Move(Direction::Right));

    assert!(result.terminated);
    assert_eq!(state.end_reason, Some(EndReason::SelfCollision));
}

#[test]
fn loop_back_over_a_long_snake() {
    let mut engine = engine(GameConfig::default());
    let mut state = state_with(
        vec![
            Position::new(10, 10),
            Position::new(9, 10),
            Position::new(8, 10),
            Position::new(7, 10),
            Position::new(6, 10),
        ],
        Some(Direction::Right),
        Position::new(30, 15),
    );

    engine.advance(&mut state, Action::Move(Direction::Down));
    engine.advance(&mut state, Action::Move(Direction::Left));
    assert!(!state.terminated);

    let result = engine.advance(&mut state, Action::Move(Direction::Up));

    assert!(result.terminated);
    assert_eq!(state.end_reason, Some(EndReason::SelfCollision));
}

#[test]
fn terminal_state_is_frozen() {
    let mut engine = engine(GameConfig::default());
    let mut state = state_with(
        vec![Position::new(1, 5)],
        Some(Direction::Left),
        Position::new(5, 5),
    );

    engine.advance(&mut state, Action::Continue);
    assert!(state.terminated);
    let frozen = state.clone();

    for direction in [Direction::Up, Direction::Right, Direction::Down] {
        let result = engine.advance(&mut state, Action::Move(direction));
        assert!(result.terminated);
        assert!(!result.info.moved);
    }

    assert_eq!(state, frozen);
}

#[test]
fn hard_preset_accelerates_while_eating() {
    let mut engine = engine(GameConfig::from_difficulty(
        term_snake::game::Difficulty::Hard,
    ));
    let mut state = engine.reset();
    state.food = Position::new(22, 10);

    engine.advance(&mut state, Action::Move(Direction::Right));
    engine.advance(&mut state, Action::Continue);
    assert_eq!(state.tick_delay_ms, 89);

    engine.advance(&mut state, Action::Continue);
    assert_eq!(state.length(), 2);
    assert_eq!(state.tick_delay_ms, 88);
}

#[test]
fn scripted_play_keeps_the_body_consistent() {
    let mut engine = engine(GameConfig::new(6, 6));
    let mut state = engine.reset();
    let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    for tick in 0..500 {
        let direction = turns[(tick / 3) % turns.len()];
        engine.advance(&mut state, Action::Move(direction));

        if state.terminated {
            break;
        }

        let body = &state.snake.body;
        assert!(body.iter().all(|&pos| state.board.is_interior(pos)));
        for (i, segment) in body.iter().enumerate() {
            assert!(!body[i + 1..].contains(segment), "duplicate segment {segment:?}");
        }
        assert!(state.board.is_interior(state.food));
    }
}
