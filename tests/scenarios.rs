use toroidal_snake::{
    board::STARTING_LENGTH,
    controller::GameController,
    types::{ColumnRenderableGame, HeadGettableGame, LengthGettableGame, RewardGettableGame},
    Board, BoardSnapshot, Cell, Direction, Position, ScriptedSource, StandardBoard, StepOutcome,
};

type ScriptedGame<const W: usize, const H: usize> = GameController<ScriptedSource, W, H>;

fn load<const W: usize, const H: usize>(fixture: &str) -> ScriptedGame<W, H> {
    let snapshot = BoardSnapshot::from_json(fixture).unwrap();
    let board = Board::<W, H>::from_snapshot(&snapshot).unwrap();
    GameController::with_board(board, ScriptedSource::identity())
}

#[test]
fn fresh_game_lights_the_snake_and_reward() {
    let game = ScriptedGame::<16, 8>::new(ScriptedSource::identity()).unwrap();
    for x in 8..=10 {
        let mut expected = [false; 8];
        expected[3] = true;
        assert_eq!(game.render_column(x), expected);
    }
    let mut first = [false; 8];
    first[0] = true;
    assert_eq!(game.render_column(0), first);
    let lit: usize = (0..16)
        .map(|x| game.render_column(x).iter().filter(|lit| **lit).count())
        .sum();
    assert_eq!(lit, STARTING_LENGTH + 1);
}

#[test]
fn eating_the_reward_grows_the_snake() {
    let mut game = load::<16, 8>(include_str!("../fixtures/reward_ahead.json"));
    game.request_direction(Direction::Left);
    assert_eq!(game.tick(), StepOutcome::Grew);
    assert_eq!(game.get_length(), 4);
    assert_eq!(game.get_head_as_position(), Position::new(7, 3));
    assert_eq!(game.get_tail_as_position(), Position::new(10, 3));
    assert_eq!(game.get_reward_as_position(), Some(Position::new(0, 0)));

    // the next plain tick moves the whole longer snake along
    assert_eq!(game.tick(), StepOutcome::Moved);
    assert_eq!(game.get_length(), 4);
    assert_eq!(game.get_tail_as_position(), Position::new(9, 3));
    assert!(game.board().assert_consistency());
}

#[test]
fn running_into_yourself_starts_over() {
    let mut game = load::<16, 8>(include_str!("../fixtures/self_collision.json"));
    game.request_direction(Direction::Up);
    assert_eq!(game.tick(), StepOutcome::Collided);

    let fresh = ScriptedGame::<16, 8>::new(ScriptedSource::identity()).unwrap();
    assert_eq!(game.board(), fresh.board());
}

#[test]
fn filling_the_last_cell_wins_and_starts_over() {
    let mut game = load::<3, 2>(include_str!("../fixtures/one_free_cell.json"));
    assert_eq!(game.get_length(), 5);
    assert_eq!(game.tick(), StepOutcome::Won);
    assert_eq!(game.get_length(), STARTING_LENGTH);
    assert_eq!(game.get_head_as_position(), Position::new(1, 0));
    assert_eq!(game.get_tail_as_position(), Position::new(0, 0));
    assert!(game.board().assert_consistency());
}

#[test]
fn the_snake_wraps_across_the_bottom_edge() {
    let mut game = load::<16, 8>(include_str!("../fixtures/across_the_seam.json"));
    let mut heads = Vec::new();
    for _ in 0..3 {
        assert_eq!(game.tick(), StepOutcome::Moved);
        heads.push(game.get_head_as_position());
    }
    assert_eq!(
        heads,
        vec![Position::new(6, 0), Position::new(6, 1), Position::new(6, 2)]
    );
    let mut expected = [false; 8];
    expected[0] = true;
    expected[1] = true;
    expected[2] = true;
    assert_eq!(game.render_column(6), expected);
}

#[test]
fn reversing_is_ignored() {
    let mut game = ScriptedGame::<16, 8>::new(ScriptedSource::identity()).unwrap();
    game.request_direction(Direction::Right);
    game.tick();
    assert_eq!(game.get_head_as_position(), Position::new(7, 3));
    assert_eq!(game.board().get(Position::new(7, 3)), Cell::BodyLeft);
}

#[test]
fn a_square_lap_comes_back_to_the_start() {
    let mut game = ScriptedGame::<16, 8>::new(ScriptedSource::identity()).unwrap();
    let lap = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];
    for direction in lap.iter() {
        game.request_direction(*direction);
        for _ in 0..3 {
            assert_eq!(game.tick(), StepOutcome::Moved);
        }
    }
    assert_eq!(game.get_head_as_position(), Position::new(8, 3));
    assert_eq!(game.get_length(), STARTING_LENGTH);
    assert!(game.board().assert_consistency());
}

#[test]
fn snapshots_survive_a_json_round_trip() {
    let mut game = load::<16, 8>(include_str!("../fixtures/self_collision.json"));
    game.request_direction(Direction::Down);
    game.tick();
    let json = serde_json::to_string(&game.board().to_snapshot()).unwrap();
    let again = StandardBoard::from_snapshot(&BoardSnapshot::from_json(&json).unwrap()).unwrap();
    assert_eq!(&again, game.board());
}
