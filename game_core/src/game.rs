use hecs::{Entity, World};
use log::{debug, info};

use crate::{
    create_ball, create_paddle, step, Arena, AudioSink, Ball, Config, Events, FrameScheduler,
    FrameStatus, FrameView, GameRng, InputState, LoopToken, Paddle, Renderer, RoundAction,
    RoundFsm, RoundOutcome, RoundState, Score, Side,
};

/// A local human vs. AI game: simulation state plus the round lifecycle
pub struct Game {
    world: World,
    arena: Arena,
    config: Config,
    score: Score,
    events: Events,
    input: InputState,
    rng: GameRng,
    fsm: RoundFsm,
    scheduler: FrameScheduler,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl Game {
    pub fn new(arena: Arena, seed: u64) -> Self {
        let config = Config::new();
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        // Create paddles
        let left = create_paddle(&mut world, Side::Left, arena.paddle_spawn_y());
        let right = create_paddle(&mut world, Side::Right, arena.paddle_spawn_y());

        // Create ball
        let mut ball = Ball::new(arena.center(), glam::Vec2::ZERO);
        ball.serve(&arena, &config, &mut rng);
        let ball = create_ball(&mut world, ball.pos, ball.vel);

        Self {
            world,
            arena,
            config,
            score: Score::new(),
            events: Events::new(),
            input: InputState::new(),
            rng,
            fsm: RoundFsm::new(),
            scheduler: FrameScheduler::new(),
            left,
            right,
            ball,
        }
    }

    pub fn state(&self) -> RoundState {
        self.fsm.state()
    }

    pub fn is_running(&self) -> bool {
        self.fsm.is_running()
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.fsm.outcome()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events raised by the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| Ball::new(self.arena.center(), glam::Vec2::ZERO))
    }

    /// Overwrite the ball (tests and demos)
    pub fn set_ball(&mut self, ball: Ball) {
        if let Ok(mut current) = self.world.get::<&mut Ball>(self.ball) {
            *current = ball;
        }
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        self.world
            .get::<&Paddle>(self.paddle_entity(side))
            .map(|paddle| *paddle)
            .unwrap_or_else(|_| Paddle::new(side, self.arena.paddle_spawn_y()))
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Overwrite a paddle's top edge, clamped to the arena
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let y = self.arena.clamp_paddle_y(y);
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(self.paddle_entity(side)) {
            paddle.y = y;
        }
    }

    /// Start the first round. No-op while a round is running.
    pub fn start(&mut self) -> Option<LoopToken> {
        self.begin_round(RoundAction::Start)
    }

    /// Start a new round after one has ended. No-op while a round is running.
    pub fn restart(&mut self) -> Option<LoopToken> {
        self.begin_round(RoundAction::Restart)
    }

    fn begin_round(&mut self, action: RoundAction) -> Option<LoopToken> {
        let result = self.fsm.transition(action);
        if !result.success() {
            debug!("Ignoring {:?} in state {:?}", action, result.from_state());
            return None;
        }

        self.score = Score::new();
        self.events.clear();
        self.input.discard_touch_delta();
        self.serve();

        let token = self.scheduler.start();
        info!("Round started ({:?})", action);
        Some(token)
    }

    fn serve(&mut self) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.serve(&self.arena, &self.config, &mut self.rng);
        }
    }

    /// Advance the simulation one frame. Does nothing unless running.
    pub fn tick(&mut self) -> &Events {
        if !self.fsm.is_running() {
            self.events.clear();
            return &self.events;
        }

        let winner = step(
            &mut self.world,
            &self.arena,
            &self.config,
            &mut self.input,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        if let Some(winner) = winner {
            self.end_round(winner);
        }
        &self.events
    }

    fn end_round(&mut self, winner: Side) {
        let outcome = RoundOutcome {
            winner,
            score: self.score,
        };
        self.fsm.transition(RoundAction::Win(outcome));
        self.scheduler.stop();
        info!("{}", outcome.summary());
    }

    /// One display frame: tick, play sounds, draw.
    ///
    /// Frames from a retired loop, or arriving after the round ended, do
    /// nothing and report [`FrameStatus::Stopped`].
    pub fn frame(
        &mut self,
        token: LoopToken,
        renderer: &mut dyn Renderer,
        audio: &mut dyn AudioSink,
    ) -> FrameStatus {
        if !self.scheduler.is_active(token) || !self.fsm.is_running() {
            return FrameStatus::Stopped;
        }

        self.tick();
        for sound in &self.events.sounds {
            audio.play(*sound);
        }
        renderer.draw(&self.view());

        if self.scheduler.is_active(token) {
            FrameStatus::Continue
        } else {
            FrameStatus::Stopped
        }
    }

    /// Adopt new arena dimensions.
    ///
    /// Outside a running round paddles and ball go back to the centre.
    /// During a round positions are kept and paddles re-clamped.
    pub fn on_arena_resized(&mut self, arena: Arena) {
        debug!("Arena resized to {} x {}", arena.width, arena.height);
        self.arena = arena;

        if self.fsm.is_running() {
            for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
                paddle.y = arena.clamp_paddle_y(paddle.y);
            }
        } else {
            for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
                paddle.y = arena.paddle_spawn_y();
            }
            self.serve();
        }
    }

    /// Touch drags only steer while the ball is in play
    pub fn touch_move(&mut self, y: f32) {
        if self.fsm.is_running() {
            self.input.touch_move(y);
        }
    }

    pub fn view(&self) -> FrameView {
        let ball = self.ball();
        FrameView {
            arena: self.arena,
            paddle_width: self.config.paddle_width,
            paddle_left_y: self.paddle(Side::Left).y,
            paddle_right_y: self.paddle(Side::Right).y,
            ball_pos: ball.pos,
            ball_radius: self.config.ball_radius,
            score: self.score,
            state: self.fsm.state(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, Silent, Sound};
    use glam::Vec2;

    struct NullRenderer;

    impl Renderer for NullRenderer {
        fn draw(&mut self, _view: &FrameView) {}
    }

    fn game() -> Game {
        Game::new(Arena::new(600.0, 360.0).unwrap(), 42)
    }

    #[test]
    fn test_new_game_is_idle_and_centred() {
        let game = game();
        assert_eq!(game.state(), RoundState::Idle);
        assert_eq!(game.ball().pos, game.arena().center());
        assert_eq!(game.paddle(Side::Left).y, game.arena().paddle_spawn_y());
        assert_eq!(game.paddle(Side::Right).y, game.arena().paddle_spawn_y());
    }

    #[test]
    fn test_tick_does_nothing_when_idle() {
        let mut game = game();
        let before = game.ball();
        game.tick();
        assert_eq!(game.ball().pos, before.pos);
    }

    #[test]
    fn test_start_is_noop_while_running() {
        let mut game = game();
        let token = game.start().expect("first start succeeds");
        game.score.left = 3;

        assert_eq!(game.start(), None);
        assert_eq!(game.restart(), None);
        assert_eq!(game.score().left, 3, "Running round is untouched");
        assert!(game.scheduler().is_active(token));
    }

    #[test]
    fn test_frame_with_retired_token_is_ignored() {
        let mut game = game();
        let token = game.start().unwrap();
        let ball = game.ball();

        game.scheduler.stop();
        let status = game.frame(token, &mut NullRenderer, &mut Silent);

        assert_eq!(status, FrameStatus::Stopped);
        assert_eq!(game.ball().pos, ball.pos, "Stale frame must not tick");
    }

    #[test]
    fn test_resize_when_idle_recentres() {
        let mut game = game();
        game.set_paddle_y(Side::Left, 0.0);
        let arena = Arena::new(400.0, 240.0).unwrap();

        game.on_arena_resized(arena);

        assert_eq!(game.ball().pos, arena.center());
        assert_eq!(game.paddle(Side::Left).y, arena.paddle_spawn_y());
    }

    #[test]
    fn test_resize_when_running_keeps_positions() {
        let mut game = game();
        game.start();
        game.set_paddle_y(Side::Left, 280.0);
        game.set_ball(Ball::new(Vec2::new(100.0, 50.0), Vec2::new(5.0, 0.0)));
        let arena = Arena::new(400.0, 240.0).unwrap();

        game.on_arena_resized(arena);

        assert_eq!(game.ball().pos, Vec2::new(100.0, 50.0));
        assert_eq!(
            game.paddle(Side::Left).y,
            arena.max_paddle_y(),
            "Paddle re-clamped to the smaller arena"
        );
    }

    #[test]
    fn test_touch_ignored_unless_running() {
        let mut game = game();
        game.input_mut().touch_start(100.0);
        game.touch_move(200.0);
        assert_eq!(game.input_mut().take_touch_delta(), 0.0);

        game.start();
        game.input_mut().touch_start(100.0);
        game.touch_move(120.0);
        let before = game.paddle(Side::Left).y;
        game.tick();
        assert_eq!(game.paddle(Side::Left).y, before + 30.0);
    }

    #[test]
    fn test_held_key_moves_player_each_tick() {
        let mut game = game();
        game.start();
        game.input_mut().press(Direction::Down);
        let before = game.paddle(Side::Left).y;
        game.tick();
        game.tick();
        assert_eq!(game.paddle(Side::Left).y, before + 12.0);
    }

    #[test]
    fn test_wall_bounce_plays_hit() {
        let mut game = game();
        game.start();
        game.set_ball(Ball::new(Vec2::new(300.0, 6.0), Vec2::new(5.0, -3.0)));

        let events = game.tick();

        assert_eq!(events.sounds, vec![Sound::Hit]);
    }
}
