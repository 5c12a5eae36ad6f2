use glam::Vec2;
use hecs::World;
use proto::{AudioCommand, HeldKeys, InputEvent, MatchMode, OutputCommand, Sound};

use crate::{
    create_ball, create_paddle, render, step, Ball, Config, DuckWindow, Events, GameRng,
    MatchAction, MatchFsm, MatchState, Paddle, Rect, Score, Side, Time,
};

/// The whole game session: entities, score, state machine and audio flags.
///
/// One tick thread owns it. Discrete input goes through
/// [`Match::apply_discrete_event`], then [`Match::tick`] runs once per frame.
/// Both return the commands the presentation layer should carry out.
pub struct Match {
    world: World,
    config: Config,
    fsm: MatchFsm,
    mode: MatchMode,
    score: Score,
    events: Events,
    time: Time,
    rng: GameRng,
    duck: DuckWindow,
    muted: bool,
    quit_requested: bool,
}

impl Match {
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::new(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        create_ball(&mut world, config.ball_spawn(), Vec2::ZERO);

        Self {
            world,
            config,
            fsm: MatchFsm::new(),
            mode: MatchMode::Ai,
            score: Score::new(),
            events: Events::new(),
            time: Time::new(),
            rng: GameRng::new(seed),
            duck: DuckWindow::new(),
            muted: false,
            quit_requested: false,
        }
    }

    /// Apply one edge-triggered input. Requests that make no sense in the
    /// current state are ignored and produce no commands.
    pub fn apply_discrete_event(&mut self, event: InputEvent) -> Vec<OutputCommand> {
        let mut cmds = Vec::new();

        match event {
            InputEvent::SelectMode(mode) => {
                if self.fsm.transition(MatchAction::SelectMode).success {
                    self.mode = mode;
                }
            }
            InputEvent::Start => {
                if self.fsm.transition(MatchAction::Start).success {
                    self.serve();
                    tracing::debug!(mode = ?self.mode, "match started");
                    cmds.push(AudioCommand::StartMusic.into());
                }
            }
            InputEvent::PauseToggle => {
                let result = self.fsm.transition(MatchAction::TogglePause);
                if result.success {
                    let music = match result.to_state {
                        MatchState::Paused => AudioCommand::PauseMusic,
                        _ => AudioCommand::ResumeMusic,
                    };
                    cmds.push(music.into());
                }
            }
            InputEvent::Reset => self.reset(&mut cmds),
            InputEvent::MuteToggle => self.toggle_mute(&mut cmds),
            InputEvent::Quit => {
                self.quit_requested = true;
                cmds.push(OutputCommand::Shutdown);
            }
        }

        cmds
    }

    /// Advance one tick. Physics, AI and scoring only run during active play;
    /// the returned commands always end with the draw list for the new state.
    pub fn tick(&mut self, keys: HeldKeys) -> Vec<OutputCommand> {
        let mut cmds = Vec::new();

        self.time.advance(self.config.fps);
        self.events.clear();

        if self.fsm.is_ticking() {
            step(
                &mut self.world,
                &self.config,
                self.mode,
                keys,
                &mut self.score,
                &mut self.events,
                &mut self.rng,
            );
            self.emit_event_cues(&mut cmds);
            self.check_winner(&mut cmds);
        }

        self.restore_music_if_due(&mut cmds);

        cmds.extend(render::draw_commands(self));
        cmds
    }

    fn serve(&mut self) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&self.config, &mut self.rng);
        }
    }

    fn reset(&mut self, cmds: &mut Vec<OutputCommand>) {
        self.fsm.transition(MatchAction::Reset);
        self.score = Score::new();
        self.events.clear();

        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.stop(&self.config);
        }
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.recenter(&self.config);
        }

        if self.duck.is_open() {
            self.duck.close();
            if !self.muted {
                cmds.push(AudioCommand::SetMusicVolume(self.config.music_volume).into());
            }
        }
        cmds.push(AudioCommand::StopMusic.into());
    }

    fn toggle_mute(&mut self, cmds: &mut Vec<OutputCommand>) {
        self.muted = !self.muted;
        self.duck.close();
        let volume = if self.muted {
            self.config.muted_volume
        } else {
            self.config.music_volume
        };
        tracing::debug!(muted = self.muted, "mute toggled");
        cmds.push(AudioCommand::SetMusicVolume(volume).into());
    }

    fn play(&self, sound: Sound, cmds: &mut Vec<OutputCommand>) {
        if !self.muted {
            cmds.push(AudioCommand::PlaySound(sound).into());
        }
    }

    fn emit_event_cues(&mut self, cmds: &mut Vec<OutputCommand>) {
        if self.events.ball_hit_paddle.is_some() && !self.muted {
            self.play(Sound::Hit, cmds);
            cmds.push(
                AudioCommand::DuckMusic {
                    duration_ms: self.config.duck_ms,
                }
                .into(),
            );
            self.duck.open(self.time.now_ms, self.config.duck_ms);
        }
        if self.events.scored.is_some() {
            self.play(Sound::Score, cmds);
        }
    }

    fn check_winner(&mut self, cmds: &mut Vec<OutputCommand>) {
        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            if self.fsm.transition(MatchAction::WinReached).success {
                tracing::info!(
                    ?winner,
                    left = self.score.left,
                    right = self.score.right,
                    "game over"
                );
                cmds.push(AudioCommand::StopMusic.into());
                self.play(Sound::GameOver, cmds);
            }
        }
    }

    fn restore_music_if_due(&mut self, cmds: &mut Vec<OutputCommand>) {
        if self.duck.expired(self.time.now_ms) {
            self.duck.close();
            if !self.muted {
                cmds.push(AudioCommand::SetMusicVolume(self.config.music_volume).into());
            }
        }
    }

    // ------------------------------------------------------------------
    // Read-only accessors
    // ------------------------------------------------------------------

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> MatchState {
        self.fsm.state()
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn is_ai_mode(&self) -> bool {
        self.mode == MatchMode::Ai
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events recorded by the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn tick_count(&self) -> u64 {
        self.time.tick
    }

    pub fn now_ms(&self) -> u64 {
        self.time.now_ms
    }

    pub fn duck_window(&self) -> DuckWindow {
        self.duck
    }

    /// Winner once the match is over
    pub fn winner(&self) -> Option<Side> {
        self.fsm.is_game_over().then(|| self.score.leader())
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
            .unwrap_or_else(|| Paddle::new(side, &self.config))
    }

    pub fn left_paddle(&self) -> Rect {
        self.paddle(Side::Left).rect
    }

    pub fn right_paddle(&self) -> Rect {
        self.paddle(Side::Right).rect
    }

    pub fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .unwrap_or_else(|| Ball::at_spawn(&self.config))
    }

    pub fn ball_velocity(&self) -> Vec2 {
        self.ball().vel
    }

    /// Place the ball directly, e.g. to set up a serve in tests or demos
    pub fn set_ball(&mut self, rect: Rect, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            *ball = Ball::new(rect, vel);
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(GameRng::DEFAULT_SEED)
    }
}
