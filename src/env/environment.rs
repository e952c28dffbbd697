//! The reset/step environment controller.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::core::{Action, EnvConfig, GameRng, GameState};
use crate::error::{Error, Result};
use crate::rules::Outcome;

/// Auxiliary step information. Always empty; serializes as `{}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {}

/// What [`Environment::step`] returns.
#[derive(Clone, Debug)]
pub struct Step<S> {
    /// The state after the move.
    pub state: S,
    /// 1 if the move won, else 0.
    pub result: u8,
    /// Is the episode over?
    pub done: bool,
    pub info: StepInfo,
}

/// Two-call environment contract consumed by agents.
///
/// ## Implementation Notes
///
/// - `reset` must always return an initial state.
/// - `step` must leave the environment unchanged when it fails.
pub trait Environment {
    /// Observation type handed to the agent.
    type State;

    /// Start a new episode.
    fn reset(&mut self) -> Self::State;

    /// Apply one action to the current state.
    fn step(&mut self, action: Action) -> Result<Step<Self::State>>;
}

/// N-in-a-row environment.
///
/// ```
/// use gomoku_env::{Action, EnvConfig, Environment, GomokuEnv};
///
/// let mut env = GomokuEnv::new(EnvConfig::new(3, 3))?;
/// env.reset();
/// for action in [0, 3, 1, 4] {
///     env.step(Action(action))?;
/// }
/// let step = env.step(Action(2))?;
/// assert!(step.done);
/// assert_eq!(step.result, 1);
/// # Ok::<(), gomoku_env::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct GomokuEnv {
    config: EnvConfig,
    state: GameState,
}

impl GomokuEnv {
    /// Create an environment positioned at the initial state.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` if `config` fails validation.
    #[instrument]
    pub fn new(config: EnvConfig) -> Result<Self> {
        let state = GameState::initial(config)?;
        debug!("environment created");
        Ok(Self { config, state })
    }

    /// The environment's configuration.
    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Number of players taking turns.
    #[must_use]
    pub fn num_player(&self) -> usize {
        self.config.num_player
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Draw a uniformly random legal action, or `None` once the board is full.
    pub fn sample_action(&self, rng: &mut GameRng) -> Option<Action> {
        rng.choose(self.state.valid_actions()).copied()
    }

    /// Rendering is not provided by this crate.
    ///
    /// # Errors
    ///
    /// Always returns `Error::RenderUnsupported`.
    pub fn render(&self) -> Result<()> {
        Err(Error::RenderUnsupported)
    }
}

impl Environment for GomokuEnv {
    type State = GameState;

    #[instrument(skip(self), fields(board_size = self.config.board_size))]
    fn reset(&mut self) -> GameState {
        self.state = self.state.reset();
        self.state.clone()
    }

    /// # Errors
    ///
    /// - `Error::EpisodeFinished` if the current state is already done.
    /// - `Error::IllegalMove` if the action targets an unavailable cell.
    ///
    /// The current state is kept on either error.
    #[instrument(
        skip(self, action),
        fields(action = action.index(), player = %self.state.current_player())
    )]
    fn step(&mut self, action: Action) -> Result<Step<GameState>> {
        if self.state.is_done() {
            warn!(turn = self.state.turn(), "step called on a finished episode");
            return Err(Error::EpisodeFinished {
                turn: self.state.turn(),
            });
        }

        let next = self.state.act(action)?;
        match next.outcome() {
            Outcome::Won(winner) => debug!(%winner, turn = next.turn(), "episode won"),
            Outcome::Draw => debug!(turn = next.turn(), "episode drawn"),
            Outcome::InProgress => {}
        }

        self.state = next;
        Ok(Step {
            state: self.state.clone(),
            result: self.state.result(),
            done: self.state.is_done(),
            info: StepInfo::default(),
        })
    }
}
