//! Session controller: the owned state behind one game window.

use crate::games::tictactoe::{
    Board, InvariantSet, Move, MoveError, MoveLog, MoveLogInvariants, PlayerRegistry, Position,
    RoundResult, Symbol, current_turn, derive_winner, is_draw, reconstruct_board,
};
use derive_getters::Getters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// Moves are accepted.
    InProgress,
    /// A line was completed. Terminal until rematch.
    Won,
    /// The board filled without a line. Terminal until rematch.
    Drawn,
}

/// Derived state handed to the view layer after every event.
///
/// Built from scratch on each [`SessionController::query`]; holding on to
/// one across a mutation gives stale data.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema)]
pub struct Snapshot {
    /// Board replayed from the move log.
    board: Board,
    /// Symbol that moves next.
    active_player: Symbol,
    /// Round result. A drawn round reports [`RoundResult::Draw`].
    result: RoundResult,
    /// True iff the board is full and nobody won.
    is_draw: bool,
    /// Display names for both symbols.
    players: PlayerRegistry,
    /// Moves made this round, newest first.
    turns: Vec<Move>,
}

impl Snapshot {
    /// Phase of the round this snapshot describes.
    pub fn phase(&self) -> RoundPhase {
        match self.result {
            RoundResult::NoResult => RoundPhase::InProgress,
            RoundResult::Win { .. } => RoundPhase::Won,
            RoundResult::Draw => RoundPhase::Drawn,
        }
    }

    /// Display name of the symbol that moves next.
    pub fn active_name(&self) -> &str {
        self.players.name(self.active_player)
    }
}

/// Owns the move log and player registry for one session.
///
/// All mutation goes through [`select_square`](Self::select_square),
/// [`rename_player`](Self::rename_player) and [`rematch`](Self::rematch);
/// all reads go through [`query`](Self::query), which re-derives every
/// value from the log.
#[derive(Debug, Clone, Default)]
pub struct SessionController {
    log: MoveLog,
    registry: PlayerRegistry,
}

impl SessionController {
    /// Creates a session with an empty log and the given names.
    #[instrument(skip(registry))]
    pub fn new(registry: PlayerRegistry) -> Self {
        info!(
            x = registry.name(Symbol::X),
            o = registry.name(Symbol::O),
            "Creating new session"
        );
        Self {
            log: MoveLog::new(),
            registry,
        }
    }

    /// The move log of the current round.
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    /// The player registry.
    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    /// Places the active symbol at `position`.
    ///
    /// Rejected without touching state when the round is over or the cell
    /// is taken. Returns the appended move otherwise.
    #[instrument(skip(self), fields(moves = self.log.len()))]
    pub fn select_square(&mut self, position: Position) -> Result<Move, MoveError> {
        let board = reconstruct_board(&self.log);
        let result = derive_winner(&board, &self.registry);

        if result.is_over() || is_draw(&self.log, &result) {
            warn!(%position, "Move rejected: round is over");
            return Err(MoveError::GameOver);
        }

        if !board.is_empty(position) {
            warn!(%position, "Move rejected: square occupied");
            return Err(MoveError::SquareOccupied(position));
        }

        let mv = Move::new(position, current_turn(&self.log));
        self.log.push(mv);

        if cfg!(debug_assertions)
            && let Err(violations) = MoveLogInvariants::check_all(&self.log)
        {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Move log invariant violated: {}", descriptions);
        }

        info!(%mv, moves = self.log.len(), "Move accepted");
        Ok(mv)
    }

    /// Sets the display name for `symbol`. Always succeeds.
    #[instrument(skip(self, name))]
    pub fn rename_player(&mut self, symbol: Symbol, name: impl Into<String>) {
        let name = name.into();
        info!(%symbol, %name, "Renaming player");
        self.registry.rename(symbol, name);
    }

    /// Starts a new round: clears the log and keeps the names.
    #[instrument(skip(self), fields(moves = self.log.len()))]
    pub fn rematch(&mut self) {
        info!("Starting rematch");
        self.log.clear();
    }

    /// Derives the full current state from the log.
    #[instrument(skip(self), fields(moves = self.log.len()))]
    pub fn query(&self) -> Snapshot {
        let board = reconstruct_board(&self.log);
        let winner = derive_winner(&board, &self.registry);
        let draw = is_draw(&self.log, &winner);
        let result = if draw { RoundResult::Draw } else { winner };
        let active_player = current_turn(&self.log);

        debug!(%active_player, ?result, draw, "Derived snapshot");

        Snapshot {
            board,
            active_player,
            result,
            is_draw: draw,
            players: self.registry.clone(),
            turns: self.log.turns_newest_first().copied().collect(),
        }
    }

    /// Phase of the current round.
    pub fn phase(&self) -> RoundPhase {
        self.query().phase()
    }
}

/// Cloneable, thread-safe handle to one [`SessionController`].
///
/// Each method holds the lock for a whole mutate-then-query cycle, so every
/// caller sees the same sequence of states a single-threaded view would.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<SessionController>>,
}

impl SharedSession {
    /// Wraps a controller.
    #[instrument(skip(controller))]
    pub fn new(controller: SessionController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionController> {
        self.inner.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("Session lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Selects a square and returns the resulting state.
    #[instrument(skip(self))]
    pub fn select_square(&self, position: Position) -> Result<Snapshot, MoveError> {
        let mut session = self.lock();
        session.select_square(position)?;
        Ok(session.query())
    }

    /// Renames a player and returns the resulting state.
    #[instrument(skip(self, name))]
    pub fn rename_player(&self, symbol: Symbol, name: impl Into<String>) -> Snapshot {
        let mut session = self.lock();
        session.rename_player(symbol, name);
        session.query()
    }

    /// Starts a rematch and returns the resulting state.
    #[instrument(skip(self))]
    pub fn rematch(&self) -> Snapshot {
        let mut session = self.lock();
        session.rematch();
        session.query()
    }

    /// Current state.
    #[instrument(skip(self))]
    pub fn query(&self) -> Snapshot {
        self.lock().query()
    }
}
