use tracing::{debug, info, instrument, trace};

use crate::ai::{GameRng, MoveSelector, RandomMoveSelector};
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::BoundsError;
use crate::rules;
use crate::types::{
    Controller, GameState, Move, MoveOutcome, Piece, PlayerInfo, Position, Side, Terminal,
    WinReason,
};

/// One game of Breakthrough: board, turn, selection and per-side counts.
pub struct GameInstance {
    board: Board,
    active_side: Side,
    selection: Option<Position>,
    black: PlayerInfo,
    green: PlayerInfo,
    terminal: Option<Terminal>,
    freeze_on_win: bool,
    rng: GameRng,
    selector: Box<dyn MoveSelector>,
}

impl GameInstance {
    pub fn new(config: GameConfig, selector: Box<dyn MoveSelector>) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_clock(),
        };
        let active_side = if rng.gen_bool(0.5) {
            Side::Black
        } else {
            Side::Green
        };
        debug!(seed = rng.seed(), %active_side, "new game");

        Self {
            board: Board::new(),
            active_side,
            selection: None,
            black: PlayerInfo::new(config.black),
            green: PlayerInfo::new(config.green),
            terminal: None,
            freeze_on_win: config.freeze_on_win,
            rng,
            selector,
        }
    }

    pub fn from_config(config: GameConfig) -> Self {
        let selector = RandomMoveSelector::new(config.automated_policy);
        Self::new(config, Box::new(selector))
    }

    /// Fresh game: both sides human, random starting side.
    pub fn new_game() -> Self {
        Self::from_config(GameConfig::default())
    }

    /// Changes who plays `side`. Also resets that side's piece count.
    pub fn set_controller(&mut self, side: Side, controller: Controller) {
        debug!(%side, %controller, "controller set");
        *self.player_mut(side) = PlayerInfo::new(controller);
    }

    /// Flips `side` between human and automated play, returning the new controller.
    pub fn toggle_controller(&mut self, side: Side) -> Controller {
        let controller = self.player_info(side).controller.toggled();
        self.set_controller(side, controller);
        controller
    }

    /// Selects the active side's piece at `(row, col)`.
    /// Anything else (empty square, opposing piece, off-board) is ignored.
    #[instrument(level = "trace", skip(self))]
    pub fn select_at(&mut self, row: i32, col: i32) -> bool {
        if self.is_frozen() {
            return false;
        }
        let Ok(pos) = Position::from_signed(row, col) else {
            return false;
        };
        match self.board.get(pos) {
            Some(piece) if piece.side == self.active_side => {
                self.selection = Some(pos);
                true
            }
            _ => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Moves the selected piece to `(row, col)` if the step is legal.
    #[instrument(level = "trace", skip(self))]
    pub fn move_to(&mut self, row: i32, col: i32) -> MoveOutcome {
        if let Some(terminal) = self.frozen_terminal() {
            return MoveOutcome::finished(terminal);
        }
        let Some(from) = self.selection else {
            return MoveOutcome::rejected();
        };
        let Ok(to) = Position::from_signed(row, col) else {
            trace!(row, col, "target off the board");
            return MoveOutcome::rejected();
        };
        self.apply_move(Move { from, to })
    }

    /// Plays one move for the active side if it is automated.
    ///
    /// Refused while a human selection is pending, and a no-op when the
    /// selector finds nothing to play.
    #[instrument(level = "trace", skip(self))]
    pub fn automated_turn(&mut self) -> MoveOutcome {
        if let Some(terminal) = self.frozen_terminal() {
            return MoveOutcome::finished(terminal);
        }
        if !self.needs_automated_turn() {
            return MoveOutcome::rejected();
        }

        let side = self.active_side;
        match self.selector.select_move(&self.board, side, &mut self.rng) {
            Some(mv) => self.apply_move(mv),
            None => {
                trace!(%side, "automated side found no move");
                MoveOutcome::rejected()
            }
        }
    }

    /// Whether the driver should call [`Self::automated_turn`] now.
    pub fn needs_automated_turn(&self) -> bool {
        self.player_info(self.active_side).controller == Controller::Automated
            && self.selection.is_none()
            && !self.is_frozen()
    }

    /// Legal destinations for the piece on `(row, col)`. Empty when off-board.
    pub fn legal_targets(&self, row: i32, col: i32) -> Vec<Position> {
        match Position::from_signed(row, col) {
            Ok(from) => rules::legal_targets(&self.board, from),
            Err(_) => Vec::new(),
        }
    }

    pub fn legal_moves_for_selection(&self) -> Vec<Position> {
        self.selection
            .map(|from| rules::legal_targets(&self.board, from))
            .unwrap_or_default()
    }

    pub fn piece_at(&self, row: u8, col: u8) -> Result<Option<&Piece>, BoundsError> {
        self.board.piece_at(row, col)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_side(&self) -> Side {
        self.active_side
    }

    pub fn player_info(&self, side: Side) -> PlayerInfo {
        match side {
            Side::Black => self.black,
            Side::Green => self.green,
        }
    }

    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    /// The first win recorded in this game.
    pub fn terminal(&self) -> Option<Terminal> {
        self.terminal
    }

    pub fn is_over(&self) -> bool {
        self.terminal.is_some()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            active_side: self.active_side,
            black: self.black,
            green: self.green,
            selection: self.selection,
            terminal: self.terminal,
        }
    }

    fn apply_move(&mut self, mv: Move) -> MoveOutcome {
        let side = self.active_side;
        let owned = self.board.get(mv.from).is_some_and(|piece| piece.side == side);
        if !owned || !rules::is_legal(&self.board, mv.from, mv.to) {
            trace!(from = %mv.from, to = %mv.to, "illegal move");
            return MoveOutcome::rejected();
        }

        let mut terminal = None;
        let captured = self.board.relocate(mv.from, mv.to).map(|piece| piece.side);

        if let Some(captured) = captured {
            let info = self.player_mut(captured);
            info.pieces_remaining = info.pieces_remaining.saturating_sub(1);
            let remaining = info.pieces_remaining;
            debug!(
                capturing = %side,
                %captured,
                square = %mv.to,
                remaining,
                "piece captured"
            );
            if remaining == 0 {
                terminal = Some(Terminal {
                    winner: side,
                    reason: WinReason::Elimination,
                });
            }
        }

        if terminal.is_none() && rules::is_breakthrough(side, mv.to.row) {
            terminal = Some(Terminal {
                winner: side,
                reason: WinReason::Breakthrough,
            });
        }

        if let Some(win) = terminal {
            info!(winner = %win.winner, reason = ?win.reason, "game won");
            self.terminal.get_or_insert(win);
        }

        self.selection = None;
        self.active_side = side.opponent();

        MoveOutcome {
            applied: true,
            mv: Some(mv),
            capture: captured,
            terminal,
        }
    }

    fn is_frozen(&self) -> bool {
        self.frozen_terminal().is_some()
    }

    fn frozen_terminal(&self) -> Option<Terminal> {
        self.terminal.filter(|_| self.freeze_on_win)
    }

    fn player_mut(&mut self, side: Side) -> &mut PlayerInfo {
        match side {
            Side::Black => &mut self.black,
            Side::Green => &mut self.green,
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, active_side: Side) {
        self.board = board;
        self.active_side = active_side;
        self.selection = None;
        self.terminal = None;
    }

    #[cfg(test)]
    fn set_pieces_remaining_for_test(&mut self, side: Side, pieces_remaining: u8) {
        self.player_mut(side).pieces_remaining = pieces_remaining;
    }
}

impl Default for GameInstance {
    fn default() -> Self {
        Self::new_game()
    }
}
