//! The Set game engine.

use log::{debug, info, trace};

use crate::cards::{shuffled_deck, Card, CardId};
use crate::core::{Action, ActionRecord, GameConfig, GameRng, GameSnapshot, GameState, MatchAdvance};
use crate::error::GameError;
use crate::rules::{
    contains_set, find_sets, transition, ActionOutcome, CardStatus, GameResult, RulesEngine, Selection,
    SelectionState, Step, SET_SIZE,
};
use crate::zones::Zone;

/// One game of Set, plus the session it belongs to.
///
/// All mutation goes through the command methods (or `apply_action`);
/// queries return owned cards with matched flags filled in.
#[derive(Clone, Debug)]
pub struct SetGame {
    config: GameConfig,
    state: GameState,
}

/// Builder for creating a SetGame.
#[derive(Clone, Debug, Default)]
pub struct SetGameBuilder {
    config: GameConfig,
}

impl SetGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards dealt onto an empty board.
    pub fn starting_deal(mut self, count: usize) -> Self {
        self.config.starting_deal = count;
        self
    }

    /// Cards dealt onto a non-empty board.
    pub fn refill_deal(mut self, count: usize) -> Self {
        self.config.refill_deal = count;
        self
    }

    pub fn match_advance(mut self, policy: MatchAdvance) -> Self {
        self.config.match_advance = policy;
        self
    }

    /// Deal a refill whenever a tap discards a set.
    pub fn refill_after_match(mut self, refill: bool) -> Self {
        self.config.refill_after_match = refill;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the game with a seeded deck; the first game is started.
    pub fn build(self, seed: u64) -> Result<SetGame, GameError> {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build the game with an entropy-seeded deck.
    pub fn build_unseeded(self) -> Result<SetGame, GameError> {
        self.build_with_rng(GameRng::from_entropy())
    }

    fn build_with_rng(self, rng: GameRng) -> Result<SetGame, GameError> {
        self.config.validate()?;
        Ok(SetGame::start(self.config, rng))
    }
}

impl SetGame {
    /// A game with the standard rules and a seeded deck.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::start(GameConfig::default(), GameRng::new(seed))
    }

    /// A game with the standard rules and an entropy-seeded deck.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::start(GameConfig::default(), GameRng::from_entropy())
    }

    fn start(config: GameConfig, rng: GameRng) -> Self {
        let mut game = Self {
            config,
            state: GameState::new(rng),
        };
        game.start_game();
        game
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Full state, for inspection.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Seed of the session's RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.state.rng.seed()
    }

    // === Commands ===

    /// Shuffle a new deck and clear the board, discard pile, selection and
    /// score.
    pub fn new_game(&mut self) {
        self.start_game();
        self.record(Action::NewGame);
    }

    /// Tap a card on the board.
    ///
    /// Returns the selection state after the tap. A card that is not on the
    /// board is rejected with `CardNotOnBoard` and nothing changes.
    pub fn select_card(&mut self, card: impl Into<CardId>) -> Result<SelectionState, GameError> {
        let card = card.into();
        if !self.state.zones.is_in_zone(card, Zone::Board) {
            trace!("ignoring tap on {card}, not on the board");
            return Err(GameError::CardNotOnBoard(card));
        }

        let step = transition(self.state.selection(), card, self.config.match_advance);
        let new_state = self.apply_step(step);
        self.record(Action::SelectCard(card));
        Ok(new_state)
    }

    /// Deal from the front of the deck: the starting spread onto an empty
    /// board, otherwise a refill.
    ///
    /// Returns how many cards were dealt (0 once the deck is empty).
    pub fn deal_cards(&mut self) -> usize {
        let dealt = self.deal();
        self.record(Action::DealCards);
        dealt
    }

    /// Discard a confirmed set if there is one, then deal.
    ///
    /// Returns how many cards were dealt.
    pub fn deal_more_cards(&mut self) -> usize {
        self.discard_matched();
        let dealt = self.deal();
        self.record(Action::DealMoreCards);
        dealt
    }

    /// Move a confirmed set from the board to the discard pile.
    ///
    /// Returns the discarded set, or `None` (and does nothing) when the
    /// selection is not a confirmed match.
    pub fn discard_matched_cards(&mut self) -> Option<[CardId; SET_SIZE]> {
        let discarded = self.discard_matched();
        self.record(Action::DiscardMatched);
        discarded
    }

    // === Queries ===

    /// Cards left to deal, front first.
    #[must_use]
    pub fn deck(&self) -> Vec<Card> {
        self.state.cards_in(Zone::Deck)
    }

    /// Face-up cards, in deal order.
    #[must_use]
    pub fn board(&self) -> Vec<Card> {
        self.state.cards_in(Zone::Board)
    }

    /// Discarded sets, oldest first.
    #[must_use]
    pub fn discard(&self) -> Vec<Card> {
        self.state.cards_in(Zone::Discard)
    }

    /// Current picks, in pick order.
    #[must_use]
    pub fn selected_cards(&self) -> Vec<Card> {
        self.state.selected_cards()
    }

    /// Sets found this game.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    /// How a card should be shown.
    #[must_use]
    pub fn card_status(&self, card: impl Into<CardId>) -> CardStatus {
        self.state.card_status(card.into())
    }

    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.state.selection().state()
    }

    /// Whether a card is face-up on the board.
    #[must_use]
    pub fn is_on_board(&self, card: impl Into<CardId>) -> bool {
        self.state.zones.is_in_zone(card.into(), Zone::Board)
    }

    /// The first set on the board, if there is one.
    #[must_use]
    pub fn hint(&self) -> Option<[Card; SET_SIZE]> {
        find_sets(&self.board()).into_iter().next()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Every action applied in this session.
    ///
    /// `new_game` does not clear it, so a long session keeps growing; use
    /// `clear_history` to drop it. A cleared history no longer replays from
    /// the seed.
    #[must_use]
    pub fn history(&self) -> &im::Vector<ActionRecord> {
        self.state.history()
    }

    /// Forget the recorded actions. Game state is unchanged.
    pub fn clear_history(&mut self) {
        self.state.clear_history();
    }

    // === Internals ===

    fn start_game(&mut self) {
        let deck = shuffled_deck(&mut self.state.rng);
        self.state.reset(deck);
        info!(
            "game {} started with {} cards in the deck",
            self.state.game_number(),
            self.state.zones.zone_size(Zone::Deck)
        );
    }

    fn apply_step(&mut self, step: Step) -> SelectionState {
        let Step {
            selection,
            discard,
            scored,
        } = step;

        if scored {
            self.state.add_point();
            debug!("set found, score is now {}", self.state.score());
        }
        if let Some(triple) = discard {
            self.move_to_discard(triple);
        }

        let new_state = selection.state();
        debug!("selection {:?} -> {:?}", self.state.selection().state(), new_state);
        self.state.set_selection(selection);

        if discard.is_some() && self.config.refill_after_match {
            self.deal();
        }
        new_state
    }

    fn deal(&mut self) -> usize {
        let board_len = self.state.zones.zone_size(Zone::Board);
        let wanted = self.config.deal_size(board_len);
        let dealt = self.state.zones.move_front(Zone::Deck, Zone::Board, wanted);

        if dealt == 0 {
            trace!("deck is empty, nothing dealt");
        } else {
            debug!(
                "dealt {dealt} cards, {} on the board, {} left in the deck",
                board_len + dealt,
                self.state.zones.zone_size(Zone::Deck)
            );
        }
        dealt
    }

    fn discard_matched(&mut self) -> Option<[CardId; SET_SIZE]> {
        let Some(triple) = self.state.selection().matched() else {
            trace!("no confirmed set to discard");
            return None;
        };

        self.move_to_discard(triple);
        self.state.set_selection(Selection::new());
        Some(triple)
    }

    fn move_to_discard(&mut self, triple: [CardId; SET_SIZE]) {
        for card in triple {
            self.state.zones.move_to_zone(card, Zone::Discard);
        }
        debug!(
            "discarded {} {} {}, {} cards in the discard pile",
            triple[0],
            triple[1],
            triple[2],
            self.state.zones.zone_size(Zone::Discard)
        );
    }

    fn record(&mut self, action: Action) {
        let sequence = self.state.next_sequence();
        let game = self.state.game_number();
        self.state.record_action(ActionRecord::new(action, game, sequence));
    }
}

impl RulesEngine for SetGame {
    fn legal_actions(&self) -> Vec<Action> {
        let mut actions = vec![Action::NewGame];

        actions.extend(
            self.state
                .zones
                .cards_in_zone(Zone::Board)
                .iter()
                .map(|&card| Action::SelectCard(card)),
        );

        let deck_has_cards = self.state.zones.zone_size(Zone::Deck) > 0;
        let has_match = self.state.selection().matched().is_some();

        if deck_has_cards {
            actions.push(Action::DealCards);
        }
        if deck_has_cards || has_match {
            actions.push(Action::DealMoreCards);
        }
        if has_match {
            actions.push(Action::DiscardMatched);
        }

        actions
    }

    fn apply_action(&mut self, action: &Action) -> Result<ActionOutcome, GameError> {
        let outcome = match *action {
            Action::NewGame => {
                self.new_game();
                ActionOutcome::NewGame
            }
            Action::SelectCard(card) => ActionOutcome::Selected(self.select_card(card)?),
            Action::DealCards => ActionOutcome::Dealt(self.deal_cards()),
            Action::DealMoreCards => ActionOutcome::Dealt(self.deal_more_cards()),
            Action::DiscardMatched => ActionOutcome::Discarded(self.discard_matched_cards()),
        };
        Ok(outcome)
    }

    fn is_terminal(&self) -> Option<GameResult> {
        if self.state.zones.zone_size(Zone::Deck) > 0 || self.state.selection().matched().is_some() {
            return None;
        }

        let board = self.board();
        if contains_set(&board) {
            return None;
        }

        Some(GameResult {
            score: self.score(),
            cards_left: board.len(),
        })
    }
}
