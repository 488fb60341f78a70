//! Match coordinator / turn state machine.
//!
//! All mutation of shared match state - hands, pile, challenge, tap
//! window - funnels through `MatchEngine`. The engine processes one event
//! at a time: an external input (play, tap, new match) or a due timer.
//! The host drives the clock with [`MatchEngine::advance`]; during an
//! advance the clock moves to each due timer's fire time before dispatch,
//! so AI tap timestamps and tie-break arbitration are exact and
//! reproducible from the seed.
//!
//! ## Staleness discipline
//!
//! Every scheduled timer carries the token that was current when it was
//! scheduled: `turn_token` for play-loop timers, the tap-window
//! generation for reaction/tie-break/grace timers, `pause_token` for
//! choreography pauses. Any state-changing transition bumps the relevant
//! token, so a timer that outlived its context is dropped at dispatch.
//! Teardown sets a shutdown flag and clears the queue outright.

use std::time::Duration;

use im::Vector;

use crate::ai::{default_assist, preset_profiles, AiProfile};
use crate::cards::{Card, Deck};
use crate::challenge::{ChallengeOutcome, ChallengeState};
use crate::core::{EngineError, GameRng, MatchConfig, SeatId, SeatMap, SEAT_COUNT};
use crate::events::{AwardReason, MatchEvent, MatchObserver};
use crate::players::Player;
use crate::tap::{TapEngine, TapVerdict};
use crate::timers::{Timer, TimerQueue};

/// Overall match state. Exactly one is active at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchState {
    /// Shuffling and dealing; no input processed.
    Dealing,
    /// The current seat plays its top card under a turn timeout.
    NormalPlay,
    /// A face-card challenge is awaiting; the play loop continues with
    /// chances ticking down.
    Challenge,
    /// A pattern is claimable; no turn timeout runs.
    TapWindow,
    /// A false-tap penalty is being choreographed.
    MisTapPause,
    /// Post-award settle delay.
    PileClearPause,
    /// Terminal until the next match starts.
    GameOver,
}

/// The deterministic match coordinator.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use tapjack::core::MatchConfig;
/// use tapjack::game::{MatchEngine, MatchState};
///
/// let mut engine = MatchEngine::new();
/// engine
///     .start_new_game(MatchConfig {
///         seed: Some(42),
///         ..MatchConfig::default()
///     })
///     .unwrap();
///
/// assert_eq!(engine.state(), MatchState::NormalPlay);
/// engine.advance(Duration::from_secs(5));
/// ```
pub struct MatchEngine {
    config: MatchConfig,
    rng: GameRng,
    now: Duration,
    timers: TimerQueue,
    deck: Deck,
    seats: SeatMap<Player>,
    profiles: SeatMap<Option<AiProfile>>,
    pile: Vector<Card>,
    state: MatchState,
    current: SeatId,
    eliminated: SeatMap<bool>,
    tap: TapEngine,
    challenge: ChallengeState,
    turn_token: u64,
    pause_token: u64,
    resume_state: MatchState,
    grace_award: Option<SeatId>,
    winner: Option<SeatId>,
    shutting_down: bool,
    paused: bool,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl MatchEngine {
    /// Create an idle engine. No match is running until
    /// [`MatchEngine::start_new_game`].
    #[must_use]
    pub fn new() -> Self {
        let config = MatchConfig::default();
        Self {
            tap: TapEngine::new(
                config.enable_doubles,
                config.enable_sandwiches,
                Duration::from_secs_f64(config.tie_break_window_s),
            ),
            config,
            rng: GameRng::new(0),
            now: Duration::ZERO,
            timers: TimerQueue::new(),
            deck: Deck::new(),
            seats: SeatMap::new(|seat| {
                Player::new(format!("Seat {}", seat.index()), seat.is_human(), Vector::new(), 0)
            }),
            profiles: SeatMap::with_value(None),
            pile: Vector::new(),
            state: MatchState::Dealing,
            current: SeatId::HUMAN,
            eliminated: SeatMap::with_value(false),
            challenge: ChallengeState::idle(),
            turn_token: 0,
            pause_token: 0,
            resume_state: MatchState::NormalPlay,
            grace_award: None,
            winner: None,
            shutting_down: false,
            paused: false,
            observers: Vec::new(),
        }
    }

    /// Register an observer. Observers are resolved at construction time;
    /// there is no capability probing later.
    pub fn subscribe(&mut self, observer: Box<dyn MatchObserver>) {
        self.observers.push(observer);
    }

    // === Match lifecycle ===

    /// Start a new match with the preset opponent profiles for the
    /// configured difficulty.
    pub fn start_new_game(&mut self, config: MatchConfig) -> Result<(), EngineError> {
        let profiles = preset_profiles(config.difficulty);
        self.start_new_game_with_profiles(config, profiles)
    }

    /// Start a new match with explicit opponent profiles.
    pub fn start_new_game_with_profiles(
        &mut self,
        config: MatchConfig,
        profiles: [AiProfile; 3],
    ) -> Result<(), EngineError> {
        config.validate()?;
        for profile in &profiles {
            profile.validate()?;
        }

        self.reset_match_state(&config);
        self.deck.reset();
        self.deck.shuffle(&mut self.rng);
        let mut hands = self.deck.deal(SEAT_COUNT)?.into_iter();
        let dealt = std::array::from_fn(|_| hands.next().unwrap_or_default());

        let starting = SeatId::new(self.rng.gen_range_usize(0..SEAT_COUNT) as u8);
        self.seat_players(profiles, dealt);
        self.open_play(starting);
        Ok(())
    }

    /// Start a match from explicit hands, skipping shuffle and deal.
    ///
    /// For scripted harnesses and tests: hand contents and the starting
    /// seat are exactly as given, while AI timing still samples from the
    /// seeded RNG.
    pub fn start_scripted_game(
        &mut self,
        config: MatchConfig,
        profiles: [AiProfile; 3],
        hands: [Vec<Card>; 4],
        starting_seat: SeatId,
    ) -> Result<(), EngineError> {
        config.validate()?;
        for profile in &profiles {
            profile.validate()?;
        }

        self.reset_match_state(&config);
        let dealt = hands.map(Vector::from);
        self.seat_players(profiles, dealt);
        self.open_play(starting_seat);
        Ok(())
    }

    fn reset_match_state(&mut self, config: &MatchConfig) {
        self.shutting_down = false;
        self.paused = false;
        self.state = MatchState::Dealing;
        self.timers.clear();
        self.bump_turn_token();
        self.pause_token += 1;
        self.now = Duration::ZERO;
        self.rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        self.config = config.clone();
        self.tap = TapEngine::new(
            config.enable_doubles,
            config.enable_sandwiches,
            Duration::from_secs_f64(config.tie_break_window_s),
        );
        self.pile = Vector::new();
        self.challenge.reset();
        self.eliminated = SeatMap::with_value(false);
        self.grace_award = None;
        self.winner = None;
    }

    fn seat_players(&mut self, profiles: [AiProfile; 3], hands: [Vector<Card>; 4]) {
        let allowance = self.config.tap_challenge_allowance;
        let [h0, h1, h2, h3] = hands;
        let [p1, p2, p3] = profiles;

        self.seats = SeatMap::from([
            Player::new("You", true, h0, allowance),
            Player::new(p1.name.clone(), false, h1, allowance),
            Player::new(p2.name.clone(), false, h2, allowance),
            Player::new(p3.name.clone(), false, h3, allowance),
        ]);
        self.profiles = SeatMap::from([None, Some(p1), Some(p2), Some(p3)]);
    }

    fn open_play(&mut self, starting: SeatId) {
        let seed = self.rng.seed();
        self.emit(MatchEvent::Status {
            message: format!("New match (seed {})", seed),
        });
        self.emit(MatchEvent::PileChanged { top: None });

        let (mult, add) = default_assist(self.config.difficulty);
        if self.tap.set_assist(mult, add) {
            let active = self.tap.assist_active();
            self.emit(MatchEvent::DdsActiveChanged { active });
        }

        self.current = starting;
        self.state = MatchState::NormalPlay;
        self.begin_turn();
    }

    /// Tear the match down. Invalidates every in-flight timer; all
    /// subsequent input and clock advance is ignored.
    pub fn shutdown(&mut self) {
        self.shutting_down = true;
        self.timers.clear();
        self.tap.close_window();
        tracing::debug!("engine shut down");
    }

    /// Freeze or unfreeze the clock. While paused, `advance` is a no-op
    /// and driven inputs are ignored; scheduled timers keep their fire
    /// times.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Set assist modifiers for AI reaction scheduling: a reaction-time
    /// multiplier (clamped to at least 0.5) and an additive delay
    /// (clamped non-negative). Collaborators decide when to apply these.
    pub fn set_assist(&mut self, multiplier: f64, additive_delay_s: f64) {
        if self.tap.set_assist(multiplier, additive_delay_s) {
            let active = self.tap.assist_active();
            self.emit(MatchEvent::DdsActiveChanged { active });
        }
    }

    // === Clock ===

    /// Advance the match clock, dispatching every timer due in the
    /// elapsed span in fire-time order.
    pub fn advance(&mut self, dt: Duration) {
        if self.shutting_down || self.paused {
            return;
        }
        let target = self.now + dt;
        while let Some((fire_at, timer)) = self.timers.pop_due(target) {
            if self.shutting_down {
                return;
            }
            // Callbacks observe the instant they were scheduled for.
            self.now = fire_at;
            self.dispatch(timer);
        }
        if !self.shutting_down {
            self.now = target;
        }
    }

    fn dispatch(&mut self, timer: Timer) {
        tracing::trace!(?timer, now = ?self.now, "dispatch");
        match timer {
            Timer::TurnTimeout { token } => {
                if token == self.turn_token && self.in_play_loop() {
                    self.force_play();
                }
            }
            Timer::AiPlay { seat, token } => {
                if token == self.turn_token
                    && seat == self.current
                    && self.in_play_loop()
                    && !self.eliminated[seat]
                {
                    self.voluntary_play();
                }
            }
            Timer::TapReaction { seat, window } => {
                if window == self.tap.generation() && self.tap.is_open() && !self.eliminated[seat] {
                    let miss = self.profiles[seat]
                        .as_ref()
                        .map_or(0.0, |p| p.miss_tap_probability);
                    if !self.rng.gen_bool(miss) {
                        self.attempt_tap_at(seat);
                    }
                }
            }
            Timer::FalseTapUrge { seat, token } => {
                if token == self.turn_token && self.in_play_loop() && !self.eliminated[seat] {
                    self.attempt_tap_at(seat);
                }
            }
            Timer::TieBreak { window } => {
                if let Some(winner) = self.tap.resolve_tie_break(window) {
                    self.emit(MatchEvent::TapWindowClosed);
                    self.award_pile(winner, AwardReason::Tap);
                }
            }
            Timer::GraceExpiry { window } => {
                if window == self.tap.generation() && self.tap.is_open() {
                    // A pending lone attempt beats the forfeit.
                    if let Some(winner) = self.tap.resolve_tie_break(window) {
                        self.emit(MatchEvent::TapWindowClosed);
                        self.award_pile(winner, AwardReason::Tap);
                    } else {
                        self.tap.close_window();
                        self.emit(MatchEvent::TapWindowClosed);
                        if let Some(initiator) = self.grace_award.take() {
                            self.award_pile(initiator, AwardReason::Challenge);
                        }
                    }
                }
            }
            Timer::PauseOver { token } => {
                if token == self.pause_token
                    && matches!(self.state, MatchState::MisTapPause | MatchState::PileClearPause)
                {
                    self.end_pause();
                }
            }
        }
    }

    fn in_play_loop(&self) -> bool {
        matches!(self.state, MatchState::NormalPlay | MatchState::Challenge)
    }

    // === Driven inputs ===

    /// Play the current seat's top card. Human input only: ignored unless
    /// the current seat is the human seat and the play loop is active.
    pub fn play_current_top(&mut self) {
        if self.shutting_down || self.paused || !self.in_play_loop() {
            return;
        }
        if !self.seats[self.current].is_human {
            return;
        }
        self.voluntary_play();
    }

    /// Attempt a tap for a seat. Callable at any time by any active seat;
    /// outside an open window this is a false tap (penalized while the
    /// seat's allowance lasts, silently ignored after).
    pub fn attempt_tap(&mut self, seat: SeatId) {
        if self.paused {
            return;
        }
        self.attempt_tap_at(seat);
    }

    /// Award the pile outside tap resolution (the challenge-forfeit
    /// path). Safe no-op on an empty pile.
    pub fn award_pile_to(&mut self, seat: SeatId) {
        if self.shutting_down || matches!(self.state, MatchState::GameOver | MatchState::Dealing) {
            return;
        }
        self.award_pile(seat, AwardReason::Challenge);
    }

    fn attempt_tap_at(&mut self, seat: SeatId) {
        if self.shutting_down
            || matches!(
                self.state,
                MatchState::GameOver
                    | MatchState::Dealing
                    | MatchState::MisTapPause
                    | MatchState::PileClearPause
            )
        {
            return;
        }
        if self.eliminated[seat] {
            return;
        }

        let is_human = self.seats[seat].is_human;
        match self.tap.register_attempt(seat, is_human, self.now) {
            TapVerdict::FalseTap => {
                if !self.seats[seat].spend_tap_challenge() {
                    // Allowance exhausted: idempotent no-op.
                    return;
                }
                self.emit(MatchEvent::FalseTap { seat });
                self.apply_false_tap_penalty(seat);
            }
            TapVerdict::Pending { resolve_at } => {
                let window = self.tap.generation();
                self.timers.schedule(resolve_at, Timer::TieBreak { window });
            }
            TapVerdict::Winner(winner) => {
                self.emit(MatchEvent::TapWindowClosed);
                self.award_pile(winner, AwardReason::Tap);
            }
        }
    }

    // === Play pipeline ===

    fn voluntary_play(&mut self) {
        self.play_from_current(true);
    }

    fn force_play(&mut self) {
        let name = self.seats[self.current].name.clone();
        self.emit(MatchEvent::Status {
            message: format!("{} ran out of time", name),
        });
        self.play_from_current(false);
    }

    fn play_from_current(&mut self, voluntary: bool) {
        let seat = self.current;
        let Some(card) = self.seats[seat].play_top() else {
            // Defensive: the turn loop never lands on an empty seat.
            self.advance_turn_and_begin();
            return;
        };

        self.pile.push_back(card);
        self.emit(MatchEvent::CardPlayed {
            seat,
            card: card.label(),
        });
        self.emit(MatchEvent::PileChanged {
            top: Some(card.label()),
        });

        if voluntary {
            let total = self.seats[seat].add_score(1);
            self.emit(MatchEvent::ScoreAwarded {
                seat,
                delta: 1,
                reason: "play".into(),
                total,
            });
        }

        self.after_card_added(seat, card);
    }

    fn after_card_added(&mut self, seat: SeatId, card: Card) {
        let pattern = self.tap.detect(&self.pile);

        // A non-matching addition lapses any open window (reachable only
        // through forced flows while a window is up).
        if pattern.is_none() && self.tap.is_open() {
            self.tap.close_window();
            self.grace_award = None;
            self.emit(MatchEvent::TapWindowClosed);
        }

        let mut forfeit: Option<SeatId> = None;
        if self.challenge.awaiting() {
            if card.is_face() {
                self.emit(MatchEvent::ChallengePassed { seat });
                let chances = card.challenge_chances();
                self.challenge.start(chances, seat);
                self.emit(MatchEvent::ChallengeStarted { seat, chances });
            } else {
                match self.challenge.on_non_face_played(seat) {
                    ChallengeOutcome::Continue { remaining } => {
                        self.emit(MatchEvent::Status {
                            message: format!("{} chances left", remaining),
                        });
                    }
                    ChallengeOutcome::Fail { initiator } => {
                        self.emit(MatchEvent::ChallengeFailed { initiator });
                        forfeit = Some(initiator);
                    }
                }
            }
        } else if card.is_face() {
            let chances = card.challenge_chances();
            self.challenge.start(chances, seat);
            self.emit(MatchEvent::ChallengeStarted { seat, chances });
        }

        match (pattern, forfeit) {
            (Some(_), grace) => self.enter_tap_window(grace),
            (None, Some(initiator)) => self.award_pile(initiator, AwardReason::Challenge),
            (None, None) => {
                self.state = if self.challenge.awaiting() {
                    MatchState::Challenge
                } else {
                    MatchState::NormalPlay
                };
                if !self.check_game_over() {
                    self.advance_turn_and_begin();
                }
            }
        }
    }

    fn enter_tap_window(&mut self, grace: Option<SeatId>) {
        self.state = MatchState::TapWindow;
        self.grace_award = grace;
        self.bump_turn_token();

        let window = self.tap.open_window();
        self.emit(MatchEvent::TapWindowOpened);

        for seat in SeatId::all() {
            if seat.is_human() || self.eliminated[seat] {
                continue;
            }
            let Some(profile) = self.profiles[seat].as_ref() else {
                continue;
            };
            let base = profile
                .sample_tap_reaction(&mut self.rng)
                .max(self.config.ai_tap_reaction_floor_s);
            let delay = self.tap.scale_reaction(base);
            self.timers
                .schedule(self.now + secs(delay), Timer::TapReaction { seat, window });
        }

        if grace.is_some() {
            self.timers.schedule(
                self.now + secs(self.config.tap_grace_window_s),
                Timer::GraceExpiry { window },
            );
        }
    }

    // === Pile transfer ===

    fn award_pile(&mut self, seat: SeatId, reason: AwardReason) {
        self.grace_award = None;
        if self.pile.is_empty() {
            // Idempotent: no signal, no mutation.
            return;
        }

        let cards = self.pile.len() as u32;
        let value: i64 = self.pile.iter().map(|c| c.value()).sum();

        self.emit(MatchEvent::PileAwarded { seat });
        let captured: Vec<Card> = self.pile.iter().copied().collect();
        self.seats[seat].receive_cards(captured);
        self.pile.clear();
        self.emit(MatchEvent::PileChanged { top: None });
        self.emit(MatchEvent::PileCleared {
            seat,
            cards,
            value,
            reason,
        });

        let total = self.seats[seat].add_score(value);
        self.emit(MatchEvent::ScoreAwarded {
            seat,
            delta: value,
            reason: reason.label().into(),
            total,
        });

        if self.challenge.awaiting() {
            self.challenge.reset();
            self.emit(MatchEvent::ChallengeCleared);
        }

        self.tap.close_window();
        self.bump_turn_token();
        self.current = seat;

        if self.check_game_over() {
            return;
        }

        self.state = MatchState::PileClearPause;
        self.pause_token += 1;
        self.timers.schedule(
            self.now + secs(self.config.pile_clear_pause_s),
            Timer::PauseOver {
                token: self.pause_token,
            },
        );
    }

    // === False-tap penalty ===

    fn apply_false_tap_penalty(&mut self, seat: SeatId) {
        let held = self.seats[seat].card_count();
        let fine = self.seats[seat].penalty_two();
        // Front-insert so the earliest-discarded card ends up deepest.
        for card in fine.iter().rev() {
            self.pile.push_front(*card);
        }
        let name = self.seats[seat].name.clone();
        self.emit(MatchEvent::Status {
            message: format!("{} tapped wrong: {} card fine", name, fine.len()),
        });
        self.emit(MatchEvent::PileChanged {
            top: self.pile.last().map(|c| c.label()),
        });

        if held < 2 && self.seats[seat].is_empty() {
            self.eliminate(seat);
        }

        if self.check_game_over() {
            return;
        }

        // Suspend the play loop for the choreography pause.
        self.resume_state = self.state;
        self.state = MatchState::MisTapPause;
        self.bump_turn_token();
        self.pause_token += 1;
        self.timers.schedule(
            self.now + secs(self.config.mis_tap_pause_s),
            Timer::PauseOver {
                token: self.pause_token,
            },
        );
    }

    fn eliminate(&mut self, seat: SeatId) {
        self.eliminated[seat] = true;
        let name = self.seats[seat].name.clone();
        self.emit(MatchEvent::Status {
            message: format!("{} is out", name),
        });
    }

    fn end_pause(&mut self) {
        match self.state {
            MatchState::PileClearPause => {
                self.state = MatchState::NormalPlay;
            }
            MatchState::MisTapPause => {
                self.state = self.resume_state;
            }
            _ => return,
        }
        if self.check_game_over() {
            return;
        }
        if self.eliminated[self.current] || self.seats[self.current].is_empty() {
            self.advance_turn_and_begin();
        } else {
            self.begin_turn();
        }
    }

    // === Turn loop ===

    fn begin_turn(&mut self) {
        self.bump_turn_token();
        let token = self.turn_token;
        let seat = self.current;
        self.emit(MatchEvent::TurnChanged { seat });

        self.timers.schedule(
            self.now + secs(self.config.turn_timeout_s),
            Timer::TurnTimeout { token },
        );

        if let Some(profile) = self.profiles[seat].as_ref() {
            let mut delay = profile.sample_play_delay(&mut self.rng);
            if self.challenge.awaiting() {
                delay -= profile.face_focus_bias_s;
            }
            delay = delay.max(self.config.ai_play_delay_floor_s);
            // The reaction-assist multiplier also stretches play delays.
            delay *= self.tap.assist_multiplier();
            self.timers
                .schedule(self.now + secs(delay), Timer::AiPlay { seat, token });
        }

        self.schedule_false_tap_urges(token);
    }

    fn schedule_false_tap_urges(&mut self, token: u64) {
        for seat in SeatId::all() {
            if seat == self.current || seat.is_human() || self.eliminated[seat] {
                continue;
            }
            let Some(profile) = self.profiles[seat].as_ref() else {
                continue;
            };
            let rate = profile.false_tap_per_second;
            if rate <= 0.0 {
                continue;
            }
            let p = (rate * self.config.turn_timeout_s).min(1.0);
            if self.rng.gen_bool(p) {
                let at = self.rng.gen_range_f64(0.0, self.config.turn_timeout_s);
                self.timers
                    .schedule(self.now + secs(at), Timer::FalseTapUrge { seat, token });
            }
        }
    }

    fn advance_turn_and_begin(&mut self) {
        let mut seat = self.current;
        for _ in 0..SEAT_COUNT {
            seat = seat.next();
            if self.eliminated[seat] {
                continue;
            }
            if self.seats[seat].is_empty() {
                if self.state == MatchState::Challenge {
                    let _ = self.challenge.on_player_empty(seat);
                    let name = self.seats[seat].name.clone();
                    self.emit(MatchEvent::Status {
                        message: format!("{} has no cards, challenge passes on", name),
                    });
                }
                continue;
            }
            self.current = seat;
            self.begin_turn();
            return;
        }
        // No playable seat found: the game-over checks own this case.
        tracing::debug!("no playable seat in rotation");
    }

    // === Win detection ===

    fn check_game_over(&mut self) -> bool {
        if self.state == MatchState::GameOver {
            return true;
        }

        let active: Vec<SeatId> = SeatId::all().filter(|&s| !self.eliminated[s]).collect();
        if active.len() == 1 {
            self.finish_game(active[0]);
            return true;
        }

        let holders: Vec<SeatId> = SeatId::all()
            .filter(|&s| !self.seats[s].is_empty())
            .collect();
        if holders.len() == 1 {
            // Covers both "one seat holds any cards" and "winner holds
            // all 52 after a clear".
            self.finish_game(holders[0]);
            return true;
        }

        let human = &self.seats[SeatId::HUMAN];
        if human.is_empty() && human.tap_challenges_left() == 0 {
            let winner = holders
                .iter()
                .copied()
                .find(|s| !s.is_human())
                .or_else(|| {
                    SeatId::all()
                        .filter(|s| !s.is_human())
                        .max_by_key(|&s| (self.seats[s].score(), std::cmp::Reverse(s.index())))
                });
            if let Some(winner) = winner {
                self.finish_game(winner);
                return true;
            }
        }

        false
    }

    fn finish_game(&mut self, winner: SeatId) {
        self.state = MatchState::GameOver;
        self.winner = Some(winner);
        self.bump_turn_token();
        self.pause_token += 1;
        self.timers.clear();
        self.tap.close_window();

        let name = self.seats[winner].name.clone();
        self.emit(MatchEvent::Status {
            message: format!("{} wins the match", name),
        });
        self.emit(MatchEvent::GameOver { winner });
        tracing::debug!(winner = winner.index(), "game over");
    }

    // === Internals ===

    fn bump_turn_token(&mut self) {
        self.turn_token += 1;
    }

    fn emit(&mut self, event: MatchEvent) {
        for observer in self.observers.iter_mut() {
            observer.on_event(&event);
        }
    }

    // === Accessors ===

    /// Current match state.
    #[must_use]
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_seat(&self) -> SeatId {
        self.current
    }

    /// A seat's player state.
    #[must_use]
    pub fn player(&self, seat: SeatId) -> &Player {
        &self.seats[seat]
    }

    /// The center pile, bottom first.
    #[must_use]
    pub fn pile(&self) -> &Vector<Card> {
        &self.pile
    }

    /// Whether a seat has been eliminated.
    #[must_use]
    pub fn is_eliminated(&self, seat: SeatId) -> bool {
        self.eliminated[seat]
    }

    /// Winner of a finished match.
    #[must_use]
    pub fn winner(&self) -> Option<SeatId> {
        self.winner
    }

    /// The seed this match runs on, for reproducibility reporting.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Match clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Whether a tap window is currently open.
    #[must_use]
    pub fn tap_window_open(&self) -> bool {
        self.tap.is_open()
    }

    /// The challenge tracker.
    #[must_use]
    pub fn challenge(&self) -> &ChallengeState {
        &self.challenge
    }

    /// The resolved configuration of the running match.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn secs(s: f64) -> Duration {
    Duration::from_secs_f64(s.max(0.0))
}
