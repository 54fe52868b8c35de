//! The challenge board: goals that award points when met.
//!
//! Challenges come from a [`ChallengeLadder`] that cycles through three
//! families (money, event sightings, chicken count) and makes each family
//! harder every time it is drawn. The [`ChallengeHandler`] keeps the board
//! topped up to its cap and pays out completed challenges exactly once.

use std::fmt;

use farmer_types::{ChallengeSummary, EventKind};

/// Upper bound on replenish/check rounds in one [`ChallengeHandler::check_challenges`].
pub const CHECK_ROUND_LIMIT: u32 = 64;

/// The parts of a game that challenge goals are measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChallengeProgress {
    /// Player money.
    pub money: u32,
    /// Chickens in the current coop.
    pub chickens: u32,
}

// ---------------------------------------------------------------------------
// Challenges
// ---------------------------------------------------------------------------

/// What a challenge asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeKind {
    /// Hold at least `goal` money.
    Money {
        /// Money threshold.
        goal: u32,
    },
    /// See `event` fire on `goal` day-ends while the challenge is active.
    EventCount {
        /// The event to watch for.
        event: EventKind,
        /// Sightings needed.
        goal: u32,
        /// Sightings so far.
        seen: u32,
    },
    /// Keep at least `goal` chickens in the current coop.
    ChickenCount {
        /// Chicken threshold.
        goal: u32,
    },
}

/// A single goal on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    kind: ChallengeKind,
    reward: u32,
}

impl Challenge {
    /// Have at least `goal` money.
    pub const fn money(goal: u32, reward: u32) -> Self {
        Self {
            kind: ChallengeKind::Money { goal },
            reward,
        }
    }

    /// See `event` on `goal` day-ends.
    pub const fn event_count(event: EventKind, goal: u32, reward: u32) -> Self {
        Self {
            kind: ChallengeKind::EventCount {
                event,
                goal,
                seen: 0,
            },
            reward,
        }
    }

    /// Have at least `goal` chickens.
    pub const fn chicken_count(goal: u32, reward: u32) -> Self {
        Self {
            kind: ChallengeKind::ChickenCount { goal },
            reward,
        }
    }

    /// The goal and its running tally.
    pub const fn kind(&self) -> ChallengeKind {
        self.kind
    }

    /// Points awarded on completion.
    pub const fn reward(&self) -> u32 {
        self.reward
    }

    /// Goal description shown on the board.
    pub fn text(&self) -> String {
        self.to_string()
    }

    /// Whether the goal is met.
    pub const fn is_finished(&self, progress: ChallengeProgress) -> bool {
        match self.kind {
            ChallengeKind::Money { goal } => progress.money >= goal,
            ChallengeKind::EventCount { goal, seen, .. } => seen >= goal,
            ChallengeKind::ChickenCount { goal } => progress.chickens >= goal,
        }
    }

    /// Count today's sightings of the watched event.
    pub fn log_day_end(&mut self, todays_events: &[EventKind]) {
        if let ChallengeKind::EventCount { event, seen, .. } = &mut self.kind {
            let sightings = todays_events.iter().filter(|&&fired| fired == *event).count();
            let sightings = u32::try_from(sightings).unwrap_or(u32::MAX);
            *seen = seen.saturating_add(sightings);
        }
    }

    /// Board projection for snapshots.
    pub fn summary(&self) -> ChallengeSummary {
        ChallengeSummary {
            text: self.text(),
            reward: self.reward,
        }
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ChallengeKind::Money { goal } => write!(f, "Have over ${goal}."),
            ChallengeKind::EventCount { event, goal, .. } => write!(f, "See {event} {goal} times."),
            ChallengeKind::ChickenCount { goal } => write!(f, "Have {goal} chickens."),
        }
    }
}

// ---------------------------------------------------------------------------
// Ladder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Family {
    #[default]
    Money,
    Event,
    Chicken,
}

/// Endless round-robin source of ever harder challenges.
///
/// The `n`-th draw of a family (1-based) yields:
///
/// - money: have $200 x 2^(n-1)
/// - event: see Rain (odd `n`) or Worm (even `n`) `n` times
/// - chicken: have `n + 2` chickens
///
/// and always rewards `n` points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChallengeLadder {
    next_family: Family,
    money_level: u32,
    event_level: u32,
    chicken_level: u32,
}

impl ChallengeLadder {
    /// A ladder at the bottom rung of every family.
    pub fn new() -> Self {
        Self::default()
    }

    fn money(&mut self) -> Challenge {
        self.money_level = self.money_level.saturating_add(1);
        let level = self.money_level;
        let factor = 2_u32.saturating_pow(level.saturating_sub(1));
        Challenge::money(200_u32.saturating_mul(factor), level)
    }

    fn event(&mut self) -> Challenge {
        self.event_level = self.event_level.saturating_add(1);
        let level = self.event_level;
        let event = if level.checked_rem(2) == Some(1) {
            EventKind::Rain
        } else {
            EventKind::Worm
        };
        Challenge::event_count(event, level, level)
    }

    fn chicken(&mut self) -> Challenge {
        self.chicken_level = self.chicken_level.saturating_add(1);
        let level = self.chicken_level;
        Challenge::chicken_count(level.saturating_add(2), level)
    }
}

impl Iterator for ChallengeLadder {
    type Item = Challenge;

    fn next(&mut self) -> Option<Challenge> {
        let challenge = match self.next_family {
            Family::Money => {
                self.next_family = Family::Event;
                self.money()
            }
            Family::Event => {
                self.next_family = Family::Chicken;
                self.event()
            }
            Family::Chicken => {
                self.next_family = Family::Money;
                self.chicken()
            }
        };
        Some(challenge)
    }
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// The active challenge board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeHandler {
    challenges: Vec<Challenge>,
    active_cap: Option<usize>,
    ladder: ChallengeLadder,
}

impl ChallengeHandler {
    /// An empty board. A capped board fills itself from the ladder on the
    /// first [`replenish`](Self::replenish); an uncapped one only ever holds
    /// what [`add_challenge`](Self::add_challenge) puts there.
    pub fn new(active_cap: Option<usize>) -> Self {
        Self {
            challenges: Vec::new(),
            active_cap,
            ladder: ChallengeLadder::new(),
        }
    }

    /// Maximum number of challenges examined and kept active.
    pub const fn active_cap(&self) -> Option<usize> {
        self.active_cap
    }

    /// Put a challenge at the end of the board.
    pub fn add_challenge(&mut self, challenge: Challenge) {
        self.challenges.push(challenge);
    }

    /// Active challenges in board order.
    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    /// Top the board up to its cap from the ladder.
    pub fn replenish(&mut self) {
        let Some(cap) = self.active_cap else {
            return;
        };
        while self.challenges.len() < cap {
            let Some(challenge) = self.ladder.next() else {
                break;
            };
            self.challenges.push(challenge);
        }
    }

    /// Feed today's fired events to every event challenge.
    pub fn log_day_end(&mut self, todays_events: &[EventKind]) {
        for challenge in &mut self.challenges {
            challenge.log_day_end(todays_events);
        }
    }

    /// Pay out every completed challenge. Returns the points awarded.
    ///
    /// Each round replenishes the board, examines the first `active_cap`
    /// challenges, and removes all that are finished in one sweep. Rounds
    /// repeat until one finds nothing, so a freshly drawn challenge that is
    /// already met is paid out too. A removed challenge can never pay twice.
    pub fn check_challenges(&mut self, progress: ChallengeProgress) -> u32 {
        let mut total: u32 = 0;
        for _ in 0..CHECK_ROUND_LIMIT {
            self.replenish();
            let (completed, awarded) = self.sweep_finished(progress);
            if completed == 0 {
                return total;
            }
            total = total.saturating_add(awarded);
        }
        tracing::warn!(
            rounds = CHECK_ROUND_LIMIT,
            awarded = total,
            "Challenge check hit its round limit"
        );
        total
    }

    fn examined(&self) -> usize {
        self.active_cap
            .map_or(self.challenges.len(), |cap| cap.min(self.challenges.len()))
    }

    /// Remove finished challenges among the examined prefix. Returns how
    /// many were removed and the points they carried.
    fn sweep_finished(&mut self, progress: ChallengeProgress) -> (usize, u32) {
        let examined = self.examined();
        let mut completed: usize = 0;
        let mut awarded: u32 = 0;
        let mut index: usize = 0;
        self.challenges.retain(|challenge| {
            let in_view = index < examined;
            index = index.saturating_add(1);
            if in_view && challenge.is_finished(progress) {
                tracing::debug!(
                    challenge = %challenge,
                    reward = challenge.reward(),
                    "Challenge completed"
                );
                completed = completed.saturating_add(1);
                awarded = awarded.saturating_add(challenge.reward());
                return false;
            }
            true
        });
        (completed, awarded)
    }
}
