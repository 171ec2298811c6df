// resources.rs
use std::time::Duration;

use bevy::prelude::*;

use crate::catalog::Trip;
use crate::events::{GameSummary, HudChanged};

pub const STARTING_LIVES: i32 = 3;
pub const SCORE_PER_CORRECT: u32 = 100;
pub const ROUND_PAUSE_SECS: f32 = 0.9;
pub const DEFAULT_DURATION: u32 = 60;
pub const DURATION_CHOICES: [u32; 3] = [15, 30, 60];

/// End reason shown when the third life is gone.
pub const OUT_OF_LIVES: &str = "No lives left!";

/// Which top-level screen is on display.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Menu,
    HowTo,
    Game,
}

/// Menu-editable settings, read once when a game starts.
#[derive(Resource)]
pub struct Settings {
    pub player_name: String,
    pub duration: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_name: String::new(),
            duration: DEFAULT_DURATION,
        }
    }
}

/// Where the session currently is. `AwaitingNext` is the short feedback
/// pause between a resolved round and the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    AwaitingNext,
    Ended,
}

/// The question currently on screen.
pub struct Round {
    pub trip: Trip,
    pub options: Vec<u32>,
}

/// What a one-second countdown tick amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, or no full second elapsed yet.
    Ignored,
    Counted,
    /// The clock hit zero: one life gone, clock restored.
    TimeUp,
    /// The clock hit zero on the last life.
    OutOfLives,
}

/// What submitting a fare amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// No round is accepting answers right now.
    Ignored,
    Correct,
    Wrong,
    /// Wrong, and it was the last life.
    WrongAndOut,
}

/// One play session from start to end screen.
///
/// All transitions go through the methods below; the systems only decide
/// which method to call and what events to publish afterwards. The two
/// timers only make progress in their own phase (`countdown` in `Running`,
/// `pause` in `AwaitingNext`), so a leftover pause can never fire into a
/// quit or restarted session.
#[derive(Resource)]
pub struct Session {
    pub phase: Phase,
    pub player_name: String,
    pub duration: u32,
    pub score: u32,
    pub lives: i32,
    pub time_left: u32,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub round: Option<Round>,
    countdown: Timer,
    pause: Timer,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            player_name: String::new(),
            duration: DEFAULT_DURATION,
            score: 0,
            lives: STARTING_LIVES,
            time_left: DEFAULT_DURATION,
            total_questions: 0,
            correct_answers: 0,
            round: None,
            countdown: Timer::from_seconds(1.0, TimerMode::Repeating),
            pause: Timer::from_seconds(ROUND_PAUSE_SECS, TimerMode::Once),
        }
    }
}

impl Session {
    /// Resets everything for a fresh game. Returns false (and changes
    /// nothing) when the trimmed name is empty.
    pub fn start(&mut self, name: &str, duration: u32) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.phase = Phase::Idle;
        self.player_name = name.to_string();
        self.duration = duration;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.time_left = duration;
        self.total_questions = 0;
        self.correct_answers = 0;
        self.round = None;
        self.countdown.reset();
        self.pause.reset();
        true
    }

    /// Puts a new question on the table and resumes the countdown.
    pub fn begin_round(&mut self, trip: Trip, options: Vec<u32>) {
        self.total_questions += 1;
        self.round = Some(Round { trip, options });
        self.countdown.reset();
        self.phase = Phase::Running;
    }

    /// Advances the countdown. The clock is only restored to the full
    /// duration when it runs out; answering does not touch it.
    pub fn tick(&mut self, delta: Duration) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Ignored;
        }
        self.countdown.tick(delta);
        let seconds = self.countdown.times_finished_this_tick();
        if seconds == 0 {
            return TickOutcome::Ignored;
        }
        self.time_left = self.time_left.saturating_sub(seconds);
        if self.time_left > 0 {
            return TickOutcome::Counted;
        }
        self.lives -= 1;
        if self.lives <= 0 {
            return TickOutcome::OutOfLives;
        }
        self.time_left = self.duration;
        TickOutcome::TimeUp
    }

    /// Scores a submitted fare against the current round. Submissions
    /// outside `Running` are dropped, which also swallows a second click
    /// landing during the feedback pause. A fare that is not on the
    /// table is dropped too; that is a stale button from the previous
    /// round, not a guess.
    pub fn submit(&mut self, fare: u32) -> AnswerOutcome {
        if self.phase != Phase::Running {
            return AnswerOutcome::Ignored;
        }
        let Some(round) = &self.round else {
            return AnswerOutcome::Ignored;
        };
        if !round.options.contains(&fare) {
            return AnswerOutcome::Ignored;
        }
        if round.trip.fare == fare {
            self.score += SCORE_PER_CORRECT;
            self.correct_answers += 1;
            return AnswerOutcome::Correct;
        }
        self.lives -= 1;
        if self.lives <= 0 {
            AnswerOutcome::WrongAndOut
        } else {
            AnswerOutcome::Wrong
        }
    }

    /// Closes the current round and arms the feedback pause.
    pub fn await_next_round(&mut self) {
        self.round = None;
        self.pause.reset();
        self.phase = Phase::AwaitingNext;
    }

    /// Advances the feedback pause; true once it elapses. Does nothing
    /// outside `AwaitingNext`.
    pub fn tick_pause(&mut self, delta: Duration) -> bool {
        if self.phase != Phase::AwaitingNext {
            return false;
        }
        self.pause.tick(delta);
        self.pause.just_finished()
    }

    /// Ends the game. Only the first call produces a summary, so the
    /// caller records the leaderboard exactly once.
    pub fn finish(&mut self, reason: &'static str) -> Option<GameSummary> {
        if self.phase == Phase::Ended {
            return None;
        }
        self.phase = Phase::Ended;
        self.round = None;
        Some(GameSummary {
            reason,
            score: self.score,
            correct_answers: self.correct_answers,
            total_questions: self.total_questions,
        })
    }

    /// Abandons the session without recording anything.
    pub fn quit(&mut self) {
        self.phase = Phase::Idle;
        self.round = None;
    }

    pub fn hud(&self) -> HudChanged {
        HudChanged {
            score: self.score,
            lives: self.lives,
            time_left: self.time_left,
        }
    }
}
