// events.rs
use bevy::prelude::*;

use crate::catalog::Trip;

// Events written by the input-side systems (buttons, keyboard).

/// The player asked to start a game from the menu.
#[derive(Event)]
pub struct StartRequested;

/// The player asked to abandon the running game.
#[derive(Event)]
pub struct QuitRequested;

/// The player picked one of the fare buttons.
#[derive(Event)]
pub struct AnswerChosen {
    pub fare: u32,
}

// Events written by the session logic and read by the presentation layer.

/// A fresh round is ready to be shown.
#[derive(Event)]
pub struct RoundLoaded {
    pub trip: Trip,
    pub options: Vec<u32>,
}

/// Score, lives or remaining time changed.
#[derive(Event, Clone, Copy)]
pub struct HudChanged {
    pub score: u32,
    pub lives: i32,
    pub time_left: u32,
}

/// The current round was resolved and feedback should be shown.
#[derive(Event)]
pub struct RoundClosed {
    pub verdict: Verdict,
    pub correct_fare: u32,
}

// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong,
    TimedOut, // The countdown ran out before an answer
}

/// The game is over and the end overlay should appear.
#[derive(Event)]
pub struct GameEnded {
    pub summary: GameSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub reason: &'static str,
    pub score: u32,
    pub correct_answers: u32,
    pub total_questions: u32,
}
