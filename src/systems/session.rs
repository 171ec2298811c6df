// systems/session.rs
use bevy::prelude::*;

use crate::catalog::TripCatalog;
use crate::events::{
    GameEnded, HudChanged, QuitRequested, RoundClosed, RoundLoaded, StartRequested, Verdict,
};
use crate::leaderboard::Leaderboard;
use crate::resources::{Screen, Session, Settings, TickOutcome, OUT_OF_LIVES};

use super::round::load_round;

/// Starts a fresh session and puts its first round on the table.
pub fn start_game_system(
    mut requests: EventReader<StartRequested>,
    settings: Res<Settings>,
    catalog: Res<TripCatalog>,
    mut session: ResMut<Session>,
    mut next_screen: ResMut<NextState<Screen>>,
    mut rounds: EventWriter<RoundLoaded>,
    mut hud: EventWriter<HudChanged>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();
    if !session.start(&settings.player_name, settings.duration) {
        return;
    }
    info!(
        "starting a {}s session for {}",
        session.duration, session.player_name
    );
    next_screen.set(Screen::Game);
    load_round(&mut session, &catalog, &mut rounds, &mut hud);
}

/// Advances the one-second countdown while a round is live. Running out
/// of time costs a life and closes the round like a wrong answer does.
pub fn countdown_system(
    time: Res<Time>,
    mut session: ResMut<Session>,
    mut leaderboard: ResMut<Leaderboard>,
    mut hud: EventWriter<HudChanged>,
    mut closed: EventWriter<RoundClosed>,
    mut ended: EventWriter<GameEnded>,
) {
    let fare = session.round.as_ref().map(|round| round.trip.fare);
    match session.tick(time.delta()) {
        TickOutcome::Ignored => {}
        TickOutcome::Counted => {
            hud.send(session.hud());
        }
        TickOutcome::TimeUp => {
            if let Some(correct_fare) = fare {
                closed.send(RoundClosed {
                    verdict: Verdict::TimedOut,
                    correct_fare,
                });
            }
            session.await_next_round();
            hud.send(session.hud());
        }
        TickOutcome::OutOfLives => {
            if let Some(correct_fare) = fare {
                closed.send(RoundClosed {
                    verdict: Verdict::TimedOut,
                    correct_fare,
                });
            }
            hud.send(session.hud());
            end_game(&mut session, &mut leaderboard, OUT_OF_LIVES, &mut ended);
        }
    }
}

/// Returns to the menu without recording the abandoned session.
pub fn quit_system(
    mut requests: EventReader<QuitRequested>,
    mut session: ResMut<Session>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();
    info!("session abandoned by {}", session.player_name);
    session.quit();
    next_screen.set(Screen::Menu);
}

/// Finishes the session and records the score. `Session::finish` reports
/// only once, so a repeated call cannot double-record the leaderboard.
pub fn end_game(
    session: &mut Session,
    leaderboard: &mut Leaderboard,
    reason: &'static str,
    ended: &mut EventWriter<GameEnded>,
) {
    if let Some(summary) = session.finish(reason) {
        leaderboard.record(&session.player_name, summary.score as i64);
        info!(
            "session over for {}: {} points across {} questions",
            session.player_name, summary.score, summary.total_questions
        );
        ended.send(GameEnded { summary });
    }
}
