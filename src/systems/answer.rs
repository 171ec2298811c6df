// systems/answer.rs
use bevy::prelude::*;

use crate::events::{AnswerChosen, GameEnded, HudChanged, RoundClosed, Verdict};
use crate::leaderboard::Leaderboard;
use crate::resources::{AnswerOutcome, Session, OUT_OF_LIVES};

use super::session::end_game;

/// Scores each submitted fare against the live round. A click landing
/// after the round closed (or after the game ended) is dropped.
pub fn answer_system(
    mut answers: EventReader<AnswerChosen>,
    mut session: ResMut<Session>,
    mut leaderboard: ResMut<Leaderboard>,
    mut hud: EventWriter<HudChanged>,
    mut closed: EventWriter<RoundClosed>,
    mut ended: EventWriter<GameEnded>,
) {
    for answer in answers.read() {
        let Some(correct_fare) = session.round.as_ref().map(|round| round.trip.fare) else {
            continue;
        };
        match session.submit(answer.fare) {
            AnswerOutcome::Ignored => {}
            AnswerOutcome::Correct => {
                closed.send(RoundClosed {
                    verdict: Verdict::Correct,
                    correct_fare,
                });
                session.await_next_round();
                hud.send(session.hud());
            }
            AnswerOutcome::Wrong => {
                closed.send(RoundClosed {
                    verdict: Verdict::Wrong,
                    correct_fare,
                });
                session.await_next_round();
                hud.send(session.hud());
            }
            AnswerOutcome::WrongAndOut => {
                closed.send(RoundClosed {
                    verdict: Verdict::Wrong,
                    correct_fare,
                });
                hud.send(session.hud());
                end_game(&mut session, &mut leaderboard, OUT_OF_LIVES, &mut ended);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::catalog::Trip;
    use crate::resources::{Phase, SCORE_PER_CORRECT, STARTING_LIVES};

    fn scratch_dir(name: &str) -> String {
        let dir = format!("/tmp/fare_frenzy_answer_test_{name}");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn trip(fare: u32) -> Trip {
        Trip {
            hour: 18,
            distance_km: 3.5,
            pickup: "Manhattan",
            dropoff: "Brooklyn",
            fare,
        }
    }

    /// App with the answer system, a round in flight on fare 16, and
    /// `lives_spent` wrong answers already behind it.
    fn test_app(dir: &str, lives_spent: u32) -> App {
        let mut app = App::new();
        app.add_event::<AnswerChosen>()
            .add_event::<HudChanged>()
            .add_event::<RoundClosed>()
            .add_event::<GameEnded>();
        app.insert_resource(Leaderboard::load(format!("{dir}/leaderboard.json")));

        let mut session = Session::default();
        assert!(session.start("Ana", 60));
        for _ in 0..lives_spent {
            session.begin_round(trip(16), vec![16, 18]);
            session.submit(18);
            session.await_next_round();
        }
        session.begin_round(trip(16), vec![16, 18, 20, 22]);
        app.insert_resource(session);
        app.add_systems(Update, answer_system);
        app
    }

    fn sent_verdicts(app: &App) -> Vec<Verdict> {
        let events = app.world().resource::<Events<RoundClosed>>();
        let mut cursor = events.get_cursor();
        cursor.read(events).map(|closed| closed.verdict).collect()
    }

    fn ended_count(app: &App) -> usize {
        let events = app.world().resource::<Events<GameEnded>>();
        let mut cursor = events.get_cursor();
        cursor.read(events).count()
    }

    #[test]
    fn correct_answer_scores_and_pauses() {
        let dir = scratch_dir("correct");
        let mut app = test_app(&dir, 0);

        app.world_mut().send_event(AnswerChosen { fare: 16 });
        app.update();

        let session = app.world().resource::<Session>();
        assert_eq!(session.score, SCORE_PER_CORRECT);
        assert_eq!(session.lives, STARTING_LIVES);
        assert_eq!(session.phase, Phase::AwaitingNext);
        assert!(session.round.is_none());
        assert_eq!(sent_verdicts(&app), vec![Verdict::Correct]);
        assert_eq!(ended_count(&app), 0);
        assert!(
            app.world().resource::<Leaderboard>().entries().is_empty(),
            "nothing is recorded mid-game"
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn wrong_answer_costs_a_life() {
        let dir = scratch_dir("wrong");
        let mut app = test_app(&dir, 0);

        app.world_mut().send_event(AnswerChosen { fare: 20 });
        app.update();

        let session = app.world().resource::<Session>();
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, STARTING_LIVES - 1);
        assert_eq!(session.phase, Phase::AwaitingNext);
        assert_eq!(sent_verdicts(&app), vec![Verdict::Wrong]);
        assert_eq!(ended_count(&app), 0);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn final_wrong_answer_ends_and_records() {
        let dir = scratch_dir("final_wrong");
        let mut app = test_app(&dir, 2);

        app.world_mut().send_event(AnswerChosen { fare: 20 });
        app.update();

        let session = app.world().resource::<Session>();
        assert_eq!(session.lives, 0);
        assert_eq!(session.phase, Phase::Ended);
        assert_eq!(ended_count(&app), 1);

        let board = app.world().resource::<Leaderboard>();
        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.entries()[0].name, "Ana");
        assert_eq!(board.entries()[0].score, 0);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn second_click_in_the_same_frame_is_dropped() {
        let dir = scratch_dir("double_click");
        let mut app = test_app(&dir, 0);

        app.world_mut().send_event(AnswerChosen { fare: 16 });
        app.world_mut().send_event(AnswerChosen { fare: 16 });
        app.update();

        let session = app.world().resource::<Session>();
        assert_eq!(session.score, SCORE_PER_CORRECT, "only the first click counts");
        assert_eq!(session.correct_answers, 1);
        assert_eq!(sent_verdicts(&app), vec![Verdict::Correct]);
        let _ = fs::remove_dir_all(&dir);
    }
}
