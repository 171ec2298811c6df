// systems/hud.rs
use bevy::prelude::*;

use crate::components::{
    ButtonAction, EndOverlay, FeedbackText, FinalMessageText, FinalStatsText, HudLives, HudScore,
    HudTime, LeaderboardText, OptionButton, OptionsContainer, ScreenScoped, TripInfoText,
};
use crate::events::{AnswerChosen, GameEnded, HudChanged, RoundClosed, RoundLoaded, Verdict};
use crate::leaderboard::Leaderboard;
use crate::resources::{Screen, Session};

use super::menu::{
    leaderboard_lines, spawn_action_button, ACCENT, NORMAL_BUTTON, TEXT_COLOR, WARNING_COLOR,
};

const CORRECT_COLOR: Color = Color::srgb(0.35, 0.8, 0.4);

pub fn setup_game_screen(mut commands: Commands, session: Res<Session>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(16.0)),
                row_gap: Val::Px(10.0),
                ..default()
            },
            ScreenScoped(Screen::Game),
        ))
        .with_children(|parent| {
            parent
                .spawn(Node {
                    width: Val::Percent(100.0),
                    justify_content: JustifyContent::SpaceBetween,
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        Text::new(format!("Time: {}s", session.time_left)),
                        TextFont {
                            font_size: 22.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                        HudTime,
                    ));
                    row.spawn((
                        Text::new(format!("Score: {}", session.score)),
                        TextFont {
                            font_size: 22.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                        HudScore,
                    ));
                    row.spawn((
                        Text::new(format!("Lives: {}", session.lives)),
                        TextFont {
                            font_size: 22.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                        HudLives,
                    ));
                });

            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                TripInfoText,
            ));
            parent.spawn((
                Text::new("How much was the fare?"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(ACCENT),
            ));

            parent.spawn((
                Node {
                    column_gap: Val::Px(10.0),
                    flex_wrap: FlexWrap::Wrap,
                    justify_content: JustifyContent::Center,
                    ..default()
                },
                OptionsContainer,
            ));

            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                FeedbackText,
            ));

            spawn_action_button(parent, "Quit", ButtonAction::QuitGame);

            parent
                .spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        row_gap: Val::Px(12.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
                    Visibility::Hidden,
                    EndOverlay,
                ))
                .with_children(|overlay| {
                    overlay.spawn((
                        Text::new("Game over"),
                        TextFont {
                            font_size: 36.0,
                            ..default()
                        },
                        TextColor(ACCENT),
                        FinalMessageText,
                    ));
                    overlay.spawn((
                        Text::new(""),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                        FinalStatsText,
                    ));
                    overlay.spawn((
                        Text::new("Leaderboard"),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(ACCENT),
                    ));
                    overlay.spawn((
                        Text::new(""),
                        TextFont {
                            font_size: 18.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                        LeaderboardText,
                    ));
                    spawn_action_button(overlay, "Play again", ButtonAction::PlayAgain);
                    spawn_action_button(overlay, "Back to menu", ButtonAction::BackToMenu);
                });
        });
}

/// Repaints the three HUD readouts from the latest change event.
pub fn hud_update_system(
    mut changes: EventReader<HudChanged>,
    mut time_text: Query<&mut Text, (With<HudTime>, Without<HudScore>, Without<HudLives>)>,
    mut score_text: Query<&mut Text, (With<HudScore>, Without<HudTime>, Without<HudLives>)>,
    mut lives_text: Query<&mut Text, (With<HudLives>, Without<HudTime>, Without<HudScore>)>,
) {
    let Some(change) = changes.read().last() else {
        return;
    };
    for mut text in &mut time_text {
        text.0 = format!("Time: {}s", change.time_left);
    }
    for mut text in &mut score_text {
        text.0 = format!("Score: {}", change.score);
    }
    for mut text in &mut lives_text {
        text.0 = format!("Lives: {}", change.lives);
    }
}

/// Shows a freshly loaded round: trip details, rebuilt option buttons,
/// cleared feedback, hidden end overlay.
pub fn round_display_system(
    mut commands: Commands,
    mut rounds: EventReader<RoundLoaded>,
    containers: Query<Entity, With<OptionsContainer>>,
    mut trip_text: Query<&mut Text, (With<TripInfoText>, Without<FeedbackText>)>,
    mut feedback: Query<(&mut Text, &mut TextColor), (With<FeedbackText>, Without<TripInfoText>)>,
    mut overlays: Query<&mut Visibility, With<EndOverlay>>,
) {
    let Some(round) = rounds.read().last() else {
        return;
    };
    for mut text in &mut trip_text {
        text.0 = format!(
            "Pickup: {}\nDropoff: {}\nHour: {:02}:00\nDistance: {:.1} km",
            round.trip.pickup, round.trip.dropoff, round.trip.hour, round.trip.distance_km
        );
    }
    for (mut text, mut color) in &mut feedback {
        text.0.clear();
        color.0 = TEXT_COLOR;
    }
    for mut visibility in &mut overlays {
        *visibility = Visibility::Hidden;
    }
    for container in &containers {
        commands.entity(container).despawn_descendants();
        commands.entity(container).with_children(|parent| {
            for &fare in &round.options {
                parent
                    .spawn((
                        Button,
                        Node {
                            width: Val::Px(110.0),
                            height: Val::Px(48.0),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            ..default()
                        },
                        BackgroundColor(NORMAL_BUTTON),
                        OptionButton { fare },
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new(format!("${fare}")),
                            TextFont {
                                font_size: 22.0,
                                ..default()
                            },
                            TextColor(TEXT_COLOR),
                        ));
                    });
            }
        });
    }
}

pub fn option_button_system(
    interactions: Query<(&Interaction, &OptionButton), Changed<Interaction>>,
    mut answers: EventWriter<AnswerChosen>,
) {
    for (interaction, option) in &interactions {
        if *interaction == Interaction::Pressed {
            answers.send(AnswerChosen { fare: option.fare });
        }
    }
}

/// Writes the per-round verdict line under the options.
pub fn feedback_system(
    mut closings: EventReader<RoundClosed>,
    mut feedback: Query<(&mut Text, &mut TextColor), With<FeedbackText>>,
) {
    let Some(closed) = closings.read().last() else {
        return;
    };
    let (line, color) = match closed.verdict {
        Verdict::Correct => (
            format!("Correct! The fare was ${}.", closed.correct_fare),
            CORRECT_COLOR,
        ),
        Verdict::Wrong => (
            format!("Wrong! The fare was ${}.", closed.correct_fare),
            WARNING_COLOR,
        ),
        Verdict::TimedOut => ("Time is up! You lost 1 life.".to_string(), WARNING_COLOR),
    };
    for (mut text, mut text_color) in &mut feedback {
        text.0 = line.clone();
        text_color.0 = color;
    }
}

pub fn game_over_system(
    mut endings: EventReader<GameEnded>,
    session: Res<Session>,
    leaderboard: Res<Leaderboard>,
    mut overlays: Query<&mut Visibility, With<EndOverlay>>,
    mut message: Query<
        &mut Text,
        (
            With<FinalMessageText>,
            Without<FinalStatsText>,
            Without<LeaderboardText>,
        ),
    >,
    mut stats: Query<
        &mut Text,
        (
            With<FinalStatsText>,
            Without<FinalMessageText>,
            Without<LeaderboardText>,
        ),
    >,
    mut board: Query<
        &mut Text,
        (
            With<LeaderboardText>,
            Without<FinalMessageText>,
            Without<FinalStatsText>,
        ),
    >,
) {
    let Some(ending) = endings.read().last() else {
        return;
    };
    for mut text in &mut message {
        text.0 = ending.summary.reason.to_string();
    }
    for mut text in &mut stats {
        text.0 = format!(
            "{}, you scored {} points.\nCorrect answers: {} of {}",
            session.player_name,
            ending.summary.score,
            ending.summary.correct_answers,
            ending.summary.total_questions
        );
    }
    for mut text in &mut board {
        text.0 = leaderboard_lines(leaderboard.entries());
    }
    for mut visibility in &mut overlays {
        *visibility = Visibility::Visible;
    }
}
