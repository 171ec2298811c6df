// systems/menu.rs
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use crate::components::{
    ButtonAction, DurationButton, LeaderboardText, NameInput, NamePrompt, ScreenScoped,
};
use crate::events::{QuitRequested, StartRequested};
use crate::leaderboard::{Entry, Leaderboard};
use crate::resources::{Screen, Settings, DURATION_CHOICES};

pub const TEXT_COLOR: Color = Color::srgb(0.92, 0.92, 0.92);
pub const ACCENT: Color = Color::srgb(0.95, 0.73, 0.05);
pub const PANEL_BG: Color = Color::srgb(0.13, 0.15, 0.18);
pub const NORMAL_BUTTON: Color = Color::srgb(0.22, 0.25, 0.3);
pub const HOVERED_BUTTON: Color = Color::srgb(0.3, 0.34, 0.4);
pub const SELECTED_BUTTON: Color = ACCENT;
pub const WARNING_COLOR: Color = Color::srgb(0.9, 0.4, 0.35);

const NAME_LIMIT: usize = 12;

pub fn setup_menu_screen(
    mut commands: Commands,
    settings: Res<Settings>,
    leaderboard: Res<Leaderboard>,
) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            ScreenScoped(Screen::Menu),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("NYC Taxi Fare Frenzy"),
                TextFont {
                    font_size: 42.0,
                    ..default()
                },
                TextColor(ACCENT),
            ));
            parent.spawn((
                Text::new("Guess what the meter read for each trip"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));

            parent.spawn((
                Text::new("Type your name:"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
            parent
                .spawn((
                    Node {
                        width: Val::Px(280.0),
                        height: Val::Px(40.0),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BackgroundColor(PANEL_BG),
                ))
                .with_children(|field| {
                    field.spawn((
                        Text::new(settings.player_name.clone()),
                        TextFont {
                            font_size: 22.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                        NameInput,
                    ));
                });
            parent.spawn((
                Text::new("Enter a name to start."),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(WARNING_COLOR),
                Visibility::Hidden,
                NamePrompt,
            ));

            parent
                .spawn(Node {
                    column_gap: Val::Px(8.0),
                    ..default()
                })
                .with_children(|row| {
                    for seconds in DURATION_CHOICES {
                        let selected = seconds == settings.duration;
                        row.spawn((
                            Button,
                            Node {
                                width: Val::Px(80.0),
                                height: Val::Px(36.0),
                                justify_content: JustifyContent::Center,
                                align_items: AlignItems::Center,
                                ..default()
                            },
                            BackgroundColor(if selected {
                                SELECTED_BUTTON
                            } else {
                                NORMAL_BUTTON
                            }),
                            DurationButton { seconds },
                        ))
                        .with_children(|button| {
                            button.spawn((
                                Text::new(format!("{seconds}s")),
                                TextFont {
                                    font_size: 18.0,
                                    ..default()
                                },
                                TextColor(TEXT_COLOR),
                            ));
                        });
                    }
                });

            spawn_action_button(parent, "Play", ButtonAction::Play);
            spawn_action_button(parent, "How to play", ButtonAction::ShowHowTo);

            parent.spawn((
                Text::new("Leaderboard"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(ACCENT),
            ));
            parent.spawn((
                Text::new(leaderboard_lines(leaderboard.entries())),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                LeaderboardText,
            ));
        });
}

pub fn setup_howto_screen(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            ScreenScoped(Screen::HowTo),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("How to play"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(ACCENT),
            ));
            parent.spawn((
                Text::new(
                    "Each round shows a taxi trip: pickup, dropoff, hour and distance.\n\
                     Pick the fare you think the meter read.\n\
                     A correct answer is worth 100 points.\n\
                     A wrong answer or a timeout costs one of your 3 lives.\n\
                     The game ends when your lives run out.",
                ),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
            spawn_action_button(parent, "Back", ButtonAction::BackToMenu);
        });
}

/// Despawns everything tagged for the given screen when it is left.
pub fn despawn_screen(screen: Screen) -> impl Fn(Commands, Query<(Entity, &ScreenScoped)>) {
    move |mut commands: Commands, query: Query<(Entity, &ScreenScoped)>| {
        for (entity, scoped) in &query {
            if scoped.0 == screen {
                commands.entity(entity).despawn_recursive();
            }
        }
    }
}

/// Collects typed characters into the player name and echoes it.
pub fn name_input_system(
    mut keys: EventReader<KeyboardInput>,
    mut settings: ResMut<Settings>,
    mut display: Query<&mut Text, With<NameInput>>,
) {
    let mut changed = false;
    for key in keys.read() {
        if !key.state.is_pressed() {
            continue;
        }
        match &key.logical_key {
            Key::Character(typed) => {
                for ch in typed.chars() {
                    if !ch.is_control() && settings.player_name.len() < NAME_LIMIT {
                        settings.player_name.push(ch);
                        changed = true;
                    }
                }
            }
            Key::Space => {
                if settings.player_name.len() < NAME_LIMIT {
                    settings.player_name.push(' ');
                    changed = true;
                }
            }
            Key::Backspace => {
                changed |= settings.player_name.pop().is_some();
            }
            _ => {}
        }
    }
    if changed {
        for mut text in &mut display {
            text.0 = settings.player_name.clone();
        }
    }
}

pub fn duration_button_system(
    interactions: Query<(&Interaction, &DurationButton), Changed<Interaction>>,
    mut settings: ResMut<Settings>,
) {
    for (interaction, button) in &interactions {
        if *interaction == Interaction::Pressed && settings.duration != button.seconds {
            settings.duration = button.seconds;
        }
    }
}

pub fn duration_highlight_system(
    settings: Res<Settings>,
    mut buttons: Query<(&DurationButton, &mut BackgroundColor)>,
) {
    if !settings.is_changed() {
        return;
    }
    for (button, mut color) in &mut buttons {
        color.0 = if button.seconds == settings.duration {
            SELECTED_BUTTON
        } else {
            NORMAL_BUTTON
        };
    }
}

/// Routes every action button, on whichever screen it lives.
pub fn button_action_system(
    interactions: Query<(&Interaction, &ButtonAction), Changed<Interaction>>,
    settings: Res<Settings>,
    mut next_screen: ResMut<NextState<Screen>>,
    mut starts: EventWriter<StartRequested>,
    mut quits: EventWriter<QuitRequested>,
    mut prompts: Query<&mut Visibility, With<NamePrompt>>,
) {
    for (interaction, action) in &interactions {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match action {
            ButtonAction::Play | ButtonAction::PlayAgain => {
                if settings.player_name.trim().is_empty() {
                    for mut visibility in &mut prompts {
                        *visibility = Visibility::Visible;
                    }
                } else {
                    starts.send(StartRequested);
                }
            }
            ButtonAction::ShowHowTo => next_screen.set(Screen::HowTo),
            ButtonAction::BackToMenu => next_screen.set(Screen::Menu),
            ButtonAction::QuitGame => {
                quits.send(QuitRequested);
            }
        }
    }
}

/// Hover feedback for every plain button. Duration buttons keep their
/// selected/unselected colors instead.
pub fn button_hover_system(
    mut interactions: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>, Without<DurationButton>),
    >,
) {
    for (interaction, mut color) in &mut interactions {
        color.0 = match interaction {
            Interaction::Pressed | Interaction::Hovered => HOVERED_BUTTON,
            Interaction::None => NORMAL_BUTTON,
        };
    }
}

pub(crate) fn spawn_action_button(parent: &mut ChildBuilder, label: &str, action: ButtonAction) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(220.0),
                height: Val::Px(46.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(NORMAL_BUTTON),
            action,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label.to_string()),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
        });
}

pub(crate) fn leaderboard_lines(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No scores yet.".to_string();
    }
    entries
        .iter()
        .enumerate()
        .map(|(place, entry)| format!("{}. {} ({} pts)", place + 1, entry.name, entry.score))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_leaderboard_has_a_placeholder_line() {
        assert_eq!(leaderboard_lines(&[]), "No scores yet.");
    }

    #[test]
    fn leaderboard_lines_are_ranked() {
        let entries = vec![
            Entry {
                name: "Ana".to_string(),
                score: 300,
            },
            Entry {
                name: "Bo".to_string(),
                score: 100,
            },
        ];
        assert_eq!(
            leaderboard_lines(&entries),
            "1. Ana (300 pts)\n2. Bo (100 pts)"
        );
    }
}
