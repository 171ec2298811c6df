use bevy::prelude::*;

mod catalog;
mod components;
mod events;
mod leaderboard;
mod options;
mod resources;
mod systems;

use catalog::TripCatalog;
use events::{
    AnswerChosen, GameEnded, HudChanged, QuitRequested, RoundClosed, RoundLoaded, StartRequested,
};
use leaderboard::Leaderboard;
use resources::{Screen, Session, Settings};
use systems::answer::answer_system;
use systems::hud::{
    feedback_system, game_over_system, hud_update_system, option_button_system,
    round_display_system, setup_game_screen,
};
use systems::map::{map_update_system, setup_map_panel};
use systems::menu::{
    button_action_system, button_hover_system, despawn_screen, duration_button_system,
    duration_highlight_system, name_input_system, setup_howto_screen, setup_menu_screen,
};
use systems::round::next_round_system;
use systems::session::{countdown_system, quit_system, start_game_system};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "NYC Taxi Fare Frenzy".into(),
                resolution: (1024., 700.).into(),
                ..default()
            }),
            ..default()
        }))
        .init_state::<Screen>()
        .init_resource::<Settings>()
        .init_resource::<Session>()
        .init_resource::<TripCatalog>()
        .init_resource::<Leaderboard>()
        .add_event::<StartRequested>()
        .add_event::<QuitRequested>()
        .add_event::<AnswerChosen>()
        .add_event::<RoundLoaded>()
        .add_event::<HudChanged>()
        .add_event::<RoundClosed>()
        .add_event::<GameEnded>()
        .add_systems(Startup, setup_camera)
        .add_systems(OnEnter(Screen::Menu), setup_menu_screen)
        .add_systems(OnExit(Screen::Menu), despawn_screen(Screen::Menu))
        .add_systems(OnEnter(Screen::HowTo), setup_howto_screen)
        .add_systems(OnExit(Screen::HowTo), despawn_screen(Screen::HowTo))
        .add_systems(OnEnter(Screen::Game), (setup_game_screen, setup_map_panel))
        .add_systems(OnExit(Screen::Game), despawn_screen(Screen::Game))
        .add_systems(
            Update,
            (
                start_game_system,
                answer_system,
                countdown_system,
                next_round_system,
                quit_system,
            )
                .chain(),
        )
        .add_systems(Update, (button_action_system, button_hover_system))
        .add_systems(
            Update,
            (
                name_input_system,
                duration_button_system,
                duration_highlight_system,
            )
                .run_if(in_state(Screen::Menu)),
        )
        .add_systems(
            Update,
            (
                round_display_system,
                option_button_system,
                hud_update_system,
                feedback_system,
                game_over_system,
                map_update_system,
            )
                .run_if(in_state(Screen::Game)),
        )
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d::default());
}
