// components.rs
use bevy::prelude::*;

use crate::resources::Screen;

/// Tags an entity tree as belonging to one screen, so leaving that screen
/// despawns it.
#[derive(Component)]
pub struct ScreenScoped(pub Screen);

/// What a clicked button should do.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Play,
    ShowHowTo,
    BackToMenu,
    QuitGame,
    PlayAgain,
}

// Menu screen widgets.

/// Text node echoing the typed player name.
#[derive(Component)]
pub struct NameInput;

/// Hint line shown when Play is pressed with an empty name.
#[derive(Component)]
pub struct NamePrompt;

#[derive(Component)]
pub struct DurationButton {
    pub seconds: u32,
}

#[derive(Component)]
pub struct LeaderboardText;

// Game screen widgets.

#[derive(Component)]
pub struct HudTime;

#[derive(Component)]
pub struct HudScore;

#[derive(Component)]
pub struct HudLives;

/// The pickup/dropoff/hour/distance block above the options.
#[derive(Component)]
pub struct TripInfoText;

#[derive(Component)]
pub struct OptionsContainer;

#[derive(Component)]
pub struct OptionButton {
    pub fare: u32,
}

/// Per-round feedback line under the options.
#[derive(Component)]
pub struct FeedbackText;

// End-of-game overlay.

#[derive(Component)]
pub struct EndOverlay;

#[derive(Component)]
pub struct FinalMessageText;

#[derive(Component)]
pub struct FinalStatsText;

// Map panel markers.

#[derive(Component)]
pub struct PickupMarker;

#[derive(Component)]
pub struct DropoffMarker;
