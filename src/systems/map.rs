// systems/map.rs
use bevy::prelude::*;

use crate::catalog::{borough_center, BOROUGH_CENTERS};
use crate::components::{DropoffMarker, PickupMarker, ScreenScoped};
use crate::events::RoundLoaded;
use crate::resources::Screen;

use super::menu::{PANEL_BG, TEXT_COLOR};

const PICKUP_COLOR: Color = Color::srgb(0.35, 0.8, 0.4);
const DROPOFF_COLOR: Color = Color::srgb(0.3, 0.55, 0.95);

/// Margin kept around the outermost borough centres, in percent of the
/// panel.
const EDGE_PAD: f32 = 10.0;

pub fn setup_map_panel(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(16.0),
                top: Val::Px(60.0),
                width: Val::Px(220.0),
                height: Val::Px(260.0),
                ..default()
            },
            BackgroundColor(PANEL_BG),
            ScreenScoped(Screen::Game),
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new("NYC boroughs"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(8.0),
                    top: Val::Px(6.0),
                    ..default()
                },
            ));
            panel.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    width: Val::Px(12.0),
                    height: Val::Px(12.0),
                    ..default()
                },
                BackgroundColor(PICKUP_COLOR),
                Visibility::Hidden,
                PickupMarker,
            ));
            panel.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    width: Val::Px(12.0),
                    height: Val::Px(12.0),
                    ..default()
                },
                BackgroundColor(DROPOFF_COLOR),
                Visibility::Hidden,
                DropoffMarker,
            ));
        });
}

/// Moves the two markers to the round's boroughs. An unknown borough
/// leaves both markers exactly where they were.
pub fn map_update_system(
    mut rounds: EventReader<RoundLoaded>,
    mut pickups: Query<(&mut Node, &mut Visibility), (With<PickupMarker>, Without<DropoffMarker>)>,
    mut dropoffs: Query<(&mut Node, &mut Visibility), (With<DropoffMarker>, Without<PickupMarker>)>,
) {
    let Some(round) = rounds.read().last() else {
        return;
    };
    let (Some(pickup), Some(dropoff)) = (
        borough_center(round.trip.pickup),
        borough_center(round.trip.dropoff),
    ) else {
        warn!(
            "no map position for trip {} to {}",
            round.trip.pickup, round.trip.dropoff
        );
        return;
    };

    let (left, top) = percent_position(pickup.0, pickup.1);
    for (mut node, mut visibility) in &mut pickups {
        node.left = Val::Percent(left);
        node.top = Val::Percent(top);
        *visibility = Visibility::Visible;
    }
    let (left, top) = percent_position(dropoff.0, dropoff.1);
    for (mut node, mut visibility) in &mut dropoffs {
        node.left = Val::Percent(left);
        node.top = Val::Percent(top);
        *visibility = Visibility::Visible;
    }
}

/// Projects a borough centre into panel percent coordinates. Latitude
/// grows northwards, so it maps onto `top` inverted.
fn percent_position(lat: f64, lng: f64) -> (f32, f32) {
    let mut min_lat = f64::MAX;
    let mut max_lat = f64::MIN;
    let mut min_lng = f64::MAX;
    let mut max_lng = f64::MIN;
    for (_, center_lat, center_lng) in BOROUGH_CENTERS {
        min_lat = min_lat.min(center_lat);
        max_lat = max_lat.max(center_lat);
        min_lng = min_lng.min(center_lng);
        max_lng = max_lng.max(center_lng);
    }
    let span = (100.0 - 2.0 * EDGE_PAD) as f64;
    let left = EDGE_PAD as f64 + span * (lng - min_lng) / (max_lng - min_lng);
    let top = EDGE_PAD as f64 + span * (max_lat - lat) / (max_lat - min_lat);
    (left as f32, top as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_borough_centres_land_inside_the_panel() {
        for (name, lat, lng) in BOROUGH_CENTERS {
            let (left, top) = percent_position(lat, lng);
            assert!(
                (EDGE_PAD..=100.0 - EDGE_PAD).contains(&left),
                "{name} left {left}"
            );
            assert!(
                (EDGE_PAD..=100.0 - EDGE_PAD).contains(&top),
                "{name} top {top}"
            );
        }
    }

    #[test]
    fn extreme_centres_sit_on_the_padding_edges() {
        // Staten Island is the westernmost and southernmost centre.
        let (left, top) = percent_position(40.5795, -74.1502);
        assert!((left - EDGE_PAD).abs() < 1e-3);
        assert!((top - (100.0 - EDGE_PAD)).abs() < 1e-3);
    }
}
