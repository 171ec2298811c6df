// systems/round.rs
use bevy::prelude::*;
use rand::Rng;

use crate::catalog::TripCatalog;
use crate::events::{HudChanged, RoundLoaded};
use crate::options::build_fare_options;
use crate::resources::Session;

/// Picks a random trip, builds its answer set and starts the round.
pub fn load_round(
    session: &mut Session,
    catalog: &TripCatalog,
    rounds: &mut EventWriter<RoundLoaded>,
    hud: &mut EventWriter<HudChanged>,
) {
    let mut rng = rand::rng();
    let trip = catalog.0[rng.random_range(0..catalog.0.len())];
    let options = build_fare_options(trip.fare, &mut rng);
    session.begin_round(trip, options.clone());
    rounds.send(RoundLoaded { trip, options });
    hud.send(session.hud());
}

/// Waits out the feedback pause between rounds, then loads the next one.
/// The pause only advances while the session is actually between rounds,
/// so a quit or restart in the meantime silently disarms it.
pub fn next_round_system(
    time: Res<Time>,
    mut session: ResMut<Session>,
    catalog: Res<TripCatalog>,
    mut rounds: EventWriter<RoundLoaded>,
    mut hud: EventWriter<HudChanged>,
) {
    if session.tick_pause(time.delta()) {
        load_round(&mut session, &catalog, &mut rounds, &mut hud);
    }
}
