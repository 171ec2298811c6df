// catalog.rs
use bevy::prelude::*;

/// One sample taxi trip. The whole catalog is hand-crafted and read-only,
/// so borough labels can stay `&'static str`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trip {
    pub hour: u8,
    pub distance_km: f32,
    pub pickup: &'static str,
    pub dropoff: &'static str,
    pub fare: u32,
}

const fn trip(
    hour: u8,
    distance_km: f32,
    pickup: &'static str,
    dropoff: &'static str,
    fare: u32,
) -> Trip {
    Trip {
        hour,
        distance_km,
        pickup,
        dropoff,
        fare,
    }
}

#[derive(Resource)]
pub struct TripCatalog(pub Vec<Trip>);

impl Default for TripCatalog {
    fn default() -> Self {
        Self(vec![
            trip(8, 2.0, "Manhattan", "Manhattan", 9),
            trip(9, 1.4, "Manhattan", "Manhattan", 8),
            trip(18, 3.5, "Manhattan", "Brooklyn", 16),
            trip(22, 5.2, "Manhattan", "Queens", 22),
            trip(14, 4.8, "Brooklyn", "Manhattan", 19),
            trip(19, 7.1, "Brooklyn", "Queens", 26),
            trip(23, 6.3, "Brooklyn", "Brooklyn", 24),
            trip(11, 6.0, "Queens", "Queens", 23),
            trip(15, 8.2, "Queens", "Manhattan", 30),
            trip(21, 5.5, "Queens", "Brooklyn", 21),
            trip(10, 4.2, "Bronx", "Manhattan", 17),
            trip(17, 5.8, "Bronx", "Queens", 21),
            trip(13, 9.0, "Staten Island", "Brooklyn", 32),
            trip(20, 7.4, "Staten Island", "Staten Island", 29),
        ])
    }
}

/// Geographic centre of each borough, used by the map panel.
pub const BOROUGH_CENTERS: [(&str, f64, f64); 5] = [
    ("Manhattan", 40.7831, -73.9712),
    ("Brooklyn", 40.6782, -73.9442),
    ("Queens", 40.7282, -73.7949),
    ("Bronx", 40.8448, -73.8648),
    ("Staten Island", 40.5795, -74.1502),
];

pub fn borough_center(name: &str) -> Option<(f64, f64)> {
    BOROUGH_CENTERS
        .iter()
        .find(|(borough, _, _)| *borough == name)
        .map(|(_, lat, lng)| (*lat, *lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_trips_are_well_formed() {
        let catalog = TripCatalog::default();
        assert!(!catalog.0.is_empty());
        for trip in &catalog.0 {
            assert!(trip.hour <= 23);
            assert!(trip.distance_km > 0.0);
            assert!(trip.fare > 0);
            assert!(borough_center(trip.pickup).is_some());
            assert!(borough_center(trip.dropoff).is_some());
        }
    }

    #[test]
    fn borough_center_misses_unknown_names() {
        assert!(borough_center("Manhattan").is_some());
        assert!(borough_center("Jersey City").is_none());
        assert!(borough_center("").is_none());
    }
}
