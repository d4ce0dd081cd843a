//! Distance ranking of shelters around a requester

use crate::geo::{haversine_km, initial_bearing_deg, round_to, CompassDirection};
use crate::types::{Coordinate, RankedShelter, ShelterRecord};

/// Annotate one shelter with distance (1 decimal) and compass direction
pub fn annotate(origin: Coordinate, shelter: ShelterRecord) -> RankedShelter {
    let target = shelter.coordinate();
    let distance_km = round_to(haversine_km(origin, target), 1);
    let direction = CompassDirection::from_bearing(initial_bearing_deg(origin, target));

    RankedShelter {
        shelter,
        distance_km,
        direction,
    }
}

/// Nearest `limit` shelters, ascending by rounded distance.
///
/// The sort is stable: shelters at equal rounded distance keep their
/// retrieval order.
pub fn rank_shelters(
    origin: Coordinate,
    shelters: impl IntoIterator<Item = ShelterRecord>,
    limit: usize,
) -> Vec<RankedShelter> {
    let mut ranked: Vec<RankedShelter> = shelters
        .into_iter()
        .map(|shelter| annotate(origin, shelter))
        .collect();

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(limit);
    ranked
}
