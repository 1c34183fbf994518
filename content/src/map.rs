//! Helpers for the illustrative destinations map.

use std::collections::HashSet;

use crate::model::{Destination, DestinationId};
use crate::selection::Selection;

/// The pin whose detail panel is open.
pub type MapSelection = Selection<DestinationId>;

/// Route segments between consecutive destinations, in list order.
pub fn routes(
    destinations: &[Destination],
) -> impl Iterator<Item = (&Destination, &Destination)> {
    destinations.windows(2).map(|pair| (&pair[0], &pair[1]))
}

pub fn countries_visited(destinations: &[Destination]) -> usize {
    destinations
        .iter()
        .map(|d| d.country)
        .collect::<HashSet<_>>()
        .len()
}
