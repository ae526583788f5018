use std::fmt;

use geo::{Distance, Geodesic, Point};
use thiserror::Error;

use super::geocoding::{Geocoder, LookupError};

/// A coordinate as `(latitude, longitude)` degrees.
pub type Coord = (f64, f64);
/// The resolved endpoints of one address pair.
pub type CoordPair = (Coord, Coord);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSide {
    First,
    Second,
}

impl fmt::Display for ListSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListSide::First => write!(f, "first"),
            ListSide::Second => write!(f, "second"),
        }
    }
}

#[derive(Error, Debug)]
pub enum DistanceError {
    #[error("both lists must contain at least one address")]
    EmptyList,

    #[error("the two lists differ in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("the address at position {position} of the {list} list is empty")]
    EmptyAddress { list: ListSide, position: usize },

    #[error("address \"{address}\" at position {position} of the {list} list was not found")]
    NotFound {
        address: String,
        list: ListSide,
        position: usize,
    },

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PairedDistances {
    /// Geodesic distance per pair, index-aligned with the input lists.
    pub kilometers: Vec<f64>,
    /// Resolved endpoints per pair, same alignment.
    pub pairs: Vec<CoordPair>,
}

/// Geocodes two parallel address lists and measures the geodesic distance of
/// each pair. Fails fast: the first invalid input or failed lookup aborts the
/// whole computation, with no partial result. Positions in errors are
/// 1-based.
pub fn paired_distances<G: Geocoder>(
    geocoder: &G,
    first: &[String],
    second: &[String],
) -> Result<PairedDistances, DistanceError> {
    if first.is_empty() || second.is_empty() {
        return Err(DistanceError::EmptyList);
    }
    if first.len() != second.len() {
        return Err(DistanceError::LengthMismatch {
            left: first.len(),
            right: second.len(),
        });
    }

    let mut kilometers = Vec::with_capacity(first.len());
    let mut pairs = Vec::with_capacity(first.len());

    for (position, (address1, address2)) in first.iter().zip(second).enumerate() {
        let position = position + 1;
        let start = resolve(geocoder, address1, ListSide::First, position)?;
        let end = resolve(geocoder, address2, ListSide::Second, position)?;

        let km = geodesic_km(start, end);
        log::debug!(
            "Pair {}: \"{}\" -> \"{}\" is {:.3} km",
            position,
            address1,
            address2,
            km
        );
        kilometers.push(km);
        pairs.push((start, end));
    }

    Ok(PairedDistances { kilometers, pairs })
}

fn resolve<G: Geocoder>(
    geocoder: &G,
    address: &str,
    list: ListSide,
    position: usize,
) -> Result<Coord, DistanceError> {
    if address.is_empty() {
        return Err(DistanceError::EmptyAddress { list, position });
    }
    match geocoder.lookup(address)? {
        Some(place) => Ok((place.lat, place.lon)),
        None => Err(DistanceError::NotFound {
            address: address.to_string(),
            list,
            position,
        }),
    }
}

/// Distance between two coordinates in kilometers, on the WGS84 ellipsoid.
pub fn geodesic_km((lat1, lon1): Coord, (lat2, lon2): Coord) -> f64 {
    let start = Point::new(lon1, lat1);
    let end = Point::new(lon2, lat2);
    Geodesic::distance(start, end) / 1000.0
}
