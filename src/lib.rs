pub mod sdk;

pub use sdk::config::GeoConfig;
pub use sdk::distance::{paired_distances, Coord, CoordPair, DistanceError, PairedDistances};
pub use sdk::geocoding::{
    verify_addresses, AddressReport, GeocodeOutcome, Geocoder, LookupError, NominatimGeocoder,
    Place,
};
pub use sdk::map::{distance_map, map_center, markers_map, save_distance_map, MapDocument};
pub use sdk::streets::{find_streets, StreetsError};
