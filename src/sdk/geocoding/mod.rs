pub mod error;
pub mod nominatim;
pub mod provider;
pub mod types;
pub mod verify;

pub use error::LookupError;
pub use nominatim::NominatimGeocoder;
pub use provider::{Geocoder, Place};
pub use verify::{verify_addresses, AddressReport, GeocodeOutcome, UNAVAILABLE};
