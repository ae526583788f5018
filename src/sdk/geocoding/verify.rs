use serde::Serialize;

use super::error::LookupError;
use super::provider::{Geocoder, Place};
use crate::sdk::distance::Coord;

/// Sentinel reported for locality components the service did not return.
pub const UNAVAILABLE: &str = "unavailable";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GeocodeOutcome {
    Found {
        lat: f64,
        lon: f64,
        city: String,
        region: String,
        country: String,
    },
    NoMatch,
    TimedOut,
    Failed {
        message: String,
    },
}

impl GeocodeOutcome {
    fn from_place(place: Place) -> Self {
        GeocodeOutcome::Found {
            lat: place.lat,
            lon: place.lon,
            city: place
                .city
                .or(place.village)
                .unwrap_or_else(|| UNAVAILABLE.to_string()),
            region: place.region.unwrap_or_else(|| UNAVAILABLE.to_string()),
            country: place.country.unwrap_or_else(|| UNAVAILABLE.to_string()),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, GeocodeOutcome::Found { .. })
    }

    pub fn coords(&self) -> Option<Coord> {
        match self {
            GeocodeOutcome::Found { lat, lon, .. } => Some((*lat, *lon)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AddressReport {
    pub address: String,
    #[serde(flatten)]
    pub outcome: GeocodeOutcome,
}

/// Resolves every address in the list, swallowing per-address failures into
/// the report. Always returns one entry per input element, in input order;
/// duplicate addresses get one entry per occurrence.
pub fn verify_addresses<G: Geocoder>(geocoder: &G, addresses: &[String]) -> Vec<AddressReport> {
    addresses
        .iter()
        .map(|address| {
            let outcome = match geocoder.lookup(address) {
                Ok(Some(place)) => {
                    log::info!(
                        "Resolved \"{}\" to ({}, {})",
                        address,
                        place.lat,
                        place.lon
                    );
                    GeocodeOutcome::from_place(place)
                }
                Ok(None) => {
                    log::warn!("No match for address \"{}\"", address);
                    GeocodeOutcome::NoMatch
                }
                Err(LookupError::TimedOut) => {
                    log::warn!("Lookup timed out for address \"{}\"", address);
                    GeocodeOutcome::TimedOut
                }
                Err(err) => {
                    log::error!("Lookup failed for address \"{}\": {}", address, err);
                    GeocodeOutcome::Failed {
                        message: err.to_string(),
                    }
                }
            };
            AddressReport {
                address: address.clone(),
                outcome,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    enum Scripted {
        Hit(Place),
        Timeout,
        Broken,
    }

    struct FakeGeocoder(HashMap<String, Scripted>);

    impl Geocoder for FakeGeocoder {
        fn lookup(&self, address: &str) -> Result<Option<Place>, LookupError> {
            match self.0.get(address) {
                Some(Scripted::Hit(place)) => Ok(Some(place.clone())),
                Some(Scripted::Timeout) => Err(LookupError::TimedOut),
                Some(Scripted::Broken) => Err(LookupError::Parse(
                    serde_json::from_str::<Vec<i32>>("not json").unwrap_err(),
                )),
                None => Ok(None),
            }
        }
    }

    fn rome() -> Place {
        Place {
            lat: 41.8933203,
            lon: 12.4829321,
            city: Some("Roma".to_string()),
            village: None,
            region: Some("Lazio".to_string()),
            country: Some("Italia".to_string()),
        }
    }

    #[test]
    fn resolved_address_reports_found_with_components() {
        let geocoder = FakeGeocoder(HashMap::from([(
            "Rome, Italy".to_string(),
            Scripted::Hit(rome()),
        )]));

        let reports = verify_addresses(&geocoder, &["Rome, Italy".to_string()]);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].address, "Rome, Italy");
        assert_eq!(
            reports[0].outcome,
            GeocodeOutcome::Found {
                lat: 41.8933203,
                lon: 12.4829321,
                city: "Roma".to_string(),
                region: "Lazio".to_string(),
                country: "Italia".to_string(),
            }
        );
    }

    #[test]
    fn city_falls_back_to_village_then_sentinel() {
        let hamlet = Place {
            city: None,
            village: Some("Civita".to_string()),
            region: None,
            ..rome()
        };
        let geocoder = FakeGeocoder(HashMap::from([("a".to_string(), Scripted::Hit(hamlet))]));

        let reports = verify_addresses(&geocoder, &["a".to_string()]);

        match &reports[0].outcome {
            GeocodeOutcome::Found { city, region, .. } => {
                assert_eq!(city, "Civita");
                assert_eq!(region, UNAVAILABLE);
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn unknown_address_reports_no_match() {
        let geocoder = FakeGeocoder(HashMap::new());

        let reports = verify_addresses(&geocoder, &["nowhere at all".to_string()]);

        assert_eq!(reports[0].outcome, GeocodeOutcome::NoMatch);
        assert!(reports[0].outcome.coords().is_none());
    }

    #[test]
    fn timeout_and_failure_are_kept_apart() {
        let geocoder = FakeGeocoder(HashMap::from([
            ("slow".to_string(), Scripted::Timeout),
            ("bad".to_string(), Scripted::Broken),
        ]));

        let reports = verify_addresses(&geocoder, &["slow".to_string(), "bad".to_string()]);

        assert_eq!(reports[0].outcome, GeocodeOutcome::TimedOut);
        assert!(matches!(
            reports[1].outcome,
            GeocodeOutcome::Failed { .. }
        ));
    }

    #[test]
    fn duplicates_yield_one_entry_per_occurrence() {
        let geocoder = FakeGeocoder(HashMap::from([(
            "Rome, Italy".to_string(),
            Scripted::Hit(rome()),
        )]));
        let addresses = vec![
            "Rome, Italy".to_string(),
            "nowhere".to_string(),
            "Rome, Italy".to_string(),
        ];

        let reports = verify_addresses(&geocoder, &addresses);

        assert_eq!(reports.len(), 3);
        assert!(reports[0].outcome.is_found());
        assert!(!reports[1].outcome.is_found());
        assert!(reports[2].outcome.is_found());
    }

    #[test]
    fn coords_follow_found_state() {
        let geocoder = FakeGeocoder(HashMap::from([(
            "Rome, Italy".to_string(),
            Scripted::Hit(rome()),
        )]));

        let reports = verify_addresses(&geocoder, &["Rome, Italy".to_string()]);

        assert_eq!(
            reports[0].outcome.coords(),
            Some((41.8933203, 12.4829321))
        );
    }
}
