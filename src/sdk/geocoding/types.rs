use serde::Deserialize;

// --- Wire format of the Nominatim /search endpoint (format=jsonv2) ---
// Coordinates arrive as decimal strings, not numbers.

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub address: AddressDetails,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddressDetails {
    pub city: Option<String>,
    pub village: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_result_with_address_details() {
        let body = r#"
        [
            {
                "place_id": 90624832,
                "licence": "Data © OpenStreetMap contributors, ODbL 1.0.",
                "lat": "41.8933203",
                "lon": "12.4829321",
                "name": "Roma",
                "display_name": "Roma, Lazio, Italia",
                "address": {
                    "city": "Roma",
                    "state": "Lazio",
                    "country": "Italia",
                    "country_code": "it"
                }
            }
        ]"#;

        let results: Vec<SearchResult> = serde_json::from_str(body).unwrap();
        assert_eq!(results.len(), 1);
        let first = &results[0];
        assert_eq!(first.lat, "41.8933203");
        assert_eq!(first.address.city.as_deref(), Some("Roma"));
        assert_eq!(first.address.village, None);
        assert_eq!(first.address.state.as_deref(), Some("Lazio"));
    }

    #[test]
    fn missing_address_object_defaults_to_empty_details() {
        let body = r#"[{"lat": "45.0", "lon": "7.0"}]"#;

        let results: Vec<SearchResult> = serde_json::from_str(body).unwrap();
        assert!(results[0].address.city.is_none());
        assert!(results[0].address.country.is_none());
    }

    #[test]
    fn empty_result_array_is_valid() {
        let results: Vec<SearchResult> = serde_json::from_str("[]").unwrap();
        assert!(results.is_empty());
    }
}
