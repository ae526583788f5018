use super::error::LookupError;

/// A resolved place: coordinates plus whatever locality components the
/// service reported. Sentinel substitution for missing components belongs to
/// the callers, not the adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub lat: f64,
    pub lon: f64,
    pub city: Option<String>,
    pub village: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

pub trait Geocoder {
    /// Resolves a free-text address. `Ok(None)` means the service answered
    /// but found no match; errors are transport- or decode-level failures.
    fn lookup(&self, address: &str) -> Result<Option<Place>, LookupError>;
}
