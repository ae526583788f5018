use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde::Serialize;

use super::distance::{Coord, CoordPair};
use super::geocoding::{AddressReport, GeocodeOutcome};

/// Fixed output name of the paired-distance map, overwritten on every run.
pub const DISTANCE_MAP_FILE: &str = "mappa_distanze_tra_indirizzi.html";

const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

// Consumes the MAP_DATA global embedded by `MapDocument::render`.
const MAP_JS: &str = r#"
var map = L.map('map').setView(MAP_DATA.center, MAP_DATA.zoom);
L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', {
    maxZoom: 19,
    attribution: '&copy; OpenStreetMap contributors'
}).addTo(map);
MAP_DATA.markers.forEach(function (m) {
    var marker = L.marker(m.coord, m.color ? { icon: coloredIcon(m.color) } : {}).addTo(map);
    if (m.popup) { marker.bindPopup(m.popup, { maxWidth: 300 }); }
    if (m.tooltip) { marker.bindTooltip(m.tooltip); }
});
MAP_DATA.lines.forEach(function (l) {
    L.polyline(l.coords, { color: l.color, weight: l.weight, opacity: l.opacity }).addTo(map);
});
function coloredIcon(color) {
    return new L.Icon({
        iconUrl: 'https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-' + color + '.png',
        shadowUrl: 'https://unpkg.com/leaflet@1.9.4/dist/images/marker-shadow.png',
        iconSize: [25, 41],
        iconAnchor: [12, 41],
        popupAnchor: [1, -34],
        shadowSize: [41, 41]
    });
}
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Blue,
    Red,
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    coord: Coord,
    #[serde(skip_serializing_if = "Option::is_none")]
    popup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<MarkerColor>,
}

impl Marker {
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            popup: None,
            tooltip: None,
            color: None,
        }
    }

    /// Popup content is treated as HTML by Leaflet.
    pub fn popup(mut self, popup: impl Into<String>) -> Self {
        self.popup = Some(popup.into());
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn color(mut self, color: MarkerColor) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PolyLine {
    coords: CoordPair,
    color: &'static str,
    weight: f64,
    opacity: f64,
}

impl PolyLine {
    pub fn between(start: Coord, end: Coord) -> Self {
        Self {
            coords: (start, end),
            color: "black",
            weight: 2.5,
            opacity: 0.5,
        }
    }
}

/// An interactive map, rendered on demand to a self-contained HTML page that
/// loads Leaflet from a CDN.
#[derive(Debug, Clone)]
pub struct MapDocument {
    center: Coord,
    zoom: u8,
    markers: Vec<Marker>,
    lines: Vec<PolyLine>,
}

impl MapDocument {
    pub fn new(center: Coord, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            markers: Vec::new(),
            lines: Vec::new(),
        }
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn add_line(&mut self, line: PolyLine) {
        self.lines.push(line);
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn render(&self) -> Markup {
        let payload = serde_json::json!({
            "center": self.center,
            "zoom": self.zoom,
            "markers": self.markers,
            "lines": self.lines,
        });
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { "Address map" }
                    link rel="stylesheet" href=(LEAFLET_CSS_URL);
                    style { "html, body, #map { height: 100%; margin: 0; }" }
                }
                body {
                    div id="map" {}
                    script src=(LEAFLET_JS_URL) {}
                    script { (PreEscaped(format!("var MAP_DATA = {};", payload))) }
                    script { (PreEscaped(MAP_JS)) }
                }
            }
        }
    }

    pub fn to_html(&self) -> String {
        self.render().into_string()
    }

    /// Writes the rendered page, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        fs::write(path, self.to_html())
    }
}

/// Map of all successfully verified addresses, centered on the first success
/// or on (0, 0) when there is none. Renders nothing to disk.
pub fn markers_map(reports: &[AddressReport]) -> MapDocument {
    let center = reports
        .iter()
        .find_map(|report| report.outcome.coords())
        .unwrap_or((0.0, 0.0));
    let mut map = MapDocument::new(center, 6);

    for report in reports {
        if let GeocodeOutcome::Found {
            lat,
            lon,
            city,
            region,
            country,
        } = &report.outcome
        {
            let popup = format!(
                "Address: {} <br> City: {} <br> Region: {} <br> Country: {} <br> Coordinates ({}, {})",
                report.address, city, region, country, lat, lon
            );
            map.add_marker(
                Marker::new((*lat, *lon))
                    .popup(popup)
                    .tooltip(city.clone()),
            );
        }
    }

    map
}

/// Arithmetic mean of latitudes and longitudes across all pair endpoints.
/// Undefined (NaN) for an empty slice; callers pass at least one pair.
pub fn map_center(pairs: &[CoordPair]) -> Coord {
    let (lat_sum, lon_sum) = pairs.iter().fold(
        (0.0, 0.0),
        |(lat_acc, lon_acc), ((lat1, lon1), (lat2, lon2))| {
            (lat_acc + lat1 + lat2, lon_acc + lon1 + lon2)
        },
    );
    let count = (pairs.len() * 2) as f64;
    (lat_sum / count, lon_sum / count)
}

/// Map of address pairs: a blue and a red marker per pair with a connecting
/// line, centered on the mean of all endpoints.
pub fn distance_map(pairs: &[CoordPair]) -> MapDocument {
    let mut map = MapDocument::new(map_center(pairs), 4);

    for &(start, end) in pairs {
        map.add_marker(
            Marker::new(start)
                .popup("Address 1")
                .color(MarkerColor::Blue),
        );
        map.add_marker(Marker::new(end).popup("Address 2").color(MarkerColor::Red));
        map.add_line(PolyLine::between(start, end));
    }

    map
}

/// Renders the paired-distance map and writes it to `DISTANCE_MAP_FILE` in
/// the working directory, overwriting any previous run.
pub fn save_distance_map(pairs: &[CoordPair]) -> io::Result<PathBuf> {
    let path = PathBuf::from(DISTANCE_MAP_FILE);
    distance_map(pairs).save(&path)?;
    log::info!("Distance map saved to {}", path.display());
    Ok(path)
}
