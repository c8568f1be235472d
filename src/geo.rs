//! Coordinate classification for location messages.
//!
//! Static bounding boxes map latitude/longitude onto named regions, and a
//! fixed table of major cities supports nearest-city lookup via great-circle
//! distance. Anything outside every box classifies as overseas.

/// Mean Earth radius in kilometers, as used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionInfo {
    pub region: &'static str,
    pub area: &'static str,
}

struct RegionBox {
    lat: (f64, f64),
    lng: (f64, f64),
    info: RegionInfo,
}

const fn region(lat: (f64, f64), lng: (f64, f64), name: &'static str, area: &'static str) -> RegionBox {
    RegionBox {
        lat,
        lng,
        info: RegionInfo { region: name, area },
    }
}

// Ordered most-specific first; the first containing box wins.
const REGIONS: &[RegionBox] = &[
    region((35.5, 35.8), (139.6, 139.9), "Central Tokyo", "Greater Tokyo"),
    region((34.6, 34.8), (135.4, 135.6), "Osaka City", "Kansai"),
    region((35.1, 35.3), (139.5, 139.7), "Yokohama", "Greater Tokyo"),
    region((35.0, 36.0), (139.0, 140.5), "Tokyo Area", "Kanto"),
    region((34.0, 35.0), (135.0, 136.5), "Osaka Area", "Kansai"),
    region((35.0, 35.3), (136.8, 137.0), "Nagoya Area", "Chubu"),
    region((33.5, 33.7), (130.3, 130.5), "Fukuoka Area", "Kyushu"),
    region((43.0, 43.2), (141.2, 141.5), "Sapporo Area", "Hokkaido"),
    region((26.1, 26.3), (127.6, 127.8), "Naha Area", "Okinawa"),
    region((43.0, 45.5), (141.0, 146.0), "Hokkaido", "Hokkaido"),
    region((24.0, 26.5), (123.0, 131.5), "Okinawa", "Okinawa"),
    region((30.0, 46.0), (129.0, 146.0), "Japan", "Japan"),
];

pub const OVERSEAS: RegionInfo = RegionInfo {
    region: "Overseas",
    area: "Overseas",
};

/// Classify a coordinate pair into a named region.
///
/// Falls back to [`OVERSEAS`] for coordinates outside every registered box.
#[must_use]
pub fn classify_region(lat: f64, lng: f64) -> RegionInfo {
    REGIONS
        .iter()
        .find(|b| lat >= b.lat.0 && lat <= b.lat.1 && lng >= b.lng.0 && lng <= b.lng.1)
        .map_or(OVERSEAS, |b| b.info)
}

/// Major cities used for nearest-city lookup: (name, lat, lng).
pub const MAJOR_CITIES: &[(&str, f64, f64)] = &[
    ("Tokyo", 35.6762, 139.6503),
    ("Osaka", 34.6937, 135.5023),
    ("Nagoya", 35.1815, 136.9066),
    ("Fukuoka", 33.5904, 130.4017),
    ("Sapporo", 43.0642, 141.3469),
    ("Sendai", 38.2682, 140.8694),
    ("Hiroshima", 34.3853, 132.4553),
    ("Kyoto", 35.0116, 135.7681),
    ("Kobe", 34.6901, 135.1956),
    ("Kumamoto", 32.7898, 130.7417),
];

/// Great-circle distance in kilometers between two coordinate pairs.
#[must_use]
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlng = (lng2 - lng1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// Nearest entry of [`MAJOR_CITIES`] and its distance in kilometers.
#[must_use]
pub fn nearest_city(lat: f64, lng: f64) -> Option<(&'static str, f64)> {
    MAJOR_CITIES
        .iter()
        .map(|&(name, city_lat, city_lng)| (name, haversine_km(lat, lng, city_lat, city_lng)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    High,
    Medium,
    Low,
    VeryLow,
}

impl Precision {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Precision::High => "high (~1m)",
            Precision::Medium => "medium (~100m)",
            Precision::Low => "low (~10km)",
            Precision::VeryLow => "very low",
        }
    }
}

fn decimal_digits(value: f64) -> usize {
    let text = format!("{value}");
    text.split_once('.').map_or(0, |(_, frac)| frac.len())
}

/// Grade coordinate precision from the number of decimal digits the
/// coordinates carry; the coarser of the two axes decides.
#[must_use]
pub fn coordinate_precision(lat: f64, lng: f64) -> Precision {
    match decimal_digits(lat).min(decimal_digits(lng)) {
        n if n >= 5 => Precision::High,
        n if n >= 3 => Precision::Medium,
        n if n >= 1 => Precision::Low,
        _ => Precision::VeryLow,
    }
}

const VENUE_CATEGORIES: &[(&str, &[&str])] = &[
    ("Transit", &["station", "bus stop", "airport", "port", "terminal"]),
    ("Restaurant", &["restaurant", "cafe", "diner", "bar", "bistro"]),
    ("Hotel", &["hotel", "inn", "hostel", "ryokan"]),
    ("Park & Leisure", &["park", "zoo", "aquarium", "theme park", "garden"]),
    ("Medical", &["hospital", "clinic", "pharmacy"]),
    ("School", &["school", "university", "college", "kindergarten"]),
    ("Shopping", &["store", "shop", "mall", "market", "department"]),
    ("Civic", &["city hall", "library", "museum", "gallery", "hall"]),
];

/// Keyword-classify a venue from its title and address. `None` means no
/// category matched; callers usually render that as a general location.
#[must_use]
pub fn venue_category(title: &str, address: &str) -> Option<&'static str> {
    let haystack = format!("{} {}", title.to_lowercase(), address.to_lowercase());
    VENUE_CATEGORIES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| haystack.contains(k)))
        .map(|(name, _)| *name)
}
