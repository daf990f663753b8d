//! Geographic proximity scoring.

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance beyond which proximity contributes nothing to a match.
pub const MAX_LOCATION_DISTANCE_KM: f64 = 500.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Outcome of the location proximity scorer.
#[derive(Debug, Clone, Default)]
pub struct LocationScore {
    pub score: f64,
    pub distance_km: Option<f64>,
    pub same_city: bool,
    pub same_country: bool,
}

fn normalized_eq(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => {
            let a = a.trim().to_lowercase();
            let b = b.trim().to_lowercase();
            !a.is_empty() && a == b
        }
        _ => false,
    }
}

/// Tiered-then-linear distance decay: proximity matters far more at short
/// range than at long range.
fn distance_score(distance_km: f64) -> f64 {
    if distance_km <= 50.0 {
        0.9
    } else if distance_km <= 100.0 {
        0.7
    } else if distance_km <= 200.0 {
        0.5
    } else if distance_km <= MAX_LOCATION_DISTANCE_KM {
        0.3 * (MAX_LOCATION_DISTANCE_KM - distance_km) / (MAX_LOCATION_DISTANCE_KM - 200.0)
    } else {
        0.0
    }
}

/// Score geographic proximity between two profiles.
///
/// Same normalized city short-circuits to a perfect score regardless of any
/// coordinates supplied. With coordinates on both sides the Haversine
/// distance is mapped through the tiered decay. With no usable coordinates,
/// a shared country is worth 0.4. Anything else scores 0.
#[allow(clippy::too_many_arguments)]
pub fn location_proximity(
    lat1: Option<f64>,
    lng1: Option<f64>,
    lat2: Option<f64>,
    lng2: Option<f64>,
    city1: Option<&str>,
    city2: Option<&str>,
    country1: Option<&str>,
    country2: Option<&str>,
) -> LocationScore {
    let same_country = normalized_eq(country1, country2);

    if normalized_eq(city1, city2) {
        return LocationScore {
            score: 1.0,
            distance_km: Some(0.0),
            same_city: true,
            same_country,
        };
    }

    if let (Some(lat1), Some(lng1), Some(lat2), Some(lng2)) = (lat1, lng1, lat2, lng2) {
        let distance = haversine_distance(lat1, lng1, lat2, lng2);
        return LocationScore {
            score: distance_score(distance),
            distance_km: Some(distance),
            same_city: false,
            same_country,
        };
    }

    if same_country {
        return LocationScore {
            score: 0.4,
            distance_km: None,
            same_city: false,
            same_country: true,
        };
    }

    LocationScore::default()
}
