// src/domain/listing.rs

use crate::domain::distance::{gmaps_directions_url, haversine_km, Coordinates};
use crate::domain::places::{city_center, Office};
use crate::errors::AppError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

/// One decoded dataset row, keyed by column name.
pub type Record = Map<String, Value>;

/// An apartment as shown on the map.
/// Built once per dataset load and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub coords: Coordinates,

    pub title: String,
    pub url: Option<String>,
    pub thumbnail: Option<String>,
    pub address: String,
    pub city: String,

    pub price: f64,
    pub price_period: String,
    pub surface_area_amount: Option<f64>,
    pub surface_area_unit: String,
    pub interior_type: String,
    pub n_rooms: Option<f64>,

    pub first_seen_at: Option<NaiveDateTime>,
    pub last_seen_at: Option<NaiveDateTime>,
    /// Whole days between first and last sighting.
    pub days_online: Option<i64>,

    // Travel estimates precomputed by the scraper, shown verbatim.
    pub time_to_office: Option<String>,
    pub time_to_center: Option<String>,
    pub office_directions_url: String,
    pub center_directions_url: Option<String>,

    pub distance_to_center_km: Option<f64>,
    pub distance_to_office_km: f64,
}

impl Listing {
    /// Builds a listing from a decoded row and annotates it with distances.
    ///
    /// Returns `Ok(None)` when the row carries no coordinates or no price;
    /// such rows can be neither placed on the map nor filtered.
    pub fn from_record(idx: usize, rec: &Record, office: &Office) -> Result<Option<Self>, AppError> {
        let Some(coords) = record_coords(rec)? else {
            return Ok(None);
        };
        if let Err(AppError::Validation(msg)) = coords.validate() {
            return Err(AppError::Validation(format!("row {idx}: {msg}")));
        }

        let Some(price) = get_f64(rec, "price") else {
            return Ok(None);
        };

        let id = get_string(rec, "id").unwrap_or_else(|| idx.to_string());
        let city = get_string(rec, "city").unwrap_or_default();

        let first_seen_at = get_string(rec, "first_seen_at").and_then(|s| parse_timestamp(&s));
        let last_seen_at = get_string(rec, "last_seen_at").and_then(|s| parse_timestamp(&s));
        let days_online = match (first_seen_at, last_seen_at) {
            (Some(first), Some(last)) => Some((last - first).num_days()),
            _ => None,
        };

        let center = city_center(&city);
        let distance_to_center_km = center.map(|c| haversine_km(coords, c)).transpose()?;
        let distance_to_office_km = haversine_km(coords, office.coords)?;

        Ok(Some(Listing {
            id,
            coords,
            title: get_string(rec, "title").unwrap_or_else(|| format!("Apartment #{idx}")),
            url: get_string(rec, "url"),
            thumbnail: get_string(rec, "thumbnail"),
            address: get_string(rec, "address").unwrap_or_default(),
            city,
            price,
            price_period: get_string(rec, "price_period").unwrap_or_else(|| "month".into()),
            surface_area_amount: get_f64(rec, "surface_area_amount"),
            surface_area_unit: get_string(rec, "surface_area_unit").unwrap_or_else(|| "m²".into()),
            interior_type: get_string(rec, "interior_type").unwrap_or_else(|| "?".into()),
            n_rooms: get_f64(rec, "n_rooms"),
            first_seen_at,
            last_seen_at,
            days_online,
            time_to_office: get_string(rec, "time_to_office"),
            time_to_center: get_string(rec, "time_to_center"),
            office_directions_url: get_string(rec, "office_directions_url")
                .unwrap_or_else(|| gmaps_directions_url(coords, office.coords)),
            center_directions_url: get_string(rec, "center_directions_url")
                .or_else(|| center.map(|c| gmaps_directions_url(coords, c))),
            distance_to_center_km,
            distance_to_office_km,
        }))
    }
}

/// Column names a dataset must carry for listings to be placed on the map.
/// Coordinates come either as a `coordinates` struct or as flat columns.
pub fn missing_required_columns<'a, I>(columns: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    let cols: Vec<String> = columns.into_iter().map(|c| c.trim().to_lowercase()).collect();
    let has = |name: &str| cols.iter().any(|c| c == name);

    let mut missing = Vec::new();
    let flat = (has("lat") && has("lng")) || (has("latitude") && has("longitude"));
    if !has("coordinates") && !flat {
        missing.push("coordinates (or lat/lng)");
    }
    if !has("price") {
        missing.push("price");
    }
    missing
}

fn record_coords(rec: &Record) -> Result<Option<Coordinates>, AppError> {
    if let Some(value) = rec.get("coordinates") {
        let obj = match value {
            Value::Null => return Ok(None),
            Value::Object(obj) => obj.clone(),
            // CSV exports carry the struct as a JSON string.
            Value::String(s) if s.trim().is_empty() => return Ok(None),
            Value::String(s) => match serde_json::from_str::<Value>(s) {
                Ok(Value::Object(obj)) => obj,
                _ => {
                    return Err(AppError::Validation(format!(
                        "malformed coordinates value '{s}'"
                    )))
                }
            },
            other => {
                return Err(AppError::Validation(format!(
                    "malformed coordinates value '{other}'"
                )))
            }
        };
        return pair(get_f64(&obj, "lat"), get_f64(&obj, "lng").or_else(|| get_f64(&obj, "lon")));
    }

    let lat = get_f64(rec, "lat").or_else(|| get_f64(rec, "latitude"));
    let lng = get_f64(rec, "lng").or_else(|| get_f64(rec, "longitude"));
    pair(lat, lng)
}

fn pair(lat: Option<f64>, lng: Option<f64>) -> Result<Option<Coordinates>, AppError> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => Ok(Some(Coordinates { lat, lng })),
        (None, None) => Ok(None),
        _ => Err(AppError::Validation(
            "only one of latitude/longitude is set".into(),
        )),
    }
}

pub fn get_f64(rec: &Record, key: &str) -> Option<f64> {
    match rec.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn get_string(rec: &Record, key: &str) -> Option<String> {
    match rec.get(key)? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Scraper timestamps are "%Y-%m-%d %H:%M:%S%.f"; Parquet timestamps come back
/// with an offset; some exports only keep the date.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|d| d.naive_utc()))
        .or_else(|| {
            DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f %:z")
                .ok()
                .map(|d| d.naive_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
