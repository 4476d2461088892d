//! Core data models for the Star Wars API
//!
//! SWAPI reports almost every attribute as a string, including numbers
//! (`"1000000000"`) and unknowns (`"unknown"`), so the models keep them as
//! strings and expose typed accessors where filtering needs a number.

pub mod client;

pub use client::{FetchError, SwapiClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A paginated list response (`starships/`, `planets/`, `films/`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of records across all pages
    #[serde(default)]
    pub count: u64,
    /// URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,
    /// Records on this page
    pub results: Vec<T>,
}

/// A person (`people/{id}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
}

/// A starship entry from `starships/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Starship {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub starship_class: String,
}

/// A planet entry from `planets/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Planet {
    pub name: String,
    pub climate: String,
    pub terrain: String,
    /// Diameter in kilometres, or `"unknown"`
    pub diameter: String,
    /// Population count, or `"unknown"`
    pub population: String,
}

impl Planet {
    /// Population as a number, `None` for `"unknown"` or anything non-numeric
    pub fn population_count(&self) -> Option<u64> {
        parse_count(&self.population)
    }

    /// Diameter as a number, `None` for `"unknown"` or anything non-numeric
    pub fn diameter_km(&self) -> Option<u64> {
        parse_count(&self.diameter)
    }
}

/// A film entry from `films/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Film {
    pub title: String,
    pub episode_id: u32,
    pub director: String,
    /// Release date in `YYYY-MM-DD` form
    pub release_date: String,
}

impl Film {
    /// Parsed release date, `None` if the field is missing or malformed
    pub fn released_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d").ok()
    }
}

/// A vehicle (`vehicles/{id}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Vehicle {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: String,
    pub length: String,
    pub crew: String,
    pub passengers: String,
    pub vehicle_class: String,
}

/// Parses a SWAPI numeric string, tolerating thousands separators
fn parse_count(raw: &str) -> Option<u64> {
    raw.replace(',', "").trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(population: &str, diameter: &str) -> Planet {
        Planet {
            name: "Test".to_string(),
            population: population.to_string(),
            diameter: diameter.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_planet_numeric_fields() {
        let p = planet("200000", "10465");
        assert_eq!(p.population_count(), Some(200_000));
        assert_eq!(p.diameter_km(), Some(10_465));
    }

    #[test]
    fn test_planet_unknown_fields_are_none() {
        let p = planet("unknown", "unknown");
        assert_eq!(p.population_count(), None);
        assert_eq!(p.diameter_km(), None);
    }

    #[test]
    fn test_parse_count_accepts_separators() {
        assert_eq!(parse_count("1,000,000"), Some(1_000_000));
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn test_film_release_date() {
        let film = Film {
            release_date: "1977-05-25".to_string(),
            ..Default::default()
        };
        assert_eq!(film.released_on(), NaiveDate::from_ymd_opt(1977, 5, 25));

        let bad = Film {
            release_date: "soon".to_string(),
            ..Default::default()
        };
        assert_eq!(bad.released_on(), None);
    }

    #[test]
    fn test_character_tolerates_extra_and_missing_fields() {
        let json = r#"{ "name": "Luke Skywalker", "height": "172", "films": [] }"#;
        let character: Character = serde_json::from_str(json).expect("Should parse character");
        assert_eq!(character.name, "Luke Skywalker");
        assert_eq!(character.height, "172");
        assert_eq!(character.mass, "");
    }

    #[test]
    fn test_page_requires_results() {
        let json = r#"{ "count": 1, "next": null, "results": [{ "name": "X-wing" }] }"#;
        let page: Page<Starship> = serde_json::from_str(json).expect("Should parse page");
        assert_eq!(page.results.len(), 1);
        assert!(page.next.is_none());

        let missing: Result<Page<Starship>, _> = serde_json::from_str(r#"{ "count": 0 }"#);
        assert!(missing.is_err());
    }
}
