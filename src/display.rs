//! Console formatting for fetched resources
//!
//! Each resource kind has a pure formatting function that turns a typed model
//! into display lines. `render` deserializes a raw payload and dispatches to
//! the right formatter; a `DisplaySink` decides where the lines end up.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

use crate::data::{Character, Film, Page, Planet, Starship, Vehicle};

/// Number of starships shown from the first page
pub const STARSHIP_DISPLAY_LIMIT: usize = 3;

/// Planets must have strictly more inhabitants than this to be shown
pub const PLANET_MIN_POPULATION: u64 = 1_000_000_000;

/// Planets must be strictly wider than this (in km) to be shown
pub const PLANET_MIN_DIAMETER_KM: u64 = 10_000;

/// The resource kinds a run displays, in run order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Character,
    Starships,
    Planets,
    Films,
    Vehicle,
}

impl Section {
    /// Heading printed above the section
    pub fn title(&self) -> &'static str {
        match self {
            Section::Character => "Character",
            Section::Starships => "Starships",
            Section::Planets => "Large, populous planets",
            Section::Films => "Films by release date",
            Section::Vehicle => "Vehicle",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Destination for formatted output
pub trait DisplaySink: Send + Sync {
    fn show(&self, section: Section, lines: &[String]);
}

/// Prints sections to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl DisplaySink for ConsoleSink {
    fn show(&self, section: Section, lines: &[String]) {
        println!("\n=== {} ===", section.title());
        for line in lines {
            println!("{}", line);
        }
    }
}

/// Deserializes `payload` as the model for `section` and formats it
pub fn render(section: Section, payload: &Value) -> Result<Vec<String>, serde_json::Error> {
    let lines = match section {
        Section::Character => format_character(&decode(payload)?),
        Section::Starships => format_starships(&decode::<Page<Starship>>(payload)?.results),
        Section::Planets => format_planets(&decode::<Page<Planet>>(payload)?.results),
        Section::Films => format_films(&decode::<Page<Film>>(payload)?.results),
        Section::Vehicle => format_vehicle(&decode(payload)?),
    };
    Ok(lines)
}

fn decode<T: DeserializeOwned>(payload: &Value) -> Result<T, serde_json::Error> {
    T::deserialize(payload)
}

pub fn format_character(character: &Character) -> Vec<String> {
    vec![
        format!("Name: {}", character.name),
        format!("Height: {} cm", character.height),
        format!("Mass: {} kg", character.mass),
        format!("Hair color: {}", character.hair_color),
        format!("Skin color: {}", character.skin_color),
        format!("Eye color: {}", character.eye_color),
        format!("Birth year: {}", character.birth_year),
        format!("Gender: {}", character.gender),
    ]
}

/// Formats at most `STARSHIP_DISPLAY_LIMIT` starships, in the order given
pub fn format_starships(starships: &[Starship]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, ship) in starships.iter().take(STARSHIP_DISPLAY_LIMIT).enumerate() {
        lines.push(format!("{}. {}", i + 1, ship.name));
        lines.push(format!("   Model: {}", ship.model));
        lines.push(format!("   Manufacturer: {}", ship.manufacturer));
        lines.push(format!("   Class: {}", ship.starship_class));
    }
    lines
}

/// Whether a planet is both populous and large enough to display
///
/// Both thresholds are strict, and a planet with a non-numeric population or
/// diameter (`"unknown"`) never qualifies.
pub fn is_notable_planet(planet: &Planet) -> bool {
    let populous = planet
        .population_count()
        .is_some_and(|p| p > PLANET_MIN_POPULATION);
    let large = planet
        .diameter_km()
        .is_some_and(|d| d > PLANET_MIN_DIAMETER_KM);
    populous && large
}

pub fn format_planets(planets: &[Planet]) -> Vec<String> {
    let notable: Vec<&Planet> = planets.iter().filter(|p| is_notable_planet(p)).collect();

    if notable.is_empty() {
        return vec!["No planets with population > 1B and diameter > 10000 km".to_string()];
    }

    notable
        .iter()
        .map(|p| {
            format!(
                "{}: population {}, diameter {} km, climate {}, terrain {}",
                p.name, p.population, p.diameter, p.climate, p.terrain
            )
        })
        .collect()
}

/// Orders films by release date, oldest first
///
/// The sort is stable so films released the same day keep their API order.
/// Films without a parseable date go last.
pub fn sort_by_release(films: &[Film]) -> Vec<&Film> {
    let mut sorted: Vec<&Film> = films.iter().collect();
    sorted.sort_by_key(|f| {
        let released = f.released_on();
        (released.is_none(), released)
    });
    sorted
}

pub fn format_films(films: &[Film]) -> Vec<String> {
    sort_by_release(films)
        .into_iter()
        .map(|f| {
            format!(
                "Episode {}: {} ({}), directed by {}",
                f.episode_id, f.title, f.release_date, f.director
            )
        })
        .collect()
}

pub fn format_vehicle(vehicle: &Vehicle) -> Vec<String> {
    vec![
        format!("Name: {}", vehicle.name),
        format!("Model: {}", vehicle.model),
        format!("Manufacturer: {}", vehicle.manufacturer),
        format!("Cost: {} credits", vehicle.cost_in_credits),
        format!("Length: {} m", vehicle.length),
        format!("Crew: {}", vehicle.crew),
        format!("Passengers: {}", vehicle.passengers),
        format!("Class: {}", vehicle.vehicle_class),
    ]
}
