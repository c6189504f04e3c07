//! Address generators.

use super::{digits, pick};
use rand::Rng;

const STREET_NAMES: &[&str] = &[
    "Oak", "Maple", "Cedar", "Pine", "Elm", "Washington", "Lake", "Hill", "Park", "Main",
    "Church", "River", "Sunset", "Highland", "Meadow", "Forest", "Spring", "Ridge", "Valley",
    "Lincoln", "Jefferson", "Franklin", "Madison", "Willow",
];

const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Boulevard", "Way", "Place", "Terrace",
];

const CITIES: &[&str] = &[
    "Springfield", "Riverside", "Franklin", "Greenville", "Bristol", "Clinton", "Fairview",
    "Salem", "Madison", "Georgetown", "Arlington", "Ashland", "Dover", "Oxford", "Jackson",
    "Burlington", "Manchester", "Milton", "Newport", "Auburn", "Dayton", "Lexington", "Milford",
    "Winchester", "Hudson", "Kingston", "Marion", "Clayton", "Centerville", "Lancaster",
];

const STATE_ABBRS: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

const COUNTRIES: &[&str] = &[
    "United States", "Canada", "Mexico", "United Kingdom", "Ireland", "Germany", "France",
    "Spain", "Italy", "Netherlands", "Belgium", "Sweden", "Norway", "Denmark", "Poland",
    "Portugal", "Japan", "South Korea", "Australia", "New Zealand", "Brazil", "Argentina",
    "Chile", "India", "Singapore", "South Africa",
];

/// Street address line such as `4821 Maple Avenue`.
pub fn street_address<R: Rng>(rng: &mut R) -> String {
    let number = rng.random_range(1..=9999);
    let name = pick(rng, STREET_NAMES);
    let suffix = pick(rng, STREET_SUFFIXES);
    if rng.random_bool(0.15) {
        format!("{number} {name} {suffix} Apt. {}", rng.random_range(1..=999))
    } else {
        format!("{number} {name} {suffix}")
    }
}

/// A city name.
pub fn city<R: Rng>(rng: &mut R) -> &'static str {
    pick(rng, CITIES)
}

/// A two-letter US state code.
pub fn state_abbr<R: Rng>(rng: &mut R) -> &'static str {
    pick(rng, STATE_ABBRS)
}

/// Five-digit postal code.
pub fn postal_code<R: Rng>(rng: &mut R) -> String {
    digits(rng, 5)
}

/// A country name.
pub fn country<R: Rng>(rng: &mut R) -> &'static str {
    pick(rng, COUNTRIES)
}
