//! The explicit, seedable fake-data context.

use crate::generators::{address, company, line_items, numeric, pattern, person, text};
use crate::window::DateWindow;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seed_core::{GeneratorConfig, Value};

/// Source of all fake values.
///
/// Owns the seeded RNG every field generator draws from. Two contexts
/// created with the same seed yield the same sequence of values.
pub struct FakeData {
    seed: u64,
    rng: StdRng,
}

impl FakeData {
    /// Create a context seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed the context was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Underlying RNG.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Random integer in `[min, max]`.
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// Evaluate a generator configuration.
    ///
    /// `index` is the zero-based position of the record being generated and
    /// feeds `{index}` placeholders; `window` bounds timestamps.
    pub fn generate(&mut self, config: &GeneratorConfig, index: u64, window: &DateWindow) -> Value {
        let rng = &mut self.rng;
        match config {
            GeneratorConfig::FirstName => Value::Text(person::first_name(rng).to_string()),
            GeneratorConfig::LastName => Value::Text(person::last_name(rng).to_string()),
            GeneratorConfig::FullName => Value::Text(person::full_name(rng)),
            GeneratorConfig::Email => Value::Text(person::email(rng)),
            GeneratorConfig::PhoneNumber => Value::Text(person::phone_number(rng)),
            GeneratorConfig::JobTitle => Value::Text(person::job_title(rng)),

            GeneratorConfig::StreetAddress => Value::Text(address::street_address(rng)),
            GeneratorConfig::City => Value::Text(address::city(rng).to_string()),
            GeneratorConfig::StateAbbr => Value::Text(address::state_abbr(rng).to_string()),
            GeneratorConfig::PostalCode => Value::Text(address::postal_code(rng)),
            GeneratorConfig::Country => Value::Text(address::country(rng).to_string()),

            GeneratorConfig::Company => Value::Text(company::company(rng)),
            GeneratorConfig::CatchPhrase => Value::Text(company::catch_phrase(rng)),

            GeneratorConfig::Paragraph { max_chars } => {
                Value::Text(text::paragraph(rng, *max_chars))
            }

            GeneratorConfig::Pattern { pattern } => {
                Value::Text(pattern::generate_pattern(pattern, rng, index))
            }

            GeneratorConfig::OneOf { values } => Value::Text(numeric::one_of(rng, values)),

            GeneratorConfig::IntRange { min, max } => {
                Value::Int(numeric::generate_int_range(rng, *min, *max))
            }

            GeneratorConfig::DecimalRange { min, max, scale } => {
                Value::Decimal(numeric::generate_decimal_range(rng, *min, *max, *scale))
            }

            GeneratorConfig::WeightedBool { true_weight } => {
                Value::Bool(numeric::weighted_bool(rng, *true_weight))
            }

            GeneratorConfig::LineItems {
                min_items,
                max_items,
            } => Value::Text(line_items::line_items_json(rng, *min_items, *max_items)),

            GeneratorConfig::Timestamp => Value::Timestamp(window.sample(rng)),
        }
    }
}

impl std::fmt::Debug for FakeData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeData").field("seed", &self.seed).finish()
    }
}
