//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `{index}` - record index
//! - `{uuid}` - random UUID drawn from the RNG
//! - `{hex:N}` - N uppercase hexadecimal digits
//! - `{digits:N}` - N decimal digits, first digit non-zero
//! - `{int:MIN:MAX:WIDTH}` - integer in `[MIN, MAX]`, zero-padded to WIDTH
//!
//! Unrecognised placeholders are copied through verbatim.

use rand::Rng;
use uuid::Builder;

/// Generate a string based on a pattern with placeholders.
pub fn generate_pattern<R: Rng>(pattern: &str, rng: &mut R, index: u64) -> String {
    let mut result = String::with_capacity(pattern.len() + 16);
    let mut rest = pattern;

    while let Some(start) = rest.find('{') {
        result.push_str(&rest[..start]);
        let Some(len) = rest[start..].find('}') else {
            rest = &rest[start..];
            break;
        };
        let placeholder = &rest[start + 1..start + len];
        match expand(placeholder, rng, index) {
            Some(expanded) => result.push_str(&expanded),
            None => result.push_str(&rest[start..=start + len]),
        }
        rest = &rest[start + len + 1..];
    }

    result.push_str(rest);
    result
}

fn expand<R: Rng>(placeholder: &str, rng: &mut R, index: u64) -> Option<String> {
    let mut parts = placeholder.split(':');
    match (parts.next()?, parts.next(), parts.next(), parts.next()) {
        ("index", None, _, _) => Some(index.to_string()),
        ("uuid", None, _, _) => Some(Builder::from_random_bytes(rng.random()).into_uuid().to_string()),
        ("hex", Some(n), None, _) => Some(generate_hex(rng, n.parse().ok()?)),
        ("digits", Some(n), None, _) => Some(generate_random_digits(rng, n.parse().ok()?)),
        ("int", Some(min), Some(max), width) => {
            let min: i64 = min.parse().ok()?;
            let max: i64 = max.parse().ok()?;
            let width: usize = match width {
                Some(w) => w.parse().ok()?,
                None => 0,
            };
            let value = if min >= max {
                min
            } else {
                rng.random_range(min..=max)
            };
            Some(format!("{value:0width$}"))
        }
        _ => None,
    }
}

/// Generate N uppercase hexadecimal digits.
fn generate_hex<R: Rng>(rng: &mut R, digits: usize) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    (0..digits)
        .map(|_| char::from(HEX[rng.random_range(0..16)]))
        .collect()
}

/// Generate a random number with exactly N digits.
fn generate_random_digits<R: Rng>(rng: &mut R, digits: usize) -> String {
    if digits == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(digits);

    // First digit is 1-9 to avoid leading zeros
    result.push(char::from(b'0' + rng.random_range(1..10u8)));
    for _ in 1..digits {
        result.push(char::from(b'0' + rng.random_range(0..10u8)));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_pattern_index() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("user_{index}@example.com", &mut rng, 123);
        assert_eq!(value, "user_123@example.com");
    }

    #[test]
    fn test_generate_pattern_hex() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("ORD-{hex:12}", &mut rng, 0);

        assert!(value.starts_with("ORD-"));
        assert_eq!(value.len(), 4 + 12);
        assert!(value[4..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn test_generate_pattern_int_padded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let value = generate_pattern("WC-{int:1:20:2}", &mut rng, 0);
            assert_eq!(value.len(), 5);
            let n: u32 = value[3..].parse().unwrap();
            assert!((1..=20).contains(&n));
        }
    }

    #[test]
    fn test_generate_pattern_uuid_is_deterministic() {
        let a = generate_pattern("id-{uuid}", &mut StdRng::seed_from_u64(5), 0);
        let b = generate_pattern("id-{uuid}", &mut StdRng::seed_from_u64(5), 0);

        assert_eq!(a, b);
        assert_eq!(a.len(), 3 + 36);
    }

    #[test]
    fn test_generate_pattern_random_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("code-{digits:6}", &mut rng, 0);

        assert!(value.starts_with("code-"));
        let random_part = &value[5..];
        assert_eq!(random_part.len(), 6);
        assert!(random_part.chars().all(|c| c.is_ascii_digit()));
        assert_ne!(&random_part[..1], "0");
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_pattern("a{nope}b{", &mut rng, 0), "a{nope}b{");
        assert_eq!(generate_pattern("{hex:x}", &mut rng, 0), "{hex:x}");
    }
}
