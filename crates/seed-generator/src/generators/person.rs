//! Person generators: names, contact details, job titles.

use super::{digits, pick};
use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Christopher", "Lisa", "Daniel", "Nancy", "Matthew", "Betty", "Anthony",
    "Margaret", "Mark", "Sandra", "Donald", "Ashley", "Steven", "Kimberly", "Paul", "Emily",
    "Andrew", "Donna", "Joshua", "Michelle", "Kenneth", "Carol", "Kevin", "Amanda", "Brian",
    "Melissa", "George", "Deborah", "Timothy", "Stephanie", "Ronald", "Rebecca", "Jason", "Laura",
    "Edward", "Sharon", "Jeffrey", "Cynthia", "Ryan", "Kathleen", "Jacob", "Amy", "Gary", "Angela",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts", "Gomez", "Phillips", "Evans", "Turner",
];

const EMAIL_DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "example.net",
    "mail.example.com",
    "corp.example.com",
];

const JOB_LEVELS: &[&str] = &[
    "", "", "Senior ", "Junior ", "Lead ", "Principal ", "Chief ", "Associate ",
];

const JOB_AREAS: &[&str] = &[
    "Marketing", "Sales", "Finance", "Operations", "Software", "Data", "Product", "Quality",
    "Logistics", "Customer Success", "Manufacturing", "Procurement", "Research", "Legal",
];

const JOB_ROLES: &[&str] = &[
    "Engineer", "Manager", "Analyst", "Specialist", "Coordinator", "Consultant", "Director",
    "Administrator", "Planner", "Officer", "Technician", "Architect",
];

/// A given name.
pub fn first_name<R: Rng>(rng: &mut R) -> &'static str {
    pick(rng, FIRST_NAMES)
}

/// A family name.
pub fn last_name<R: Rng>(rng: &mut R) -> &'static str {
    pick(rng, LAST_NAMES)
}

/// Given and family name separated by a space.
pub fn full_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", first_name(rng), last_name(rng))
}

/// Lowercase email address on a reserved example domain.
pub fn email<R: Rng>(rng: &mut R) -> String {
    let first = first_name(rng).to_lowercase();
    let last = last_name(rng).to_lowercase();
    let suffix = rng.random_range(1..=9999);
    let domain = pick(rng, EMAIL_DOMAINS);
    format!("{first}.{last}{suffix}@{domain}")
}

/// North-American style phone number, `NXX-NXX-XXXX` with an optional extension.
pub fn phone_number<R: Rng>(rng: &mut R) -> String {
    let area = rng.random_range(201..=989);
    let exchange = rng.random_range(200..=999);
    let line = digits(rng, 4);
    if rng.random_bool(0.1) {
        format!("{area}-{exchange}-{line}x{}", digits(rng, 3))
    } else {
        format!("{area}-{exchange}-{line}")
    }
}

/// Job title such as `Senior Data Engineer`.
pub fn job_title<R: Rng>(rng: &mut R) -> String {
    let level = pick(rng, JOB_LEVELS);
    let area = pick(rng, JOB_AREAS);
    let role = pick(rng, JOB_ROLES);
    format!("{level}{area} {role}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_name_has_two_parts() {
        let mut rng = StdRng::seed_from_u64(42);
        let name = full_name(&mut rng);
        assert_eq!(name.split(' ').count(), 2);
    }

    #[test]
    fn test_email_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let email = email(&mut rng);
            let (local, domain) = email.split_once('@').unwrap();
            assert!(local.contains('.'));
            assert!(domain.contains("example."));
            assert_eq!(email, email.to_lowercase());
        }
    }

    #[test]
    fn test_phone_number_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let phone = phone_number(&mut rng);
            let base = phone.split('x').next().unwrap();
            assert_eq!(base.len(), 12);
            assert!(base.chars().all(|c| c.is_ascii_digit() || c == '-'));
        }
    }

    #[test]
    fn test_job_title_not_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        let title = job_title(&mut rng);
        assert!(!title.trim().is_empty());
        assert!(!title.starts_with(' '));
    }
}
