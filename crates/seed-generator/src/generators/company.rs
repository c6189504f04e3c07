//! Company names and catch phrases.

use super::{person::last_name, pick};
use rand::Rng;

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "Ltd", "and Sons", "PLC", "Corp"];

const PHRASE_ADJECTIVES: &[&str] = &[
    "Adaptive", "Advanced", "Automated", "Balanced", "Centralized", "Configurable", "Cross-platform",
    "Customizable", "Decentralized", "Digitized", "Distributed", "Enhanced", "Ergonomic",
    "Expanded", "Focused", "Integrated", "Innovative", "Managed", "Multi-layered", "Optimized",
    "Organic", "Proactive", "Quality-focused", "Reactive", "Robust", "Seamless", "Streamlined",
    "Synergized", "Total", "Universal", "Upgradable", "Versatile", "Virtual", "Visionary",
];

const PHRASE_DESCRIPTORS: &[&str] = &[
    "24/7", "asymmetric", "bi-directional", "contextually-based", "dedicated", "dynamic",
    "executive", "fault-tolerant", "global", "heuristic", "high-level", "holistic", "hybrid",
    "interactive", "local", "logistical", "mission-critical", "modular", "motivating",
    "multimedia", "next generation", "optimizing", "real-time", "scalable", "stable",
    "systematic", "tangible", "transitional", "value-added", "zero-defect",
];

const PHRASE_NOUNS: &[&str] = &[
    "ability", "adapter", "algorithm", "alliance", "analyzer", "application", "approach",
    "architecture", "array", "capacity", "challenge", "circuit", "collaboration", "concept",
    "database", "emulation", "encoding", "firmware", "framework", "hardware", "hierarchy",
    "infrastructure", "initiative", "interface", "matrix", "methodology", "middleware", "model",
    "moderator", "paradigm", "portal", "process improvement", "product", "projection", "solution",
    "strategy", "superstructure", "system engine", "throughput", "toolset", "workforce",
];

/// Company name such as `Walker Group` or `Hill, Young and Baker`.
pub fn company<R: Rng>(rng: &mut R) -> String {
    match rng.random_range(0..3) {
        0 => format!("{}, {} and {}", last_name(rng), last_name(rng), last_name(rng)),
        1 => format!("{}-{}", last_name(rng), last_name(rng)),
        _ => format!("{} {}", last_name(rng), pick(rng, COMPANY_SUFFIXES)),
    }
}

/// Marketing phrase such as `Robust modular middleware`.
pub fn catch_phrase<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        pick(rng, PHRASE_ADJECTIVES),
        pick(rng, PHRASE_DESCRIPTORS),
        pick(rng, PHRASE_NOUNS)
    )
}
