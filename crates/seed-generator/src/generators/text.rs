//! Filler text.

use super::pick;
use rand::Rng;

const WORDS: &[&str] = &[
    "account", "across", "agency", "allow", "analysis", "answer", "approach", "around", "article",
    "available", "balance", "because", "before", "behind", "benefit", "between", "budget",
    "building", "business", "capital", "career", "center", "certain", "change", "choice",
    "clearly", "common", "company", "condition", "consider", "continue", "control", "country",
    "current", "customer", "decision", "deliver", "design", "detail", "develop", "direction",
    "during", "early", "economy", "effort", "either", "energy", "enough", "environment",
    "evening", "evidence", "exactly", "factor", "feeling", "figure", "final", "finish", "follow",
    "forward", "friend", "future", "general", "ground", "growth", "happen", "health", "himself",
    "history", "however", "improve", "include", "increase", "industry", "interest", "issue",
    "itself", "language", "large", "later", "leader", "letter", "market", "material", "matter",
    "measure", "member", "method", "middle", "minute", "moment", "month", "morning", "nature",
    "network", "nothing", "number", "office", "order", "others", "owner", "partner", "people",
    "period", "picture", "place", "policy", "position", "power", "present", "pressure",
    "process", "product", "program", "project", "purpose", "quality", "question", "quickly",
    "rather", "reason", "record", "region", "report", "result", "return", "science", "season",
    "series", "service", "several", "shipment", "simple", "single", "society", "source",
    "special", "staff", "standard", "station", "strategy", "structure", "support", "system",
    "theory", "throughout", "together", "travel", "value", "various", "village", "window",
    "within", "without", "worker", "writer",
];

fn sentence<R: Rng>(rng: &mut R) -> String {
    let len = rng.random_range(4..=12);
    let words: Vec<&str> = (0..len).map(|_| pick(rng, WORDS)).collect();
    let mut text = words.join(" ");
    if let Some(first) = text.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    text.push('.');
    text
}

/// Sentences of filler text, never longer than `max_chars`.
///
/// Whole sentences are appended while they fit. When even the first sentence
/// is too long it is cut at a word boundary and closed with a period.
pub fn paragraph<R: Rng>(rng: &mut R, max_chars: usize) -> String {
    if max_chars < 5 {
        return String::new();
    }

    let mut text = sentence(rng);
    if text.len() > max_chars {
        let mut cut = String::new();
        for word in text.trim_end_matches('.').split(' ') {
            if cut.len() + word.len() + 2 > max_chars {
                break;
            }
            if !cut.is_empty() {
                cut.push(' ');
            }
            cut.push_str(word);
        }
        cut.push('.');
        return cut;
    }

    loop {
        let next = sentence(rng);
        if text.len() + 1 + next.len() > max_chars {
            return text;
        }
        text.push(' ');
        text.push_str(&next);
    }
}
