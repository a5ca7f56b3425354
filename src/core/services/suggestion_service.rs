//! AI-style team-name suggestions from curated word lists.
//!
//! Deterministic on purpose: interests and an optional seed phrase bias the
//! ranking, so the same profile always sees the same list.

use once_cell::sync::Lazy;
use strsim::jaro_winkler;

use crate::domain::profile::UserInfo;

static ADJECTIVES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "Blazing", "Iron", "Savage", "Electric", "Rowdy", "Midnight", "Turbo", "Golden",
        "Ruthless", "Thundering", "Crimson", "Fearless", "Untamed", "Roaring", "Atomic",
    ]
});

static MASCOTS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "Gridironers", "Blitzers", "Juggernauts", "Mavericks", "Stampede", "Renegades",
        "Touchdowners", "Warlords", "Cannons", "Dynamos", "Vipers", "Outlaws", "Sharks",
        "Titans", "Hurricanes",
    ]
});

/// Generates ranked team-name candidates.
pub struct SuggestionService;

impl SuggestionService {
    /// Builds up to `limit` suggestions, preferring combinations close to
    /// the seed phrase and to the profile's interests.
    pub fn suggest(profile: Option<&UserInfo>, seed: Option<&str>, limit: usize) -> Vec<String> {
        let mut mascots: Vec<String> = Vec::new();
        if let Some(profile) = profile {
            for interest in &profile.interests {
                let word = capitalize(interest.trim());
                if !word.is_empty() {
                    mascots.push(word);
                }
            }
        }
        mascots.extend(MASCOTS.iter().map(|m| m.to_string()));

        let mut candidates: Vec<String> = Vec::new();
        for mascot in &mascots {
            for adjective in ADJECTIVES.iter() {
                candidates.push(format!("{adjective} {mascot}"));
            }
        }

        if let Some(seed) = seed.map(str::trim).filter(|s| !s.is_empty()) {
            let seed = seed.to_lowercase();
            candidates.sort_by(|a, b| {
                let score_a = jaro_winkler(&a.to_lowercase(), &seed);
                let score_b = jaro_winkler(&b.to_lowercase(), &seed);
                score_b.partial_cmp(&score_a).unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        candidates.truncate(limit);
        candidates
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::UserInfo;

    #[test]
    fn suggestions_respect_limit_and_are_deterministic() {
        let first = SuggestionService::suggest(None, None, 10);
        let second = SuggestionService::suggest(None, None, 10);
        assert_eq!(first.len(), 10);
        assert_eq!(first, second);
    }

    #[test]
    fn interests_appear_ahead_of_stock_mascots() {
        let profile = UserInfo::new("Jane").with_interest("wolves");
        let suggestions = SuggestionService::suggest(Some(&profile), None, 5);
        assert!(suggestions.iter().all(|s| s.ends_with("Wolves")));
    }

    #[test]
    fn seed_pulls_similar_names_to_the_front() {
        let suggestions = SuggestionService::suggest(None, Some("Iron Titans"), 20);
        assert!(
            suggestions[0].contains("Iron") || suggestions[0].contains("Titans"),
            "top suggestion {:?} ignores the seed",
            suggestions[0]
        );
    }
}
