use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Greeting,
    Weather,
    Music,
    Help,
    Gratitude,
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Weather => "weather",
            Intent::Music => "music",
            Intent::Help => "help",
            Intent::Gratitude => "gratitude",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword table scanned top to bottom. `General` has no row: it is what is
/// left when nothing matches.
///
/// Every entry must be a whole word or phrase that does not occur inside
/// common English words. That rules out fragments like "hi" ("this"),
/// "hey" ("they"), "rain" ("train") and "play" ("display").
pub const KEYWORD_TABLE: &[(Intent, &[&str])] = &[
    (
        Intent::Greeting,
        &["hello", "hey there", "hey!", "hey,", "howdy", "greetings", "good morning", "good afternoon", "good evening"],
    ),
    (
        Intent::Weather,
        &["weather", "temperature", "forecast", "raining", "rainy", "sunny", "snow"],
    ),
    (
        Intent::Music,
        &["music", "song", "playlist", "play some", "play a ", "play me", "artist", "album"],
    ),
    (
        Intent::Help,
        &["help", "support", "assist", "what can you do"],
    ),
    (
        Intent::Gratitude,
        &["thank", "thx", "appreciate", "cheers"],
    ),
];

/// Pure lookup: lower-cases `text` and returns the first intent in the table
/// with a keyword contained in it.
pub fn classify(text: &str) -> Intent {
    let lower = text.to_lowercase();

    KEYWORD_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify("HELLO"), Intent::Greeting);
        assert_eq!(classify("Weather?"), Intent::Weather);
    }

    #[test]
    fn greeting_wins_over_weather() {
        assert_eq!(classify("Hello, weather?"), Intent::Greeting);
    }

    #[test]
    fn unmatched_text_is_general() {
        assert_eq!(classify("asdkjasd random text"), Intent::General);
        assert_eq!(classify(""), Intent::General);
    }

    #[test]
    fn keywords_do_not_fire_inside_other_words() {
        assert_eq!(classify("They said it was fine"), Intent::General);
        assert_eq!(classify("They said the train was late"), Intent::General);
        assert_eq!(classify("My brain hurts"), Intent::General);
        assert_eq!(classify("Can you display my order?"), Intent::General);
    }

    #[test]
    fn short_phrases_still_match() {
        assert_eq!(classify("Hey there!"), Intent::Greeting);
        assert_eq!(classify("Is it raining outside?"), Intent::Weather);
        assert_eq!(classify("Play some jazz"), Intent::Music);
    }

    #[test]
    fn names_are_lowercase() {
        assert_eq!(Intent::Gratitude.to_string(), "gratitude");
        assert_eq!(
            serde_json::to_string(&Intent::Music).unwrap(),
            "\"music\""
        );
    }
}
