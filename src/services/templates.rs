use super::intent::Intent;

/// Placeholder replaced by the raw user message.
pub const MESSAGE_SLOT: &str = "{message}";

pub const WELCOME: &str = "Welcome! I'm the demo bot. Say hello, ask about the weather or music, or type 'help'.";

const GREETING: &[&str] = &[
    "Hello! How can I help you today?",
    "Hi there! What would you like to talk about?",
    "Hey! Nice to hear from you.",
];

const WEATHER: &[&str] = &[
    "I can't check a live forecast yet, but I hope the sun is out where you are!",
    "Weather talk! I don't have a forecast feed, so maybe take a look outside?",
];

const MUSIC: &[&str] = &[
    "I love music! I can't play songs myself, but what are you listening to?",
    "Music makes everything better. Got a favourite artist?",
];

const HELP: &[&str] = &[
    "I can say hello, chat about the weather or music, and echo anything else back to you. Just type a message!",
];

const GRATITUDE: &[&str] = &[
    "You're welcome!",
    "Happy to help!",
    "Anytime!",
];

const GENERAL: &[&str] = &[
    "You said: \"{message}\". Tell me more!",
    "I'm not sure I follow \"{message}\" yet. Try asking about the weather or music.",
    "Interesting: \"{message}\". I'm still learning, could you rephrase?",
];

pub fn templates_for(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Greeting => GREETING,
        Intent::Weather => WEATHER,
        Intent::Music => MUSIC,
        Intent::Help => HELP,
        Intent::Gratitude => GRATITUDE,
        Intent::General => GENERAL,
    }
}

/// Fills the first slot in `template` with `message` as typed.
pub fn render(template: &str, message: &str) -> String {
    template.replacen(MESSAGE_SLOT, message, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_intent_has_templates() {
        for intent in [
            Intent::Greeting,
            Intent::Weather,
            Intent::Music,
            Intent::Help,
            Intent::Gratitude,
            Intent::General,
        ] {
            assert!(!templates_for(intent).is_empty(), "{intent} has no templates");
        }
    }

    #[test]
    fn general_templates_carry_one_slot() {
        for template in templates_for(Intent::General) {
            assert_eq!(template.matches(MESSAGE_SLOT).count(), 1);
        }
    }

    #[test]
    fn render_does_not_expand_slot_inside_message() {
        let out = render("echo {message}", "{message} twice");
        assert_eq!(out, "echo {message} twice");
    }

    #[test]
    fn render_leaves_plain_templates_alone() {
        assert_eq!(render("You're welcome!", "thanks"), "You're welcome!");
    }
}
