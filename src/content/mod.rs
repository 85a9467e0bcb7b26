//! Built-in cards shown by the flows.

use crate::shell::content::{DateIdea, Question, SmallMoment, Tone};

const QUESTIONS: &[(&str, Tone)] = &[
    ("What made you smile today?", Tone::Light),
    ("Which trip would you happily take again?", Tone::Light),
    ("What is a small habit of mine you secretly love?", Tone::Light),
    ("When do you feel most understood by me?", Tone::Deep),
    ("What dream have you not said out loud yet?", Tone::Deep),
    ("What is one thing you want us to get better at together?", Tone::Deep),
    ("What outfit of mine do you like best?", Tone::Spicy),
    ("Describe your perfect night in, in three words.", Tone::Spicy),
    ("How can I pray for you this week?", Tone::Faith),
    ("Where have you seen grace in our relationship lately?", Tone::Faith),
];

const DATE_IDEAS: &[(&str, &str)] = &[
    ("Sunrise walk", "Set an early alarm and catch the sunrise with a thermos of coffee."),
    ("Cook-off", "Pick one ingredient and each make a dish around it."),
    ("Museum hour", "Choose one room at a museum and only look at that."),
    ("Living-room cinema", "Blankets, a double feature and popcorn with toppings."),
    ("Bookshop swap", "Pick a book for each other with a five-pound limit."),
];

const SMALL_MOMENTS: &[&str] = &[
    "Leave a note in their coat pocket.",
    "Send a photo from the day you met.",
    "Make their drink the way they like it, unasked.",
    "Hold their hand for the whole walk.",
    "Say one specific thing you admire about them.",
];

pub const SETTINGS: &[&str] = &["At home", "In the park", "Downtown", "On a rooftop"];
pub const ACTIVITIES: &[&str] = &["Board games", "Stargazing", "Live music", "Pottery class"];
pub const FOODS: &[&str] = &["Picnic", "Street food", "Homemade pasta", "Dessert crawl"];

/// Questions visible under the given content filters.
pub fn questions(spicy_enabled: bool, faith_enabled: bool) -> Vec<Question> {
    QUESTIONS
        .iter()
        .filter(|(_, tone)| match tone {
            Tone::Spicy => spicy_enabled,
            Tone::Faith => faith_enabled,
            Tone::Light | Tone::Deep => true,
        })
        .map(|(prompt, tone)| Question {
            prompt: (*prompt).to_string(),
            tone: *tone,
        })
        .collect()
}

pub fn date_ideas() -> Vec<DateIdea> {
    DATE_IDEAS
        .iter()
        .map(|(title, description)| DateIdea {
            title: (*title).to_string(),
            description: (*description).to_string(),
        })
        .collect()
}

pub fn small_moments() -> Vec<SmallMoment> {
    SMALL_MOMENTS
        .iter()
        .map(|text| SmallMoment {
            text: (*text).to_string(),
        })
        .collect()
}
