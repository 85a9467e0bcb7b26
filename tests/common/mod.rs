//! Shared test fixtures.

#![allow(dead_code)]

use datespark::shell::content::{DateIdea, Question, SmallMoment, Tone};
use datespark::shell::{Content, HistoryContent};

pub fn question(prompt: &str) -> Question {
    Question {
        prompt: prompt.to_string(),
        tone: Tone::Light,
    }
}

pub fn date_idea(title: &str) -> DateIdea {
    DateIdea {
        title: title.to_string(),
        description: format!("{title} description"),
    }
}

pub fn moment(text: &str) -> SmallMoment {
    SmallMoment {
        text: text.to_string(),
    }
}

pub fn question_content(prompt: &str) -> Content {
    Content::Question(question(prompt))
}

pub fn history_moment(text: &str) -> HistoryContent {
    HistoryContent::SmallMoment(moment(text))
}
