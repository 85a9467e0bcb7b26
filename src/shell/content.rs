//! Typed content payloads carried by favorites and history entries.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Question,
    DateIdea,
    SmallMoment,
    CustomDate,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Question => "question",
            ContentKind::DateIdea => "dateIdea",
            ContentKind::SmallMoment => "smallMoment",
            ContentKind::CustomDate => "customDate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Question => "Question",
            ContentKind::DateIdea => "Date idea",
            ContentKind::SmallMoment => "Small moment",
            ContentKind::CustomDate => "Custom date",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which content filter a question falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Light,
    Deep,
    Spicy,
    Faith,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateIdea {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmallMoment {
    pub text: String,
}

/// A plan assembled step by step on the build-a-date screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomDate {
    pub setting: String,
    pub activity: String,
    pub food: String,
}

/// Payload of a favorite. The kind is derived from the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Question(Question),
    DateIdea(DateIdea),
    SmallMoment(SmallMoment),
    CustomDate(CustomDate),
}

impl Content {
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Question(_) => ContentKind::Question,
            Content::DateIdea(_) => ContentKind::DateIdea,
            Content::SmallMoment(_) => ContentKind::SmallMoment,
            Content::CustomDate(_) => ContentKind::CustomDate,
        }
    }

    /// One-line text used by list views.
    pub fn headline(&self) -> String {
        match self {
            Content::Question(q) => q.prompt.clone(),
            Content::DateIdea(idea) => idea.title.clone(),
            Content::SmallMoment(moment) => moment.text.clone(),
            Content::CustomDate(plan) => {
                format!("{} · {} · {}", plan.setting, plan.activity, plan.food)
            }
        }
    }
}

/// Payload of a history entry. Custom dates are never recorded in history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryContent {
    Question(Question),
    DateIdea(DateIdea),
    SmallMoment(SmallMoment),
}

impl HistoryContent {
    pub fn kind(&self) -> ContentKind {
        match self {
            HistoryContent::Question(_) => ContentKind::Question,
            HistoryContent::DateIdea(_) => ContentKind::DateIdea,
            HistoryContent::SmallMoment(_) => ContentKind::SmallMoment,
        }
    }

    pub fn headline(&self) -> String {
        Content::from(self.clone()).headline()
    }
}

impl From<HistoryContent> for Content {
    fn from(content: HistoryContent) -> Self {
        match content {
            HistoryContent::Question(q) => Content::Question(q),
            HistoryContent::DateIdea(idea) => Content::DateIdea(idea),
            HistoryContent::SmallMoment(moment) => Content::SmallMoment(moment),
        }
    }
}
