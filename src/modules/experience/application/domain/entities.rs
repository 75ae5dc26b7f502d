use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of engagement kinds. Stored as text; legacy rows with an
/// unrecognized value degrade to `Work`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceType {
    #[default]
    Work,
    Research,
    Internship,
    Volunteer,
}

impl ExperienceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceType::Work => "Work",
            ExperienceType::Research => "Research",
            ExperienceType::Internship => "Internship",
            ExperienceType::Volunteer => "Volunteer",
        }
    }

    pub fn from_str_or_default(raw: &str) -> Self {
        match raw {
            "Research" => ExperienceType::Research,
            "Internship" => ExperienceType::Internship,
            "Volunteer" => ExperienceType::Volunteer,
            _ => ExperienceType::Work,
        }
    }
}

/// Engagement period. An absent end bound means the role is ongoing and
/// renders as "Present".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl Period {
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start.format("%b %Y"))?;
        match self.end {
            Some(end) => write!(f, " - {}", end.format("%b %Y")),
            None => write!(f, " - Present"),
        }
    }
}
