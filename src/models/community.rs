use crate::i18n::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const AUTHORS_EN: [&str; 4] = ["Farmer Ram", "Farmer Shyam", "Farmer Suresh", "Farmer Mohan"];
const AUTHORS_HI: [&str; 4] = ["किसान राम", "किसान श्याम", "किसान सुरेश", "किसान मोहन"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityMessage {
    pub id: Option<i64>,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl CommunityMessage {
    /// Returns None for blank text.
    pub fn new(author: impl Into<String>, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id: None,
            author: author.into(),
            text: text.to_string(),
            created_at: Utc::now(),
        })
    }

    pub fn time_ago(&self, now: DateTime<Utc>) -> String {
        let minutes = (now - self.created_at).num_minutes();
        if minutes < 1 {
            return "Just now".to_string();
        }
        if minutes < 60 {
            return format!("{}m ago", minutes);
        }
        let hours = minutes / 60;
        if hours < 24 {
            return format!("{}h ago", hours);
        }
        format!("{}d ago", hours / 24)
    }
}

/// Pick one of the stock farmer names, keyed off `seed`.
pub fn default_author(lang: Language, seed: u32) -> &'static str {
    let names = match lang {
        Language::En => &AUTHORS_EN,
        Language::Hi => &AUTHORS_HI,
    };
    names[seed as usize % names.len()]
}
