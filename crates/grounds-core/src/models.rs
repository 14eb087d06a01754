//! Data models for local-grounds.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// NOTE ANALYSIS
// =============================================================================

/// Overall tone of a cafe note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    /// Map a lexicon score to a sentiment. Zero (including cancelled hits) is neutral.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s > 0 => Self::Positive,
            s if s < 0 => Self::Negative,
            _ => Self::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            other => Err(format!("Unknown sentiment: {}", other)),
        }
    }
}

/// Canonical analysis result, produced by the model path and the heuristic path alike.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NoteAnalysis {
    /// One or two sentence summary. May be empty, never absent.
    pub summary: String,
    pub sentiment: Sentiment,
    /// Short kebab-case tags in detection (or model) order.
    pub tags: Vec<String>,
}

/// Body of `POST /analyzeCafeNote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeNoteRequest {
    pub text: String,
}

// =============================================================================
// CAFES
// =============================================================================

/// A coffee shop as shown in lists and on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cafe {
    pub id: String,
    pub name: String,
    pub address1: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "yelpURL", default, skip_serializing_if = "Option::is_none")]
    pub yelp_url: Option<String>,
}

impl Cafe {
    /// Single-line postal address, e.g. `"123 Mill Ave, Tempe, AZ 85281"`.
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address1, self.city, self.state, self.zip_code
        )
    }

    /// Case-insensitive match of `needle` against the name or full address.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.full_address().to_lowercase().contains(&needle)
    }
}

/// Keep the cafes whose name or address contains `query`. An empty query keeps everything.
pub fn filter_cafes(cafes: &[Cafe], query: &str) -> Vec<Cafe> {
    if query.is_empty() {
        return cafes.to_vec();
    }
    cafes.iter().filter(|c| c.matches(query)).cloned().collect()
}

/// Which saved list a cafe belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FavoritesCategory {
    Favorites,
    Wishlist,
}

impl FavoritesCategory {
    pub const ALL: [FavoritesCategory; 2] = [Self::Favorites, Self::Wishlist];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Favorites => "Favorites",
            Self::Wishlist => "Wishlist",
        }
    }
}

// =============================================================================
// NOTES
// =============================================================================

/// A user's note about one cafe, with the analysis fields once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CafeNoteEntry {
    pub id: String,
    #[serde(rename = "cafeID")]
    pub cafe_id: String,
    pub cafe_name: String,
    pub text: String,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_sentiment: Option<Sentiment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_tags: Option<Vec<String>>,
}

impl CafeNoteEntry {
    pub fn new(
        id: impl Into<String>,
        cafe: &Cafe,
        text: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            cafe_id: cafe.id.clone(),
            cafe_name: cafe.name.clone(),
            text: text.into(),
            updated_at: now,
            ai_summary: None,
            ai_sentiment: None,
            ai_tags: None,
        }
    }

    /// Store an analysis result on the note and bump its timestamp.
    pub fn apply_analysis(&mut self, analysis: &NoteAnalysis, now: DateTime<Utc>) {
        self.ai_summary = Some(analysis.summary.clone());
        self.ai_sentiment = Some(analysis.sentiment);
        self.ai_tags = Some(analysis.tags.clone());
        self.updated_at = now;
    }

    pub fn is_analyzed(&self) -> bool {
        self.ai_sentiment.is_some()
    }
}

/// Most recently updated notes first.
pub fn sort_notes_recent_first(notes: &mut [CafeNoteEntry]) {
    notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}
