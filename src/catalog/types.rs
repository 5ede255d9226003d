//! Static site content records.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};
use utoipa::ToSchema;

/// Client quote shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub company: String,
    pub role: String,
    pub content: String,
    /// Star rating out of 5.
    pub rating: u8,
}

/// Customer engagement write-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub company: String,
    pub industry: String,
    pub challenge: String,
    pub solution: String,
    pub results: Vec<String>,
    pub image_url: String,
    /// Downloadable PDF version, if one exists.
    pub pdf_filename: Option<String>,
}

/// Blog post teaser. Posts have no body; only preview metadata exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub author: String,
    pub image_url: String,
    pub status: BlogPostStatus,
}

/// Publication state of a blog post.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BlogPostStatus {
    /// Announced but not written yet. Every seeded post is a teaser.
    #[default]
    ComingSoon,
}

/// Offered service line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Icon name used by the frontend.
    pub icon: String,
}

/// Bookable appointment slot, hourly across the business day.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
pub enum TimeSlot {
    #[strum(serialize = "09:00 AM")]
    Nine,
    #[strum(serialize = "10:00 AM")]
    Ten,
    #[strum(serialize = "11:00 AM")]
    Eleven,
    #[strum(serialize = "12:00 PM")]
    Noon,
    #[strum(serialize = "01:00 PM")]
    One,
    #[strum(serialize = "02:00 PM")]
    Two,
    #[strum(serialize = "03:00 PM")]
    Three,
    #[strum(serialize = "04:00 PM")]
    Four,
    #[strum(serialize = "05:00 PM")]
    Five,
}

impl TimeSlot {
    /// Every slot label, earliest first.
    pub fn labels() -> Vec<String> {
        Self::iter().map(|slot| slot.to_string()).collect()
    }
}

/// Body of the available-times listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AvailableTimes {
    pub times: Vec<String>,
}
