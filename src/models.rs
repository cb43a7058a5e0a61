use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// The fixed set of service categories. Declaration order is display order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Makeup,
    Facials,
    Waxing,
    Kinyozi,
    Massage,
    Nails,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Makeup,
        Category::Facials,
        Category::Waxing,
        Category::Kinyozi,
        Category::Massage,
        Category::Nails,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Makeup => "makeup",
            Category::Facials => "facials",
            Category::Waxing => "waxing",
            Category::Kinyozi => "kinyozi",
            Category::Massage => "massage",
            Category::Nails => "nails",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "makeup" => Ok(Category::Makeup),
            "facials" => Ok(Category::Facials),
            "waxing" => Ok(Category::Waxing),
            "kinyozi" => Ok(Category::Kinyozi),
            "massage" => Ok(Category::Massage),
            "nails" => Ok(Category::Nails),
            other => Err(ValidationError::UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ServiceItem {
    pub id: i64,
    pub name: String,
    pub price: u32, // non-negative by construction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Category to ordered item list. Item ids are unique across the whole map.
pub type Catalog = BTreeMap<Category, Vec<ServiceItem>>;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub title: String,
    pub body: String,
    pub visual_theme: String, // resolved gradient descriptor, not a palette name
    pub display_delay_minutes: i64,
    pub created_at: DateTime<Utc>,
}

impl Offer {
    /// How long a visitor browses before the offer popup appears.
    pub fn display_delay(&self) -> chrono::Duration {
        chrono::Duration::try_minutes(self.display_delay_minutes)
            .unwrap_or_else(chrono::Duration::zero)
    }
}

/// Candidate offer as entered in the editor. Not persisted; publishing
/// resolves the theme and stamps the creation time.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OfferDraft {
    pub title: String,
    pub body: String,
    pub theme: Theme,
    pub display_delay_minutes: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum Theme {
    /// One of the palette names ("pink-gold", "sunset", ...).
    Named(String),
    Custom(CustomGradient),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CustomGradient {
    pub colors: [String; 3],
    pub direction: GradientDirection,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GradientDirection {
    /// Linear gradient at the given angle in degrees.
    Angle(u16),
    Radial,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionRecord {
    pub logged_in: bool,
    pub last_login: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub message: Option<String>,
    pub home_service: bool,
}
