use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// A value the storefront may decline to disclose.
///
/// Pages show "Varies with device" (or similar, localized) instead of a
/// concrete size/version when the build depends on the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceValue {
    Known(String),
    DeviceDependent,
}

impl DeviceValue {
    pub const DEVICE_DEPENDENT: &'static str = "device_dependent";

    pub fn as_known(&self) -> Option<&str> {
        match self {
            DeviceValue::Known(value) => Some(value),
            DeviceValue::DeviceDependent => None,
        }
    }

    pub fn is_device_dependent(&self) -> bool {
        matches!(self, DeviceValue::DeviceDependent)
    }
}

impl fmt::Display for DeviceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceValue::Known(value) => f.write_str(value),
            DeviceValue::DeviceDependent => f.write_str(Self::DEVICE_DEPENDENT),
        }
    }
}

impl Serialize for DeviceValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DeviceValue::Known(value) => serializer.serialize_str(value),
            DeviceValue::DeviceDependent => serializer.serialize_str(Self::DEVICE_DEPENDENT),
        }
    }
}

/// Application metadata from a storefront details page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct App {
    pub name: String,
    pub image_url: String,
    pub developer: String,
    pub developer_mail: Option<String>,
    pub developer_web: Option<String>,
    /// Lowercased category slug, e.g. `game_action`
    pub category: String,
    /// Leading digit run of the stars-count text, kept as source text
    pub rating_count: String,
    /// One count per star bucket, highest bucket first
    pub rating_counts: Vec<i64>,
    pub rating_average: f64,
    /// Raw inner markup of the description block
    pub description: String,
    /// Change-log lines joined by `\n`
    pub recent_change: String,
    pub last_update: NaiveDate,
    pub file_size: DeviceValue,
    /// Free-form install range, e.g. `10,000+`
    pub downloads: String,
    pub version: DeviceValue,
    pub os_required: DeviceValue,
}

/// A single user review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub id: String,
    pub user: String,
    pub user_id: Option<u128>,
    pub date: NaiveDate,
    /// Stars, 0 through 5
    pub rating: u8,
    pub title: String,
    pub text: String,
}
