use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Displayable;

/// Account profile captured during onboarding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: Uuid,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Sports and league interests used to bias name suggestions.
    #[serde(default)]
    pub interests: Vec<String>,
}

impl UserInfo {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
            email: None,
            interests: Vec::new(),
        }
    }

    pub fn with_interest(mut self, interest: impl Into<String>) -> Self {
        self.interests.push(interest.into());
        self
    }
}

impl Displayable for UserInfo {
    fn display_label(&self) -> String {
        format!("{} ({} interests)", self.display_name, self.interests.len())
    }
}

/// Onboarding choices that shape defaults across the product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserPreferences {
    #[serde(default)]
    pub favorite_platforms: Vec<crate::domain::reservation::Platform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_style: Option<String>,
    #[serde(default)]
    pub wants_logo_offers: bool,
}
