use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Displayable;

/// Fantasy platforms a team name can be reserved on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Platform {
    Espn,
    Yahoo,
    Sleeper,
    NflFantasy,
    Cbs,
}

impl Platform {
    /// Fixed list of supported platforms, in display order.
    pub fn all() -> [Platform; 5] {
        [
            Platform::Espn,
            Platform::Yahoo,
            Platform::Sleeper,
            Platform::NflFantasy,
            Platform::Cbs,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Espn => "ESPN",
            Platform::Yahoo => "Yahoo",
            Platform::Sleeper => "Sleeper",
            Platform::NflFantasy => "NFL Fantasy",
            Platform::Cbs => "CBS Sports",
        }
    }
}

/// Per-platform outcome of a mock availability search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailabilityReport {
    pub team_name: String,
    pub available_on: Vec<Platform>,
    pub taken_on: Vec<Platform>,
}

impl AvailabilityReport {
    /// True when the name can be reserved on at least one platform.
    pub fn is_reservable(&self) -> bool {
        !self.available_on.is_empty()
    }
}

/// A reservation code securing a team name across platforms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamCode {
    pub id: Uuid,
    pub team_name: String,
    pub code: String,
    pub platforms: Vec<Platform>,
    pub is_used: bool,
    pub reserved_at: DateTime<Utc>,
}

impl TeamCode {
    pub fn new(
        team_name: impl Into<String>,
        code: impl Into<String>,
        platforms: Vec<Platform>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_name: team_name.into(),
            code: code.into(),
            platforms,
            is_used: false,
            reserved_at: Utc::now(),
        }
    }

    pub fn mark_used(&mut self) {
        self.is_used = true;
    }
}

impl Displayable for TeamCode {
    fn display_label(&self) -> String {
        format!(
            "{} [{}]{}",
            self.team_name,
            self.code,
            if self.is_used { " (used)" } else { "" }
        )
    }
}
