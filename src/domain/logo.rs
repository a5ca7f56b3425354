use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Displayable;

/// Layout templates offered by the logo builder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogoTemplate {
    Shield,
    Circle,
    Banner,
    Mascot,
}

impl LogoTemplate {
    pub fn all() -> [LogoTemplate; 4] {
        [
            LogoTemplate::Shield,
            LogoTemplate::Circle,
            LogoTemplate::Banner,
            LogoTemplate::Mascot,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogoTemplate::Shield => "Shield",
            LogoTemplate::Circle => "Circle",
            LogoTemplate::Banner => "Banner",
            LogoTemplate::Mascot => "Mascot",
        }
    }
}

/// A saved logo design for a reserved team name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoDesign {
    pub id: Uuid,
    pub team_name: String,
    pub template: LogoTemplate,
    pub primary_color: String,
    pub secondary_color: String,
    pub created_at: DateTime<Utc>,
}

impl LogoDesign {
    pub fn new(
        team_name: impl Into<String>,
        template: LogoTemplate,
        primary_color: impl Into<String>,
        secondary_color: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_name: team_name.into(),
            template,
            primary_color: primary_color.into(),
            secondary_color: secondary_color.into(),
            created_at: Utc::now(),
        }
    }
}

impl Displayable for LogoDesign {
    fn display_label(&self) -> String {
        format!("{} ({})", self.team_name, self.template.label())
    }
}
