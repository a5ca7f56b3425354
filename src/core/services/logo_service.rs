//! Logo-creation records for reserved team names.

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::logo::{LogoDesign, LogoTemplate};
use crate::storage::{load_versioned, save_versioned, PersistencePort, LOGOS_KEY};

use super::reservation_service::ReservationService;

pub struct LogoService;

impl LogoService {
    /// Saves a design for an already-reserved name.
    ///
    /// Entering the logo builder without any reservation yields the
    /// full-page empty state, not a dialog error.
    pub fn create(
        store: &dyn PersistencePort,
        team_name: &str,
        template: LogoTemplate,
        primary_color: &str,
        secondary_color: &str,
    ) -> ServiceResult<LogoDesign> {
        let reserved = ReservationService::list(store)?;
        if reserved.is_empty() {
            return Err(ServiceError::MissingPrerequisite(
                "Reserve a team name before creating a logo".into(),
            ));
        }
        if !reserved
            .iter()
            .any(|code| code.team_name.eq_ignore_ascii_case(team_name))
        {
            return Err(ServiceError::Invalid(format!(
                "\"{team_name}\" has no reservation"
            )));
        }
        let design = LogoDesign::new(team_name, template, primary_color, secondary_color);
        let mut designs = Self::list(store)?;
        designs.push(design.clone());
        save_versioned(store, LOGOS_KEY, &designs)?;
        tracing::info!(team = team_name, template = template.label(), "logo saved");
        Ok(design)
    }

    pub fn list(store: &dyn PersistencePort) -> ServiceResult<Vec<LogoDesign>> {
        Ok(load_versioned(store, LOGOS_KEY)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::reservation_service::FixedAvailability;
    use crate::storage::MemoryStore;

    #[test]
    fn logo_requires_an_existing_reservation() {
        let store = MemoryStore::new();
        let err = LogoService::create(&store, "Blitz Brigade", LogoTemplate::Shield, "#111", "#eee")
            .expect_err("no reservations yet");
        assert!(matches!(err, ServiceError::MissingPrerequisite(_)));
    }

    #[test]
    fn logo_saves_for_reserved_name_only() {
        let store = MemoryStore::new();
        let report = ReservationService::search(&mut FixedAvailability(true), "Blitz Brigade");
        ReservationService::reserve(&store, &report).unwrap();

        let err = LogoService::create(&store, "Other Team", LogoTemplate::Circle, "#111", "#eee")
            .expect_err("unreserved name");
        assert!(matches!(err, ServiceError::Invalid(_)));

        let design =
            LogoService::create(&store, "Blitz Brigade", LogoTemplate::Circle, "#111", "#eee")
                .unwrap();
        assert_eq!(design.team_name, "Blitz Brigade");
        assert_eq!(LogoService::list(&store).unwrap().len(), 1);
    }
}
