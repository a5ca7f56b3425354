//! Mock search and reservation of team names across fantasy platforms.

use std::collections::BTreeMap;

use rand::{distributions::Alphanumeric, Rng};

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::reservation::{AvailabilityReport, Platform, TeamCode};
use crate::storage::{load_versioned, save_versioned, PersistencePort, TEAM_CODES_KEY};

const CODE_LENGTH: usize = 6;

/// Decides per-platform availability for a searched name.
pub trait AvailabilityStrategy {
    fn is_available(&mut self, team_name: &str, platform: Platform) -> bool;
}

/// Random roll per platform, mirroring the product's simulated search.
#[derive(Debug, Clone, Copy)]
pub struct RandomAvailability {
    availability_rate: f64,
}

impl RandomAvailability {
    pub fn new(availability_rate: f64) -> Self {
        Self {
            availability_rate: availability_rate.clamp(0.0, 1.0),
        }
    }
}

impl Default for RandomAvailability {
    fn default() -> Self {
        Self::new(0.8)
    }
}

impl AvailabilityStrategy for RandomAvailability {
    fn is_available(&mut self, _team_name: &str, _platform: Platform) -> bool {
        rand::thread_rng().gen::<f64>() < self.availability_rate
    }
}

/// Deterministic strategy for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedAvailability(pub bool);

impl AvailabilityStrategy for FixedAvailability {
    fn is_available(&mut self, _team_name: &str, _platform: Platform) -> bool {
        self.0
    }
}

type CodeMap = BTreeMap<String, TeamCode>;

/// Issues and tracks reservation codes in the persistence port.
pub struct ReservationService;

impl ReservationService {
    /// Runs the mock availability search across the fixed platform list.
    pub fn search(strategy: &mut dyn AvailabilityStrategy, team_name: &str) -> AvailabilityReport {
        let mut available_on = Vec::new();
        let mut taken_on = Vec::new();
        for platform in Platform::all() {
            if strategy.is_available(team_name, platform) {
                available_on.push(platform);
            } else {
                taken_on.push(platform);
            }
        }
        tracing::debug!(
            team = team_name,
            available = available_on.len(),
            "availability search completed"
        );
        AvailabilityReport {
            team_name: team_name.to_string(),
            available_on,
            taken_on,
        }
    }

    /// Reserves the searched name on its available platforms, issuing a code.
    pub fn reserve(
        store: &dyn PersistencePort,
        report: &AvailabilityReport,
    ) -> ServiceResult<TeamCode> {
        if !report.is_reservable() {
            return Err(ServiceError::Invalid(format!(
                "\"{}\" is taken on every platform",
                report.team_name
            )));
        }
        let mut codes = Self::load_codes(store)?;
        if codes.contains_key(&report.team_name) {
            return Err(ServiceError::Invalid(format!(
                "\"{}\" is already reserved",
                report.team_name
            )));
        }
        let code = TeamCode::new(
            report.team_name.clone(),
            generate_code(),
            report.available_on.clone(),
        );
        codes.insert(report.team_name.clone(), code.clone());
        Self::save_codes(store, &codes)?;
        tracing::info!(team = %code.team_name, code = %code.code, "team name reserved");
        Ok(code)
    }

    /// Returns every issued code, oldest reservation first.
    pub fn list(store: &dyn PersistencePort) -> ServiceResult<Vec<TeamCode>> {
        let codes = Self::load_codes(store)?;
        let mut list: Vec<TeamCode> = codes.into_values().collect();
        list.sort_by_key(|code| code.reserved_at);
        Ok(list)
    }

    /// Marks a code as used on its platforms.
    pub fn mark_used(store: &dyn PersistencePort, code: &str) -> ServiceResult<TeamCode> {
        let mut codes = Self::load_codes(store)?;
        let entry = codes
            .values_mut()
            .find(|candidate| candidate.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| ServiceError::Invalid(format!("No reservation with code {code}")))?;
        entry.mark_used();
        let updated = entry.clone();
        Self::save_codes(store, &codes)?;
        Ok(updated)
    }

    pub fn find_by_name(
        store: &dyn PersistencePort,
        team_name: &str,
    ) -> ServiceResult<Option<TeamCode>> {
        Ok(Self::load_codes(store)?.remove(team_name))
    }

    fn load_codes(store: &dyn PersistencePort) -> ServiceResult<CodeMap> {
        Ok(load_versioned(store, TEAM_CODES_KEY)?.unwrap_or_default())
    }

    fn save_codes(store: &dyn PersistencePort, codes: &CodeMap) -> ServiceResult<()> {
        save_versioned(store, TEAM_CODES_KEY, codes)?;
        Ok(())
    }
}

/// Uppercase alphanumeric reservation code.
fn generate_code() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(|b| (b as char).to_ascii_uppercase())
        .collect()
}
