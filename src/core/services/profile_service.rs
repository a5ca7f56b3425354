//! Load/save helpers for the onboarding profile records.

use crate::core::services::ServiceResult;
use crate::domain::profile::{UserInfo, UserPreferences};
use crate::storage::{
    load_versioned, save_versioned, PersistencePort, USER_INFO_KEY, USER_PREFERENCES_KEY,
};

pub struct ProfileService;

impl ProfileService {
    pub fn load_info(store: &dyn PersistencePort) -> ServiceResult<Option<UserInfo>> {
        Ok(load_versioned(store, USER_INFO_KEY)?)
    }

    pub fn save_info(store: &dyn PersistencePort, info: &UserInfo) -> ServiceResult<()> {
        save_versioned(store, USER_INFO_KEY, info)?;
        Ok(())
    }

    pub fn load_preferences(store: &dyn PersistencePort) -> ServiceResult<UserPreferences> {
        Ok(load_versioned(store, USER_PREFERENCES_KEY)?.unwrap_or_default())
    }

    pub fn save_preferences(
        store: &dyn PersistencePort,
        preferences: &UserPreferences,
    ) -> ServiceResult<()> {
        save_versioned(store, USER_PREFERENCES_KEY, preferences)?;
        Ok(())
    }
}
