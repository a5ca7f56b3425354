pub mod logo_service;
pub mod profile_service;
pub mod reservation_service;
pub mod suggestion_service;

pub use logo_service::LogoService;
pub use profile_service::ProfileService;
pub use reservation_service::{
    AvailabilityStrategy, FixedAvailability, RandomAvailability, ReservationService,
};
pub use suggestion_service::SuggestionService;

use crate::errors::CoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("{0}")]
    Invalid(String),
    /// Missing-prerequisite states render as full-page empty states with a
    /// call-to-action, never as dialog errors.
    #[error("{0}")]
    MissingPrerequisite(String),
}
