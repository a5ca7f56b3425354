pub mod common;
pub mod logo;
pub mod payment;
pub mod profile;
pub mod reservation;

pub use common::Displayable;
pub use logo::{LogoDesign, LogoTemplate};
pub use payment::{
    Dialog, FormField, PaymentForm, PaymentMethod, PaymentStatus, VerificationMethod,
};
pub use profile::{UserInfo, UserPreferences};
pub use reservation::{AvailabilityReport, Platform, TeamCode};
