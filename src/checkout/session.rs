use serde::{Deserialize, Serialize};

use crate::domain::payment::{
    Dialog, PaymentForm, PaymentMethod, PaymentStatus, VerificationMethod,
};

/// Mutable state of one checkout attempt.
///
/// Owned exclusively by [`crate::checkout::CheckoutFlow`] for the lifetime of
/// a single reservation payment; never persisted across sessions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentSession {
    pub method: Option<PaymentMethod>,
    pub status: PaymentStatus,
    pub form: PaymentForm,
    pub verification: Option<VerificationMethod>,
    pub otp: String,
    pub error: Option<String>,
    pub dialog: Dialog,
}

impl PaymentSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previous message; only the latest is retained.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn is_processing(&self) -> bool {
        self.status == PaymentStatus::Processing
    }
}
