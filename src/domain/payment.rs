use serde::{Deserialize, Serialize};

/// Payment methods offered at checkout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
    GooglePay,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::GooglePay => "Google Pay",
        }
    }
}

/// Lifecycle of a single payment attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentStatus {
    #[default]
    Idle,
    Processing,
    Succeeded,
    Failed,
}

/// Delivery channel for the simulated verification code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VerificationMethod {
    Sms,
    Call,
}

impl VerificationMethod {
    pub fn label(&self) -> &'static str {
        match self {
            VerificationMethod::Sms => "Text message",
            VerificationMethod::Call => "Phone call",
        }
    }
}

/// Checkout surface currently presented to the user.
///
/// A single enum rather than per-dialog booleans, so at most one dialog can
/// ever be visible.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Dialog {
    #[default]
    None,
    CardDetails,
    VerificationChoice,
    OtpEntry,
    ExternalRedirect,
    GooglePayPicker,
}

/// Free-text payment form fields, kept unnormalized as entered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentForm {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub name_on_card: String,
    pub email: String,
    pub phone: String,
    pub account_id: String,
}

/// Addresses an individual field of [`PaymentForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    CardNumber,
    ExpiryDate,
    Cvv,
    NameOnCard,
    Email,
    Phone,
    AccountId,
}

impl PaymentForm {
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::CardNumber => self.card_number = value,
            FormField::ExpiryDate => self.expiry_date = value,
            FormField::Cvv => self.cvv = value,
            FormField::NameOnCard => self.name_on_card = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::AccountId => self.account_id = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::CardNumber => &self.card_number,
            FormField::ExpiryDate => &self.expiry_date,
            FormField::Cvv => &self.cvv,
            FormField::NameOnCard => &self.name_on_card,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::AccountId => &self.account_id,
        }
    }
}
