//! Pure, synchronous form checks run before a checkout transition.
//!
//! Validation failure is a value carried back to the caller, never a panic
//! or a control-flow fault; only the most recent message is kept on the
//! session.

use std::fmt;

use crate::domain::payment::{PaymentForm, PaymentMethod};

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Checks the credit-card fields: number length, expiry shape, CVV length,
/// and a contact phone for verification delivery.
pub fn validate_card_details(form: &PaymentForm) -> Result<(), ValidationError> {
    let digits: Vec<char> = form
        .card_number
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if !(15..=16).contains(&digits.len()) || !digits.iter().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("Card number must be 15 or 16 digits"));
    }
    validate_expiry(&form.expiry_date)?;
    let cvv = form.cvv.trim();
    if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("Security code must be 3 or 4 digits"));
    }
    if form.phone.trim().is_empty() {
        return Err(ValidationError::new(
            "Phone number is required for verification",
        ));
    }
    Ok(())
}

/// Checks the PayPal fields before the external-redirect confirm.
pub fn validate_paypal_details(form: &PaymentForm) -> Result<(), ValidationError> {
    let email = form.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ValidationError::new("Enter a valid PayPal email address"));
    }
    if form.account_id.trim().is_empty() {
        return Err(ValidationError::new("PayPal account ID is required"));
    }
    Ok(())
}

/// Google Pay picks an account from a fixed list, so nothing to check.
pub fn validate_google_pay(_form: &PaymentForm) -> Result<(), ValidationError> {
    Ok(())
}

/// Dispatches to the method-specific validator.
pub fn validate_for(method: PaymentMethod, form: &PaymentForm) -> Result<(), ValidationError> {
    match method {
        PaymentMethod::CreditCard => validate_card_details(form),
        PaymentMethod::PayPal => validate_paypal_details(form),
        PaymentMethod::GooglePay => validate_google_pay(form),
    }
}

/// The simulated one-time code is always exactly six characters.
pub fn validate_otp(otp: &str) -> Result<(), ValidationError> {
    if otp.trim().len() != 6 {
        return Err(ValidationError::new("Verification code must be 6 digits"));
    }
    Ok(())
}

/// Expiry must read `MM/YY` with a month between 01 and 12.
fn validate_expiry(expiry: &str) -> Result<(), ValidationError> {
    let expiry = expiry.trim();
    let parts: Vec<&str> = expiry.split('/').collect();
    let valid_shape = parts.len() == 2
        && parts[0].len() == 2
        && parts[1].len() == 2
        && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()));
    if !valid_shape {
        return Err(ValidationError::new("Expiry date must use MM/YY format"));
    }
    let month: u32 = parts[0]
        .parse()
        .map_err(|_| ValidationError::new("Expiry date must use MM/YY format"))?;
    if !(1..=12).contains(&month) {
        return Err(ValidationError::new(
            "Expiry month must be between 01 and 12",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentForm;

    fn card_form() -> PaymentForm {
        PaymentForm {
            card_number: "4111111111111111".into(),
            expiry_date: "12/29".into(),
            cvv: "123".into(),
            name_on_card: "Jane Doe".into(),
            phone: "+15551234567".into(),
            ..PaymentForm::default()
        }
    }

    #[test]
    fn accepts_well_formed_card() {
        assert!(validate_card_details(&card_form()).is_ok());
    }

    #[test]
    fn accepts_fifteen_digit_card() {
        let mut form = card_form();
        form.card_number = "411111111111111".into();
        assert!(validate_card_details(&form).is_ok());
    }

    #[test]
    fn rejects_short_and_long_card_numbers() {
        for bad in ["41111111111111", "41111111111111112", ""] {
            let mut form = card_form();
            form.card_number = bad.into();
            let err = validate_card_details(&form).expect_err("must reject");
            assert!(err.message.contains("Card number"), "got: {err}");
        }
    }

    #[test]
    fn rejects_letters_in_card_number_and_cvv() {
        let mut form = card_form();
        form.card_number = "ABCDEFGHIJKLMNOP".into();
        let err = validate_card_details(&form).expect_err("letters are not digits");
        assert!(err.message.contains("Card number"), "got: {err}");

        let mut form = card_form();
        form.card_number = "411111111111111a".into();
        assert!(validate_card_details(&form).is_err());

        let mut form = card_form();
        form.cvv = "abc".into();
        let err = validate_card_details(&form).expect_err("letter cvv");
        assert!(err.message.contains("Security code"), "got: {err}");
    }

    #[test]
    fn accepts_card_number_with_spaces_between_groups() {
        let mut form = card_form();
        form.card_number = "4111 1111 1111 1111".into();
        assert!(validate_card_details(&form).is_ok());
    }

    #[test]
    fn rejects_month_thirteen_but_accepts_january() {
        let mut form = card_form();
        form.expiry_date = "13/25".into();
        assert!(validate_card_details(&form).is_err());
        form.expiry_date = "01/25".into();
        assert!(validate_card_details(&form).is_ok());
    }

    #[test]
    fn rejects_malformed_expiry_shapes() {
        for bad in ["1/25", "12-25", "122/5", "ab/cd", "12/2025"] {
            let mut form = card_form();
            form.expiry_date = bad.into();
            assert!(validate_card_details(&form).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn rejects_bad_cvv_and_missing_phone() {
        let mut form = card_form();
        form.cvv = "12".into();
        assert!(validate_card_details(&form).is_err());

        let mut form = card_form();
        form.phone = "  ".into();
        let err = validate_card_details(&form).expect_err("must reject");
        assert!(err.message.contains("Phone"));
    }

    #[test]
    fn paypal_requires_email_with_at_sign_and_account_id() {
        let mut form = PaymentForm {
            email: "jane.example.com".into(),
            account_id: "jane-77".into(),
            ..PaymentForm::default()
        };
        assert!(validate_paypal_details(&form).is_err());

        form.email = "jane@example.com".into();
        assert!(validate_paypal_details(&form).is_ok());

        form.account_id.clear();
        assert!(validate_paypal_details(&form).is_err());
    }

    #[test]
    fn google_pay_has_no_field_checks() {
        assert!(validate_google_pay(&PaymentForm::default()).is_ok());
    }

    #[test]
    fn otp_requires_exactly_six_characters() {
        assert!(validate_otp("12345").is_err());
        assert!(validate_otp("1234567").is_err());
        assert!(validate_otp("123456").is_ok());
    }
}
