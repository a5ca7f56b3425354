//! Transition handlers mapping (current stage, user intent) onto the
//! payment session, plus the timer-driven resolution feed.

use std::time::Duration;

use crate::checkout::processor::{
    Outcome, OutcomeStrategy, ProcessorEvent, ProcessorTiming, RandomOutcome, TimerQueue,
};
use crate::checkout::session::PaymentSession;
use crate::checkout::validation::{
    validate_for, validate_otp, ValidationError,
};
use crate::domain::payment::{
    Dialog, FormField, PaymentMethod, PaymentStatus, VerificationMethod,
};

/// Progress of the checkout conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    SelectingMethod,
    EnteringDetails,
    ChoosingVerification,
    EnteringOtp,
    Succeeded,
}

/// Signals surfaced to the driver when the virtual clock advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    Approved,
    Declined,
    Completed,
}

type SuccessCallback = Box<dyn FnMut(&str)>;

/// One checkout attempt for a reserved team name.
///
/// All mutations of the session happen through these handlers; the driver
/// (CLI or UI layer) renders the session read-only and forwards intents.
pub struct CheckoutFlow {
    team_name: String,
    session: PaymentSession,
    stage: Stage,
    timers: TimerQueue,
    timing: ProcessorTiming,
    outcome: Box<dyn OutcomeStrategy>,
    on_success: Option<SuccessCallback>,
    success_notified: bool,
}

impl CheckoutFlow {
    pub fn new(team_name: impl Into<String>) -> Self {
        Self {
            team_name: team_name.into(),
            session: PaymentSession::new(),
            stage: Stage::SelectingMethod,
            timers: TimerQueue::new(),
            timing: ProcessorTiming::default(),
            outcome: Box::new(RandomOutcome::default()),
            on_success: None,
            success_notified: false,
        }
    }

    pub fn with_outcome(mut self, outcome: impl OutcomeStrategy + 'static) -> Self {
        self.outcome = Box::new(outcome);
        self
    }

    pub fn with_timing(mut self, timing: ProcessorTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Registers the completion callback; it fires exactly once per session.
    pub fn on_success(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn session(&self) -> &PaymentSession {
        &self.session
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Time until the processor needs another [`CheckoutFlow::advance`] call.
    pub fn next_due_in(&self) -> Option<Duration> {
        self.timers.next_due_in()
    }

    pub fn is_settled(&self) -> bool {
        self.stage == Stage::Succeeded
    }

    /// Picks a payment method and opens its entry dialog.
    ///
    /// Card continues through verification; PayPal and Google Pay open
    /// their own dialog directly and skip the verification stages.
    pub fn select_method(&mut self, method: PaymentMethod) -> Result<(), ValidationError> {
        self.guard_not_processing()?;
        if self.stage == Stage::Succeeded {
            return Err(ValidationError::new("This payment already completed"));
        }
        tracing::debug!(team = %self.team_name, method = method.label(), "payment method selected");
        self.session.method = Some(method);
        self.session.status = PaymentStatus::Idle;
        self.session.clear_error();
        self.session.verification = None;
        self.session.otp.clear();
        self.stage = Stage::EnteringDetails;
        self.session.dialog = entry_dialog(method);
        Ok(())
    }

    /// Mutates one form field; any stale error message is dropped.
    pub fn edit_field(&mut self, field: FormField, value: impl Into<String>) {
        if self.session.is_processing() {
            return;
        }
        self.session.form.set(field, value);
        self.session.clear_error();
    }

    /// Submits the credit-card details form.
    pub fn submit_details(&mut self) -> Result<(), ValidationError> {
        self.guard_submittable()?;
        if self.stage != Stage::EnteringDetails
            || self.session.method != Some(PaymentMethod::CreditCard)
        {
            return Err(ValidationError::new("No card details form is open"));
        }
        if let Err(err) = validate_for(PaymentMethod::CreditCard, &self.session.form) {
            self.session.set_error(err.message.clone());
            return Err(err);
        }
        self.session.clear_error();
        self.enter_verification_choice();
        Ok(())
    }

    /// Picks the delivery channel for the simulated code; sending is
    /// assumed to succeed, so this transition never fails.
    pub fn choose_verification(&mut self, method: VerificationMethod) {
        if self.stage != Stage::ChoosingVerification {
            return;
        }
        tracing::debug!(channel = method.label(), "verification channel chosen");
        self.session.verification = Some(method);
        self.stage = Stage::EnteringOtp;
        self.session.dialog = Dialog::OtpEntry;
    }

    /// Mutates the one-time code entry; drops any stale error.
    pub fn set_otp(&mut self, value: impl Into<String>) {
        if self.session.is_processing() {
            return;
        }
        self.session.otp = value.into();
        self.session.clear_error();
    }

    /// Submits the one-time code, starting simulated processing on success.
    pub fn submit_otp(&mut self) -> Result<(), ValidationError> {
        self.guard_submittable()?;
        if self.stage != Stage::EnteringOtp {
            return Err(ValidationError::new("No verification code entry is open"));
        }
        if let Err(err) = validate_otp(&self.session.otp) {
            self.session.set_error(err.message.clone());
            return Err(err);
        }
        self.session.clear_error();
        self.start_processing();
        Ok(())
    }

    /// Confirms the PayPal redirect or the Google Pay picker, going
    /// straight into processing.
    pub fn confirm_external(&mut self) -> Result<(), ValidationError> {
        self.guard_submittable()?;
        let method = match (self.stage, self.session.method) {
            (Stage::EnteringDetails, Some(m @ PaymentMethod::PayPal))
            | (Stage::EnteringDetails, Some(m @ PaymentMethod::GooglePay)) => m,
            _ => return Err(ValidationError::new("No external payment dialog is open")),
        };
        if let Err(err) = validate_for(method, &self.session.form) {
            self.session.set_error(err.message.clone());
            return Err(err);
        }
        self.session.clear_error();
        self.start_processing();
        Ok(())
    }

    /// Steps back one dialog. From the code entry this clears the typed
    /// code; from the verification choice it is only reachable for cards.
    pub fn back(&mut self) {
        if self.session.is_processing() {
            return;
        }
        match self.stage {
            Stage::EnteringOtp => {
                self.enter_verification_choice();
            }
            Stage::ChoosingVerification => {
                self.stage = Stage::EnteringDetails;
                self.session.dialog = Dialog::CardDetails;
            }
            _ => {}
        }
    }

    /// Discards the in-progress session without side effects.
    ///
    /// Closing the dialog is not permitted while processing; the mock
    /// deliberately exposes no cancel control there.
    pub fn cancel(&mut self) -> Result<(), ValidationError> {
        if self.session.is_processing() {
            return Err(ValidationError::new(
                "Payment is processing and cannot be cancelled",
            ));
        }
        if self.stage == Stage::Succeeded {
            return Err(ValidationError::new("This payment already completed"));
        }
        tracing::debug!(team = %self.team_name, "checkout cancelled");
        self.session = PaymentSession::new();
        self.stage = Stage::SelectingMethod;
        self.timers.clear();
        Ok(())
    }

    /// Explicit retry after a declined attempt returns the status to idle
    /// at the method-specific entry point.
    pub fn retry(&mut self) -> Result<(), ValidationError> {
        if self.session.status != PaymentStatus::Failed {
            return Err(ValidationError::new("There is no failed payment to retry"));
        }
        self.session.status = PaymentStatus::Idle;
        self.session.clear_error();
        Ok(())
    }

    /// Advances the virtual clock, applying any processor resolutions that
    /// became due. Returns the surfaced signals in order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<FlowEvent> {
        let mut signals = Vec::new();
        for event in self.timers.advance(elapsed) {
            match event {
                ProcessorEvent::Resolved(Outcome::Approved) => {
                    tracing::debug!(team = %self.team_name, "simulated processor approved");
                    self.session.status = PaymentStatus::Succeeded;
                    self.timers
                        .schedule(self.timing.settle_delay, ProcessorEvent::Settled);
                    signals.push(FlowEvent::Approved);
                }
                ProcessorEvent::Resolved(Outcome::Declined) => {
                    let method = self
                        .session
                        .method
                        .unwrap_or(PaymentMethod::CreditCard);
                    tracing::debug!(team = %self.team_name, method = method.label(), "simulated processor declined");
                    self.session.status = PaymentStatus::Failed;
                    self.session.set_error(decline_message(method));
                    self.return_to_entry(method);
                    signals.push(FlowEvent::Declined);
                }
                ProcessorEvent::Settled => {
                    self.session.dialog = Dialog::None;
                    self.stage = Stage::Succeeded;
                    if !self.success_notified {
                        self.success_notified = true;
                        if let Some(callback) = self.on_success.as_mut() {
                            callback(&self.team_name);
                        }
                    }
                    signals.push(FlowEvent::Completed);
                }
            }
        }
        signals
    }

    fn enter_verification_choice(&mut self) {
        // Re-entering the choice dialog always clears the typed code.
        self.session.otp.clear();
        self.stage = Stage::ChoosingVerification;
        self.session.dialog = Dialog::VerificationChoice;
    }

    fn start_processing(&mut self) {
        let method = self.session.method.unwrap_or(PaymentMethod::CreditCard);
        tracing::debug!(team = %self.team_name, method = method.label(), "processing started");
        self.session.status = PaymentStatus::Processing;
        let outcome = self.outcome.decide(method);
        self.timers
            .schedule(self.timing.processing_delay, ProcessorEvent::Resolved(outcome));
    }

    /// After a decline, control returns to the last dialog the user saw.
    fn return_to_entry(&mut self, method: PaymentMethod) {
        match method {
            PaymentMethod::CreditCard => {
                self.stage = Stage::EnteringOtp;
                self.session.dialog = Dialog::OtpEntry;
            }
            PaymentMethod::PayPal | PaymentMethod::GooglePay => {
                self.stage = Stage::EnteringDetails;
                self.session.dialog = entry_dialog(method);
            }
        }
    }

    fn guard_not_processing(&self) -> Result<(), ValidationError> {
        if self.session.is_processing() {
            return Err(ValidationError::new("Payment already in progress"));
        }
        Ok(())
    }

    fn guard_submittable(&self) -> Result<(), ValidationError> {
        self.guard_not_processing()?;
        if self.session.status == PaymentStatus::Failed {
            return Err(ValidationError::new(
                "Previous attempt was declined; choose retry first",
            ));
        }
        Ok(())
    }
}

fn entry_dialog(method: PaymentMethod) -> Dialog {
    match method {
        PaymentMethod::CreditCard => Dialog::CardDetails,
        PaymentMethod::PayPal => Dialog::ExternalRedirect,
        PaymentMethod::GooglePay => Dialog::GooglePayPicker,
    }
}

/// Method-specific wording for a simulated decline.
pub fn decline_message(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::CreditCard => "Your card was declined. Try again or use a different card.",
        PaymentMethod::PayPal => "PayPal couldn't complete this payment. Try again.",
        PaymentMethod::GooglePay => "Google Pay couldn't authorize this payment. Try again.",
    }
}
