//! Checkout state machine walking a user from method selection through
//! simulated processing of a reservation payment.

pub mod machine;
pub mod processor;
pub mod session;
pub mod validation;

pub use machine::{CheckoutFlow, FlowEvent, Stage};
pub use processor::{
    FixedOutcome, Outcome, OutcomeStrategy, ProcessorEvent, ProcessorTiming, RandomOutcome,
    TimerQueue,
};
pub use session::PaymentSession;
pub use validation::{
    validate_card_details, validate_for, validate_google_pay, validate_otp,
    validate_paypal_details, ValidationError,
};
