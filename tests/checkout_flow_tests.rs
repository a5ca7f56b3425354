use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gotoguys_core::checkout::{
    CheckoutFlow, FixedOutcome, FlowEvent, Outcome, ProcessorTiming, Stage,
};
use gotoguys_core::domain::payment::{
    Dialog, FormField, PaymentMethod, PaymentStatus, VerificationMethod,
};

const STEP: Duration = Duration::from_millis(2000);

fn timing() -> ProcessorTiming {
    ProcessorTiming {
        processing_delay: Duration::from_millis(2000),
        settle_delay: Duration::from_millis(1500),
    }
}

fn fill_card(flow: &mut CheckoutFlow) {
    flow.edit_field(FormField::CardNumber, "4111111111111111");
    flow.edit_field(FormField::ExpiryDate, "12/29");
    flow.edit_field(FormField::Cvv, "123");
    flow.edit_field(FormField::NameOnCard, "Jane Doe");
    flow.edit_field(FormField::Phone, "+15551234567");
}

#[test]
fn scenario_a_valid_card_reaches_verification_choice() {
    let mut flow = CheckoutFlow::new("Gridiron Gurus");
    flow.select_method(PaymentMethod::CreditCard).unwrap();
    fill_card(&mut flow);
    flow.submit_details().unwrap();

    assert_eq!(flow.stage(), Stage::ChoosingVerification);
    assert_eq!(flow.session().dialog, Dialog::VerificationChoice);
    assert!(flow.session().error.is_none());
}

#[test]
fn scenario_b_otp_success_clears_dialogs_and_fires_completion() {
    let completions: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&completions);
    let mut flow = CheckoutFlow::new("Gridiron Gurus")
        .with_outcome(FixedOutcome(Outcome::Approved))
        .with_timing(timing())
        .on_success(move |team| sink.borrow_mut().push(team.to_string()));

    flow.select_method(PaymentMethod::CreditCard).unwrap();
    fill_card(&mut flow);
    flow.submit_details().unwrap();
    flow.choose_verification(VerificationMethod::Sms);
    flow.set_otp("123456");
    flow.submit_otp().unwrap();
    assert_eq!(flow.session().status, PaymentStatus::Processing);

    // Nothing resolves before the 2000 ms processing delay elapses.
    assert!(flow.advance(Duration::from_millis(1999)).is_empty());
    assert_eq!(
        flow.advance(Duration::from_millis(1)),
        vec![FlowEvent::Approved]
    );
    // The settle delay gates dialog clearing and the completion callback.
    assert!(flow.advance(Duration::from_millis(1499)).is_empty());
    assert_eq!(
        flow.advance(Duration::from_millis(1)),
        vec![FlowEvent::Completed]
    );

    assert_eq!(flow.session().dialog, Dialog::None);
    assert_eq!(completions.borrow().as_slice(), ["Gridiron Gurus"]);
}

#[test]
fn scenario_b_otp_decline_sets_card_message_and_stays_for_retry() {
    let mut flow = CheckoutFlow::new("Gridiron Gurus")
        .with_outcome(FixedOutcome(Outcome::Declined))
        .with_timing(timing());

    flow.select_method(PaymentMethod::CreditCard).unwrap();
    fill_card(&mut flow);
    flow.submit_details().unwrap();
    flow.choose_verification(VerificationMethod::Call);
    flow.set_otp("123456");
    flow.submit_otp().unwrap();

    assert_eq!(flow.advance(STEP), vec![FlowEvent::Declined]);
    assert_eq!(flow.session().status, PaymentStatus::Failed);
    assert_eq!(flow.stage(), Stage::EnteringOtp);
    assert_eq!(flow.session().dialog, Dialog::OtpEntry);
    assert!(flow.session().error.as_deref().unwrap().contains("card"));

    // No further automatic transition after a decline.
    assert!(flow.advance(STEP).is_empty());
}

#[test]
fn scenario_c_closing_card_details_discards_session_silently() {
    let mut flow = CheckoutFlow::new("Gridiron Gurus");
    flow.select_method(PaymentMethod::CreditCard).unwrap();
    flow.edit_field(FormField::CardNumber, "4111");
    flow.cancel().unwrap();

    assert_eq!(flow.stage(), Stage::SelectingMethod);
    assert_eq!(flow.session().dialog, Dialog::None);
    assert_eq!(flow.session().status, PaymentStatus::Idle);
    assert!(flow.session().error.is_none());
    assert!(flow.session().form.card_number.is_empty());
    assert!(flow.next_due_in().is_none(), "no processing was started");
}

#[test]
fn scenario_d_external_methods_open_their_own_dialog_and_process_on_confirm() {
    let mut flow = CheckoutFlow::new("Gridiron Gurus")
        .with_outcome(FixedOutcome(Outcome::Approved))
        .with_timing(timing());
    flow.select_method(PaymentMethod::PayPal).unwrap();
    assert_eq!(flow.session().dialog, Dialog::ExternalRedirect);
    flow.edit_field(FormField::Email, "jane@example.com");
    flow.edit_field(FormField::AccountId, "jane-77");
    flow.confirm_external().unwrap();
    assert_eq!(flow.session().status, PaymentStatus::Processing);

    let mut flow = CheckoutFlow::new("Gridiron Gurus")
        .with_outcome(FixedOutcome(Outcome::Approved))
        .with_timing(timing());
    flow.select_method(PaymentMethod::GooglePay).unwrap();
    assert_eq!(flow.session().dialog, Dialog::GooglePayPicker);
    flow.confirm_external().unwrap();
    assert_eq!(flow.session().status, PaymentStatus::Processing);
}

#[test]
fn malformed_card_numbers_keep_status_idle_with_specific_message() {
    for bad in ["41111111111111", "41111111111111112"] {
        let mut flow = CheckoutFlow::new("Gridiron Gurus");
        flow.select_method(PaymentMethod::CreditCard).unwrap();
        fill_card(&mut flow);
        flow.edit_field(FormField::CardNumber, bad);
        let err = flow.submit_details().expect_err("must reject");
        assert!(err.message.contains("Card number"));
        assert_eq!(flow.session().status, PaymentStatus::Idle);
    }
}

#[test]
fn lettered_card_fields_never_reach_verification_choice() {
    let mut flow = CheckoutFlow::new("Gridiron Gurus");
    flow.select_method(PaymentMethod::CreditCard).unwrap();
    fill_card(&mut flow);
    flow.edit_field(FormField::CardNumber, "ABCDEFGHIJKLMNOP");
    assert!(flow.submit_details().is_err());
    assert_eq!(flow.stage(), Stage::EnteringDetails);

    fill_card(&mut flow);
    flow.edit_field(FormField::Cvv, "abc");
    assert!(flow.submit_details().is_err());
    assert_eq!(flow.stage(), Stage::EnteringDetails);
    assert_eq!(flow.session().status, PaymentStatus::Idle);
}

#[test]
fn repeated_failed_submissions_keep_form_and_single_message() {
    let mut flow = CheckoutFlow::new("Gridiron Gurus");
    flow.select_method(PaymentMethod::CreditCard).unwrap();
    fill_card(&mut flow);
    flow.edit_field(FormField::ExpiryDate, "13/25");

    let form_before = flow.session().form.clone();
    let first = flow.submit_details().expect_err("bad expiry");
    let second = flow.submit_details().expect_err("bad expiry");

    assert_eq!(first.message, second.message);
    assert_eq!(flow.session().form, form_before);
    assert_eq!(
        flow.session().error.as_deref(),
        Some(second.message.as_str()),
        "only the latest message is retained"
    );
}

#[test]
fn otp_shorter_than_six_is_rejected_and_six_proceeds() {
    let mut flow = CheckoutFlow::new("Gridiron Gurus")
        .with_outcome(FixedOutcome(Outcome::Approved))
        .with_timing(timing());
    flow.select_method(PaymentMethod::CreditCard).unwrap();
    fill_card(&mut flow);
    flow.submit_details().unwrap();
    flow.choose_verification(VerificationMethod::Sms);

    flow.set_otp("12345");
    assert!(flow.submit_otp().is_err());
    assert_eq!(flow.session().status, PaymentStatus::Idle);

    flow.set_otp("123456");
    flow.submit_otp().unwrap();
    assert_eq!(flow.session().status, PaymentStatus::Processing);
}

#[test]
fn back_from_verification_choice_returns_to_card_form() {
    let mut flow = CheckoutFlow::new("Gridiron Gurus");
    flow.select_method(PaymentMethod::CreditCard).unwrap();
    fill_card(&mut flow);
    flow.submit_details().unwrap();

    flow.back();
    assert_eq!(flow.stage(), Stage::EnteringDetails);
    assert_eq!(flow.session().dialog, Dialog::CardDetails);
}

#[test]
fn method_change_clears_previous_error() {
    let mut flow = CheckoutFlow::new("Gridiron Gurus");
    flow.select_method(PaymentMethod::CreditCard).unwrap();
    flow.submit_details().expect_err("empty form");
    assert!(flow.session().error.is_some());

    flow.select_method(PaymentMethod::GooglePay).unwrap();
    assert!(flow.session().error.is_none());
    assert_eq!(flow.session().dialog, Dialog::GooglePayPicker);
}
