//! Dialoguer-driven checkout wizard wrapping the payment state machine.
//!
//! The wizard is a thin presentation layer: it renders the session, forwards
//! intents, and sleeps wall time while the simulated processor resolves.

use std::thread;
use std::time::Duration;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::checkout::{
    CheckoutFlow, FixedOutcome, FlowEvent, Outcome, ProcessorTiming, RandomOutcome, Stage,
};
use crate::domain::logo::LogoTemplate;
use crate::domain::payment::{FormField, PaymentMethod, PaymentStatus, VerificationMethod};

use super::commands::{CommandError, CommandResult, LoopControl, ShellContext};
use super::output;

const METHODS: [PaymentMethod; 3] = [
    PaymentMethod::CreditCard,
    PaymentMethod::PayPal,
    PaymentMethod::GooglePay,
];

/// Fixed account list shown by the Google Pay picker.
const GOOGLE_PAY_ACCOUNTS: [&str; 2] = ["jane@gmail.com · Visa ···· 4242", "jane@gmail.com · MC ···· 8210"];

pub(crate) fn run_interactive(context: &mut ShellContext, team_name: &str) -> CommandResult {
    let mut flow = CheckoutFlow::new(team_name)
        .with_outcome(RandomOutcome::new(context.config.approval_rate))
        .with_timing(context.config.processor_timing())
        .on_success(|team| output::success(format!("Reservation for \"{team}\" is confirmed!")));

    loop {
        if flow.is_settled() {
            return Ok(LoopControl::Continue);
        }
        if flow.session().is_processing() {
            drain_processor(&mut flow);
            continue;
        }
        if flow.session().status == PaymentStatus::Failed {
            if let Some(message) = flow.session().error.as_deref() {
                output::warning(message);
            }
            if confirm("Try again?")? {
                flow.retry().map_err(CommandError::from)?;
            } else {
                let _ = flow.cancel();
                output::info("Checkout cancelled.");
                return Ok(LoopControl::Continue);
            }
            continue;
        }

        match flow.stage() {
            Stage::SelectingMethod => {
                if !prompt_method(&mut flow)? {
                    output::info("Checkout cancelled.");
                    return Ok(LoopControl::Continue);
                }
            }
            Stage::EnteringDetails => {
                if !prompt_details(&mut flow)? {
                    output::info("Checkout cancelled.");
                    return Ok(LoopControl::Continue);
                }
            }
            Stage::ChoosingVerification => prompt_verification(&mut flow)?,
            Stage::EnteringOtp => prompt_otp(&mut flow)?,
            Stage::Succeeded => return Ok(LoopControl::Continue),
        }
    }
}

/// Non-interactive demo checkout used by script mode: forced approval,
/// canned card details, zero delays.
pub(crate) fn run_scripted(team_name: &str) -> CommandResult {
    let mut flow = CheckoutFlow::new(team_name)
        .with_outcome(FixedOutcome(Outcome::Approved))
        .with_timing(ProcessorTiming {
            processing_delay: Duration::ZERO,
            settle_delay: Duration::ZERO,
        })
        .on_success(|team| output::success(format!("Reservation for \"{team}\" is confirmed!")));

    flow.select_method(PaymentMethod::CreditCard)
        .map_err(CommandError::from)?;
    flow.edit_field(FormField::CardNumber, "4111111111111111");
    flow.edit_field(FormField::ExpiryDate, "12/29");
    flow.edit_field(FormField::Cvv, "123");
    flow.edit_field(FormField::NameOnCard, "Demo User");
    flow.edit_field(FormField::Phone, "+15551234567");
    flow.submit_details().map_err(CommandError::from)?;
    flow.choose_verification(VerificationMethod::Sms);
    flow.set_otp("123456");
    flow.submit_otp().map_err(CommandError::from)?;
    output::info("Processing payment...");

    while !flow.is_settled() {
        for event in flow.advance(flow.next_due_in().unwrap_or(Duration::ZERO)) {
            report_event(event);
        }
    }
    Ok(LoopControl::Continue)
}

pub(crate) fn pick_logo_template() -> Result<LogoTemplate, CommandError> {
    let templates = LogoTemplate::all();
    let labels: Vec<&str> = templates.iter().map(|t| t.label()).collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Logo template")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    Ok(templates[index])
}

fn prompt_method(flow: &mut CheckoutFlow) -> Result<bool, CommandError> {
    let mut labels: Vec<&str> = METHODS.iter().map(|m| m.label()).collect();
    labels.push("Cancel");
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Pay for \"{}\" with", flow.team_name()))
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    if index == METHODS.len() {
        return Ok(false);
    }
    flow.select_method(METHODS[index])
        .map_err(CommandError::from)?;
    Ok(true)
}

fn prompt_details(flow: &mut CheckoutFlow) -> Result<bool, CommandError> {
    match flow.session().method {
        Some(PaymentMethod::CreditCard) => prompt_card_details(flow),
        Some(PaymentMethod::PayPal) => prompt_paypal(flow),
        Some(PaymentMethod::GooglePay) => prompt_google_pay(flow),
        None => Ok(false),
    }
}

fn prompt_card_details(flow: &mut CheckoutFlow) -> Result<bool, CommandError> {
    output::section("Card details");
    flow.edit_field(FormField::CardNumber, text("Card number")?);
    flow.edit_field(FormField::ExpiryDate, text("Expiry (MM/YY)")?);
    flow.edit_field(FormField::Cvv, text("CVV")?);
    flow.edit_field(FormField::NameOnCard, text("Name on card")?);
    flow.edit_field(FormField::Phone, text("Phone for verification")?);
    if let Err(err) = flow.submit_details() {
        output::warning(err.message);
        return confirm("Edit the details and try again?").map(|retry| {
            if !retry {
                let _ = flow.cancel();
            }
            retry
        });
    }
    Ok(true)
}

fn prompt_paypal(flow: &mut CheckoutFlow) -> Result<bool, CommandError> {
    output::section("PayPal sign-in");
    flow.edit_field(FormField::Email, text("PayPal email")?);
    flow.edit_field(FormField::AccountId, text("PayPal account ID")?);
    if let Err(err) = flow.confirm_external() {
        output::warning(err.message);
        return confirm("Edit the details and try again?").map(|retry| {
            if !retry {
                let _ = flow.cancel();
            }
            retry
        });
    }
    Ok(true)
}

fn prompt_google_pay(flow: &mut CheckoutFlow) -> Result<bool, CommandError> {
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Google Pay account")
        .items(&GOOGLE_PAY_ACCOUNTS)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    flow.edit_field(FormField::AccountId, GOOGLE_PAY_ACCOUNTS[index]);
    flow.confirm_external().map_err(CommandError::from)?;
    Ok(true)
}

fn prompt_verification(flow: &mut CheckoutFlow) -> Result<(), CommandError> {
    let channels = [VerificationMethod::Sms, VerificationMethod::Call];
    let labels: Vec<&str> = channels.iter().map(|c| c.label()).collect();
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("How should we send your verification code?")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    flow.choose_verification(channels[index]);
    Ok(())
}

fn prompt_otp(flow: &mut CheckoutFlow) -> Result<(), CommandError> {
    let code: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter the 6-digit code (or \"back\")")
        .interact_text()
        .map_err(prompt_error)?;
    if code.trim().eq_ignore_ascii_case("back") {
        flow.back();
        return Ok(());
    }
    flow.set_otp(code);
    if let Err(err) = flow.submit_otp() {
        output::warning(err.message);
    }
    Ok(())
}

/// Sleeps wall time until the pending processor timer fires, then applies it.
fn drain_processor(flow: &mut CheckoutFlow) {
    output::info("Processing payment...");
    while let Some(wait) = flow.next_due_in() {
        thread::sleep(wait);
        for event in flow.advance(wait) {
            report_event(event);
        }
        if flow.session().status == PaymentStatus::Failed || flow.is_settled() {
            break;
        }
    }
}

fn report_event(event: FlowEvent) {
    match event {
        FlowEvent::Approved => output::success("Payment approved"),
        FlowEvent::Declined => output::warning("Payment declined"),
        FlowEvent::Completed => output::info("Checkout complete."),
    }
}

fn text(prompt: &str) -> Result<String, CommandError> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)
}

fn confirm(prompt: &str) -> Result<bool, CommandError> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(prompt_error)
}

fn prompt_error(err: dialoguer::Error) -> CommandError {
    CommandError::new(format!("prompt failed: {err}"))
}
