//! Simulated external payment confirmation.
//!
//! The outcome decision and the delay are both injectable so the whole
//! state machine can be driven synchronously in tests: strategies replace
//! the random roll, and [`TimerQueue`] replaces ambient timers with a
//! virtual clock advanced by the caller.

use std::time::Duration;

use rand::Rng;

use crate::domain::payment::PaymentMethod;

/// Resolution of a simulated processing attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Approved,
    Declined,
}

/// Decides the outcome of each processing attempt.
pub trait OutcomeStrategy {
    fn decide(&mut self, method: PaymentMethod) -> Outcome;
}

/// Nominal 90% approval roll from the thread-local RNG.
#[derive(Debug, Clone, Copy)]
pub struct RandomOutcome {
    approval_rate: f64,
}

impl RandomOutcome {
    pub fn new(approval_rate: f64) -> Self {
        Self {
            approval_rate: approval_rate.clamp(0.0, 1.0),
        }
    }
}

impl Default for RandomOutcome {
    fn default() -> Self {
        Self::new(0.9)
    }
}

impl OutcomeStrategy for RandomOutcome {
    fn decide(&mut self, _method: PaymentMethod) -> Outcome {
        if rand::thread_rng().gen::<f64>() < self.approval_rate {
            Outcome::Approved
        } else {
            Outcome::Declined
        }
    }
}

/// Deterministic strategy for tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedOutcome(pub Outcome);

impl OutcomeStrategy for FixedOutcome {
    fn decide(&mut self, _method: PaymentMethod) -> Outcome {
        self.0
    }
}

/// Events the processor feeds back into the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorEvent {
    Resolved(Outcome),
    Settled,
}

/// Fixed delays of the simulated confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorTiming {
    /// Wait before the attempt resolves to approved or declined.
    pub processing_delay: Duration,
    /// Extra wait after approval before dialogs clear and completion fires.
    pub settle_delay: Duration,
}

impl Default for ProcessorTiming {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_millis(2000),
            settle_delay: Duration::from_millis(1500),
        }
    }
}

/// Virtual-clock delay port.
///
/// Scheduled events become due as the owner advances the clock; a real
/// driver sleeps wall time between advances, tests advance instantly.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    pending: Vec<(Duration, ProcessorEvent)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay: Duration, event: ProcessorEvent) {
        self.pending.push((self.now + delay, event));
    }

    /// Moves the clock forward and drains events that became due, in order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ProcessorEvent> {
        self.now += elapsed;
        let now = self.now;
        self.pending.sort_by_key(|(due, _)| *due);
        let mut due_events = Vec::new();
        self.pending.retain(|(due, event)| {
            if *due <= now {
                due_events.push(*event);
                false
            } else {
                true
            }
        });
        due_events
    }

    /// Time until the next scheduled event, if any.
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|(due, _)| due.saturating_sub(self.now))
            .min()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
