//! Strategy pattern: a duck that delegates flying and quacking.
//!
//! A [`Duck`] owns one behavior per [`Concern`] and forwards `perform_*` calls
//! to whatever is bound at that moment. Rebinding a slot takes effect on the
//! next call; nothing about the previous behavior is remembered.

use std::fmt;
use tracing::debug;

use crate::behavior::{FlyBehavior, FlyNoWay, FlyWithWings, Quack, QuackBehavior};
use crate::error::DuckError;
use crate::sink::SharedSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concern {
    Fly,
    Quack,
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Concern::Fly => write!(f, "fly"),
            Concern::Quack => write!(f, "quack"),
        }
    }
}

/// A behavior tagged with the slot it belongs in.
pub enum Behavior {
    Fly(Box<dyn FlyBehavior>),
    Quack(Box<dyn QuackBehavior>),
}

impl Behavior {
    pub fn fly(behavior: impl FlyBehavior + 'static) -> Self {
        Behavior::Fly(Box::new(behavior))
    }

    pub fn quack(behavior: impl QuackBehavior + 'static) -> Self {
        Behavior::Quack(Box::new(behavior))
    }

    pub fn concern(&self) -> Concern {
        match self {
            Behavior::Fly(_) => Concern::Fly,
            Behavior::Quack(_) => Concern::Quack,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuckKind {
    Mallard,
    Model,
}

impl DuckKind {
    fn description(self) -> &'static str {
        match self {
            DuckKind::Mallard => "I am real Mallard Duck.",
            DuckKind::Model => "I am a model duck.",
        }
    }
}

pub struct Duck {
    kind: DuckKind,
    fly_behavior: Option<Box<dyn FlyBehavior>>,
    quack_behavior: Option<Box<dyn QuackBehavior>>,
    sink: SharedSink,
}

impl Duck {
    /// Both slots are required up front, so a duck built here can always perform.
    pub fn new<F, Q>(kind: DuckKind, fly: F, quack: Q, sink: SharedSink) -> Self
    where
        F: FlyBehavior + 'static,
        Q: QuackBehavior + 'static,
    {
        Self {
            kind,
            fly_behavior: Some(Box::new(fly)),
            quack_behavior: Some(Box::new(quack)),
            sink,
        }
    }

    /// A duck with no behaviors bound. Every `perform` fails until a slot is set.
    pub fn bare(kind: DuckKind, sink: SharedSink) -> Self {
        Self {
            kind,
            fly_behavior: None,
            quack_behavior: None,
            sink,
        }
    }

    pub fn mallard(sink: SharedSink) -> Self {
        Self::new(DuckKind::Mallard, FlyWithWings, Quack, sink)
    }

    pub fn model(sink: SharedSink) -> Self {
        Self::new(DuckKind::Model, FlyNoWay, Quack, sink)
    }

    pub fn kind(&self) -> DuckKind {
        self.kind
    }

    pub fn is_configured(&self, concern: Concern) -> bool {
        match concern {
            Concern::Fly => self.fly_behavior.is_some(),
            Concern::Quack => self.quack_behavior.is_some(),
        }
    }

    pub fn set_fly_behavior(&mut self, behavior: impl FlyBehavior + 'static) {
        self.set_behavior(Behavior::fly(behavior));
    }

    pub fn set_quack_behavior(&mut self, behavior: impl QuackBehavior + 'static) {
        self.set_behavior(Behavior::quack(behavior));
    }

    pub fn set_behavior(&mut self, behavior: Behavior) {
        debug!(kind = ?self.kind, concern = %behavior.concern(), "binding behavior");
        match behavior {
            Behavior::Fly(fly) => self.fly_behavior = Some(fly),
            Behavior::Quack(quack) => self.quack_behavior = Some(quack),
        }
    }

    pub fn perform(&self, concern: Concern) -> Result<(), DuckError> {
        let line = match concern {
            Concern::Fly => self
                .fly_behavior
                .as_ref()
                .map(|behavior| behavior.fly()),
            Concern::Quack => self
                .quack_behavior
                .as_ref()
                .map(|behavior| behavior.quack()),
        }
        .ok_or_else(|| DuckError::unconfigured(concern))?;

        self.sink.write_line(&line);
        Ok(())
    }

    pub fn perform_fly(&self) -> Result<(), DuckError> {
        self.perform(Concern::Fly)
    }

    pub fn perform_quack(&self) -> Result<(), DuckError> {
        self.perform(Concern::Quack)
    }

    pub fn display(&self) {
        self.sink.write_line(self.kind.description());
    }

    pub fn swim(&self) {
        self.sink.write_line("All ducks swim !!!");
    }
}
