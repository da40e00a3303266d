//! Observer pattern: a weather station that publishes measurements.
//!
//! [`WeatherData`] keeps an ordered registry of non-owning subscriptions. On every
//! publish it stores the new [`Measurement`] and then walks the registry in
//! registration order, synchronously. Subscribers pick one of two contracts:
//!
//! - [`Observer`] (push): the measurement arrives as the payload.
//! - [`PullObserver`] (pull): the subscriber is handed the station and reads
//!   [`WeatherData::temperature`] and friends itself.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, trace, warn};

// ============================================================================
// Measurement
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurement {
    pub temperature: f32,
    pub humidity: f32,
    pub pressure: f32,
}

impl Measurement {
    pub const fn new(temperature: f32, humidity: f32, pressure: f32) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }
}

// ============================================================================
// Subscriber contracts
// ============================================================================

/// Push contract: receives each published measurement directly.
pub trait Observer {
    fn update(&mut self, measurement: &Measurement);
}

/// Pull contract: told that the station changed, reads current state back.
pub trait PullObserver {
    fn refresh(&mut self, station: &WeatherData);
}

enum Subscription {
    Push(Weak<RefCell<dyn Observer>>),
    Pull(Weak<RefCell<dyn PullObserver>>),
}

impl Subscription {
    fn addr(&self) -> *const () {
        match self {
            Subscription::Push(weak) => weak.as_ptr() as *const (),
            Subscription::Pull(weak) => weak.as_ptr() as *const (),
        }
    }

    fn is_alive(&self) -> bool {
        match self {
            Subscription::Push(weak) => weak.strong_count() > 0,
            Subscription::Pull(weak) => weak.strong_count() > 0,
        }
    }
}

fn addr_of<T: ?Sized>(subscriber: &Rc<RefCell<T>>) -> *const () {
    Rc::as_ptr(subscriber) as *const ()
}

// ============================================================================
// Subject
// ============================================================================

/// The subject. Holds the latest measurement and who to tell about it.
///
/// The registry never owns a subscriber: dropping the last `Rc` of a
/// subscriber silently removes it from future notifications.
#[derive(Default)]
pub struct WeatherData {
    measurement: Measurement,
    observers: Vec<Subscription>,
}

impl WeatherData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe with the push contract. Returns `false` if `observer` was
    /// already registered, in which case the registry is unchanged.
    pub fn register<O>(&mut self, observer: &Rc<RefCell<O>>) -> bool
    where
        O: Observer + 'static,
    {
        if self.contains(observer) {
            debug!("observer already registered, ignoring");
            return false;
        }
        let observer: Rc<RefCell<dyn Observer>> = observer.clone();
        self.observers
            .push(Subscription::Push(Rc::downgrade(&observer)));
        debug!(observers = self.observers.len(), "registered push observer");
        true
    }

    /// Subscribe with the pull contract. Same duplicate rule as [`register`](Self::register).
    pub fn register_pull<O>(&mut self, observer: &Rc<RefCell<O>>) -> bool
    where
        O: PullObserver + 'static,
    {
        if self.contains(observer) {
            debug!("observer already registered, ignoring");
            return false;
        }
        let observer: Rc<RefCell<dyn PullObserver>> = observer.clone();
        self.observers
            .push(Subscription::Pull(Rc::downgrade(&observer)));
        debug!(observers = self.observers.len(), "registered pull observer");
        true
    }

    /// Remove `observer` whichever contract it registered with. Returns whether
    /// anything was removed; unknown observers are a no-op.
    pub fn unregister<O: ?Sized>(&mut self, observer: &Rc<RefCell<O>>) -> bool {
        let target = addr_of(observer);
        let before = self.observers.len();
        self.observers.retain(|sub| sub.addr() != target);
        let removed = before != self.observers.len();
        debug!(removed, observers = self.observers.len(), "unregister");
        removed
    }

    pub fn contains<O: ?Sized>(&self, observer: &Rc<RefCell<O>>) -> bool {
        let target = addr_of(observer);
        self.observers.iter().any(|sub| sub.addr() == target)
    }

    /// Registry size, including entries whose subscriber has been dropped but
    /// not yet pruned by a publish.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Store `measurement` as current state, then notify every live subscriber.
    pub fn publish(&mut self, measurement: Measurement) {
        debug!(
            temperature = measurement.temperature,
            humidity = measurement.humidity,
            pressure = measurement.pressure,
            "publishing measurement"
        );
        self.measurement = measurement;
        self.measurements_changed();
    }

    pub fn set_measurements(&mut self, temperature: f32, humidity: f32, pressure: f32) {
        self.publish(Measurement::new(temperature, humidity, pressure));
    }

    /// Re-notify with the current state.
    pub fn measurements_changed(&mut self) {
        self.prune();
        self.notify_observers();
    }

    pub fn notify_observers(&self) {
        for (position, subscription) in self.observers.iter().enumerate() {
            trace!(position, "notifying observer");
            match subscription {
                Subscription::Push(weak) => {
                    if let Some(observer) = weak.upgrade() {
                        observer.borrow_mut().update(&self.measurement);
                    }
                }
                Subscription::Pull(weak) => {
                    if let Some(observer) = weak.upgrade() {
                        observer.borrow_mut().refresh(self);
                    }
                }
            }
        }
    }

    fn prune(&mut self) {
        let before = self.observers.len();
        self.observers.retain(Subscription::is_alive);
        let dropped = before - self.observers.len();
        if dropped > 0 {
            warn!(dropped, "pruned observers that no longer exist");
        }
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    pub fn temperature(&self) -> f32 {
        self.measurement.temperature
    }

    pub fn humidity(&self) -> f32 {
        self.measurement.humidity
    }

    pub fn pressure(&self) -> f32 {
        self.measurement.pressure
    }
}
