use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use crate::observer::{Measurement, Observer, PullObserver, WeatherData};
use crate::sink::SharedSink;

pub trait DisplayElement {
    fn display(&self);
}

/// Renders the latest conditions every time it is notified.
pub struct CurrentConditionsDisplay {
    latest: Option<Measurement>,
    sink: SharedSink,
}

impl CurrentConditionsDisplay {
    /// A display that is not subscribed to anything yet.
    pub fn new(sink: SharedSink) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self { latest: None, sink }))
    }

    /// Build a display and subscribe it to `station` (push contract) before
    /// handing it back, so no publish can be missed in between.
    pub fn attach(station: &mut WeatherData, sink: SharedSink) -> Rc<RefCell<Self>> {
        let display = Self::new(sink);
        station.register(&display);
        display
    }

    /// Same as [`attach`](Self::attach) but with the pull contract.
    pub fn attach_pull(station: &mut WeatherData, sink: SharedSink) -> Rc<RefCell<Self>> {
        let display = Self::new(sink);
        station.register_pull(&display);
        display
    }

    pub fn latest(&self) -> Option<Measurement> {
        self.latest
    }

    fn store(&mut self, measurement: Measurement) {
        self.latest = Some(measurement);
        self.display();
    }
}

/// Whole values keep their trailing `.0`, so `80` renders as `80.0`.
fn reading(value: f32) -> String {
    format!("{value:?}")
}

pub fn render(measurement: &Measurement) -> String {
    format!(
        "Current conditions: {}F degrees and {}% humidity and {}bar pressure",
        reading(measurement.temperature),
        reading(measurement.humidity),
        reading(measurement.pressure)
    )
}

impl DisplayElement for CurrentConditionsDisplay {
    fn display(&self) {
        match &self.latest {
            Some(measurement) => self.sink.write_line(&render(measurement)),
            None => debug!("no conditions received yet, nothing to display"),
        }
    }
}

impl Observer for CurrentConditionsDisplay {
    fn update(&mut self, measurement: &Measurement) {
        self.store(*measurement);
    }
}

impl PullObserver for CurrentConditionsDisplay {
    fn refresh(&mut self, station: &WeatherData) {
        self.store(Measurement::new(
            station.temperature(),
            station.humidity(),
            station.pressure(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;

    #[test]
    fn test_render_matches_console_format() {
        let line = render(&Measurement::new(80.0, 65.0, 30.4));
        assert_eq!(
            line,
            "Current conditions: 80.0F degrees and 65.0% humidity and 30.4bar pressure"
        );
    }

    #[test]
    fn test_render_keeps_fractions() {
        let line = render(&Measurement::new(72.5, 41.25, 29.9));
        assert_eq!(
            line,
            "Current conditions: 72.5F degrees and 41.25% humidity and 29.9bar pressure"
        );
    }

    #[test]
    fn test_attach_registers_before_returning() {
        let sink = RecordingSink::new();
        let mut station = WeatherData::new();
        let display = CurrentConditionsDisplay::attach(&mut station, sink.clone());

        assert!(station.contains(&display));
        station.set_measurements(80.0, 65.0, 30.4);
        assert_eq!(display.borrow().latest(), Some(Measurement::new(80.0, 65.0, 30.4)));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_new_display_is_not_registered() {
        let sink = RecordingSink::new();
        let mut station = WeatherData::new();
        let display = CurrentConditionsDisplay::new(sink.clone());

        station.set_measurements(80.0, 65.0, 30.4);
        assert!(!station.contains(&display));
        assert_eq!(display.borrow().latest(), None);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_display_before_first_update_renders_nothing() {
        let sink = RecordingSink::new();
        let display = CurrentConditionsDisplay::new(sink.clone());
        display.borrow().display();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_push_and_pull_render_identically() {
        let push_sink = RecordingSink::new();
        let pull_sink = RecordingSink::new();
        let mut station = WeatherData::new();
        let _push = CurrentConditionsDisplay::attach(&mut station, push_sink.clone());
        let _pull = CurrentConditionsDisplay::attach_pull(&mut station, pull_sink.clone());

        station.set_measurements(70.0, 60.0, 30.4);
        station.set_measurements(60.0, 55.0, 30.4);

        assert_eq!(push_sink.lines(), pull_sink.lines());
        assert_eq!(push_sink.len(), 2);
    }

    #[test]
    fn test_detached_display_stops_rendering() {
        let sink = RecordingSink::new();
        let mut station = WeatherData::new();
        let display = CurrentConditionsDisplay::attach(&mut station, sink.clone());

        station.set_measurements(80.0, 65.0, 30.4);
        station.unregister(&display);
        station.set_measurements(70.0, 60.0, 30.4);

        assert_eq!(sink.len(), 1);
        assert_eq!(display.borrow().latest(), Some(Measurement::new(80.0, 65.0, 30.4)));
    }
}
