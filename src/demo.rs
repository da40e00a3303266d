//! The two console demos as plain functions over a sink, so the binaries and
//! the integration tests run exactly the same sequence.

use tracing::info;

use crate::behavior::FlyRocketPowered;
use crate::display::CurrentConditionsDisplay;
use crate::duck::Duck;
use crate::error::DuckError;
use crate::observer::{Measurement, WeatherData};
use crate::sink::SharedSink;

pub const WEATHER_BANNER: &str = "WeatherMonitoringApp";
pub const DUCK_BANNER: &str = "SimUDuckApp";

pub fn run_weather_monitoring(readings: &[Measurement], sink: SharedSink) {
    sink.write_line(WEATHER_BANNER);

    let mut weather_data = WeatherData::new();
    let _current_conditions = CurrentConditionsDisplay::attach(&mut weather_data, sink);

    for reading in readings {
        weather_data.publish(*reading);
    }
    info!(published = readings.len(), "weather demo finished");
}

pub fn run_sim_u_duck(sink: SharedSink) -> Result<(), DuckError> {
    sink.write_line(DUCK_BANNER);

    let mallard = Duck::mallard(sink.clone());
    mallard.perform_quack()?;
    mallard.perform_fly()?;

    let mut model = Duck::model(sink);
    model.perform_fly()?;
    model.set_fly_behavior(FlyRocketPowered);
    model.perform_fly()?;

    info!("duck demo finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_READINGS;
    use crate::sink::RecordingSink;

    #[test]
    fn test_weather_transcript() {
        let sink = RecordingSink::new();
        run_weather_monitoring(&DEFAULT_READINGS, sink.clone());
        assert_eq!(
            sink.lines(),
            vec![
                "WeatherMonitoringApp",
                "Current conditions: 80.0F degrees and 65.0% humidity and 30.4bar pressure",
                "Current conditions: 70.0F degrees and 60.0% humidity and 30.4bar pressure",
                "Current conditions: 60.0F degrees and 55.0% humidity and 30.4bar pressure",
            ]
        );
    }

    #[test]
    fn test_weather_with_no_readings_prints_banner_only() {
        let sink = RecordingSink::new();
        run_weather_monitoring(&[], sink.clone());
        assert_eq!(sink.lines(), vec!["WeatherMonitoringApp"]);
    }

    #[test]
    fn test_duck_transcript() {
        let sink = RecordingSink::new();
        run_sim_u_duck(sink.clone()).unwrap();
        assert_eq!(
            sink.lines(),
            vec![
                "SimUDuckApp",
                "Quack!!!",
                "I'm flying!!!",
                "I can't fly.",
                "I'm flying with a rocket!",
            ]
        );
    }
}
