use crate::bus::i2c::I2cBus;
use crate::device::Device;
use crate::errors::{SensorError, SensorResult};

#[cfg(feature = "vl6180")]
pub mod vl6180;

/// Create and initialize a sensor driver by its configured driver name.
///
/// The driver takes exclusive ownership of the bus transport; two
/// drivers never share one open handle. A driver whose hardware fails
/// verification is returned inactive rather than as an error, so one
/// bad sensor does not take down the rest of the hub.
pub async fn create_sensor_driver(
    driver: &str,
    id: String,
    bus: I2cBus,
    gain: Option<&str>,
    max_poll: Option<u32>,
) -> SensorResult<Box<dyn Device>> {
    match driver {
        #[cfg(feature = "vl6180")]
        "vl6180" => {
            let gain = match gain {
                Some(name) => vl6180::Gain::from_name(name).ok_or_else(|| {
                    SensorError::ConfigError {
                        sensor: id.clone(),
                        reason: format!("unknown ALS gain '{}'", name),
                    }
                })?,
                None => vl6180::Gain::default(),
            };
            Ok(Box::new(
                vl6180::Vl6180::connect(id, bus, gain, max_poll).await,
            ))
        }
        _ => Err(SensorError::UnsupportedDriver {
            driver: driver.to_string(),
        }),
    }
}
