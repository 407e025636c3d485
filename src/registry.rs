use crate::bus::i2c::I2cBus;
use crate::config::sensor_config::SensorConfig;
use crate::device::Device;
use crate::errors::{RegistryError, RegistryResult};
use crate::sensors::create_sensor_driver;
use tracing::{debug, error, info};

/// Build and initialize every configured sensor.
///
/// Each driver gets its own freshly-opened bus handle and owns it
/// exclusively. A sensor whose bus cannot be opened or whose hardware
/// fails verification is still registered, inactive, so the rest of
/// the hub keeps running; every accessor on it answers the unavailable
/// sentinel. Only configuration-level mistakes (unknown driver name,
/// bad gain) abort startup.
pub async fn init_all(sensor_config: &SensorConfig) -> RegistryResult<Vec<Box<dyn Device>>> {
    let mut devices: Vec<Box<dyn Device>> = Vec::new();

    info!("initializing {} sensor(s)...", sensor_config.sensors.len());
    for s in sensor_config.sensors.iter() {
        info!(
            sensor = %s.id,
            driver = %s.driver,
            devfile = %s.devfile,
            address = s.address,
            "registering sensor"
        );

        let mut bus = I2cBus::new(&s.devfile, s.address);
        if let Err(e) = bus.open() {
            // the driver is constructed anyway and comes back inactive
            error!(sensor = %s.id, "failed to open bus: {}", e);
        }
        debug!(sensor = %s.id, open = bus.is_open(), "bus transport prepared");

        let device =
            create_sensor_driver(&s.driver, s.id.clone(), bus, s.gain.as_deref(), s.max_poll)
                .await
                .map_err(RegistryError::RegistrationError)?;

        if device.is_active() {
            info!(
                sensor = %s.id,
                device = %device.device_name(),
                kind = %device.device_kind(),
                version = %device.version(),
                values = device.num_values(),
                "sensor ready"
            );
        } else {
            error!(sensor = %s.id, "sensor registered inactive");
        }
        devices.push(device);
    }

    Ok(devices)
}
