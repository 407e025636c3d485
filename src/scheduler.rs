use crate::config::sensor_config::SensorConfig;
use crate::device::{Device, UNAVAILABLE};
use crate::readings::{Header, Reading};
use tokio::time::{sleep, Duration};
use tracing::{info, warn};

/// Spawn one polling task per sensor. Each task owns its device (and
/// through it the bus handle), reads every value index at the
/// configured frequency, and prints readings as JSON lines.
pub fn spawn_sensor_tasks(devices: Vec<Box<dyn Device>>, sensor_config: &SensorConfig) {
    for mut device in devices.into_iter() {
        let sensor_id = device.id().to_string();

        let frequency = sensor_config
            .sensors
            .iter()
            .find(|s| s.id == sensor_id)
            .and_then(|s| s.frequency)
            .unwrap_or(1);
        let period = Duration::from_millis((1000.0 / frequency as f32) as u64);

        tokio::spawn(async move {
            info!(sensor = %sensor_id, frequency, "starting sensor task");
            let mut seq = 0u64;

            loop {
                for index in 0..device.num_values() {
                    let name = device.name_at(index).to_string();
                    let kind = device.type_at(index).to_string();
                    let value = device.value_at(index).await;

                    if value == UNAVAILABLE {
                        warn!(sensor = %sensor_id, value = %name, "reading unavailable");
                        continue;
                    }

                    seq += 1;
                    let reading = Reading {
                        h: Header::new(device.device_name().to_string(), sensor_id.clone(), seq),
                        name,
                        kind,
                        value,
                    };

                    match reading.to_json() {
                        Ok(line) => println!("{}", line),
                        Err(e) => warn!(sensor = %sensor_id, "failed to serialize reading: {}", e),
                    }
                }

                sleep(period).await;
            }
        });
    }
}
