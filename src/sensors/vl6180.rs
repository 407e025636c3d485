//! Driver for the ST VL6180 combined time-of-flight ranging and
//! ambient-light sensor.
//!
//! The device exposes a 16-bit register space over I2C, so every
//! transfer goes through the wide-address bus primitives. Both
//! measurements are blocking request/poll/read/clear cycles
//! synchronized on the interrupt-status register.

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::bus::BusIo;
use crate::device::{Descriptor, Device, UNAVAILABLE};
use crate::errors::{SensorError, SensorResult};
use crate::format;

const MODEL_ID: u8 = 0xB4;

// Register addresses used by this driver (VL6180 datasheet)
const IDENTIFICATION_MODEL_ID: u16 = 0x0000;
const SYSTEM_MODE_GPIO1: u16 = 0x0011;
const SYSTEM_INTERRUPT_CONFIG_GPIO: u16 = 0x0014;
const SYSTEM_INTERRUPT_CLEAR: u16 = 0x0015;
const SYSTEM_FRESH_OUT_OF_RESET: u16 = 0x0016;
const SYSRANGE_START: u16 = 0x0018;
const SYSRANGE_INTERMEASUREMENT_PERIOD: u16 = 0x001B;
const SYSRANGE_MAX_CONVERGENCE_TIME: u16 = 0x001C;
const SYSRANGE_EARLY_CONVERGENCE_ESTIMATE: u16 = 0x0022;
const SYSRANGE_RANGE_CHECK_ENABLES: u16 = 0x002D;
const SYSRANGE_VHV_RECALIBRATE: u16 = 0x002E;
const SYSRANGE_VHV_REPEAT_RATE: u16 = 0x0031;
const SYSALS_START: u16 = 0x0038;
const SYSALS_INTERMEASUREMENT_PERIOD: u16 = 0x003E;
const SYSALS_ANALOGUE_GAIN: u16 = 0x003F;
const SYSALS_INTEGRATION_PERIOD: u16 = 0x0040;
const RESULT_RANGE_STATUS: u16 = 0x004D;
const RESULT_INTERRUPT_STATUS_GPIO: u16 = 0x004F;
const RESULT_ALS_VAL: u16 = 0x0050;
const RESULT_RANGE_VAL: u16 = 0x0062;
const READOUT_AVERAGING_SAMPLE_PERIOD: u16 = 0x010A;
const FIRMWARE_RESULT_SCALER: u16 = 0x0120;

/// Calibrated count-to-lux conversion factor at 100ms integration time.
const LUX_PER_COUNT: f32 = 0.32;

/// Private configuration from page 24 of the application note, applied
/// in order before the public settings. Order matters: later entries
/// configure digital blocks that depend on earlier analog setup.
const PRIVATE_INIT: &[(u16, u8)] = &[
    (0x0207, 0x01),
    (0x0208, 0x01),
    (0x0096, 0x00),
    (0x0097, 0xfd),
    (0x00e3, 0x00),
    (0x00e4, 0x04),
    (0x00e5, 0x02),
    (0x00e6, 0x01),
    (0x00e7, 0x03),
    (0x00f5, 0x02),
    (0x00d9, 0x05),
    (0x00db, 0xce),
    (0x00dc, 0x03),
    (0x00dd, 0xf8),
    (0x009f, 0x00),
    (0x00a3, 0x3c),
    (0x00b7, 0x00),
    (0x00bb, 0x3c),
    (0x00b2, 0x09),
    (0x00ca, 0x09),
    (0x0198, 0x01),
    (0x01b0, 0x17),
    (0x01ad, 0x00),
    (0x00ff, 0x05),
    (0x0100, 0x05),
    (0x0199, 0x05),
    (0x01a6, 0x1b),
    (0x01ac, 0x3e),
    (0x01a7, 0x1f),
    (0x0030, 0x00),
];

const DESCRIPTOR: Descriptor = Descriptor {
    name: "VL6180",
    kind: "sensor",
    version: env!("CARGO_PKG_VERSION"),
    value_names: &["range", "lux"],
    value_types: &["integer", "float"],
};

/// Analog gain applied before ALS digitization. Each level maps to a
/// register bit pattern and the divisor used when converting raw counts
/// to lux.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gain {
    X1,
    X1_25,
    X1_67,
    X2_5,
    X5,
    X10,
    X20,
    X40,
}

impl Gain {
    /// Gain-select bits for SYSALS_ANALOGUE_GAIN (low nibble).
    pub fn bits(self) -> u8 {
        match self {
            Gain::X1 => 0x06,
            Gain::X1_25 => 0x05,
            Gain::X1_67 => 0x04,
            Gain::X2_5 => 0x03,
            Gain::X5 => 0x02,
            Gain::X10 => 0x01,
            Gain::X20 => 0x00,
            Gain::X40 => 0x07,
        }
    }

    /// Divisor for the count-to-lux conversion. The 1.67x and 40x
    /// entries use the calibrated values 1.76 and 20 rather than their
    /// nominal gains.
    pub fn divisor(self) -> f32 {
        match self {
            Gain::X1 => 1.0,
            Gain::X1_25 => 1.25,
            Gain::X1_67 => 1.76,
            Gain::X2_5 => 2.5,
            Gain::X5 => 5.0,
            Gain::X10 => 10.0,
            Gain::X20 => 20.0,
            Gain::X40 => 20.0,
        }
    }

    /// Parse a configuration gain name like "5x" or "1.25x".
    pub fn from_name(name: &str) -> Option<Gain> {
        match name {
            "1x" => Some(Gain::X1),
            "1.25x" => Some(Gain::X1_25),
            "1.67x" => Some(Gain::X1_67),
            "2.5x" => Some(Gain::X2_5),
            "5x" => Some(Gain::X5),
            "10x" => Some(Gain::X10),
            "20x" => Some(Gain::X20),
            "40x" => Some(Gain::X40),
            _ => None,
        }
    }
}

impl Default for Gain {
    fn default() -> Self {
        Gain::X5
    }
}

/// The two measurements the device exposes, in accessor-index order.
#[derive(Debug, Clone, Copy)]
enum Measurement {
    Range,
    AmbientLight,
}

const MEASUREMENTS: [Measurement; 2] = [Measurement::Range, Measurement::AmbientLight];

/// Ranging error code reported in the upper nibble of
/// RESULT_RANGE_STATUS after a measurement.
fn range_error_name(code: u8) -> &'static str {
    match code {
        1..=5 => "system error",
        6 => "early convergence estimate failed",
        7 => "no target, no convergence",
        8 => "range ignore threshold",
        11 => "ambient SNR too low",
        12 => "raw range underflow",
        13 => "raw range overflow",
        14 => "range underflow",
        15 => "range overflow",
        _ => "unknown error",
    }
}

pub struct Vl6180<B: BusIo> {
    id: String,
    bus: B,
    descriptor: Descriptor,
    gain: Gain,
    /// Upper bound on status-poll iterations; `None` spins until the
    /// hardware answers.
    max_poll: Option<u32>,
    active: bool,
}

impl<B: BusIo> Vl6180<B> {
    /// Take ownership of the transport and run the one-time
    /// initialization sequence. A device that fails verification or
    /// calibration comes back inactive and stays that way; there is no
    /// re-initialization path.
    pub async fn connect(id: String, bus: B, gain: Gain, max_poll: Option<u32>) -> Self {
        let mut sensor = Self {
            id,
            bus,
            descriptor: DESCRIPTOR,
            gain,
            max_poll,
            active: false,
        };

        match sensor.initialize().await {
            Ok(()) => {
                sensor.active = true;
                info!(sensor = %sensor.id, gain = ?sensor.gain, "VL6180 initialized");
            }
            Err(e) => {
                error!(sensor = %sensor.id, "initialization failed: {}; sensor is inactive", e);
            }
        }

        sensor
    }

    async fn initialize(&mut self) -> SensorResult<()> {
        let model = self.bus.read_wide(IDENTIFICATION_MODEL_ID).await?;
        if model != MODEL_ID {
            return Err(SensorError::WrongChipId {
                sensor: self.id.clone(),
                expected: MODEL_ID,
                actual: model,
            });
        }

        self.load_settings()
            .await
            .map_err(|e| SensorError::InitError {
                sensor: self.id.clone(),
                reason: format!("calibration load failed: {}", e),
            })?;

        self.bus.write_wide(SYSTEM_FRESH_OUT_OF_RESET, 0x00).await?;
        Ok(())
    }

    async fn load_settings(&mut self) -> SensorResult<()> {
        for &(reg, value) in PRIVATE_INIT {
            self.bus.write_wide(reg, value).await?;
        }

        // Enable polling for new-sample-ready when a measurement completes
        self.bus.write_wide(SYSTEM_MODE_GPIO1, 0x10).await?;

        // Averaging sample period, trading noise against execution time
        self.bus
            .write_wide(READOUT_AVERAGING_SAMPLE_PERIOD, 0x30)
            .await?;

        // Light and dark gain (upper nibble); dark gain stays at default
        self.bus.write_wide(SYSALS_ANALOGUE_GAIN, 0x46).await?;

        // Number of range measurements between auto calibration runs
        self.bus.write_wide(SYSRANGE_VHV_REPEAT_RATE, 0xFF).await?;

        // ALS integration time: 100ms
        self.bus.write_wide(SYSALS_INTEGRATION_PERIOD, 0x64).await?;

        // Single temperature calibration of the ranging sensor
        self.bus.write_wide(SYSRANGE_VHV_RECALIBRATE, 0x01).await?;

        // Inter-measurement periods: ranging 100ms, ALS 500ms
        self.bus
            .write_wide(SYSRANGE_INTERMEASUREMENT_PERIOD, 0x09)
            .await?;
        self.bus
            .write_wide(SYSALS_INTERMEASUREMENT_PERIOD, 0x31)
            .await?;

        // Interrupt on new-sample-ready for both measurement types
        self.bus
            .write_wide(SYSTEM_INTERRUPT_CONFIG_GPIO, 0x24)
            .await?;

        self.bus
            .write_wide(SYSRANGE_MAX_CONVERGENCE_TIME, 0x32)
            .await?;
        self.bus
            .write_wide(SYSRANGE_RANGE_CHECK_ENABLES, 0x10 | 0x01)
            .await?;
        self.bus
            .write_wide(SYSRANGE_EARLY_CONVERGENCE_ESTIMATE, 0x7B)
            .await?;

        self.bus.write_wide(FIRMWARE_RESULT_SCALER, 0x01).await?;
        Ok(())
    }

    /// Spin on a status register until `done` accepts its value.
    ///
    /// Unbounded by default, matching the device's blocking contract; a
    /// configured `max_poll` turns a hung sensor into a distinct
    /// timeout error instead of an indefinite hang.
    async fn poll_status<F>(&mut self, reg: u16, done: F) -> SensorResult<u8>
    where
        F: Fn(u8) -> bool + Send,
    {
        let mut iterations: u32 = 0;
        loop {
            let status = self.bus.read_wide(reg).await?;
            if done(status) {
                return Ok(status);
            }
            iterations += 1;
            if let Some(max) = self.max_poll {
                if iterations >= max {
                    return Err(SensorError::PollTimeout {
                        sensor: self.id.clone(),
                        register: reg,
                        iterations,
                    });
                }
            }
        }
    }

    /// One blocking ranging cycle: wait for device ready, start, wait
    /// for the new-sample interrupt, read, clear. Returns millimeters.
    async fn range_mm(&mut self) -> SensorResult<u8> {
        // wait for device to be ready for a range measurement
        self.poll_status(RESULT_RANGE_STATUS, |v| v & 0x01 != 0)
            .await?;

        self.bus.write_wide(SYSRANGE_START, 0x01).await?;

        // wait for the new-range-sample interrupt
        self.poll_status(RESULT_INTERRUPT_STATUS_GPIO, |v| v & 0x07 == 0x04)
            .await?;

        let range = self.bus.read_wide(RESULT_RANGE_VAL).await?;

        self.bus.write_wide(SYSTEM_INTERRUPT_CLEAR, 0x07).await?;

        let code = self.range_status().await?;
        if code != 0 {
            warn!(
                sensor = %self.id,
                code,
                "range measurement reported {}",
                range_error_name(code)
            );
        }

        Ok(range)
    }

    /// One blocking ambient-light cycle. Returns illuminance in lux.
    async fn lux(&mut self) -> SensorResult<f32> {
        // interrupt on ALS ready
        let mut config = self.bus.read_wide(SYSTEM_INTERRUPT_CONFIG_GPIO).await?;
        config &= !0x38;
        config |= 0x4 << 3;
        self.bus
            .write_wide(SYSTEM_INTERRUPT_CONFIG_GPIO, config)
            .await?;

        // analog gain, light gain in the low nibble
        self.bus
            .write_wide(SYSALS_ANALOGUE_GAIN, 0x40 | self.gain.bits())
            .await?;

        self.bus.write_wide(SYSALS_START, 0x01).await?;

        // wait for the new-ALS-sample interrupt
        self.poll_status(RESULT_INTERRUPT_STATUS_GPIO, |v| (v >> 3) & 0x07 == 0x04)
            .await?;

        let raw = self.read_word(RESULT_ALS_VAL).await?;

        self.bus.write_wide(SYSTEM_INTERRUPT_CLEAR, 0x07).await?;

        let mut lux = raw as f32 * LUX_PER_COUNT;
        lux /= self.gain.divisor();
        // integration time correction at the configured 100ms period
        lux *= 100.0;
        lux /= 100.0;

        debug!(sensor = %self.id, raw, lux, "ALS sample");
        Ok(lux)
    }

    /// The device returns 16-bit values as two single-byte reads at
    /// ascending addresses, with the second read supplying the high
    /// byte. Hardware-compatible; do not replace with a block read.
    async fn read_word(&mut self, reg: u16) -> SensorResult<u16> {
        let low = self.bus.read_wide(reg).await?;
        let high = self.bus.read_wide(reg + 1).await?;
        Ok(((high as u16) << 8) | low as u16)
    }

    /// Ranging error code from the upper nibble of the range status
    /// register. Zero means the last measurement was clean.
    async fn range_status(&mut self) -> SensorResult<u8> {
        Ok(self.bus.read_wide(RESULT_RANGE_STATUS).await? >> 4)
    }

    async fn measure(&mut self, kind: Measurement) -> SensorResult<String> {
        match kind {
            Measurement::Range => {
                let mm = self
                    .range_mm()
                    .await
                    .map_err(|e| self.read_error("range", e))?;
                Ok(format::int_to_string(mm as i64))
            }
            Measurement::AmbientLight => {
                let lux = self.lux().await.map_err(|e| self.read_error("lux", e))?;
                Ok(format::float_to_string(lux, 1))
            }
        }
    }

    fn read_error(&self, what: &str, e: SensorError) -> SensorError {
        match e {
            e @ SensorError::PollTimeout { .. } => e,
            e => SensorError::ReadError {
                sensor: self.id.clone(),
                reason: format!("{} measurement failed: {}", what, e),
            },
        }
    }
}

#[async_trait]
impl<B: BusIo> Device for Vl6180<B> {
    fn id(&self) -> &str {
        &self.id
    }

    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn is_active(&self) -> bool {
        self.active
    }

    async fn value_at(&mut self, index: usize) -> String {
        if !self.active {
            return UNAVAILABLE.to_string();
        }

        let Some(kind) = MEASUREMENTS.get(index).copied() else {
            return UNAVAILABLE.to_string();
        };

        match self.measure(kind).await {
            Ok(value) => value,
            Err(e) => {
                warn!(sensor = %self.id, "{}", e);
                UNAVAILABLE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::BusResult;
    use std::collections::{HashMap, VecDeque};

    /// Wide-frame-aware test double: 3-byte writes are register writes,
    /// 2-byte writes select a register, single-byte reads pop scripted
    /// values or fall back to a per-register default.
    #[derive(Default)]
    struct ScriptedBus {
        scripted: HashMap<u16, VecDeque<u8>>,
        defaults: HashMap<u16, u8>,
        writes: Vec<(u16, u8)>,
        selected: Option<u16>,
    }

    impl ScriptedBus {
        fn with_model_id(model: u8) -> Self {
            let mut bus = Self::default();
            bus.defaults.insert(IDENTIFICATION_MODEL_ID, model);
            bus
        }

        fn script(&mut self, reg: u16, values: &[u8]) {
            self.scripted
                .entry(reg)
                .or_default()
                .extend(values.iter().copied());
        }

        fn set_default(&mut self, reg: u16, value: u8) {
            self.defaults.insert(reg, value);
        }
    }

    #[async_trait]
    impl BusIo for ScriptedBus {
        async fn write_all(&mut self, buf: &[u8]) -> BusResult<()> {
            match *buf {
                [hi, lo] => self.selected = Some(((hi as u16) << 8) | lo as u16),
                [hi, lo, value] => {
                    self.writes.push((((hi as u16) << 8) | lo as u16, value));
                }
                _ => panic!("unexpected frame: {:?}", buf),
            }
            Ok(())
        }

        async fn read_exact(&mut self, buf: &mut [u8]) -> BusResult<()> {
            assert_eq!(buf.len(), 1, "driver reads one byte at a time");
            let reg = self.selected.take().expect("read without address frame");
            let value = match self.scripted.get_mut(&reg).and_then(VecDeque::pop_front) {
                Some(value) => value,
                None => self.defaults.get(&reg).copied().unwrap_or(0),
            };
            buf[0] = value;
            Ok(())
        }
    }

    async fn ready_sensor(mut bus: ScriptedBus) -> Vl6180<ScriptedBus> {
        // device ready for ranging unless a test overrides it
        bus.defaults.entry(RESULT_RANGE_STATUS).or_insert(0x01);
        Vl6180::connect("tof0".to_string(), bus, Gain::default(), None).await
    }

    #[tokio::test]
    async fn wrong_model_id_leaves_sensor_inactive_without_writes() {
        let bus = ScriptedBus::with_model_id(0x00);
        let mut sensor = Vl6180::connect("tof0".to_string(), bus, Gain::default(), None).await;

        assert!(!sensor.is_active());
        assert_eq!(sensor.value_at(0).await, UNAVAILABLE);
        assert_eq!(sensor.value_at(1).await, UNAVAILABLE);
        assert!(sensor.bus.writes.is_empty());
    }

    #[tokio::test]
    async fn initialization_applies_calibration_in_order() {
        let sensor = ready_sensor(ScriptedBus::with_model_id(MODEL_ID)).await;

        assert!(sensor.is_active());
        // 30 private entries, 13 public settings, fresh-out-of-reset clear
        assert_eq!(sensor.bus.writes.len(), PRIVATE_INIT.len() + 14);
        assert_eq!(sensor.bus.writes[0], (0x0207, 0x01));
        assert_eq!(
            sensor.bus.writes[PRIVATE_INIT.len()],
            (SYSTEM_MODE_GPIO1, 0x10)
        );
        assert_eq!(
            sensor.bus.writes.last().copied(),
            Some((SYSTEM_FRESH_OUT_OF_RESET, 0x00))
        );
    }

    #[tokio::test]
    async fn ranging_cycle_reads_millimeters() {
        let mut bus = ScriptedBus::with_model_id(MODEL_ID);
        bus.set_default(RESULT_RANGE_STATUS, 0x01);
        bus.set_default(RESULT_INTERRUPT_STATUS_GPIO, 0x04);
        bus.set_default(RESULT_RANGE_VAL, 42);

        let mut sensor = ready_sensor(bus).await;
        assert_eq!(sensor.value_at(0).await, "42");

        let writes = &sensor.bus.writes;
        assert!(writes.contains(&(SYSRANGE_START, 0x01)));
        assert_eq!(writes.last().copied(), Some((SYSTEM_INTERRUPT_CLEAR, 0x07)));
    }

    #[tokio::test]
    async fn ranging_polls_until_device_and_sample_ready() {
        let mut bus = ScriptedBus::with_model_id(MODEL_ID);
        bus.script(RESULT_RANGE_STATUS, &[0x00, 0x00, 0x01]);
        bus.set_default(RESULT_RANGE_STATUS, 0x01);
        bus.script(RESULT_INTERRUPT_STATUS_GPIO, &[0x00, 0x01, 0x04]);
        bus.set_default(RESULT_RANGE_VAL, 17);

        let mut sensor = ready_sensor(bus).await;
        assert_eq!(sensor.value_at(0).await, "17");
    }

    #[tokio::test]
    async fn ambient_light_cycle_converts_raw_counts_to_lux() {
        let mut bus = ScriptedBus::with_model_id(MODEL_ID);
        // interrupt config reads back as the init default
        bus.set_default(SYSTEM_INTERRUPT_CONFIG_GPIO, 0x24);
        // new-ALS-sample code in bits 5:3
        bus.set_default(RESULT_INTERRUPT_STATUS_GPIO, 0x04 << 3);
        // raw value 1000, low byte first, second read is the high byte
        bus.set_default(RESULT_ALS_VAL, 0xE8);
        bus.set_default(RESULT_ALS_VAL + 1, 0x03);

        let mut sensor = ready_sensor(bus).await;
        // 1000 * 0.32 / 5 at the default 5x gain
        assert_eq!(sensor.value_at(1).await, "64.0");

        let writes = &sensor.bus.writes;
        assert!(writes.contains(&(SYSTEM_INTERRUPT_CONFIG_GPIO, 0x24)));
        assert!(writes.contains(&(SYSALS_ANALOGUE_GAIN, 0x40 | Gain::X5.bits())));
        assert!(writes.contains(&(SYSALS_START, 0x01)));
        assert_eq!(writes.last().copied(), Some((SYSTEM_INTERRUPT_CLEAR, 0x07)));
    }

    #[tokio::test]
    async fn gain_divisor_scales_lux() {
        let mut bus = ScriptedBus::with_model_id(MODEL_ID);
        bus.set_default(RESULT_INTERRUPT_STATUS_GPIO, 0x04 << 3);
        bus.set_default(RESULT_ALS_VAL, 0xE8);
        bus.set_default(RESULT_ALS_VAL + 1, 0x03);
        bus.defaults.insert(RESULT_RANGE_STATUS, 0x01);

        let mut sensor = Vl6180::connect("tof0".to_string(), bus, Gain::X20, None).await;
        // 1000 * 0.32 / 20
        assert_eq!(sensor.value_at(1).await, "16.0");
        assert!(sensor
            .bus
            .writes
            .contains(&(SYSALS_ANALOGUE_GAIN, 0x40 | Gain::X20.bits())));
    }

    #[tokio::test]
    async fn out_of_range_index_answers_unavailable() {
        let mut sensor = ready_sensor(ScriptedBus::with_model_id(MODEL_ID)).await;
        assert_eq!(sensor.value_at(2).await, UNAVAILABLE);
        assert_eq!(sensor.value_at(99).await, UNAVAILABLE);
    }

    #[tokio::test]
    async fn bounded_poll_times_out_instead_of_hanging() {
        let mut bus = ScriptedBus::with_model_id(MODEL_ID);
        bus.set_default(RESULT_RANGE_STATUS, 0x00); // never ready

        let mut sensor = Vl6180::connect("tof0".to_string(), bus, Gain::default(), Some(8)).await;
        assert!(sensor.is_active());

        let err = sensor.range_mm().await.unwrap_err();
        assert!(matches!(
            err,
            SensorError::PollTimeout { iterations: 8, .. }
        ));
        assert_eq!(sensor.value_at(0).await, UNAVAILABLE);
    }

    #[tokio::test]
    async fn value_by_name_dispatches_to_the_matching_index() {
        let mut bus = ScriptedBus::with_model_id(MODEL_ID);
        bus.set_default(RESULT_RANGE_STATUS, 0x01);
        bus.set_default(RESULT_INTERRUPT_STATUS_GPIO, 0x04);
        bus.set_default(RESULT_RANGE_VAL, 123);

        let mut sensor = ready_sensor(bus).await;
        assert_eq!(sensor.value_by_name("range").await, "123");
        assert_eq!(sensor.value_by_name("pressure").await, UNAVAILABLE);
    }

    #[test]
    fn gain_names_round_trip() {
        for (name, gain) in [
            ("1x", Gain::X1),
            ("1.25x", Gain::X1_25),
            ("1.67x", Gain::X1_67),
            ("2.5x", Gain::X2_5),
            ("5x", Gain::X5),
            ("10x", Gain::X10),
            ("20x", Gain::X20),
            ("40x", Gain::X40),
        ] {
            assert_eq!(Gain::from_name(name), Some(gain));
        }
        assert_eq!(Gain::from_name("3x"), None);
    }

    #[test]
    fn nominal_and_calibrated_divisors() {
        assert_eq!(Gain::X1.divisor(), 1.0);
        assert_eq!(Gain::X1_67.divisor(), 1.76);
        assert_eq!(Gain::X40.divisor(), 20.0);
    }
}
