#[cfg(target_os = "linux")]
use i2cdev::core::I2CDevice;
#[cfg(target_os = "linux")]
use i2cdev::linux::{LinuxI2CDevice, LinuxI2CError};

use async_trait::async_trait;
#[cfg(target_os = "linux")]
use tracing::debug;

use crate::bus::{BusError, BusIo, BusResult};

/// I2C bus error type - platform specific
#[cfg(target_os = "linux")]
pub type I2CError = LinuxI2CError;

#[cfg(not(target_os = "linux"))]
#[derive(Debug)]
pub struct I2CError(pub String);

#[cfg(not(target_os = "linux"))]
impl std::fmt::Display for I2CError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "I2C not supported on this platform: {}", self.0)
    }
}

#[cfg(not(target_os = "linux"))]
impl std::error::Error for I2CError {}

/// One open connection to an I2C device file, bound to a single 7-bit
/// peer address. The handle is either closed (`None`) or open; it is
/// owned exclusively by this struct and released exactly once.
pub struct I2cBus {
    devfile: String,
    address: u16,
    #[cfg(target_os = "linux")]
    handle: Option<LinuxI2CDevice>,
}

impl I2cBus {
    /// Create a transport in the closed state. `open` must be called
    /// before any transfer.
    pub fn new(devfile: impl Into<String>, address: u16) -> Self {
        Self {
            devfile: devfile.into(),
            address,
            #[cfg(target_os = "linux")]
            handle: None,
        }
    }
}

#[cfg(target_os = "linux")]
impl I2cBus {
    /// Open the device file and bind the peer address.
    ///
    /// Fails with `MissingConfig` before any I/O when the address is zero
    /// or the path empty, `BusUnavailable` when the device file cannot be
    /// opened, and `PeerBindFailed` when the slave-address ioctl is
    /// rejected.
    pub fn open(&mut self) -> BusResult<()> {
        if self.address == 0 || self.devfile.is_empty() {
            return Err(BusError::MissingConfig);
        }
        if self.handle.is_some() {
            return Ok(());
        }

        let mut device =
            LinuxI2CDevice::new(&self.devfile, 0).map_err(|e| BusError::BusUnavailable {
                devfile: self.devfile.clone(),
                source: e,
            })?;
        device
            .set_slave_address(self.address)
            .map_err(|e| BusError::PeerBindFailed {
                address: self.address,
                source: e,
            })?;

        debug!(devfile = %self.devfile, address = self.address, "i2c bus opened");
        self.handle = Some(device);
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Close the handle. Idempotent; safe to call when already closed.
    pub fn close(&mut self) {
        if self.handle.take().is_some() {
            debug!(devfile = %self.devfile, "i2c bus closed");
        }
    }

    fn device(&mut self) -> BusResult<&mut LinuxI2CDevice> {
        self.handle.as_mut().ok_or(BusError::NotOpen)
    }
}

#[cfg(target_os = "linux")]
impl Drop for I2cBus {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(target_os = "linux")]
#[async_trait]
impl BusIo for I2cBus {
    async fn write_all(&mut self, buf: &[u8]) -> BusResult<()> {
        let device = self.device()?;
        device.write(buf).map_err(BusError::from)
    }

    async fn read_exact(&mut self, buf: &mut [u8]) -> BusResult<()> {
        let device = self.device()?;
        device.read(buf).map_err(BusError::from)
    }
}

#[cfg(not(target_os = "linux"))]
impl I2cBus {
    pub fn open(&mut self) -> BusResult<()> {
        if self.address == 0 || self.devfile.is_empty() {
            return Err(BusError::MissingConfig);
        }
        Err(BusError::Io(I2CError(
            "I2C is only supported on Linux".to_string(),
        )))
    }

    pub fn is_open(&self) -> bool {
        false
    }

    pub fn close(&mut self) {}
}

#[cfg(not(target_os = "linux"))]
#[async_trait]
impl BusIo for I2cBus {
    async fn write_all(&mut self, _buf: &[u8]) -> BusResult<()> {
        Err(BusError::Io(I2CError(
            "I2C is only supported on Linux".to_string(),
        )))
    }

    async fn read_exact(&mut self, _buf: &mut [u8]) -> BusResult<()> {
        Err(BusError::Io(I2CError(
            "I2C is only supported on Linux".to_string(),
        )))
    }
}
