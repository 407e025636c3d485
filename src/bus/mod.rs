pub mod i2c;

use async_trait::async_trait;
use thiserror::Error;

use crate::bus::i2c::I2CError;

/// Transport-level errors for one addressed peer on a bus
#[derive(Error, Debug)]
pub enum BusError {
    #[error("missing device file or peer address")]
    MissingConfig,

    #[error("failed to open bus device '{devfile}': {source}")]
    BusUnavailable {
        devfile: String,
        #[source]
        source: I2CError,
    },

    #[error("failed to bind peer address {address:#04x}: {source}")]
    PeerBindFailed {
        address: u16,
        #[source]
        source: I2CError,
    },

    #[error("bus handle is not open")]
    NotOpen,

    #[error("I2C transfer failed: {0}")]
    Io(#[from] I2CError),
}

pub type BusResult<T> = Result<T, BusError>;

/// Raw, ordered byte access to a single peer on a two-wire bus.
///
/// Implementations must either complete the full transfer or return an
/// error; a partial read or write never succeeds silently. The register
/// combinators below are defined in terms of the two raw operations so
/// that every implementation (hardware or test double) sees identical
/// wire framing.
#[async_trait]
pub trait BusIo: Send {
    /// Write the whole buffer to the peer.
    async fn write_all(&mut self, buf: &[u8]) -> BusResult<()>;

    /// Fill the whole buffer from the peer.
    async fn read_exact(&mut self, buf: &mut [u8]) -> BusResult<()>;

    /// Write a single byte, typically to select a register address
    /// before a read.
    async fn write_byte(&mut self, value: u8) -> BusResult<()> {
        self.write_all(&[value]).await
    }

    /// Write one byte to an 8-bit register address: `[reg, value]`.
    async fn write_register(&mut self, reg: u8, value: u8) -> BusResult<()> {
        self.write_all(&[reg, value]).await
    }

    /// Read one byte from an 8-bit register address.
    async fn read_register(&mut self, reg: u8) -> BusResult<u8> {
        self.write_byte(reg).await?;
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf).await?;
        Ok(buf[0])
    }

    /// Block-read `count` consecutive registers starting at `from`.
    async fn read_registers(&mut self, count: usize, from: u8) -> BusResult<Vec<u8>> {
        self.write_byte(from).await?;
        let mut buf = vec![0u8; count];
        self.read_exact(&mut buf).await?;
        Ok(buf)
    }

    /// Write one byte to a 16-bit register address: `[hi, lo, value]`.
    ///
    /// Some devices expose a register space wider than their native 8-bit
    /// addressing, and expect the address split big-endian across the
    /// first two bytes of the frame. This bypasses the 8-bit primitives
    /// entirely; callers must pick the variant matching the target
    /// device's addressing width.
    async fn write_wide(&mut self, reg: u16, value: u8) -> BusResult<()> {
        self.write_all(&[(reg >> 8) as u8, (reg & 0xff) as u8, value])
            .await
    }

    /// Read one byte from a 16-bit register address: write `[hi, lo]`,
    /// then read a single byte.
    async fn read_wide(&mut self, reg: u16) -> BusResult<u8> {
        self.write_all(&[(reg >> 8) as u8, (reg & 0xff) as u8])
            .await?;
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf).await?;
        Ok(buf[0])
    }
}
