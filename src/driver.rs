//! Blocking driver for the AD7746 capacitance-to-digital converter

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::{error::Error, register::Register, status::Status, utils};

/// Fixed 7-bit I2C address of the AD7746
pub const I2C_ADDR: u8 = 0x48;

const GENERAL_CALL_ADDR: u8 = 0x00;
const RESET_COMMAND: u8 = 0x06;
const RESET_SETTLE_MS: u32 = 2;
const RETRY_DELAY_MS: u32 = 2;

/// Default `CAP SETUP`: CAPEN=1, CIN1 single-ended, CAPCHOP=1
pub const DEFAULT_CAP_SETUP: u8 = 0x81;
/// Default `EXC SETUP`: EXCA enabled, non-inverted, lowest excitation level
pub const DEFAULT_EXC_SETUP: u8 = 0x08;
/// Default `CONFIGURATION`: continuous conversion, slow low-noise filter
pub const DEFAULT_CONFIGURATION: u8 = 0x21;

/// Default bound on status polls per conversion
///
/// A conversion at the slowest filter setting takes roughly 110 ms and a
/// single status read on a 100 kHz bus takes a few hundred microseconds,
/// so this leaves an order of magnitude of headroom
pub const DEFAULT_READY_POLL_LIMIT: u32 = 4000;

/// Default bound on failed read attempts per averaging session
pub const DEFAULT_RETRY_LIMIT: u32 = 16;

/// AD7746 driver instance (blocking)
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ad7746<I2C, D> {
    i2c: I2C,
    delay: D,
    ready_poll_limit: u32,
    retry_limit: u32,
}

impl<I2C, D, E> Ad7746<I2C, D>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
{
    /// Create a new AD7746 driver instance
    ///
    /// The delay provider is used for the post-reset settle time and the
    /// backoff between failed samples during averaging
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            delay,
            ready_poll_limit: DEFAULT_READY_POLL_LIMIT,
            retry_limit: DEFAULT_RETRY_LIMIT,
        }
    }

    /// Release the I2C bus and delay provider, consuming the driver
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Set the maximum number of status polls per conversion
    ///
    /// [`read_raw`](Self::read_raw) returns [`Error::NotReady`] once the
    /// limit is exhausted. A limit of 0 makes every read fail
    pub fn set_ready_poll_limit(&mut self, limit: u32) {
        self.ready_poll_limit = limit;
    }

    /// Set the maximum number of failed samples tolerated per averaging
    /// session
    pub fn set_retry_limit(&mut self, limit: u32) {
        self.retry_limit = limit;
    }

    /// Reset the device and apply the default configuration
    ///
    /// Issues a general-call reset, writes the capacitance setup,
    /// excitation setup and configuration registers in that order, then
    /// reads the status register once to confirm the device answers.
    /// A failed write stops the sequence immediately
    ///
    /// # Errors
    ///
    /// Returns an error if the device did not acknowledge any of the
    /// configuration writes or the status read. The device should be
    /// treated as absent; do not proceed to acquisition
    pub fn init(&mut self) -> Result<(), Error<E>> {
        self.general_call_reset();
        self.write_register(Register::CapSetup, DEFAULT_CAP_SETUP)?;
        self.write_register(Register::ExcSetup, DEFAULT_EXC_SETUP)?;
        self.write_register(Register::Configuration, DEFAULT_CONFIGURATION)?;
        self.read_status()?;
        Ok(())
    }

    /// Check whether a device acknowledges the bus address
    ///
    /// Issues an address-only probe (zero-length write); no register is
    /// touched
    pub fn is_connected(&mut self) -> bool {
        self.i2c.write(I2C_ADDR, &[]).is_ok()
    }

    /// Read the status register
    ///
    /// # Errors
    ///
    /// Returns an error if the I2C transaction fails
    pub fn read_status(&mut self) -> Result<Status, Error<E>> {
        let mut buf = [0u8; 1];
        self.read_registers(Register::Status, &mut buf)?;
        Ok(Status::new(buf[0]))
    }

    /// Read one raw 24-bit capacitance conversion code
    ///
    /// Polls the status register until the capacitance-ready bit clears,
    /// bounded by the configured poll limit, then reads the three data
    /// registers in one transaction
    ///
    /// # Errors
    ///
    /// Returns [`Error::Communication`] if any I2C transaction fails, or
    /// [`Error::NotReady`] if no conversion completed within the poll
    /// limit (device disconnected, held in reset or misconfigured)
    pub fn read_raw(&mut self) -> Result<u32, Error<E>> {
        for _ in 0..self.ready_poll_limit {
            let status = self.read_status()?;
            if !status.cap_ready() {
                continue;
            }

            let mut data = [0u8; 3];
            self.read_registers(Register::CapDataH, &mut data)?;
            let code = (u32::from(data[0]) << 16) | (u32::from(data[1]) << 8) | u32::from(data[2]);

            #[cfg(feature = "defmt")]
            defmt::debug!("Capacitance code: 0x{:06X}", code);

            return Ok(code);
        }

        #[cfg(feature = "defmt")]
        defmt::warn!(
            "No conversion ready after {} status polls",
            self.ready_poll_limit
        );
        Err(Error::NotReady)
    }

    /// Read one capacitance sample in picofarads
    ///
    /// # Errors
    ///
    /// Fails exactly when [`read_raw`](Self::read_raw) fails; the scaling
    /// step cannot fail
    pub fn read_once(&mut self) -> Result<f64, Error<E>> {
        self.read_raw().map(utils::code_to_picofarads)
    }

    /// Read the arithmetic mean of `n` capacitance samples in picofarads
    ///
    /// Failed samples do not count toward `n`; each one is followed by a
    /// short delay and retried, up to the configured retry limit for the
    /// whole session
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientSamples`] if `n` is 0 or the retry
    /// limit was exhausted before `n` samples succeeded
    pub fn read_average(&mut self, n: u16) -> Result<f64, Error<E>> {
        if n == 0 {
            return Err(Error::InsufficientSamples);
        }

        let mut sum = 0.0;
        let mut good: u16 = 0;
        let mut failed: u32 = 0;

        while good < n {
            match self.read_once() {
                Ok(pf) => {
                    sum += pf;
                    good += 1;
                }
                Err(_) => {
                    if failed >= self.retry_limit {
                        #[cfg(feature = "defmt")]
                        defmt::warn!(
                            "Averaging gave up: {} of {} samples after {} failures",
                            good,
                            n,
                            failed
                        );
                        return Err(Error::InsufficientSamples);
                    }
                    failed += 1;
                    self.delay.delay_ms(RETRY_DELAY_MS);
                }
            }
        }

        Ok(sum / f64::from(good))
    }

    /// Write the capacitive channel setup register
    ///
    /// # Errors
    ///
    /// Returns an error if the I2C transaction fails
    pub fn set_cap_setup(&mut self, value: u8) -> Result<(), Error<E>> {
        self.write_register(Register::CapSetup, value)
    }

    /// Write the excitation setup register
    ///
    /// # Errors
    ///
    /// Returns an error if the I2C transaction fails
    pub fn set_exc_setup(&mut self, value: u8) -> Result<(), Error<E>> {
        self.write_register(Register::ExcSetup, value)
    }

    /// Write the configuration register
    ///
    /// # Errors
    ///
    /// Returns an error if the I2C transaction fails
    pub fn set_configuration(&mut self, value: u8) -> Result<(), Error<E>> {
        self.write_register(Register::Configuration, value)
    }

    /// Write capacitive DAC A
    ///
    /// # Errors
    ///
    /// Returns an error if the I2C transaction fails
    pub fn set_cap_dac_a(&mut self, value: u8) -> Result<(), Error<E>> {
        self.write_register(Register::CapDacA, value)
    }

    /// Write capacitive DAC B
    ///
    /// # Errors
    ///
    /// Returns an error if the I2C transaction fails
    pub fn set_cap_dac_b(&mut self, value: u8) -> Result<(), Error<E>> {
        self.write_register(Register::CapDacB, value)
    }

    /// Write a single register
    fn write_register(&mut self, register: Register, value: u8) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "Writing 0x{:02X} to register 0x{:02X}",
            value,
            u8::from(register)
        );

        self.i2c
            .write(I2C_ADDR, &[register.into(), value])
            .map_err(Error::Communication)
    }

    /// Read consecutive registers starting at `register`
    ///
    /// Sets the register pointer, then reads `buf.len()` bytes after a
    /// repeated start. A NACK anywhere fails the whole transaction; there
    /// is no partial result
    fn read_registers(&mut self, register: Register, buf: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c
            .write_read(I2C_ADDR, &[register.into()], buf)
            .map_err(Error::Communication)
    }

    /// Datasheet general-call reset: address 0x00, command 0x06
    ///
    /// The device does not acknowledge a general call, so the transaction
    /// result carries no information and is discarded. The settle delay
    /// covers the internal reset time
    fn general_call_reset(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("General-call reset");

        let _ = self.i2c.write(GENERAL_CALL_ADDR, &[RESET_COMMAND]);
        self.delay.delay_ms(RESET_SETTLE_MS);
    }
}
