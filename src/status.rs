//! Status register for the AD7746

const RDY_CAP: u8 = 1 << 0;
const RDY_VT: u8 = 1 << 1;
const EXC_ERR: u8 = 1 << 3;

/// Flags from the `STATUS` register (0x00)
///
/// The ready bits are active low in the device: a set bit means the
/// corresponding conversion has not completed yet. The accessors here
/// invert that, so `cap_ready()` answers the question you actually ask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    raw: u8,
}

impl Status {
    /// Create status flags from a raw register value
    #[must_use]
    pub const fn new(raw: u8) -> Self {
        Self { raw }
    }

    /// Get the raw register value
    #[must_use]
    pub const fn raw(&self) -> u8 {
        self.raw
    }

    /// `RDYCAP`: a capacitance conversion result is waiting in the data
    /// registers
    #[must_use]
    pub const fn cap_ready(&self) -> bool {
        self.raw & RDY_CAP == 0
    }

    /// `RDYVT`: a voltage/temperature conversion result is waiting in the
    /// data registers
    #[must_use]
    pub const fn vt_ready(&self) -> bool {
        self.raw & RDY_VT == 0
    }

    /// `EXCERR`: the excitation output could not drive the configured
    /// level, usually a short or overload on the EXC pin
    ///
    /// Capacitance readings taken while this is set are not trustworthy
    #[must_use]
    pub const fn excitation_error(&self) -> bool {
        self.raw & EXC_ERR != 0
    }
}

impl From<u8> for Status {
    fn from(raw: u8) -> Self {
        Self::new(raw)
    }
}
