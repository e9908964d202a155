//! Register addresses for the AD7746 CDC.

/// Register addresses for the AD7746
///
/// The data registers (0x01..=0x06) are read-only; everything from
/// `CapSetup` up is read/write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
#[repr(u8)]
pub enum Register {
    /// Status flags (conversion ready, excitation error)
    Status = 0x00,
    /// Capacitance data, bits 23..16
    CapDataH = 0x01,
    /// Capacitance data, bits 15..8
    CapDataM = 0x02,
    /// Capacitance data, bits 7..0
    CapDataL = 0x03,
    /// Voltage/temperature data, bits 23..16
    VtDataH = 0x04,
    /// Voltage/temperature data, bits 15..8
    VtDataM = 0x05,
    /// Voltage/temperature data, bits 7..0
    VtDataL = 0x06,
    /// Capacitive channel setup (input selection, chopping)
    CapSetup = 0x07,
    /// Voltage/temperature channel setup
    VtSetup = 0x08,
    /// Excitation source setup
    ExcSetup = 0x09,
    /// Conversion mode and digital filter configuration
    Configuration = 0x0A,
    /// Capacitive DAC A (coarse offset on the positive input)
    CapDacA = 0x0B,
    /// Capacitive DAC B (coarse offset on the negative input)
    CapDacB = 0x0C,
    /// Factory capacitance offset calibration, high byte
    CapOffsetH = 0x0D,
    /// Factory capacitance offset calibration, low byte
    CapOffsetL = 0x0E,
    /// Factory capacitance gain calibration, high byte
    CapGainH = 0x0F,
    /// Factory capacitance gain calibration, low byte
    CapGainL = 0x10,
}

impl From<Register> for u8 {
    fn from(reg: Register) -> u8 {
        reg as u8
    }
}
