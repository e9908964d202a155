/// Code the device outputs for 0 pF (2^23, the midpoint of the 24-bit range)
pub const ZERO_SCALE_CODE: u32 = 0x80_0000;

/// Full-scale span of the capacitive input in picofarads (±4.096 pF)
pub const FULL_SCALE_PF: f64 = 4.096;

const CODE_MASK: u32 = 0xFF_FFFF;

/// Convert a raw 24-bit conversion code to picofarads
///
/// The device encodes capacitance as an unsigned offset around midscale:
/// `0x800000` is 0 pF, `0x000000` is −4.096 pF and `0xFFFFFF` is one LSB
/// below +4.096 pF. Bits above the low 24 are ignored
#[must_use]
pub fn code_to_picofarads(code: u32) -> f64 {
    let midscale = f64::from(ZERO_SCALE_CODE);
    (f64::from(code & CODE_MASK) - midscale) * (FULL_SCALE_PF / midscale)
}
