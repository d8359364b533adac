/// Interpret the low `bits` bits of `value` as a two's complement number
///
/// `bits` must be between 1 and 16.
#[allow(clippy::cast_possible_truncation)]
pub fn sign_extend(value: u16, bits: u32) -> i16 {
    assert!((1..=16).contains(&bits), "sign width out of range");
    let value = i32::from(value) & ((1 << bits) - 1);
    let signed = if value & (1 << (bits - 1)) != 0 {
        value - (1 << bits)
    } else {
        value
    };
    signed as i16
}

/// Assemble one 12-bit acceleration sample from its LSB/MSB register pair
///
/// Only the top nibble of `lsb` carries data; the lower four bits are
/// discarded before sign extension.
pub fn axis_from_bytes(lsb: u8, msb: u8) -> i16 {
    let low = u16::from(lsb & 0xF0);
    let high = u16::from(msb) << 8;
    sign_extend((high | low) >> 4, 12)
}
