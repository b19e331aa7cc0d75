//! 7-bit group emission and terminator scanning shared by both codecs.

use num_bigint::BigUint;

use crate::cursor::ByteSink;

pub const CONTINUATION_BIT: u8 = 0x80;
pub const SIGN_BIT: u8 = 0x40;
pub const GROUP_MASK: u8 = 0x7f;

/// How a magnitude is turned into groups and when emission stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GroupMode {
    /// ULEB128: stop once the magnitude is exhausted.
    Unsigned,
    /// SLEB128, value >= 0: the final group must have its sign bit clear.
    Positive,
    /// SLEB128, value < 0, over `abs(value) - 1`: groups are inverted and
    /// the final group must have its sign bit set.
    Negative,
}

/// Result of looking ahead for the byte that ends the next value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scan {
    Done { len: usize, negative: bool },
    Truncated,
}

/// Emits `magnitude` least-significant group first.
///
/// Groups come from one radix-128 conversion, so the cost is linear in the
/// size of the value.
pub(crate) fn write_groups<S: ByteSink + ?Sized>(
    magnitude: &BigUint,
    mode: GroupMode,
    sink: &mut S,
) {
    let mut out = magnitude.to_radix_le(128);
    if out.is_empty() {
        out.push(0);
    }
    if mode == GroupMode::Negative {
        for group in out.iter_mut() {
            *group = GROUP_MASK - *group;
        }
    }
    let top = out[out.len() - 1];
    match mode {
        GroupMode::Unsigned => {}
        GroupMode::Positive if top & SIGN_BIT != 0 => out.push(0x00),
        GroupMode::Negative if top & SIGN_BIT == 0 => out.push(GROUP_MASK),
        GroupMode::Positive | GroupMode::Negative => {}
    }
    let last = out.len() - 1;
    for group in &mut out[..last] {
        *group |= CONTINUATION_BIT;
    }
    sink.write(&out);
}

/// Rebuilds a magnitude from 7-bit groups, least significant first.
pub(crate) fn from_groups(groups: &[u8]) -> BigUint {
    // every group is masked below the radix, so the conversion cannot fail
    BigUint::from_radix_le(groups, 128).unwrap_or_default()
}

/// Finds the terminating byte in `window` without consuming anything.
pub(crate) fn scan(window: &[u8]) -> Scan {
    match window.iter().position(|b| b & CONTINUATION_BIT == 0) {
        Some(i) => Scan::Done {
            len: i + 1,
            negative: window[i] & SIGN_BIT != 0,
        },
        None => Scan::Truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(value: u64, mode: GroupMode) -> Vec<u8> {
        let mut out = Vec::new();
        write_groups(&BigUint::from(value), mode, &mut out);
        out
    }

    #[test]
    fn unsigned_mode_stops_at_zero_magnitude() {
        assert_eq!(groups(0, GroupMode::Unsigned), vec![0x00]);
        assert_eq!(groups(64, GroupMode::Unsigned), vec![0x40]);
        assert_eq!(groups(624_485, GroupMode::Unsigned), vec![0xe5, 0x8e, 0x26]);
    }

    #[test]
    fn positive_mode_keeps_sign_bit_clear() {
        assert_eq!(groups(63, GroupMode::Positive), vec![0x3f]);
        assert_eq!(groups(64, GroupMode::Positive), vec![0xc0, 0x00]);
        assert_eq!(groups(8191, GroupMode::Positive), vec![0xff, 0x3f]);
        assert_eq!(groups(8192, GroupMode::Positive), vec![0x80, 0xc0, 0x00]);
    }

    #[test]
    fn negative_mode_keeps_sign_bit_set() {
        // magnitudes are abs(value) - 1
        assert_eq!(groups(0, GroupMode::Negative), vec![0x7f]);
        assert_eq!(groups(63, GroupMode::Negative), vec![0x40]);
        assert_eq!(groups(64, GroupMode::Negative), vec![0xbf, 0x7f]);
        assert_eq!(groups(127, GroupMode::Negative), vec![0x80, 0x7f]);
    }

    #[test]
    fn from_groups_little_endian() {
        assert_eq!(from_groups(&[]), BigUint::default());
        assert_eq!(from_groups(&[0x00]), BigUint::default());
        assert_eq!(from_groups(&[0x65, 0x0e, 0x26]), BigUint::from(624_485u32));
    }

    #[test]
    fn scan_states() {
        assert_eq!(scan(&[]), Scan::Truncated);
        assert_eq!(scan(&[0x80, 0xff]), Scan::Truncated);
        assert_eq!(
            scan(&[0x00, 0x7f]),
            Scan::Done {
                len: 1,
                negative: false
            }
        );
        assert_eq!(
            scan(&[0xbf, 0x7f, 0x01]),
            Scan::Done {
                len: 2,
                negative: true
            }
        );
    }
}
