//! Mod-97 checksum arithmetic.
//!
//! The Belgian structured-communication standard derives a two-digit check
//! value from the ten-digit communication number: the remainder of the
//! number modulo 97, with a zero remainder substituted by 97. A checksum of
//! `00` is disallowed by convention, so the result always lies in `[1, 97]`.

/// Divisor used to derive the checksum.
pub const MODULO: u64 = 97;

/// Compute the mod-97 checksum of `dividend`.
///
/// A zero remainder collapses to [`MODULO`] itself, never to 0.
///
/// # Examples
///
/// ```
/// use ogm_models::checksum::mod97;
///
/// assert_eq!(mod97(123456), 72);
/// assert_eq!(mod97(119698), 97); // 119698 % 97 == 0
/// ```
pub fn mod97(dividend: u64) -> u8 {
    let remainder = dividend % MODULO;
    if remainder == 0 {
        MODULO as u8
    } else {
        remainder as u8
    }
}
