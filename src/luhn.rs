//! Luhn (mod 10) checksum.
//!
//! Digits are processed from the least significant end. Every second digit
//! is doubled, starting with the rightmost digit of the payload (the digits
//! *without* the check digit), and a doubled value above 9 has 9 subtracted.
//! The sum of the results is the Luhn sum.
//!
//! This works on digit slices, so there is no upper bound on input length.
//! Repeated div/mod by 100 over a native integer produces the same sums for
//! numbers that fit in a `u64` and is about as fast for card-length inputs.
//!
//! Inputs must already be digit values 0-9; validating characters is the
//! caller's job.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Computes the Luhn sum of a payload (a number without its check digit).
///
/// The rightmost payload digit is doubled, then every second digit moving
/// left. An empty payload sums to 0.
///
/// # Panics
///
/// Panics if any element is greater than 9.
///
/// # Example
///
/// ```
/// use cc_numbers::luhn::sum;
///
/// // 7 -> 14 -> 5, plus 9
/// assert_eq!(sum(&[9, 7]), 14);
/// assert_eq!(sum(&[]), 0);
/// ```
#[inline]
pub fn sum(payload: &[u8]) -> u64 {
    payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 0 {
                DOUBLE_TABLE[digit as usize] as u64
            } else {
                digit as u64
            }
        })
        .sum()
}

/// Returns true if `check_digit` is consistent with `payload`.
///
/// # Example
///
/// ```
/// use cc_numbers::luhn::verify;
///
/// let payload = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(verify(&payload, 1));
/// assert!(!verify(&payload, 2));
/// ```
#[inline]
pub fn verify(payload: &[u8], check_digit: u8) -> bool {
    (sum(payload) + check_digit as u64) % 10 == 0
}

/// Computes the check digit (0-9) that makes `payload` verify.
///
/// # Example
///
/// ```
/// use cc_numbers::luhn::check_digit;
///
/// let payload = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0];
/// assert_eq!(check_digit(&payload), 5);
/// ```
#[inline]
pub fn check_digit(payload: &[u8]) -> u8 {
    ((sum(payload) % 10) * 9 % 10) as u8
}

/// Validates a full number whose last digit is the check digit.
///
/// Empty input is invalid.
///
/// ```
/// use cc_numbers::luhn::validate;
///
/// assert!(validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
/// assert!(!validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    match digits.split_last() {
        Some((&check, payload)) => verify(payload, check),
        None => false,
    }
}
