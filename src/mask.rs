//! Masking helpers for displaying and logging card numbers.
//!
//! Showing the first six and last four digits is acceptable in most logs;
//! customer-facing output should show only the last four. The full number
//! never appears in `Debug` or `Display` output of this crate's types.

/// Masks a card number showing only the last 4 digits.
///
/// Non-digit characters are ignored. Format: `****-****-****-1234`.
///
/// ```
/// use cc_numbers::mask::mask_number;
///
/// assert_eq!(mask_number("4111 1111 1111 1111"), "****-****-****-1111");
/// ```
pub fn mask_number(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + (len / 4));

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    // Separator before last 4 only when the masked part fills whole groups
    if masked_count % 4 == 0 {
        result.push('-');
    }

    result.extend(&digits[len - 4..]);
    result
}

/// Masks a card number keeping the IIN (first 6) and last 4 digits.
///
/// Format: `411111******1111`. Numbers of 10 digits or fewer fall back to
/// [`mask_number`].
///
/// ```
/// use cc_numbers::mask::mask_with_iin;
///
/// assert_eq!(mask_with_iin("378282246310005"), "378282*****0005");
/// ```
pub fn mask_with_iin(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 10 {
        return mask_number(input);
    }

    let mut result = String::with_capacity(len);
    result.extend(&digits[..6]);
    result.extend(std::iter::repeat('*').take(len - 10));
    result.extend(&digits[len - 4..]);
    result
}

/// Extracts the last 4 digits, or an empty string if there are fewer.
pub fn last_four(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 4 {
        digits[digits.len() - 4..].iter().collect()
    } else {
        String::new()
    }
}
