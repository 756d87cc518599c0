/// Digits in an Indian mobile number.
pub const MOBILE_LEN: usize = 10;
/// Digits in a one-time password.
pub const OTP_LEN: usize = 6;
/// Digits in a postal PIN code.
pub const PINCODE_LEN: usize = 6;

/// Strip everything but ASCII digits and clamp to `max_len`.
///
/// Applied to numeric inputs as the user types, so the field can never
/// hold a value the validators below would reject for its characters.
pub fn sanitize_digits(input: &str, max_len: usize) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max_len)
        .collect()
}

fn is_exact_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| c.is_ascii_digit())
}

/// Exactly 10 digits.
pub fn is_valid_mobile(s: &str) -> bool {
    is_exact_digits(s, MOBILE_LEN)
}

/// Exactly 6 digits.
pub fn is_valid_otp(s: &str) -> bool {
    is_exact_digits(s, OTP_LEN)
}

/// Exactly 6 digits.
pub fn is_valid_pincode(s: &str) -> bool {
    is_exact_digits(s, PINCODE_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_non_digits() {
        assert_eq!(sanitize_digits("98-76 54(32)10", MOBILE_LEN), "9876543210");
        assert_eq!(sanitize_digits("abc", MOBILE_LEN), "");
        assert_eq!(sanitize_digits("", MOBILE_LEN), "");
    }

    #[test]
    fn test_sanitize_clamps_length() {
        assert_eq!(sanitize_digits("123456789012345", MOBILE_LEN), "1234567890");
        assert_eq!(sanitize_digits("1234567", OTP_LEN), "123456");
    }

    #[test]
    fn test_mobile_validation() {
        assert!(is_valid_mobile("9876543210"));
        assert!(!is_valid_mobile("987654321"));
        assert!(!is_valid_mobile("98765432100"));
        assert!(!is_valid_mobile("987654321O")); // letter O, not zero
        assert!(!is_valid_mobile(""));
    }

    #[test]
    fn test_otp_validation() {
        assert!(is_valid_otp("000000"));
        assert!(is_valid_otp("123456"));
        assert!(!is_valid_otp("12345"));
        assert!(!is_valid_otp("1234567"));
        assert!(!is_valid_otp("12 456"));
    }

    #[test]
    fn test_pincode_validation() {
        assert!(is_valid_pincode("400001"));
        assert!(!is_valid_pincode("4000"));
        assert!(!is_valid_pincode("4000012"));
    }
}
