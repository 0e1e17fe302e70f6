//! One-time password generation for the reset flow.

use rand::Rng;

/// Number of digits in a reset code.
pub const OTP_LENGTH: usize = 6;

/// Minutes a reset code stays valid after issuing.
pub const OTP_TTL_MINUTES: i64 = 15;

/// Generate a random numeric code of [`OTP_LENGTH`] digits.
///
/// Leading zeros are allowed, so the result is always exactly six characters.
pub fn generate_otp() -> String {
    let mut rng = rand::rng();
    (0..OTP_LENGTH)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_is_six_digits() {
        for _ in 0..100 {
            let otp = generate_otp();
            assert_eq!(otp.len(), OTP_LENGTH);
            assert!(
                otp.chars().all(|c| c.is_ascii_digit()),
                "OTP must contain only digits, got {otp}"
            );
        }
    }

    #[test]
    fn test_otps_vary() {
        // 100 draws from a space of 10^6; a full collision set would mean a
        // broken generator.
        let codes: std::collections::HashSet<String> = (0..100).map(|_| generate_otp()).collect();
        assert!(codes.len() > 1, "generator must not return a constant");
    }
}
