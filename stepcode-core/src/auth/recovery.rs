//! Static recovery codes
//!
//! Single-use fallback codes handed to a user when the TOTP device is
//! unavailable. Storing and consuming them is up to the caller.

use crate::auth::random::{sample_chars, OsRandomizer, Randomizer};
use crate::error::OtpError;
use crate::types::RecoveryCodesOptions;
use tracing::{debug, error};

/// Generate recovery codes from the OS random source
///
/// On failure the error is logged and an empty list is returned.
pub fn generate_recovery_codes(options: &RecoveryCodesOptions) -> Vec<String> {
    generate_recovery_codes_with(&mut OsRandomizer, options)
}

/// Same as [`generate_recovery_codes`] with a caller-supplied randomizer
pub fn generate_recovery_codes_with<R: Randomizer + ?Sized>(
    rng: &mut R,
    options: &RecoveryCodesOptions,
) -> Vec<String> {
    match try_generate_recovery_codes(rng, options) {
        Ok(codes) => codes,
        Err(e) => {
            error!("Failed to generate recovery codes: {}", e);
            Vec::new()
        }
    }
}

fn try_generate_recovery_codes<R: Randomizer + ?Sized>(
    rng: &mut R,
    options: &RecoveryCodesOptions,
) -> Result<Vec<String>, OtpError> {
    let alphabet: Vec<char> = match options.charset.as_deref() {
        Some(charset) if !charset.is_empty() => charset.chars().collect(),
        _ => options.kind.alphabet().chars().collect(),
    };

    debug!(
        "Generating {} recovery codes of length {} ({})",
        options.number_of_codes, options.code_length, options.kind
    );

    (0..options.number_of_codes)
        .map(|_| sample_chars(rng, &alphabet, options.code_length))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RecoveryCodeKind, SYMBOLS};

    struct Broken;

    impl Randomizer for Broken {
        fn fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), OtpError> {
            Err(OtpError::RandomnessUnavailable)
        }
    }

    #[test]
    fn test_default_options_give_numeric_codes() {
        let codes = generate_recovery_codes(&RecoveryCodesOptions::default());
        assert_eq!(codes.len(), 10);
        for code in &codes {
            assert_eq!(code.len(), 8);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_kind_alphabets() {
        let upper = generate_recovery_codes(&RecoveryCodesOptions::new(
            RecoveryCodeKind::Uppercase,
            12,
            3,
        ));
        assert!(upper.iter().flat_map(|c| c.chars()).all(|c| c.is_ascii_uppercase()));

        let symbols = generate_recovery_codes(&RecoveryCodesOptions::new(
            RecoveryCodeKind::Symbols,
            12,
            3,
        ));
        assert!(symbols.iter().flat_map(|c| c.chars()).all(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn test_custom_charset_wins() {
        let options = RecoveryCodesOptions {
            charset: Some("xy".to_string()),
            ..RecoveryCodesOptions::new(RecoveryCodeKind::Numbers, 16, 2)
        };
        let codes = generate_recovery_codes(&options);
        assert_eq!(codes.len(), 2);
        assert!(codes.iter().flat_map(|c| c.chars()).all(|c| c == 'x' || c == 'y'));
    }

    #[test]
    fn test_custom_charset_larger_than_a_byte() {
        let charset: String = (0x4E00u32..0x4E00 + 300)
            .filter_map(char::from_u32)
            .collect();
        let options = RecoveryCodesOptions {
            charset: Some(charset.clone()),
            ..RecoveryCodesOptions::new(RecoveryCodeKind::Numbers, 6, 4)
        };

        let codes = generate_recovery_codes(&options);
        assert_eq!(codes.len(), 4);
        for code in &codes {
            assert_eq!(code.chars().count(), 6);
            assert!(code.chars().all(|c| charset.contains(c)));
        }
    }

    #[test]
    fn test_zero_codes() {
        let codes = generate_recovery_codes(&RecoveryCodesOptions::new(
            RecoveryCodeKind::Numbers,
            8,
            0,
        ));
        assert!(codes.is_empty());
    }

    #[test]
    fn test_randomizer_failure_yields_empty_list() {
        let codes = generate_recovery_codes_with(&mut Broken, &RecoveryCodesOptions::default());
        assert!(codes.is_empty());
    }
}
