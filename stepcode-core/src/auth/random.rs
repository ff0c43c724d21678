//! Cryptographically secure randomness
//!
//! Secret issuing and recovery codes draw bytes through the [`Randomizer`]
//! trait so that an unavailable entropy source is an error value rather
//! than a panic.

use crate::error::OtpError;
use rand::distributions::Uniform;
use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use tracing::error;

/// Source of secure random bytes
pub trait Randomizer {
    /// Fill `dest` entirely with random bytes
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), OtpError>;
}

/// Randomizer backed by the operating system CSPRNG
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandomizer;

impl Randomizer for OsRandomizer {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), OtpError> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            error!("OS random source failed: {}", e);
            OtpError::RandomnessUnavailable
        })
    }
}

/// Adapts a [`Randomizer`] to [`RngCore`] so `rand` distributions can
/// draw from it
///
/// `RngCore::fill_bytes` cannot fail, so the first error is kept and every
/// later draw is zero-filled. Callers must check [`RandomizerRng::finish`].
pub struct RandomizerRng<'a, R: ?Sized> {
    inner: &'a mut R,
    failure: Option<OtpError>,
}

impl<'a, R: Randomizer + ?Sized> RandomizerRng<'a, R> {
    pub fn new(inner: &'a mut R) -> Self {
        Self {
            inner,
            failure: None,
        }
    }

    /// Hand back `value`, or the first error the randomizer reported
    pub fn finish<T>(self, value: T) -> Result<T, OtpError> {
        match self.failure {
            Some(e) => Err(e),
            None => Ok(value),
        }
    }
}

impl<R: Randomizer + ?Sized> RngCore for RandomizerRng<'_, R> {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if self.failure.is_some() {
            dest.fill(0);
            return;
        }
        if let Err(e) = Randomizer::fill_bytes(&mut *self.inner, dest) {
            dest.fill(0);
            self.failure = Some(e);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        Randomizer::fill_bytes(&mut *self.inner, dest).map_err(rand::Error::new)
    }
}

/// Pick `count` characters uniformly from `alphabet`
pub fn sample_chars<R: Randomizer + ?Sized>(
    rng: &mut R,
    alphabet: &[char],
    count: usize,
) -> Result<String, OtpError> {
    if alphabet.is_empty() {
        return Err(OtpError::MissingArgument { field: "alphabet" });
    }

    let index = Uniform::new(0, alphabet.len());
    let mut rng = RandomizerRng::new(rng);
    let out: String = (0..count).map(|_| alphabet[rng.sample(index)]).collect();

    rng.finish(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed byte sequence
    struct Scripted(Vec<u8>);

    impl Randomizer for Scripted {
        fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), OtpError> {
            for slot in dest.iter_mut() {
                *slot = self.0.remove(0);
            }
            Ok(())
        }
    }

    #[test]
    fn test_os_randomizer_fills_buffer() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        OsRandomizer.fill_bytes(&mut a).unwrap();
        OsRandomizer.fill_bytes(&mut b).unwrap();
        assert_ne!(a, b);
    }

    struct Broken;

    impl Randomizer for Broken {
        fn fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), OtpError> {
            Err(OtpError::RandomnessUnavailable)
        }
    }

    #[test]
    fn test_sample_chars_zero_bytes_pick_first_char() {
        let digits: Vec<char> = "0123456789".chars().collect();
        let mut rng = Scripted(vec![0; 64]);
        let sampled = sample_chars(&mut rng, &digits, 3).unwrap();
        assert_eq!(sampled, "000");
    }

    #[test]
    fn test_sample_chars_large_alphabet() {
        // More characters than a single byte can index
        let alphabet: Vec<char> = (0x4E00u32..0x4E00 + 300)
            .filter_map(char::from_u32)
            .collect();
        assert_eq!(alphabet.len(), 300);

        let sampled = sample_chars(&mut OsRandomizer, &alphabet, 64).unwrap();
        assert_eq!(sampled.chars().count(), 64);
        assert!(sampled.chars().all(|c| alphabet.contains(&c)));
    }

    #[test]
    fn test_sample_chars_reports_randomizer_failure() {
        let digits: Vec<char> = "0123456789".chars().collect();
        let result = sample_chars(&mut Broken, &digits, 4);
        assert_eq!(result.unwrap_err(), OtpError::RandomnessUnavailable);
    }

    #[test]
    fn test_adapter_try_fill_bytes_propagates() {
        let mut broken = Broken;
        let mut rng = RandomizerRng::new(&mut broken);
        assert!(rng.try_fill_bytes(&mut [0u8; 4]).is_err());
    }

    #[test]
    fn test_sample_chars_empty_alphabet() {
        let mut rng = Scripted(vec![]);
        assert!(sample_chars(&mut rng, &[], 4).is_err());
    }
}
