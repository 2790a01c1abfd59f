//! Key recovery through chi-squared frequency analysis

use crate::alphabet::FrequencyProfile;
use crate::error::{Result, VigenereError};
use crate::utils;

/// Recovers the Caesar shift of a slice of ciphertext.
///
/// Every possible shift is scored with the chi-squared statistic against
/// the profile's expected letter counts; the shift with the smallest
/// statistic wins, ties going to the smaller shift. The returned letter
/// is the key symbol that produced the shift.
///
/// # Arguments
///
/// * `profile` - Expected letter frequencies of the clear text language.
/// * `clear_slice` - Normalized ciphertext; every symbol must be a member.
pub fn recover_shift(profile: &FrequencyProfile, clear_slice: &str) -> Result<char> {
    let alphabet = profile.alphabet();
    let observed = utils::letter_counts(alphabet, clear_slice)?;
    let total: u32 = observed.iter().sum();

    if total == 0 {
        return Err(VigenereError::TextTooShort {
            letters: 0,
            required: 1,
        });
    }

    let size = alphabet.len();
    let total = total as f64;
    let mut best_shift = 0usize;
    let mut best_chi_squared = f64::INFINITY;

    for shift in 0..size {
        let mut chi_squared = 0.0;
        for index in 0..size {
            let expected = total * profile.frequency(index);
            let observed_count = observed[(index + shift) % size] as f64;
            chi_squared += (expected - observed_count).powi(2) / expected;
        }

        if chi_squared < best_chi_squared {
            best_chi_squared = chi_squared;
            best_shift = shift;
        }
    }

    Ok(alphabet.letters()[best_shift])
}

/// Recovers the full key for a known key length.
///
/// The ciphertext is split into one interleaved column per key position;
/// each column is a Caesar encryption whose shift is recovered on its
/// own, and the shifts concatenate to the key.
///
/// # Arguments
///
/// * `profile` - Expected letter frequencies of the clear text language.
/// * `text` - Raw ciphertext; it is normalized internally.
/// * `key_length` - The assumed key length; must be greater than zero.
pub fn recover_key(
    profile: &FrequencyProfile,
    text: &str,
    key_length: usize,
) -> Result<String> {
    if key_length == 0 {
        return Err(VigenereError::EmptyKey);
    }

    let clear_text = profile.alphabet().normalize(text);
    let groups = utils::interleaved_groups(&clear_text, key_length);

    let mut key = String::with_capacity(key_length);
    for group in &groups {
        key.push(recover_shift(profile, group)?);
    }

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::Vigenere;
    use crate::fixtures::GERMAN_SAMPLE;

    /// Text whose letter counts follow the profile exactly, shifted by
    /// the given amount.
    fn shifted_sample(profile: &FrequencyProfile, shift: usize) -> String {
        let alphabet = profile.alphabet();
        let mut text = String::new();
        for index in 0..alphabet.len() {
            let count = (profile.frequency(index) * 5000.0).round() as usize;
            let letter = alphabet.letters()[(index + shift) % alphabet.len()];
            for _ in 0..count {
                text.push(letter);
            }
        }
        text
    }

    #[test]
    fn test_recover_shift_from_ideal_counts() {
        let profile = FrequencyProfile::german();
        let shifted = shifted_sample(&profile, 7);
        assert_eq!(recover_shift(&profile, &shifted).unwrap(), 'H');
    }

    #[test]
    fn test_recover_zero_shift() {
        let profile = FrequencyProfile::german();
        let unshifted = shifted_sample(&profile, 0);
        assert_eq!(recover_shift(&profile, &unshifted).unwrap(), 'A');
    }

    #[test]
    fn test_recover_shift_rejects_empty_slice() {
        let profile = FrequencyProfile::german();
        let result = recover_shift(&profile, "");
        assert!(matches!(
            result,
            Err(VigenereError::TextTooShort { letters: 0, .. })
        ));
    }

    #[test]
    fn test_recover_key_from_encrypted_sample() {
        let profile = FrequencyProfile::german();
        let cipher = Vigenere::new(profile.alphabet().clone());
        let encrypted = cipher.encode(GERMAN_SAMPLE, "WALD").unwrap();

        assert_eq!(recover_key(&profile, &encrypted, 4).unwrap(), "WALD");
    }

    #[test]
    fn test_recover_key_rejects_zero_length() {
        let profile = FrequencyProfile::german();
        let result = recover_key(&profile, GERMAN_SAMPLE, 0);
        assert!(matches!(result, Err(VigenereError::EmptyKey)));
    }

    #[test]
    fn test_recover_key_with_absurd_length_fails() {
        let profile = FrequencyProfile::german();
        // More key positions than letters leaves empty columns
        let result = recover_key(&profile, GERMAN_SAMPLE, 1000);
        assert!(matches!(result, Err(VigenereError::TextTooShort { .. })));
    }
}
