//! Index of coincidence and key length ranking

use crate::alphabet::{Alphabet, FrequencyProfile};
use crate::error::{Result, VigenereError};
use crate::utils;

/// Default ratio of clear text length to the largest key length worth
/// trying; a 1000-letter text is searched up to length 9.
pub const DEFAULT_LENGTH_RATIO: usize = 100;

/// Calculates the index of coincidence of clear text.
///
/// The IC is the probability that two distinct positions hold the same
/// letter. Clear German text sits near 0.078; text encrypted with a
/// polyalphabetic key flattens towards 1/N.
///
/// # Arguments
///
/// * `alphabet` - The alphabet to count over.
/// * `clear_text` - Normalized text; every symbol must be a member.
pub fn index_of_coincidence(alphabet: &Alphabet, clear_text: &str) -> Result<f64> {
    let counts = utils::letter_counts(alphabet, clear_text)?;
    let total: u32 = counts.iter().sum();

    if total < 2 {
        return Err(VigenereError::TextTooShort {
            letters: total as usize,
            required: 2,
        });
    }

    let numerator: f64 = counts
        .iter()
        .map(|&count| count as f64 * count.saturating_sub(1) as f64)
        .sum();
    let denominator = total as f64 * (total - 1) as f64;

    Ok(numerator / denominator)
}

/// Average index of coincidence over interleaved groups.
///
/// When the group count matches the key length of the encryption, every
/// group is a Caesar-shifted slice of clear text and the average comes
/// out near the clear text IC; other counts stay flat.
pub fn average_index_of_coincidence(
    alphabet: &Alphabet,
    clear_text: &str,
    group_count: usize,
) -> Result<f64> {
    if group_count == 0 {
        return Err(VigenereError::EmptyKey);
    }

    let groups = utils::interleaved_groups(clear_text, group_count);
    let mut total = 0.0;
    for group in &groups {
        total += index_of_coincidence(alphabet, group)?;
    }

    Ok(total / groups.len() as f64)
}

/// A candidate key length with its distance from the expected IC
#[derive(Debug, Clone, PartialEq)]
pub struct KeyLengthCandidate {
    pub length: usize,
    pub deviation: f64,
}

/// Ranks candidate key lengths by average IC deviation.
///
/// Lengths 1 up to (but excluding) `letters / ratio` are scored by how
/// far their average group IC falls from the profile's expected IC, then
/// sorted ascending; ties keep the shorter length first. The result is
/// empty when the text has too few letters for any candidate.
///
/// # Arguments
///
/// * `profile` - The language profile of the suspected clear text.
/// * `text` - Raw ciphertext; it is normalized internally.
/// * `ratio` - Largest key length tried is `letters / ratio` (exclusive).
pub fn key_length_candidates(
    profile: &FrequencyProfile,
    text: &str,
    ratio: usize,
) -> Result<Vec<KeyLengthCandidate>> {
    if ratio == 0 {
        return Err(VigenereError::InvalidLengthRatio);
    }

    let clear_text = profile.alphabet().normalize(text);
    let upper_bound = clear_text.chars().count() / ratio;

    let mut candidates = Vec::new();
    for length in 1..upper_bound {
        let average = average_index_of_coincidence(profile.alphabet(), &clear_text, length)?;
        let deviation = (profile.expected_ic() - average).abs();
        candidates.push(KeyLengthCandidate { length, deviation });
    }

    candidates.sort_by(|a, b| {
        a.deviation
            .partial_cmp(&b.deviation)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(candidates)
}

/// Ranks candidate key lengths at the default ratio, best guess first.
pub fn rank_key_lengths(profile: &FrequencyProfile, text: &str) -> Result<Vec<usize>> {
    let candidates = key_length_candidates(profile, text, DEFAULT_LENGTH_RATIO)?;
    Ok(candidates
        .into_iter()
        .map(|candidate| candidate.length)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::Vigenere;
    use crate::fixtures::GERMAN_SAMPLE;

    #[test]
    fn test_ic_of_repeated_letter_is_one() {
        let profile = FrequencyProfile::german();
        let ic = index_of_coincidence(profile.alphabet(), "AAAA").unwrap();
        assert_eq!(ic, 1.0);
    }

    #[test]
    fn test_ic_of_uniform_text() {
        let profile = FrequencyProfile::german();
        let uniform: String = profile
            .alphabet()
            .letters()
            .iter()
            .collect::<String>()
            .repeat(40);

        let ic = index_of_coincidence(profile.alphabet(), &uniform).unwrap();

        // k copies of every letter give exactly (k - 1) / (Nk - 1)
        assert!((ic - 39.0 / 1039.0).abs() < 1e-12);
        assert!((ic - 1.0 / 26.0).abs() < 2e-3);
    }

    #[test]
    fn test_ic_needs_two_letters() {
        let profile = FrequencyProfile::german();
        let result = index_of_coincidence(profile.alphabet(), "A");
        assert!(matches!(
            result,
            Err(VigenereError::TextTooShort {
                letters: 1,
                required: 2
            })
        ));
    }

    #[test]
    fn test_ic_rejects_foreign_symbols() {
        let profile = FrequencyProfile::german();
        let result = index_of_coincidence(profile.alphabet(), "AÄ");
        assert!(matches!(result, Err(VigenereError::OutOfAlphabet('Ä'))));
    }

    #[test]
    fn test_average_ic_over_groups() {
        let profile = FrequencyProfile::german();
        let average =
            average_index_of_coincidence(profile.alphabet(), "ABABAB", 2).unwrap();
        // Groups are AAA and BBB, each with IC 1
        assert_eq!(average, 1.0);
    }

    #[test]
    fn test_average_ic_rejects_zero_groups() {
        let profile = FrequencyProfile::german();
        let result = average_index_of_coincidence(profile.alphabet(), "ABABAB", 0);
        assert!(matches!(result, Err(VigenereError::EmptyKey)));
    }

    #[test]
    fn test_average_ic_propagates_degenerate_groups() {
        let profile = FrequencyProfile::german();
        let result = average_index_of_coincidence(profile.alphabet(), "ABAB", 3);
        assert!(matches!(result, Err(VigenereError::TextTooShort { .. })));
    }

    #[test]
    fn test_candidates_reject_zero_ratio() {
        let profile = FrequencyProfile::german();
        let result = key_length_candidates(&profile, GERMAN_SAMPLE, 0);
        assert!(matches!(result, Err(VigenereError::InvalidLengthRatio)));
    }

    #[test]
    fn test_short_text_has_no_candidates() {
        let profile = FrequencyProfile::german();
        let candidates =
            key_length_candidates(&profile, "Viel zu kurz", DEFAULT_LENGTH_RATIO).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_true_key_length_ranks_first() {
        let profile = FrequencyProfile::german();
        let cipher = Vigenere::new(profile.alphabet().clone());
        let encrypted = cipher.encode(GERMAN_SAMPLE, "WALD").unwrap();

        let candidates =
            key_length_candidates(&profile, &encrypted, DEFAULT_LENGTH_RATIO).unwrap();

        // 678 letters at ratio 100 leave candidate lengths 1 through 5
        assert_eq!(candidates.len(), 5);
        assert_eq!(candidates[0].length, 4);
        for window in candidates.windows(2) {
            assert!(window[0].deviation <= window[1].deviation);
        }
    }

    #[test]
    fn test_rank_key_lengths_maps_to_lengths() {
        let profile = FrequencyProfile::german();
        let cipher = Vigenere::new(profile.alphabet().clone());
        let encrypted = cipher.encode(GERMAN_SAMPLE, "WALD").unwrap();

        let ranked = rank_key_lengths(&profile, &encrypted).unwrap();
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0], 4);
    }
}
