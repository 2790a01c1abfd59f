//! Shared helpers for the statistics modules

use crate::alphabet::Alphabet;
use crate::error::{Result, VigenereError};

/// Splits text into interleaved groups.
///
/// Character `i` goes to group `i mod group_count`, so group `g` holds
/// the characters at positions g, g + count, g + 2 * count, and so on.
/// Under a periodic key this is exactly the partition into characters
/// encrypted with the same key letter. Zero groups yields an empty vector.
pub fn interleaved_groups(clear_text: &str, group_count: usize) -> Vec<String> {
    if group_count == 0 {
        return Vec::new();
    }

    let mut groups = vec![String::new(); group_count];
    for (index, symbol) in clear_text.chars().enumerate() {
        groups[index % group_count].push(symbol);
    }

    groups
}

/// Counts occurrences per alphabet letter, indexed by letter position.
pub(crate) fn letter_counts(alphabet: &Alphabet, clear_text: &str) -> Result<Vec<u32>> {
    let mut counts = vec![0u32; alphabet.len()];

    for symbol in clear_text.chars() {
        let position = alphabet
            .position(symbol)
            .ok_or(VigenereError::OutOfAlphabet(symbol))?;
        counts[position] += 1;
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::FrequencyProfile;

    #[test]
    fn test_interleaved_groups() {
        let groups = interleaved_groups("ABCDEFGH", 3);
        assert_eq!(groups[0], "ADG");
        assert_eq!(groups[1], "BEH");
        assert_eq!(groups[2], "CF");
    }

    #[test]
    fn test_single_group_keeps_everything() {
        let groups = interleaved_groups("ABCDEFGH", 1);
        assert_eq!(groups, vec!["ABCDEFGH".to_string()]);
    }

    #[test]
    fn test_zero_groups() {
        assert!(interleaved_groups("ABC", 0).is_empty());
    }

    #[test]
    fn test_letter_counts() {
        let profile = FrequencyProfile::german();
        let counts = letter_counts(profile.alphabet(), "AaBC").unwrap();

        assert_eq!(counts[0], 2);
        assert_eq!(counts[1], 1);
        assert_eq!(counts[2], 1);
        assert_eq!(counts[3], 0);
    }

    #[test]
    fn test_letter_counts_rejects_foreign_symbols() {
        let profile = FrequencyProfile::german();
        let result = letter_counts(profile.alphabet(), "AÄ");
        assert!(matches!(result, Err(VigenereError::OutOfAlphabet('Ä'))));
    }
}
