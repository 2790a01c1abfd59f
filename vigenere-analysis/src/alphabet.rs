//! Cipher alphabet and language frequency profile

use std::collections::{HashMap, HashSet};

use crate::error::{Result, VigenereError};

const LOWER_ESZETT: char = 'ß';
const UPPER_ESZETT: char = 'ẞ';

/// Expected index of coincidence for German clear text
const GERMAN_EXPECTED_IC: f64 = 0.078;

/// German letter frequencies over the 26-letter alphabet
/// (umlauts and ß transliterated to AE/OE/UE/SS beforehand)
const GERMAN_FREQUENCIES: [(char, f64); 26] = [
    ('A', 0.0651),
    ('B', 0.0189),
    ('C', 0.0306),
    ('D', 0.0508),
    ('E', 0.1741),
    ('F', 0.0166),
    ('G', 0.0301),
    ('H', 0.0476),
    ('I', 0.0755),
    ('J', 0.0027),
    ('K', 0.0121),
    ('L', 0.0344),
    ('M', 0.0253),
    ('N', 0.0978),
    ('O', 0.0251),
    ('P', 0.0079),
    ('Q', 0.0002),
    ('R', 0.0700),
    ('S', 0.0789),
    ('T', 0.0615),
    ('U', 0.0435),
    ('V', 0.0067),
    ('W', 0.0189),
    ('X', 0.0003),
    ('Y', 0.0004),
    ('Z', 0.0113),
];

/// German letter frequencies over the 27-letter alphabet that keeps
/// ẞ as a letter of its own instead of the SS transliteration
const GERMAN_ESZETT_FREQUENCIES: [(char, f64); 27] = [
    ('A', 0.0651),
    ('B', 0.0189),
    ('C', 0.0306),
    ('D', 0.0508),
    ('E', 0.1740),
    ('F', 0.0166),
    ('G', 0.0301),
    ('H', 0.0476),
    ('I', 0.0755),
    ('J', 0.0027),
    ('K', 0.0121),
    ('L', 0.0344),
    ('M', 0.0253),
    ('N', 0.0978),
    ('O', 0.0251),
    ('P', 0.0079),
    ('Q', 0.0002),
    ('R', 0.0700),
    ('S', 0.0727),
    ('T', 0.0615),
    ('U', 0.0435),
    ('V', 0.0067),
    ('W', 0.0189),
    ('X', 0.0003),
    ('Y', 0.0004),
    ('Z', 0.0113),
    (UPPER_ESZETT, 0.0031),
];

/// Uppercases a single symbol.
///
/// ß maps to the capital ẞ; the Unicode case mapping would expand it
/// to the two-letter "SS" and break the one-symbol contract.
pub(crate) fn fold_upper(symbol: char) -> char {
    if symbol == LOWER_ESZETT {
        UPPER_ESZETT
    } else {
        symbol.to_uppercase().next().unwrap_or(symbol)
    }
}

/// Lowercases a single symbol, with ẞ mapping back to ß.
pub(crate) fn fold_lower(symbol: char) -> char {
    if symbol == UPPER_ESZETT {
        LOWER_ESZETT
    } else {
        symbol.to_lowercase().next().unwrap_or(symbol)
    }
}

/// Ordered, duplicate-free set of uppercase cipher letters.
///
/// Both cases of every letter resolve to the same position, so lookups
/// never need a separate case fold. The letter order is fixed at
/// construction time and defines the substitution matrix layout.
#[derive(Debug, Clone)]
pub struct Alphabet {
    letters: Vec<char>,
    positions: HashMap<char, usize>,
}

impl Alphabet {
    /// Creates an alphabet from the given letters, uppercased in order.
    ///
    /// # Arguments
    ///
    /// * `letters` - The letters of the alphabet, in substitution order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vigenere_analysis::Alphabet;
    ///
    /// let alphabet = Alphabet::new(&['a', 'b', 'c'])?;
    /// assert_eq!(alphabet.letters(), &['A', 'B', 'C']);
    /// # Ok::<(), vigenere_analysis::VigenereError>(())
    /// ```
    pub fn new(letters: &[char]) -> Result<Self> {
        if letters.is_empty() {
            return Err(VigenereError::InvalidProfile(
                "alphabet must not be empty".to_string(),
            ));
        }

        let folded: Vec<char> = letters.iter().map(|&letter| fold_upper(letter)).collect();

        let mut seen = HashSet::new();
        for &letter in &folded {
            if !seen.insert(letter) {
                return Err(VigenereError::InvalidProfile(format!(
                    "duplicate letter '{}' in alphabet",
                    letter
                )));
            }
        }

        Ok(Self::from_folded(folded))
    }

    /// Builds the alphabet from letters that are already uppercase and
    /// duplicate-free.
    fn from_folded(letters: Vec<char>) -> Self {
        let mut positions = HashMap::with_capacity(letters.len() * 2);
        for (index, &letter) in letters.iter().enumerate() {
            positions.insert(letter, index);
            positions.insert(fold_lower(letter), index);
        }

        Self { letters, positions }
    }

    /// Number of letters in the alphabet
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns true if the alphabet has no letters
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The uppercase letters in substitution order
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Returns the letter at the given position, if any
    pub fn letter(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    /// Returns the position of a symbol, accepting either case
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.positions.get(&symbol).copied()
    }

    /// Returns true if the symbol belongs to the alphabet in either case
    pub fn contains(&self, symbol: char) -> bool {
        self.positions.contains_key(&symbol)
    }

    /// Reduces text to its alphabet members, uppercased.
    ///
    /// Whitespace, punctuation and foreign letters are dropped entirely;
    /// the result is the clear text the statistics operate on.
    pub fn normalize(&self, text: &str) -> String {
        text.chars()
            .filter_map(|symbol| self.position(symbol).map(|index| self.letters[index]))
            .collect()
    }
}

/// Expected relative letter frequencies of a language over an [`Alphabet`].
///
/// The profile drives both halves of the cryptanalysis: the expected
/// index of coincidence ranks candidate key lengths, the per-letter
/// frequencies feed the chi-squared shift recovery.
#[derive(Debug, Clone)]
pub struct FrequencyProfile {
    alphabet: Alphabet,
    frequencies: Vec<f64>,
    expected_ic: f64,
}

impl FrequencyProfile {
    /// German profile over the 26-letter alphabet.
    ///
    /// Umlauts and ß are expected to be transliterated (AE, OE, UE, SS)
    /// before encryption; symbols outside A-Z pass through untouched.
    pub fn german() -> Self {
        Self::from_static(&GERMAN_FREQUENCIES)
    }

    /// German profile over the 27-letter alphabet that includes ẞ.
    pub fn german_with_eszett() -> Self {
        Self::from_static(&GERMAN_ESZETT_FREQUENCIES)
    }

    fn from_static(table: &[(char, f64)]) -> Self {
        let letters: Vec<char> = table.iter().map(|&(letter, _)| letter).collect();
        let frequencies: Vec<f64> = table.iter().map(|&(_, frequency)| frequency).collect();

        Self {
            alphabet: Alphabet::from_folded(letters),
            frequencies,
            expected_ic: GERMAN_EXPECTED_IC,
        }
    }

    /// Creates a validated profile from a frequency table.
    ///
    /// The alphabet is derived from the table keys, uppercased and sorted,
    /// so the caller may list letters in any order.
    ///
    /// # Arguments
    ///
    /// * `table` - Pairs of letter and expected relative frequency.
    /// * `expected_ic` - The language's expected index of coincidence.
    pub fn from_table(table: &[(char, f64)], expected_ic: f64) -> Result<Self> {
        if table.is_empty() {
            return Err(VigenereError::InvalidProfile(
                "frequency table is empty".to_string(),
            ));
        }

        let mut entries: Vec<(char, f64)> = table
            .iter()
            .map(|&(letter, frequency)| (fold_upper(letter), frequency))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        for window in entries.windows(2) {
            if window[0].0 == window[1].0 {
                return Err(VigenereError::InvalidProfile(format!(
                    "duplicate letter '{}' in frequency table",
                    window[0].0
                )));
            }
        }

        for &(letter, frequency) in &entries {
            if frequency <= 0.0 {
                return Err(VigenereError::InvalidProfile(format!(
                    "non-positive frequency for letter '{}'",
                    letter
                )));
            }
        }

        let letters: Vec<char> = entries.iter().map(|&(letter, _)| letter).collect();
        let frequencies: Vec<f64> = entries.iter().map(|&(_, frequency)| frequency).collect();

        Ok(Self {
            alphabet: Alphabet::from_folded(letters),
            frequencies,
            expected_ic,
        })
    }

    /// The alphabet the frequencies are defined over
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Expected relative frequency of the letter at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the alphabet.
    pub fn frequency(&self, index: usize) -> f64 {
        self.frequencies[index]
    }

    /// All expected frequencies, parallel to [`Alphabet::letters`]
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Expected index of coincidence for clear text in this language
    pub fn expected_ic(&self) -> f64 {
        self.expected_ic
    }
}
