//! Vigenère cipher over a configurable alphabet

use crate::alphabet::{fold_lower, Alphabet};
use crate::error::{Result, VigenereError};
use crate::tableau::Tableau;

/// Polyalphabetic substitution cipher with a periodic key.
///
/// The cipher owns its alphabet and builds the substitution matrix once.
/// Text operations preserve case and pass symbols outside the alphabet
/// through unchanged, without consuming a key symbol for them.
#[derive(Debug, Clone)]
pub struct Vigenere {
    alphabet: Alphabet,
    tableau: Tableau,
}

impl Vigenere {
    /// Creates a cipher for the given alphabet.
    pub fn new(alphabet: Alphabet) -> Self {
        let tableau = Tableau::new(&alphabet);
        Self { alphabet, tableau }
    }

    /// The alphabet this cipher substitutes over
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encodes a single symbol with a single key symbol.
    ///
    /// Both symbols are accepted in either case; the result mirrors the
    /// case of the plaintext symbol.
    pub fn encode_symbol(&self, plain: char, key: char) -> Result<char> {
        let row = self
            .alphabet
            .position(plain)
            .ok_or(VigenereError::OutOfAlphabet(plain))?;
        let column = self
            .alphabet
            .position(key)
            .ok_or(VigenereError::OutOfAlphabet(key))?;

        let encoded = self.tableau.cell(row, column);
        Ok(if plain.is_lowercase() {
            fold_lower(encoded)
        } else {
            encoded
        })
    }

    /// Decodes a single symbol with a single key symbol.
    ///
    /// The ciphertext letter is looked up in the key's row of the
    /// substitution matrix; its column is the plaintext position.
    pub fn decode_symbol(&self, cipher: char, key: char) -> Result<char> {
        let cipher_position = self
            .alphabet
            .position(cipher)
            .ok_or(VigenereError::OutOfAlphabet(cipher))?;
        let row = self
            .alphabet
            .position(key)
            .ok_or(VigenereError::OutOfAlphabet(key))?;

        let target = self.alphabet.letters()[cipher_position];
        let column = self
            .tableau
            .row(row)
            .iter()
            .position(|&cell| cell == target)
            .ok_or(VigenereError::OutOfAlphabet(cipher))?;

        let decoded = self.alphabet.letters()[column];
        Ok(if cipher.is_lowercase() {
            fold_lower(decoded)
        } else {
            decoded
        })
    }

    /// Encodes text with a periodic key.
    ///
    /// Symbols outside the alphabet are copied through unchanged and do
    /// not advance the key stream, so punctuation and spacing survive a
    /// round trip untouched.
    ///
    /// # Arguments
    ///
    /// * `text` - The text to encode.
    /// * `key` - The key; its symbols must belong to the alphabet where used.
    pub fn encode(&self, text: &str, key: &str) -> Result<String> {
        let key_symbols = self.key_symbols(key)?;
        let mut result = String::with_capacity(text.len());
        let mut non_alphabetic = 0usize;

        for (index, symbol) in text.chars().enumerate() {
            if self.alphabet.contains(symbol) {
                let key_symbol = key_symbols[(index - non_alphabetic) % key_symbols.len()];
                result.push(self.encode_symbol(symbol, key_symbol)?);
            } else {
                non_alphabetic += 1;
                result.push(symbol);
            }
        }

        Ok(result)
    }

    /// Decodes text with a periodic key, the inverse of [`Vigenere::encode`].
    pub fn decode(&self, text: &str, key: &str) -> Result<String> {
        let key_symbols = self.key_symbols(key)?;
        let mut result = String::with_capacity(text.len());
        let mut non_alphabetic = 0usize;

        for (index, symbol) in text.chars().enumerate() {
            if self.alphabet.contains(symbol) {
                let key_symbol = key_symbols[(index - non_alphabetic) % key_symbols.len()];
                result.push(self.decode_symbol(symbol, key_symbol)?);
            } else {
                non_alphabetic += 1;
                result.push(symbol);
            }
        }

        Ok(result)
    }

    /// Key symbols are validated lazily, one by one, as the key stream
    /// reaches them; only emptiness is rejected up front.
    fn key_symbols(&self, key: &str) -> Result<Vec<char>> {
        let symbols: Vec<char> = key.chars().collect();
        if symbols.is_empty() {
            return Err(VigenereError::EmptyKey);
        }
        Ok(symbols)
    }
}
