//! # Vigenère Analysis Library
//!
//! This library implements the Vigenère cipher together with the classic
//! statistical attacks that break it for German text.
//!
//! ## Capabilities
//!
//! - **Transform** - Encode and decode text with case and punctuation preserved
//! - **Key length** - Index of coincidence ranking of candidate key lengths
//! - **Key recovery** - Chi-squared Caesar analysis, one key letter per column
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{FrequencyProfile, Vigenere};
//!
//! let profile = FrequencyProfile::german();
//! let cipher = Vigenere::new(profile.alphabet().clone());
//!
//! let encoded = cipher.encode("Streng geheime Nachricht!", "WALD")?;
//! assert_eq!(cipher.decode(&encoded, "WALD")?, "Streng geheime Nachricht!");
//! # Ok::<(), vigenere_analysis::VigenereError>(())
//! ```
//!
//! ## Profiles
//!
//! Two German letter frequency profiles ship with the crate: the 26-letter
//! profile for text whose umlauts were transliterated (AE, OE, UE, SS) and a
//! 27-letter profile that keeps ẞ as a letter of its own. Custom languages
//! plug in through [`FrequencyProfile::from_table`].

// Public modules
pub mod alphabet;
pub mod cipher;
pub mod coincidence;
pub mod error;
pub mod recovery;
pub mod tableau;
pub mod utils;

// Re-exports for easy access
pub use alphabet::{Alphabet, FrequencyProfile};
pub use cipher::Vigenere;
pub use coincidence::{
    average_index_of_coincidence, index_of_coincidence, key_length_candidates,
    rank_key_lengths, KeyLengthCandidate, DEFAULT_LENGTH_RATIO,
};
pub use error::{Result, VigenereError};
pub use recovery::{recover_key, recover_shift};
pub use tableau::Tableau;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
