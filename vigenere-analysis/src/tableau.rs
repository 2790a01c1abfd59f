//! Vigenère substitution matrix

use crate::alphabet::Alphabet;

/// Square substitution table over an alphabet of N letters.
///
/// Row `i` is the alphabet rotated left by `i`, so
/// `cell(i, j) == alphabet[(i + j) mod N]`. Encoding reads the cell at
/// (plaintext row, key column); decoding scans the key row for the
/// ciphertext letter. The table is read-only after construction.
#[derive(Debug, Clone)]
pub struct Tableau {
    size: usize,
    rows: Vec<Vec<char>>,
}

impl Tableau {
    /// Builds the full N x N table for the given alphabet.
    pub fn new(alphabet: &Alphabet) -> Self {
        let size = alphabet.len();
        let letters = alphabet.letters();

        let mut rows = Vec::with_capacity(size);
        for row in 0..size {
            let mut cells = Vec::with_capacity(size);
            for column in 0..size {
                cells.push(letters[(row + column) % size]);
            }
            rows.push(cells);
        }

        Self { size, rows }
    }

    /// Side length of the table
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the letter at the given row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is outside the table.
    pub fn cell(&self, row: usize, column: usize) -> char {
        self.rows[row][column]
    }

    /// Returns a full row of the table.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the table.
    pub fn row(&self, index: usize) -> &[char] {
        &self.rows[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::FrequencyProfile;

    #[test]
    fn test_small_tableau_rows() {
        let alphabet = Alphabet::new(&['A', 'B', 'C']).unwrap();
        let tableau = Tableau::new(&alphabet);

        assert_eq!(tableau.size(), 3);
        assert_eq!(tableau.row(0), &['A', 'B', 'C']);
        assert_eq!(tableau.row(1), &['B', 'C', 'A']);
        assert_eq!(tableau.row(2), &['C', 'A', 'B']);
    }

    #[test]
    fn test_first_row_is_the_alphabet() {
        let profile = FrequencyProfile::german();
        let tableau = Tableau::new(profile.alphabet());

        assert_eq!(tableau.row(0), profile.alphabet().letters());
    }

    #[test]
    fn test_tableau_is_symmetric() {
        let profile = FrequencyProfile::german();
        let tableau = Tableau::new(profile.alphabet());

        for row in 0..tableau.size() {
            for column in 0..tableau.size() {
                assert_eq!(tableau.cell(row, column), tableau.cell(column, row));
            }
        }
    }

    #[test]
    fn test_every_row_is_a_permutation() {
        let profile = FrequencyProfile::german_with_eszett();
        let tableau = Tableau::new(profile.alphabet());

        let mut expected: Vec<char> = profile.alphabet().letters().to_vec();
        expected.sort();

        for row in 0..tableau.size() {
            let mut letters: Vec<char> = tableau.row(row).to_vec();
            letters.sort();
            assert_eq!(letters, expected);
        }
    }

    #[test]
    fn test_rows_wrap_around() {
        let profile = FrequencyProfile::german();
        let tableau = Tableau::new(profile.alphabet());

        // Row Z starts at Z and wraps back to the beginning
        assert_eq!(tableau.cell(25, 0), 'Z');
        assert_eq!(tableau.cell(25, 1), 'A');
        assert_eq!(tableau.cell(25, 25), 'Y');
    }
}
