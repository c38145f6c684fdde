use crate::codec::code_of;
use crate::errors::EnigmaCryptoError;
use crate::matrix::{Matrix, Vector};
use crate::preset::alphabet::ALPHABET_LEN;

use itertools::Itertools;

use rand::prelude::{Rng, SeedableRng, SliceRandom, StdRng};

use serde::{Deserialize, Serialize};

/// A bijection on symbol codes, stored in array form: `mapping[i]` is the
/// image of code `i`.
///
/// Every `Permutation` is equivalent to a 27×27 permutation matrix (see
/// [`Permutation::to_matrix`]), and the cipher entry points accept keys in the
/// matrix form. The array form is what key generation and composition work
/// with: applying the permutation is a single index lookup, and the inverse
/// is the reversed lookup table rather than a matrix transpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permutation {
    mapping: Vector,
}

impl Permutation {
    /// The identity permutation: every code maps to itself.
    pub fn identity() -> Self {
        Self {
            mapping: (0..ALPHABET_LEN as i64).collect(),
        }
    }

    /// Creates a permutation from an explicit mapping table.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaCryptoError::InvalidKey` if the table is not a
    /// permutation of the codes `0..=26`.
    pub fn try_with(mapping: Vector) -> Result<Self, EnigmaCryptoError> {
        Self::check_mapping(&mapping)?;
        Ok(Self { mapping })
    }

    /// Draws a uniformly random permutation by shuffling the code sequence.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut mapping: Vector = (0..ALPHABET_LEN as i64).collect();
        mapping.shuffle(rng);
        Self { mapping }
    }

    /// Draws a random permutation from a seeded generator, so both endpoints
    /// can derive the same key from a shared seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::random(&mut StdRng::seed_from_u64(seed))
    }

    /// The permutation that swaps two alphabet characters and fixes
    /// everything else.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaCryptoError::UnknownSymbol` if either character is
    /// outside the alphabet.
    pub fn transposition(a: char, b: char) -> Result<Self, EnigmaCryptoError> {
        let code_a = code_of(a)?;
        let code_b = code_of(b)?;

        let mut mapping: Vector = (0..ALPHABET_LEN as i64).collect();
        mapping.swap(code_a, code_b);
        Ok(Self { mapping })
    }

    /// The rotor-style permutation that shifts the letter codes `1..=26`
    /// cyclically by `offset` and fixes the space character.
    ///
    /// # Example
    ///
    /// ```
    /// # use enigma_crypto::keys::Permutation;
    /// let rotor = Permutation::shift_letters(1);
    /// assert_eq!(rotor.apply(1).unwrap(), 2);  // a -> b
    /// assert_eq!(rotor.apply(26).unwrap(), 1); // z wraps to a
    /// assert_eq!(rotor.apply(0).unwrap(), 0);  // space is fixed
    /// ```
    pub fn shift_letters(offset: usize) -> Self {
        let mut mapping: Vector = vec![0; ALPHABET_LEN];
        for code in 1..ALPHABET_LEN {
            mapping[code] = (((code - 1 + offset) % (ALPHABET_LEN - 1)) + 1) as i64;
        }
        Self { mapping }
    }

    /// Reads a permutation back out of its 27×27 matrix form.
    ///
    /// This doubles as the key validation used by the cipher entry points:
    /// the matrix must be square of dimension 27, carry only 0/1 entries, and
    /// have exactly one 1 in every row and every column.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaCryptoError::InvalidKey` describing the first violated
    /// constraint.
    pub fn try_from_matrix(matrix: &Matrix) -> Result<Self, EnigmaCryptoError> {
        if matrix.len() != ALPHABET_LEN {
            return Err(EnigmaCryptoError::InvalidKey(format!(
                "key matrix must have {} rows (got {})",
                ALPHABET_LEN,
                matrix.len()
            )));
        }

        // mapping[col] = row of the single 1 in that column
        let mut mapping: Vector = vec![-1; ALPHABET_LEN];
        for (row_index, row) in matrix.iter().enumerate() {
            if row.len() != ALPHABET_LEN {
                return Err(EnigmaCryptoError::InvalidKey(format!(
                    "key matrix row {} must have {} entries (got {})",
                    row_index,
                    ALPHABET_LEN,
                    row.len()
                )));
            }
            for (col_index, &entry) in row.iter().enumerate() {
                match entry {
                    0 => {}
                    1 => {
                        if mapping[col_index] >= 0 {
                            return Err(EnigmaCryptoError::InvalidKey(format!(
                                "column {} has more than one non-zero entry",
                                col_index
                            )));
                        }
                        mapping[col_index] = row_index as i64;
                    }
                    other => {
                        return Err(EnigmaCryptoError::InvalidKey(format!(
                            "entry at ({}, {}) is {}, expected 0 or 1",
                            row_index, col_index, other
                        )));
                    }
                }
            }
        }

        if let Some(col_index) = mapping.iter().position(|&image| image < 0) {
            return Err(EnigmaCryptoError::InvalidKey(format!(
                "column {} has no non-zero entry",
                col_index
            )));
        }

        // A row carrying two 1s shows up here as a duplicate image.
        Self::try_with(mapping)
    }

    /// Builds the 27×27 matrix form: column `i` is the one-hot image of
    /// code `i`.
    pub fn to_matrix(&self) -> Matrix {
        let mut matrix = vec![vec![0i64; ALPHABET_LEN]; ALPHABET_LEN];
        for (code, &image) in self.mapping.iter().enumerate() {
            matrix[image as usize][code] = 1;
        }
        matrix
    }

    /// Applies the permutation to a single code.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaCryptoError::OutOfRange` if `code` is not in `[0, 26]`.
    pub fn apply(&self, code: usize) -> Result<usize, EnigmaCryptoError> {
        self.mapping
            .get(code)
            .map(|&image| image as usize)
            .ok_or(EnigmaCryptoError::OutOfRange(code))
    }

    /// Functional composition: `(self ∘ other)(i) = self(other(i))`.
    ///
    /// Matches the matrix product `self.to_matrix() · other.to_matrix()`.
    pub fn compose(&self, other: &Self) -> Self {
        let mapping: Vector = other
            .mapping
            .iter()
            .map(|&code| self.mapping[code as usize])
            .collect();
        Self { mapping }
    }

    /// The inverse permutation. Its matrix form is the transpose of
    /// `self.to_matrix()`.
    pub fn inverse(&self) -> Self {
        let mut mapping: Vector = vec![0; ALPHABET_LEN];
        for (code, &image) in self.mapping.iter().enumerate() {
            mapping[image as usize] = code as i64;
        }
        Self { mapping }
    }

    /// Re-checks the permutation invariant, for values that arrived through
    /// deserialization rather than a validating constructor.
    pub fn validate(&self) -> Result<(), EnigmaCryptoError> {
        Self::check_mapping(&self.mapping)
    }

    fn check_mapping(mapping: &[i64]) -> Result<(), EnigmaCryptoError> {
        if mapping.len() != ALPHABET_LEN {
            return Err(EnigmaCryptoError::InvalidKey(format!(
                "permutation must map {} codes (got {})",
                ALPHABET_LEN,
                mapping.len()
            )));
        }
        if let Some(&image) = mapping
            .iter()
            .find(|&&image| !(0..ALPHABET_LEN as i64).contains(&image))
        {
            return Err(EnigmaCryptoError::InvalidKey(format!(
                "image {} is outside the code range 0..={}",
                image,
                ALPHABET_LEN - 1
            )));
        }
        if !mapping.iter().all_unique() {
            return Err(EnigmaCryptoError::InvalidKey(
                "two codes map to the same image".to_string(),
            ));
        }
        Ok(())
    }
}
