//! The two ciphers built on the one-hot message encoding.
//!
//! Both operate column by column on the encoded message. The static cipher
//! applies the same key matrix P to every column. The enigma cipher starts
//! from P and advances the step key by a left-multiplication with the rotor E
//! between columns, so column i is enciphered with Eⁱ·P and the first column
//! with P itself. Decryption walks the same key schedule and applies the
//! transpose of each step key, which for permutation matrices is the inverse.
//!
//! Every entry point validates its keys before touching the message and
//! returns either the complete transformed string or a single error; there is
//! no partial output.

use crate::codec::{to_matrix, to_string};
use crate::errors::EnigmaCryptoError;
use crate::keys::Permutation;
use crate::matrix::{Matrix, matrix_mul, matrix_vector_mul, transpose};

/// Encrypts `message` by left-multiplying its one-hot encoding with `key`.
///
/// # Errors
///
/// Returns `EnigmaCryptoError::InvalidKey` if `key` is not a 27×27
/// permutation matrix, or `EnigmaCryptoError::UnknownSymbol` if the message
/// contains a character outside the alphabet.
///
/// # Example
///
/// ```
/// # use enigma_crypto::cipher::{decrypt_static, encrypt_static};
/// # use enigma_crypto::keys::Permutation;
/// let key = Permutation::transposition('a', 'b').unwrap().to_matrix();
///
/// let ciphertext = encrypt_static("abba", &key).unwrap();
/// assert_eq!(ciphertext, "baab");
/// assert_eq!(decrypt_static(&ciphertext, &key).unwrap(), "abba");
/// ```
pub fn encrypt_static(message: &str, key: &Matrix) -> Result<String, EnigmaCryptoError> {
    Permutation::try_from_matrix(key)?;

    let columns = to_matrix(message)?;
    let mut cipher_columns = Vec::with_capacity(columns.len());
    for column in &columns {
        cipher_columns.push(matrix_vector_mul(key, column)?);
    }
    to_string(&cipher_columns)
}

/// Decrypts a ciphertext produced by [`encrypt_static`] with the same key,
/// applying the key's transpose (its inverse) to every column.
///
/// # Errors
///
/// As for [`encrypt_static`]; additionally `EnigmaCryptoError::NotOneHot` if
/// a transformed column fails the one-hot check, which signals a corrupted
/// column matrix.
pub fn decrypt_static(ciphertext: &str, key: &Matrix) -> Result<String, EnigmaCryptoError> {
    Permutation::try_from_matrix(key)?;
    let inverse_key = transpose(key);

    let columns = to_matrix(ciphertext)?;
    let mut message_columns = Vec::with_capacity(columns.len());
    for column in &columns {
        message_columns.push(matrix_vector_mul(&inverse_key, column)?);
    }
    to_string(&message_columns)
}

/// Encrypts `message` with the evolving key schedule: column i is
/// left-multiplied by Eⁱ·P. The step key advances between columns, never
/// before the first one, so an empty message performs no advancement at all.
///
/// # Errors
///
/// Returns `EnigmaCryptoError::InvalidKey` if `key` or `rotor` is not a
/// 27×27 permutation matrix, or `EnigmaCryptoError::UnknownSymbol` if the
/// message contains a character outside the alphabet.
pub fn encrypt_enigma(
    message: &str,
    key: &Matrix,
    rotor: &Matrix,
) -> Result<String, EnigmaCryptoError> {
    Permutation::try_from_matrix(key)?;
    Permutation::try_from_matrix(rotor)?;

    let columns = to_matrix(message)?;
    let mut cipher_columns = Vec::with_capacity(columns.len());
    let mut step_key = key.clone();
    for (index, column) in columns.iter().enumerate() {
        cipher_columns.push(matrix_vector_mul(&step_key, column)?);
        if index + 1 < columns.len() {
            step_key = matrix_mul(rotor, &step_key)?;
        }
    }
    to_string(&cipher_columns)
}

/// Decrypts a ciphertext produced by [`encrypt_enigma`] with the same key and
/// rotor, walking the identical key schedule and applying each step key's
/// transpose.
///
/// # Errors
///
/// As for [`encrypt_enigma`]; additionally `EnigmaCryptoError::NotOneHot` if
/// a transformed column fails the one-hot check.
pub fn decrypt_enigma(
    ciphertext: &str,
    key: &Matrix,
    rotor: &Matrix,
) -> Result<String, EnigmaCryptoError> {
    Permutation::try_from_matrix(key)?;
    Permutation::try_from_matrix(rotor)?;

    let columns = to_matrix(ciphertext)?;
    let mut message_columns = Vec::with_capacity(columns.len());
    let mut step_key = key.clone();
    for (index, column) in columns.iter().enumerate() {
        let inverse_step = transpose(&step_key);
        message_columns.push(matrix_vector_mul(&inverse_step, column)?);
        if index + 1 < columns.len() {
            step_key = matrix_mul(rotor, &step_key)?;
        }
    }
    to_string(&message_columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::symbol_of;
    use crate::matrix::identity_matrix;
    use crate::preset::alphabet::{ALPHABET, ALPHABET_LEN};

    use quickcheck_macros::quickcheck;

    const PANGRAM: &str = "the quick brown fox jumps over the lazy dog";

    fn message_from_codes(codes: &[u8]) -> String {
        codes
            .iter()
            .map(|&c| symbol_of((c as usize) % ALPHABET_LEN).unwrap())
            .collect()
    }

    #[test]
    fn test_identity_key_is_a_no_op() {
        let identity = identity_matrix(ALPHABET_LEN);
        assert_eq!(
            encrypt_static("hello world", &identity).unwrap(),
            "hello world"
        );
    }

    #[test]
    fn test_static_swap_of_a_and_b() {
        let key = Permutation::transposition('a', 'b').unwrap().to_matrix();
        assert_eq!(encrypt_static("abba", &key).unwrap(), "baab");
        assert_eq!(decrypt_static("baab", &key).unwrap(), "abba");
    }

    #[test]
    fn test_enigma_rotor_walk() {
        // Key swaps a and b; the rotor shifts every letter forward by one.
        // Column i sees Eⁱ·P, so the four 'a' columns come out as the codes
        // 2, 3, 4, 5.
        let key = Permutation::transposition('a', 'b').unwrap().to_matrix();
        let rotor = Permutation::shift_letters(1).to_matrix();

        assert_eq!(encrypt_enigma("aaaa", &key, &rotor).unwrap(), "bcde");
        assert_eq!(decrypt_enigma("bcde", &key, &rotor).unwrap(), "aaaa");
    }

    #[test]
    fn test_enigma_round_trip_with_random_keys() {
        let key = Permutation::from_seed(2718).to_matrix();
        let rotor = Permutation::from_seed(3141).to_matrix();

        let ciphertext = encrypt_enigma(PANGRAM, &key, &rotor).unwrap();
        assert_ne!(ciphertext, PANGRAM);
        assert_eq!(decrypt_enigma(&ciphertext, &key, &rotor).unwrap(), PANGRAM);
    }

    #[test]
    fn test_unknown_symbol_is_rejected_before_any_work() {
        let key = Permutation::from_seed(1).to_matrix();
        let rotor = Permutation::from_seed(2).to_matrix();

        assert!(matches!(
            encrypt_static("Hello", &key),
            Err(EnigmaCryptoError::UnknownSymbol('H'))
        ));
        assert!(matches!(
            encrypt_enigma("Hello", &key, &rotor),
            Err(EnigmaCryptoError::UnknownSymbol('H'))
        ));
    }

    #[test]
    fn test_wrong_key_yields_a_different_message() {
        // Two distinct permutations must disagree on at least two codes, and
        // the pangram exercises every code, so decrypting with the wrong key
        // cannot reproduce the plaintext.
        let right = Permutation::from_seed(10);
        let wrong = Permutation::from_seed(11);
        assert_ne!(right, wrong);

        let ciphertext = encrypt_static(PANGRAM, &right.to_matrix()).unwrap();
        let garbled = decrypt_static(&ciphertext, &wrong.to_matrix()).unwrap();
        assert_ne!(garbled, PANGRAM);
    }

    #[test]
    fn test_empty_message_both_ciphers() {
        let key = Permutation::from_seed(4).to_matrix();
        let rotor = Permutation::from_seed(5).to_matrix();

        assert_eq!(encrypt_static("", &key).unwrap(), "");
        assert_eq!(decrypt_static("", &key).unwrap(), "");
        assert_eq!(encrypt_enigma("", &key, &rotor).unwrap(), "");
        assert_eq!(decrypt_enigma("", &key, &rotor).unwrap(), "");
    }

    #[test]
    fn test_invalid_keys_are_rejected_at_entry() {
        let all_zero = vec![vec![0i64; ALPHABET_LEN]; ALPHABET_LEN];
        let not_square = vec![vec![0i64; ALPHABET_LEN]; 3];
        let valid = Permutation::from_seed(6).to_matrix();

        assert!(matches!(
            encrypt_static("abc", &all_zero),
            Err(EnigmaCryptoError::InvalidKey(_))
        ));
        assert!(matches!(
            decrypt_static("abc", &not_square),
            Err(EnigmaCryptoError::InvalidKey(_))
        ));
        assert!(matches!(
            encrypt_enigma("abc", &valid, &all_zero),
            Err(EnigmaCryptoError::InvalidKey(_))
        ));
        assert!(matches!(
            decrypt_enigma("abc", &all_zero, &valid),
            Err(EnigmaCryptoError::InvalidKey(_))
        ));
    }

    #[quickcheck]
    fn prop_static_round_trip(codes: Vec<u8>, seed: u64) -> bool {
        let message = message_from_codes(&codes);
        let key = Permutation::from_seed(seed).to_matrix();

        let ciphertext = encrypt_static(&message, &key).unwrap();
        decrypt_static(&ciphertext, &key).unwrap() == message
    }

    #[quickcheck]
    fn prop_enigma_round_trip(codes: Vec<u8>, key_seed: u64, rotor_seed: u64) -> bool {
        let message = message_from_codes(&codes);
        let key = Permutation::from_seed(key_seed).to_matrix();
        let rotor = Permutation::from_seed(rotor_seed).to_matrix();

        let ciphertext = encrypt_enigma(&message, &key, &rotor).unwrap();
        decrypt_enigma(&ciphertext, &key, &rotor).unwrap() == message
    }

    #[quickcheck]
    fn prop_identity_rotor_degenerates_to_static(codes: Vec<u8>, seed: u64) -> bool {
        let message = message_from_codes(&codes);
        let key = Permutation::from_seed(seed).to_matrix();
        let identity_rotor = identity_matrix(ALPHABET_LEN);

        encrypt_enigma(&message, &key, &identity_rotor).unwrap()
            == encrypt_static(&message, &key).unwrap()
    }

    #[quickcheck]
    fn prop_single_character_stays_in_alphabet(code: u8, seed: u64) -> bool {
        let message = message_from_codes(&[code]);
        let key = Permutation::from_seed(seed).to_matrix();

        let ciphertext = encrypt_static(&message, &key).unwrap();
        ciphertext.chars().count() == 1 && ciphertext.chars().all(|c| ALPHABET.contains(c))
    }
}
