use crate::errors::EnigmaCryptoError;
use crate::matrix::Vector;
use crate::preset::alphabet::{ALPHABET_LEN, CODE_TO_SYMBOL_MAP, SYMBOL_TO_CODE_MAP};

/// Returns the code of `symbol` in the cipher alphabet.
///
/// # Errors
///
/// Returns `EnigmaCryptoError::UnknownSymbol` if the character is not in the
/// alphabet (anything other than the space character and `'a'..='z'`).
///
/// # Example
///
/// ```
/// # use enigma_crypto::codec::code_of;
/// assert_eq!(code_of(' ').unwrap(), 0);
/// assert_eq!(code_of('a').unwrap(), 1);
/// assert_eq!(code_of('z').unwrap(), 26);
/// assert!(code_of('H').is_err());
/// ```
pub fn code_of(symbol: char) -> Result<usize, EnigmaCryptoError> {
    SYMBOL_TO_CODE_MAP
        .get(&symbol)
        .map(|&code| code as usize)
        .ok_or(EnigmaCryptoError::UnknownSymbol(symbol))
}

/// Returns the alphabet character at position `code`.
///
/// # Errors
///
/// Returns `EnigmaCryptoError::OutOfRange` if `code` is not in `[0, 26]`.
///
/// # Example
///
/// ```
/// # use enigma_crypto::codec::symbol_of;
/// assert_eq!(symbol_of(0).unwrap(), ' ');
/// assert_eq!(symbol_of(2).unwrap(), 'b');
/// assert!(symbol_of(27).is_err());
/// ```
pub fn symbol_of(code: usize) -> Result<char, EnigmaCryptoError> {
    if code >= ALPHABET_LEN {
        return Err(EnigmaCryptoError::OutOfRange(code));
    }
    Ok(CODE_TO_SYMBOL_MAP[&(code as u8)])
}

/// Builds the length-27 one-hot column for `code`: a 1 at index `code`,
/// zeros everywhere else.
///
/// # Errors
///
/// Returns `EnigmaCryptoError::OutOfRange` if `code` is not in `[0, 26]`.
pub fn one_hot(code: usize) -> Result<Vector, EnigmaCryptoError> {
    if code >= ALPHABET_LEN {
        return Err(EnigmaCryptoError::OutOfRange(code));
    }
    let mut column = vec![0i64; ALPHABET_LEN];
    column[code] = 1;
    Ok(column)
}

/// Recovers the code from a one-hot column: the index of its unique non-zero
/// entry.
///
/// # Errors
///
/// Returns `EnigmaCryptoError::NotOneHot` if the column has zero or multiple
/// non-zero entries, or a non-zero entry other than 1.
/// Returns `EnigmaCryptoError::DimensionMismatch` if the column is not of
/// length 27.
pub fn code_of_column(column: &Vector) -> Result<usize, EnigmaCryptoError> {
    if column.len() != ALPHABET_LEN {
        return Err(EnigmaCryptoError::DimensionMismatch(format!(
            "Column length must be {} (got {})",
            ALPHABET_LEN,
            column.len()
        )));
    }

    let mut found: Option<usize> = None;
    for (index, &entry) in column.iter().enumerate() {
        match entry {
            0 => {}
            1 => {
                if found.is_some() {
                    return Err(EnigmaCryptoError::NotOneHot(
                        "column has more than one non-zero entry".to_string(),
                    ));
                }
                found = Some(index);
            }
            other => {
                return Err(EnigmaCryptoError::NotOneHot(format!(
                    "entry {} at index {} is neither 0 nor 1",
                    other, index
                )));
            }
        }
    }

    found.ok_or_else(|| EnigmaCryptoError::NotOneHot("column has no non-zero entry".to_string()))
}

/// Encodes a message as a list of one-hot columns (a 27×N matrix stored
/// column-wise). The i-th column codes the i-th character of the message; an
/// empty message yields an empty list.
///
/// # Errors
///
/// Returns `EnigmaCryptoError::UnknownSymbol` on the first character outside
/// the alphabet. No partial result is produced.
///
/// # Example
///
/// ```
/// # use enigma_crypto::codec::{to_matrix, to_string};
/// let columns = to_matrix("abba").unwrap();
/// assert_eq!(columns.len(), 4);
/// assert_eq!(to_string(&columns).unwrap(), "abba");
///
/// assert!(to_matrix("Hello").is_err());
/// ```
pub fn to_matrix(message: &str) -> Result<Vec<Vector>, EnigmaCryptoError> {
    message
        .chars()
        .map(|symbol| one_hot(code_of(symbol)?))
        .collect()
}

/// Decodes a list of one-hot columns back into a message string.
///
/// # Errors
///
/// Returns `EnigmaCryptoError::NotOneHot` if any column fails the one-hot
/// check, which is the signal that the matrix was corrupted or produced with
/// mismatched transforms. No partial result is produced.
pub fn to_string(columns: &[Vector]) -> Result<String, EnigmaCryptoError> {
    columns
        .iter()
        .map(|column| symbol_of(code_of_column(column)?))
        .collect()
}
