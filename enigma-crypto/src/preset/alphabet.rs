use lazy_static::lazy_static;
use std::collections::HashMap;

/// The cipher alphabet: the space character at code 0, followed by the 26
/// lowercase Latin letters at codes 1 through 26. Both endpoints of a session
/// share this ordering; it never changes at runtime.
pub const ALPHABET: &str = " abcdefghijklmnopqrstuvwxyz";

/// Number of symbols in the alphabet, and the dimension of every one-hot
/// column and permutation matrix in this crate.
pub const ALPHABET_LEN: usize = 27;

lazy_static! {
    /// A static HashMap mapping a symbol code (0 to 26) to its corresponding
    /// alphabet character (space, a-z).
    pub static ref CODE_TO_SYMBOL_MAP: HashMap<u8, char> = {
        let mut map = HashMap::new();
        let alphabet_chars: Vec<char> = ALPHABET.chars().collect();

        for (code, &ch) in alphabet_chars.iter().enumerate() {
            map.insert(code as u8, ch);
        }

        map
    };

    /// A static HashMap mapping an alphabet character (space, a-z) to its
    /// corresponding symbol code (0 to 26).
    pub static ref SYMBOL_TO_CODE_MAP: HashMap<char, u8> = {
        let mut map = HashMap::new();

        for (&code, &ch) in CODE_TO_SYMBOL_MAP.iter() {
            map.insert(ch, code);
        }

        map
    };
}
