#[derive(thiserror::Error, Debug)]
pub enum EnigmaCryptoError {
    /// Error when a message contains a character outside the 27-symbol alphabet.
    #[error("UnknownSymbol: {0:?} is not in the cipher alphabet")]
    UnknownSymbol(char),
    /// Error when a symbol code falls outside `[0, 26]`. Only reachable through
    /// misuse of the codec, so callers should treat it as a bug.
    #[error("OutOfRange: code {0} is outside the alphabet range 0..=26")]
    OutOfRange(usize),
    /// Error when a column fails the one-hot check while decoding a matrix back
    /// into text. Signals a malformed or corrupted column.
    #[error("NotOneHot: {0}")]
    NotOneHot(String),
    #[error("InvalidKey: {0}")]
    InvalidKey(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
