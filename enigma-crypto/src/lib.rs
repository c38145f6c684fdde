//! Enigma-style permutation cipher over a 27-symbol alphabet.
//!
//! Messages are drawn from a fixed alphabet of 27 symbols (space plus the
//! lowercase Latin letters) and encoded column-wise as one-hot vectors. The
//! static cipher left-multiplies every column with a single 27×27 permutation
//! matrix P; the enigma cipher advances the key between columns with a rotor
//! permutation E, so column i is enciphered with Eⁱ·P.
//!
//! ```text
//! preset   (fixed alphabet and lookup tables)
//!     ↕
//! codec    (string ↔ one-hot column matrix)
//!     ↕
//! cipher   (static and rotor-stepped encryption/decryption)
//!     ↕
//! keys     (permutation construction, session bundles)
//! ```
//!
//! The cipher is a linear-algebra exercise, not a security primitive: a
//! permutation of 27 symbols falls to frequency analysis instantly.
//!
//! # Examples
//!
//! ```
//! use enigma_crypto::{Permutation, decrypt_enigma, encrypt_enigma};
//!
//! let key = Permutation::from_seed(7).to_matrix();
//! let rotor = Permutation::from_seed(13).to_matrix();
//!
//! let ciphertext = encrypt_enigma("attack at dawn", &key, &rotor)?;
//! let plaintext = decrypt_enigma(&ciphertext, &key, &rotor)?;
//! assert_eq!(plaintext, "attack at dawn");
//! # Ok::<(), enigma_crypto::EnigmaCryptoError>(())
//! ```

pub mod cipher;
pub mod codec;
pub mod errors;
pub mod keys;
pub mod matrix;
pub mod preset;

pub use cipher::{decrypt_enigma, decrypt_static, encrypt_enigma, encrypt_static};
pub use errors::EnigmaCryptoError;
pub use keys::{Permutation, SessionKeys};
