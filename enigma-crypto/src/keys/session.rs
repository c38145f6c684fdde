use crate::cipher;
use crate::errors::EnigmaCryptoError;
use crate::keys::Permutation;

use rand::prelude::{Rng, SeedableRng, StdRng};

use serde::{Deserialize, Serialize};

/// The key material of one cipher session: the primary key P and the rotor E.
///
/// Both endpoints hold the same bundle for the lifetime of a session and
/// discard it afterwards. The bundle can be exported as JSON so the second
/// endpoint can import an identical copy; import re-validates both
/// permutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionKeys {
    pub key: Permutation,
    pub rotor: Permutation,
}

impl SessionKeys {
    /// Draws a fresh key and rotor from the supplied generator.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            key: Permutation::random(rng),
            rotor: Permutation::random(rng),
        }
    }

    /// Derives the session keys from a shared seed, so both endpoints can
    /// construct the same bundle independently.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(&mut rng)
    }

    /// Serializes the bundle to a JSON string for transport to the peer.
    pub fn to_json(&self) -> Result<String, EnigmaCryptoError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserializes a bundle received from the peer, re-validating that both
    /// entries really are permutations.
    ///
    /// # Errors
    ///
    /// Returns `EnigmaCryptoError::SerializationError` on malformed JSON and
    /// `EnigmaCryptoError::InvalidKey` if a deserialized mapping is not a
    /// permutation of the codes.
    pub fn from_json(data: &str) -> Result<Self, EnigmaCryptoError> {
        let keys: SessionKeys = serde_json::from_str(data)?;
        keys.key.validate()?;
        keys.rotor.validate()?;
        Ok(keys)
    }

    /// Encrypts with the session key P applied to every column.
    pub fn encrypt_static(&self, message: &str) -> Result<String, EnigmaCryptoError> {
        cipher::encrypt_static(message, &self.key.to_matrix())
    }

    /// Decrypts a ciphertext produced by [`SessionKeys::encrypt_static`].
    pub fn decrypt_static(&self, ciphertext: &str) -> Result<String, EnigmaCryptoError> {
        cipher::decrypt_static(ciphertext, &self.key.to_matrix())
    }

    /// Encrypts with the evolving per-column key Eⁱ·P.
    pub fn encrypt_enigma(&self, message: &str) -> Result<String, EnigmaCryptoError> {
        cipher::encrypt_enigma(message, &self.key.to_matrix(), &self.rotor.to_matrix())
    }

    /// Decrypts a ciphertext produced by [`SessionKeys::encrypt_enigma`].
    pub fn decrypt_enigma(&self, ciphertext: &str) -> Result<String, EnigmaCryptoError> {
        cipher::decrypt_enigma(ciphertext, &self.key.to_matrix(), &self.rotor.to_matrix())
    }
}
