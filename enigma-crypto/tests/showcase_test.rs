use enigma_crypto::errors::EnigmaCryptoError;
use enigma_crypto::keys::{Permutation, SessionKeys};

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .unwrap();
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_line_number(false)
            .with_file(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    });
}

#[test]
fn showcase_cipher_decipher_pangram() -> Result<(), EnigmaCryptoError> {
    init_tracing();

    let session = SessionKeys::from_seed(12345);

    let original = "sphinx of black quartz judge my vow".to_string();

    let cipher = session.encrypt_enigma(&original)?;

    dbg!(&cipher);

    let decoded = session.decrypt_enigma(&cipher)?;

    dbg!(&original, &decoded);
    assert_eq!(original, decoded);

    Ok(())
}

#[test]
fn showcase_rotor_schedule() -> Result<(), EnigmaCryptoError> {
    init_tracing();

    // With a swap key and a one-step rotor, a run of identical letters comes
    // out as consecutive letters: each column sees the key advanced once more.
    let key = Permutation::transposition('a', 'b')?.to_matrix();
    let rotor = Permutation::shift_letters(1).to_matrix();

    let cipher = enigma_crypto::encrypt_enigma("aaaa", &key, &rotor)?;

    dbg!(&cipher);
    assert_eq!(cipher, "bcde");

    Ok(())
}
