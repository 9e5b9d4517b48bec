use std::{fs, path::Path};

use log::*;
use pgp::{
    composed::{Deserializable, Message, SignedPublicKey, SignedPublicSubKey, SignedSecretKey},
    crypto::{hash::HashAlgorithm, sym::SymmetricKeyAlgorithm},
    types::KeyTrait,
};
use rand::thread_rng;
use wpp_common::Secret;

use crate::GspApiError;

/// The OpenPGP envelope around every secure-serving body.
///
/// Outgoing plaintext is signed with the merchant's secret key and encrypted to the network's public key,
/// producing an ASCII-armored message. Incoming messages arrive as binary OpenPGP data and are decrypted
/// with the merchant's secret key. Signatures on incoming messages are not verified; this mirrors the
/// reference integration, which decrypts and relays responses as-is.
///
/// All cryptographic work is delegated to the OpenPGP library. This type only holds the key material and
/// picks the right key for each direction.
#[derive(Clone, Debug)]
pub struct MessageCipher {
    secret_key: SignedSecretKey,
    public_key: SignedPublicKey,
    passphrase: Secret<String>,
}

impl MessageCipher {
    /// Builds a cipher from armored key material. `secret_key` is the merchant's signing/decryption key,
    /// `public_key` the network's encryption key.
    pub fn new(secret_key: &str, public_key: &str, passphrase: Secret<String>) -> Result<Self, GspApiError> {
        let (secret_key, _) = SignedSecretKey::from_string(secret_key)
            .map_err(|e| GspApiError::KeyError(format!("Invalid armored secret key. {e}")))?;
        let (public_key, _) = SignedPublicKey::from_string(public_key)
            .map_err(|e| GspApiError::KeyError(format!("Invalid armored public key. {e}")))?;
        Ok(Self { secret_key, public_key, passphrase })
    }

    /// Reads both armored key files from disk and builds the cipher.
    pub fn from_files(
        secret_key_file: &Path,
        public_key_file: &Path,
        passphrase: Secret<String>,
    ) -> Result<Self, GspApiError> {
        debug!("🔐️ Loading merchant secret key from {}", secret_key_file.display());
        let secret_key = fs::read_to_string(secret_key_file)
            .map_err(|e| GspApiError::KeyError(format!("Could not read {}. {e}", secret_key_file.display())))?;
        debug!("🔐️ Loading network public key from {}", public_key_file.display());
        let public_key = fs::read_to_string(public_key_file)
            .map_err(|e| GspApiError::KeyError(format!("Could not read {}. {e}", public_key_file.display())))?;
        Self::new(&secret_key, &public_key, passphrase)
    }

    /// Signs `plaintext` with the merchant key and encrypts it to the network key. Returns the armored
    /// message text.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, GspApiError> {
        let message = Message::new_literal("", plaintext);
        let passphrase = self.passphrase.clone();
        let signed = message
            .sign(&self.secret_key, move || passphrase.reveal().clone(), HashAlgorithm::SHA2_256)
            .map_err(|e| GspApiError::EncryptionError(format!("Could not sign message. {e}")))?;
        let mut rng = thread_rng();
        let encrypted = match self.encryption_subkey() {
            Some(subkey) => signed.encrypt_to_keys(&mut rng, SymmetricKeyAlgorithm::AES256, &[subkey]),
            None => signed.encrypt_to_keys(&mut rng, SymmetricKeyAlgorithm::AES256, &[&self.public_key]),
        }
        .map_err(|e| GspApiError::EncryptionError(e.to_string()))?;
        encrypted.to_armored_string(None).map_err(|e| GspApiError::EncryptionError(e.to_string()))
    }

    /// Decrypts a binary OpenPGP message with the merchant key and returns the literal content as UTF-8.
    pub fn decrypt(&self, message: &[u8]) -> Result<String, GspApiError> {
        let message = Message::from_bytes(message)
            .map_err(|e| GspApiError::DecryptionError(format!("Invalid OpenPGP message. {e}")))?;
        let passphrase = self.passphrase.clone();
        let (mut decrypted, _key_ids) = message
            .decrypt(move || passphrase.reveal().clone(), &[&self.secret_key])
            .map_err(|e| GspApiError::DecryptionError(e.to_string()))?;
        let message = decrypted
            .next()
            .ok_or_else(|| GspApiError::DecryptionError("The message carried no content".to_string()))?
            .map_err(|e| GspApiError::DecryptionError(e.to_string()))?;
        let content = message
            .get_content()
            .map_err(|e| GspApiError::DecryptionError(e.to_string()))?
            .ok_or_else(|| GspApiError::DecryptionError("The message carried no content".to_string()))?;
        let plaintext = String::from_utf8(content)
            .map_err(|e| GspApiError::DecryptionError(format!("Message content is not valid UTF-8. {e}")))?;
        trace!("🔐️ Decrypted message body: {plaintext}");
        Ok(plaintext)
    }

    // The library wants the recipient key spelled out, so prefer the encryption subkey and fall back to
    // the primary key for keys without one.
    fn encryption_subkey(&self) -> Option<&SignedPublicSubKey> {
        self.public_key.public_subkeys.iter().find(|key| key.is_encryption_key())
    }
}
