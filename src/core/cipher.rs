//! AES-256 transforms and the hex field validators.
//!
//! The key is 64 hex characters (32 bytes), the IV/counter 32 hex characters
//! (16 bytes, one AES block). Padded modes (ECB, CBC) use PKCS#7; stream
//! modes apply a keystream and leave the length unchanged.

use aes::Aes256;
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{
    AsyncStreamCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit, StreamCipher,
};

use crate::config::{IV_HEX_LEN, KEY_HEX_LEN};
use crate::core::error::CipherError;
use crate::models::Mode;

type EcbEnc = ecb::Encryptor<Aes256>;
type EcbDec = ecb::Decryptor<Aes256>;
type CbcEnc = cbc::Encryptor<Aes256>;
type CbcDec = cbc::Decryptor<Aes256>;
type Ctr128 = ctr::Ctr128BE<Aes256>;
type CfbEnc = cfb_mode::Encryptor<Aes256>;
type CfbDec = cfb_mode::Decryptor<Aes256>;
type Ofb128 = ofb::Ofb<Aes256>;

// =============================================================================
// Field validators
// =============================================================================

fn is_hex_of_len(text: &str, len: usize) -> bool {
    text.len() == len && text.chars().all(|c| c.is_ascii_hexdigit())
}

/// Whether `text` is a well-formed 64-character hex key.
pub fn is_valid_key(text: &str) -> bool {
    is_hex_of_len(text, KEY_HEX_LEN)
}

/// Whether `text` is a well-formed 32-character hex IV/counter.
pub fn is_valid_iv(text: &str) -> bool {
    is_hex_of_len(text, IV_HEX_LEN)
}

// =============================================================================
// Parsing and generation
// =============================================================================

/// Decodes the key field into key bytes.
pub fn parse_key(text: &str) -> Result<[u8; 32], CipherError> {
    if !is_valid_key(text) {
        return Err(CipherError::MalformedKey);
    }
    let bytes = hex::decode(text).map_err(|_| CipherError::MalformedKey)?;
    bytes.try_into().map_err(|_| CipherError::MalformedKey)
}

/// Decodes the IV/counter field into block bytes.
pub fn parse_iv(text: &str) -> Result<[u8; 16], CipherError> {
    if !is_valid_iv(text) {
        return Err(CipherError::MalformedIv);
    }
    let bytes = hex::decode(text).map_err(|_| CipherError::MalformedIv)?;
    bytes.try_into().map_err(|_| CipherError::MalformedIv)
}

fn random_hex(byte_len: usize) -> Result<String, CipherError> {
    let mut buf = vec![0u8; byte_len];
    getrandom::getrandom(&mut buf).map_err(|_| CipherError::RandomnessUnavailable)?;
    Ok(hex::encode(buf))
}

/// Fresh random key as 64 hex characters.
pub fn random_key_hex() -> Result<String, CipherError> {
    random_hex(KEY_HEX_LEN / 2)
}

/// Fresh random IV/counter as 32 hex characters.
pub fn random_iv_hex() -> Result<String, CipherError> {
    random_hex(IV_HEX_LEN / 2)
}

// =============================================================================
// Transforms
// =============================================================================

/// Encrypts `data` under `mode`. ECB ignores the IV.
pub fn encrypt(mode: Mode, key: &[u8; 32], iv: &[u8; 16], data: &[u8]) -> Vec<u8> {
    match mode {
        Mode::Ecb => EcbEnc::new(key.into()).encrypt_padded_vec_mut::<Pkcs7>(data),
        Mode::Cbc => CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<Pkcs7>(data),
        Mode::Ctr => {
            let mut buf = data.to_vec();
            let mut cipher = Ctr128::new(key.into(), iv.into());
            cipher.apply_keystream(&mut buf);
            buf
        }
        Mode::Cfb => {
            let mut buf = data.to_vec();
            CfbEnc::new(key.into(), iv.into()).encrypt(&mut buf);
            buf
        }
        Mode::Ofb => {
            let mut buf = data.to_vec();
            let mut cipher = Ofb128::new(key.into(), iv.into());
            cipher.apply_keystream(&mut buf);
            buf
        }
    }
}

/// Decrypts `data` under `mode`.
///
/// Padded modes surface unpadding failures (wrong key/IV or corrupt input)
/// as [`CipherError::BadPadding`]; stream modes cannot fail.
pub fn decrypt(mode: Mode, key: &[u8; 32], iv: &[u8; 16], data: &[u8]) -> Result<Vec<u8>, CipherError> {
    match mode {
        Mode::Ecb => EcbDec::new(key.into())
            .decrypt_padded_vec_mut::<Pkcs7>(data)
            .map_err(|_| CipherError::BadPadding),
        Mode::Cbc => CbcDec::new(key.into(), iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(data)
            .map_err(|_| CipherError::BadPadding),
        Mode::Ctr => {
            let mut buf = data.to_vec();
            let mut cipher = Ctr128::new(key.into(), iv.into());
            cipher.apply_keystream(&mut buf);
            Ok(buf)
        }
        Mode::Cfb => {
            let mut buf = data.to_vec();
            CfbDec::new(key.into(), iv.into()).decrypt(&mut buf);
            Ok(buf)
        }
        Mode::Ofb => {
            let mut buf = data.to_vec();
            let mut cipher = Ofb128::new(key.into(), iv.into());
            cipher.apply_keystream(&mut buf);
            Ok(buf)
        }
    }
}
