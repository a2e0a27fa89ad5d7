// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

use super::testvectors::{FIPS197_CIPHER, FIPS197_KEY, FIPS197_PLAIN};
use super::*;

#[test]
fn test_engine_fips197_example() {
    let key = AesKey::from_bytes(&hex::decode(FIPS197_KEY).unwrap()).unwrap();
    let plain = hex::decode(FIPS197_PLAIN).unwrap();
    let expected = hex::decode(FIPS197_CIPHER).unwrap();

    let mut engine = AesEngine::default();
    engine.init(CipherMode::Encrypt, &key).unwrap();
    let mut cipher = [0u8; AES_BLOCK_SIZE];
    let processed = engine.process_block(&plain, &mut cipher).unwrap();
    assert_eq!(processed, AES_BLOCK_SIZE);
    assert_eq!(cipher.to_vec(), expected);
}

#[test]
fn test_engine_fips197_inverse() {
    let key = AesKey::from_bytes(&hex::decode(FIPS197_KEY).unwrap()).unwrap();
    let cipher = hex::decode(FIPS197_CIPHER).unwrap();
    let expected = hex::decode(FIPS197_PLAIN).unwrap();

    let mut engine = AesEngine::default();
    engine.init(CipherMode::Decrypt, &key).unwrap();
    let mut plain = [0u8; AES_BLOCK_SIZE];
    engine.process_block(&cipher, &mut plain).unwrap();
    assert_eq!(plain.to_vec(), expected);
}

#[test]
fn test_engine_encrypt_decrypt_roundtrip() {
    use rand::Rng;

    let mut key_bytes = [0u8; AES_KEY_SIZE];
    rand::thread_rng().fill(&mut key_bytes);
    let key = AesKey::from_bytes(&key_bytes).unwrap();

    let mut block = [0u8; AES_BLOCK_SIZE];
    rand::thread_rng().fill(&mut block);

    let mut engine = AesEngine::default();
    engine.init(CipherMode::Encrypt, &key).unwrap();
    let mut cipher = [0u8; AES_BLOCK_SIZE];
    engine.process_block(&block, &mut cipher).unwrap();
    assert_ne!(cipher, block);

    engine.init(CipherMode::Decrypt, &key).unwrap();
    let mut plain = [0u8; AES_BLOCK_SIZE];
    engine.process_block(&cipher, &mut plain).unwrap();
    assert_eq!(plain, block);
}

#[test]
fn test_engine_not_initialized() {
    let mut engine = AesEngine::default();
    let input = [0u8; AES_BLOCK_SIZE];
    let mut output = [0u8; AES_BLOCK_SIZE];
    let result = engine.process_block(&input, &mut output);
    assert_eq!(result, Err(CryptoError::AesNotInitialized));
}

#[test]
fn test_engine_short_buffers() {
    let key = AesKey::from_bytes(&[0u8; AES_KEY_SIZE]).unwrap();
    let mut engine = AesEngine::default();
    engine.init(CipherMode::Encrypt, &key).unwrap();

    let mut output = [0u8; AES_BLOCK_SIZE];
    assert_eq!(
        engine.process_block(&[0u8; 15], &mut output),
        Err(CryptoError::AesInvalidInputSize)
    );
    assert_eq!(
        engine.process_block(&[0u8; AES_BLOCK_SIZE], &mut output[..15]),
        Err(CryptoError::AesBufferTooSmall)
    );
}

#[test]
fn test_engine_block_size() {
    let engine = AesEngine::default();
    assert_eq!(engine.block_size(), 16);
}

#[test]
fn test_key_length_validation() {
    assert!(AesKey::from_bytes(&[0u8; 32]).is_ok());
    for len in [0usize, 16, 24, 31, 33] {
        let result = AesKey::from_bytes(&vec![0u8; len]);
        assert_eq!(
            result.err(),
            Some(CryptoError::AesInvalidKeySize),
            "length {len} should be rejected"
        );
    }
}
