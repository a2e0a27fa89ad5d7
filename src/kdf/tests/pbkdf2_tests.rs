// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

use super::testvectors::{PBKDF2_SHA1_TEST_VECTORS, PBKDF2_SHA256_TEST_VECTORS};
use super::*;

#[test]
fn test_pbkdf2_sha1_rfc6070_vectors() {
    for vector in PBKDF2_SHA1_TEST_VECTORS {
        let expected = hex::decode(vector.dk).unwrap();

        let algo = Pbkdf2Algo::new(HashAlgo::sha1(), vector.salt, vector.iterations);
        let passphrase = GenericSecretKey::from_bytes(vector.passphrase).unwrap();
        let derived = Deriver::derive(&algo, &passphrase, vector.dk_len).unwrap();
        assert_eq!(
            derived.to_vec().unwrap(),
            expected,
            "RFC 6070 case {} failed",
            vector.case
        );
    }
}

#[test]
fn test_pbkdf2_sha256_vectors() {
    for vector in PBKDF2_SHA256_TEST_VECTORS {
        let expected = hex::decode(vector.dk).unwrap();

        let algo = Pbkdf2Algo::new(HashAlgo::sha256(), vector.salt, vector.iterations);
        let passphrase = GenericSecretKey::from_bytes(vector.passphrase).unwrap();
        let derived = Deriver::derive(&algo, &passphrase, vector.dk_len).unwrap();
        assert_eq!(
            derived.to_vec().unwrap(),
            expected,
            "PBKDF2-SHA256 case {} failed",
            vector.case
        );
    }
}

#[test]
fn test_pbkdf2_defaults() {
    let algo = Pbkdf2Algo::default();
    assert_eq!(algo.hash(), Pbkdf2Algo::default_hash());
    assert_eq!(algo.salt(), &Pbkdf2Algo::DEFAULT_SALT[..]);
    assert_eq!(algo.iterations(), Pbkdf2Algo::DEFAULT_ITERATIONS);
    assert_eq!(
        hex::encode(Pbkdf2Algo::DEFAULT_SALT),
        "79c05b84b7a89e1078dc3505bd346b23"
    );
}

#[test]
fn test_pbkdf2_invalid_params_fall_back_to_defaults() {
    let mut algo = Pbkdf2Algo::new(HashAlgo::sha1(), &[], 0);
    assert_eq!(algo.salt(), &Pbkdf2Algo::DEFAULT_SALT[..]);
    assert_eq!(algo.iterations(), Pbkdf2Algo::DEFAULT_ITERATIONS);

    algo.set_salt(b"pepper");
    algo.set_iterations(7);
    assert_eq!(algo.salt(), b"pepper".as_slice());
    assert_eq!(algo.iterations(), 7);

    algo.set_salt(&[]);
    algo.set_iterations(0);
    assert_eq!(algo.salt(), &Pbkdf2Algo::DEFAULT_SALT[..]);
    assert_eq!(algo.iterations(), Pbkdf2Algo::DEFAULT_ITERATIONS);
}

#[test]
fn test_pbkdf2_rejects_invalid_inputs() {
    let algo = Pbkdf2Algo::default();

    let empty = GenericSecretKey::from_bytes(&[]).unwrap();
    assert_eq!(
        algo.derive(&empty, 32).err(),
        Some(CryptoError::Pbkdf2EmptyPassphrase)
    );

    let passphrase = GenericSecretKey::from_bytes(b"passphrase").unwrap();
    assert_eq!(
        algo.derive(&passphrase, 0).err(),
        Some(CryptoError::Pbkdf2InvalidDerivedKeyLength)
    );
}

#[test]
fn test_pbkdf2_output_spans_multiple_blocks() {
    // 72 bytes from a 20-byte PRF forces four T blocks with a short tail
    let algo = Pbkdf2Algo::new(HashAlgo::sha1(), b"salt", 3);
    let passphrase = GenericSecretKey::from_bytes(b"password").unwrap();

    let long = Deriver::derive(&algo, &passphrase, 72).unwrap();
    let long_bytes = long.to_vec().unwrap();
    assert_eq!(long_bytes.len(), 72);

    // a shorter request is a prefix of the longer one
    let short = Deriver::derive(&algo, &passphrase, 21).unwrap();
    assert_eq!(short.to_vec().unwrap(), long_bytes[..21]);
}
