// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

use super::testvectors::HMAC_SHA256_TEST_VECTORS;
use super::*;

#[test]
fn test_hmac_sha256_rfc4231_vectors() {
    for vector in HMAC_SHA256_TEST_VECTORS {
        let key_bytes: Vec<u8> = hex::decode(vector.key).unwrap();
        let expected = hex::decode(vector.mac).unwrap();

        let mut hmac = HmacAlgo::new(HashAlgo::sha256());
        let key = HmacKey::from_bytes(&key_bytes).expect("create hmac sha256 key");
        let mac = Signer::sign_vec(&mut hmac, &key, vector.msg).unwrap();
        assert_eq!(mac, expected, "RFC 4231 case {} failed", vector.case);
    }
}

#[test]
fn test_hmac_sha256_mac_size() {
    let hmac = HmacAlgo::new(HashAlgo::sha256());
    assert_eq!(hmac.mac_size(), 32);
}

#[test]
fn test_hmac_sha256_key_from_secret() {
    let secret = GenericSecretKey::from_bytes(b"passphrase").unwrap();
    let key = HmacKey::try_from(&secret).unwrap();
    let direct = HmacKey::from_bytes(b"passphrase").unwrap();

    let mut hmac = HmacAlgo::new(HashAlgo::sha256());
    let mac_a = Signer::sign_vec(&mut hmac, &key, b"data").unwrap();
    let mac_b = Signer::sign_vec(&mut hmac, &direct, b"data").unwrap();
    assert_eq!(mac_a, mac_b);
}
