// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

// PBKDF2 known-answer vectors: RFC 6070 (HMAC-SHA1) and the matching
// HMAC-SHA256 vectors from the scrypt draft / RFC 7914 errata set.

#[derive(Debug, Clone)]
pub struct Pbkdf2TestVector {
    // Matches the RFC test case number.
    pub case: u32,
    pub passphrase: &'static [u8],
    pub salt: &'static [u8],
    pub iterations: u32,
    pub dk_len: usize,
    pub dk: &'static str,
}

pub(crate) const PBKDF2_SHA1_TEST_VECTORS: &[Pbkdf2TestVector] = &[
    Pbkdf2TestVector {
        case: 1,
        passphrase: b"password",
        salt: b"salt",
        iterations: 1,
        dk_len: 20,
        dk: "0c60c80f961f0e71f3a9b524af6012062fe037a6",
    },
    Pbkdf2TestVector {
        case: 2,
        passphrase: b"password",
        salt: b"salt",
        iterations: 2,
        dk_len: 20,
        dk: "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957",
    },
    Pbkdf2TestVector {
        case: 3,
        passphrase: b"password",
        salt: b"salt",
        iterations: 4096,
        dk_len: 20,
        dk: "4b007901b765489abead49d926f721d065a429c1",
    },
    Pbkdf2TestVector {
        case: 5,
        passphrase: b"passwordPASSWORDpassword",
        salt: b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
        iterations: 4096,
        dk_len: 25,
        dk: "3d2eec4fe41c849b80c8d83662c0e44a8b291a964cf2f07038",
    },
    Pbkdf2TestVector {
        case: 6,
        passphrase: b"pass\0word",
        salt: b"sa\0lt",
        iterations: 4096,
        dk_len: 16,
        dk: "56fa6aa75548099dcc37d7f03425e0c3",
    },
];

pub(crate) const PBKDF2_SHA256_TEST_VECTORS: &[Pbkdf2TestVector] = &[
    Pbkdf2TestVector {
        case: 1,
        passphrase: b"password",
        salt: b"salt",
        iterations: 1,
        dk_len: 32,
        dk: "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b",
    },
    Pbkdf2TestVector {
        case: 3,
        passphrase: b"password",
        salt: b"salt",
        iterations: 4096,
        dk_len: 32,
        dk: "c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a",
    },
];
