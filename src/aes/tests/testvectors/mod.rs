// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

// AES-256 known-answer vectors: the FIPS 197 Appendix C.3 example and
// the NIST CAVP CFB128 vectors (VarTxt256 / KeySbox256) for 256-bit keys.

#[derive(Debug, Clone)]
pub struct AesCfbTestVector {
    pub desc: &'static str,
    pub key: &'static str,
    pub iv: &'static str,
    pub plain: &'static str,
    pub cipher: &'static str,
}

pub(crate) const FIPS197_KEY: &str =
    "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
pub(crate) const FIPS197_PLAIN: &str = "00112233445566778899aabbccddeeff";
pub(crate) const FIPS197_CIPHER: &str = "8ea2b7ca516745bfeafc49904b496089";

pub(crate) const AES_CFB_TEST_VECTORS: &[AesCfbTestVector] = &[
    AesCfbTestVector {
        desc: "CFB128VarTxt256",
        key: "0000000000000000000000000000000000000000000000000000000000000000",
        iv: "fffe0000000000000000000000000000",
        plain: "00000000000000000000000000000000",
        cipher: "1569859ea6b7206c30bf4fd0cbfac33c",
    },
    AesCfbTestVector {
        desc: "CFB128KeySbox256",
        key: "b7a5794d52737475d53d5a377200849be0260a67a2b22ced8bbef12882270d07",
        iv: "00000000000000000000000000000000",
        plain: "00000000000000000000000000000000",
        cipher: "637c31dc2591a07636f646b72daabbe7",
    },
];
