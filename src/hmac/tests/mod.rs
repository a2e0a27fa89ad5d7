// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

// HMAC module tests.

mod hmac_sha256_tests;
mod testvectors;

use super::*;
