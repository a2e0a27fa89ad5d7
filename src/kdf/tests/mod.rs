// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

// KDF module tests.

mod pbkdf2_tests;
mod testvectors;

use super::*;
