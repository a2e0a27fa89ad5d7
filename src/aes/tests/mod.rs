// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

// AES module tests.

mod engine_tests;
mod testvectors;

use super::*;
