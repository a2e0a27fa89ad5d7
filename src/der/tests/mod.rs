// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

// DER module tests.

mod encoder_tests;

use super::*;
