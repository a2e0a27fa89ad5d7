// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

// Hash module tests.

mod testvectors;

use super::*;
