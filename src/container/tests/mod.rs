// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

// Container module tests.


use super::*;
