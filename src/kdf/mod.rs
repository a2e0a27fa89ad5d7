// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Key derivation functions.

use super::*;

mod pbkdf2;

pub use pbkdf2::*;

#[cfg(test)]
mod tests;
