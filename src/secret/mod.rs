// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Generic secret key material.
//!
//! This module provides a byte-oriented secret key type used wherever an
//! operation needs raw keying material without an algorithm-specific
//! schedule: passphrases fed into PBKDF2 and the key material PBKDF2
//! produces.
//!
//! # Security Considerations
//!
//! - Key material is wiped from memory when the key is dropped
//! - Exported keys should be handled carefully and cleared after use

mod key;

pub use key::*;

use super::*;
