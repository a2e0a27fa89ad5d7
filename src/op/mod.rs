// Copyright (c) Cryptainer Contributors.
// Licensed under the MIT License.

//! Trait definitions for cryptographic operations.
//!
//! This module defines the seams between algorithm implementations and the
//! code that drives them: key marker traits, one-shot encryption and
//! decryption, block-cipher processing, signing and verification, hashing,
//! and key derivation. Higher-level wrapper structs live in [`crate::traits`].
//!
//! # Buffer convention
//!
//! Operations that produce output take an `Option<&mut [u8]>`:
//! - Pass `None` to query the required buffer size
//! - Pass `Some(buffer)` to perform the actual operation

mod derivation;
mod encryption;
mod hashing;
mod key;
mod signing;

pub use derivation::*;
pub use encryption::*;
pub use hashing::*;
pub use key::*;
pub use signing::*;

use super::*;
