/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

//! Canonical encoding of certificate private keys.
//!
//! RSA keys are stored as PKCS#1 `RSAPrivateKey` and EC keys as SEC1
//! `ECPrivateKey`, the same DER layouts other TLS tooling reads and writes.

mod error;
pub use error::KeyCodecError;

mod algorithm;
pub use algorithm::PrivateKeyAlgorithm;

mod codec;
pub use codec::{decode, encode, key_bytes, keys_same};

mod pem;
pub use pem::{decode_pem, encode_pem};
