/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use openssl::error::ErrorStack;
use thiserror::Error;

use super::PrivateKeyAlgorithm;

#[derive(Error, Debug)]
pub enum KeyCodecError {
    #[error("unsupported private key algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("failed to encode {0} private key: {1}")]
    Encode(PrivateKeyAlgorithm, ErrorStack),
    #[error("malformed private key data: {0}")]
    Decode(String),
}
