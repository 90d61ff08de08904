/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;

use openssl::nid::Nid;
use openssl::pkey::Id;

use super::KeyCodecError;

/// Private key algorithms that can be stored with certificates.
///
/// Adding a variant means adding a canonical encoding for it, there is no
/// fallback encoding for other key types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrivateKeyAlgorithm {
    Rsa,
    Ecdsa,
}

impl TryFrom<Id> for PrivateKeyAlgorithm {
    type Error = KeyCodecError;

    fn try_from(id: Id) -> Result<Self, Self::Error> {
        match id {
            Id::RSA => Ok(PrivateKeyAlgorithm::Rsa),
            Id::EC => Ok(PrivateKeyAlgorithm::Ecdsa),
            _ => {
                let name = Nid::from_raw(id.as_raw())
                    .short_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|_| format!("#{}", id.as_raw()));
                Err(KeyCodecError::UnsupportedAlgorithm(name))
            }
        }
    }
}

impl fmt::Display for PrivateKeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrivateKeyAlgorithm::Rsa => f.write_str("RSA"),
            PrivateKeyAlgorithm::Ecdsa => f.write_str("ECDSA"),
        }
    }
}
