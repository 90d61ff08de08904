/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use openssl::ec::EcKey;
use openssl::pkey::{PKey, Private};
use openssl::rsa::Rsa;

use super::{KeyCodecError, PrivateKeyAlgorithm};

/// Encode `key` to its canonical DER form.
pub fn encode(key: &PKey<Private>) -> Result<Vec<u8>, KeyCodecError> {
    let alg = PrivateKeyAlgorithm::try_from(key.id())?;
    let encoded = match alg {
        PrivateKeyAlgorithm::Rsa => key.rsa().and_then(|k| k.private_key_to_der()),
        PrivateKeyAlgorithm::Ecdsa => key.ec_key().and_then(|k| k.private_key_to_der()),
    };
    encoded.map_err(|e| KeyCodecError::Encode(alg, e))
}

/// Decode a key from the DER form produced by [`encode`].
///
/// Input with trailing bytes, or in a non canonical layout, is rejected.
pub fn decode(data: &[u8]) -> Result<PKey<Private>, KeyCodecError> {
    match decode_as(PrivateKeyAlgorithm::Rsa, data) {
        Ok(key) => Ok(key),
        Err(rsa_err) => decode_as(PrivateKeyAlgorithm::Ecdsa, data).map_err(|ec_err| {
            KeyCodecError::Decode(format!(
                "neither PKCS#1 RSA nor SEC1 EC private key: {}; {}",
                reason(rsa_err),
                reason(ec_err)
            ))
        }),
    }
}

pub(super) fn decode_as(
    alg: PrivateKeyAlgorithm,
    data: &[u8],
) -> Result<PKey<Private>, KeyCodecError> {
    let key = match alg {
        PrivateKeyAlgorithm::Rsa => Rsa::private_key_from_der(data).and_then(PKey::from_rsa),
        PrivateKeyAlgorithm::Ecdsa => {
            EcKey::private_key_from_der(data).and_then(PKey::from_ec_key)
        }
    };
    let key = key.map_err(|e| KeyCodecError::Decode(format!("invalid {alg} key: {e}")))?;
    // the openssl parsers stop at the end of the outer sequence
    if encode(&key)? != data {
        return Err(KeyCodecError::Decode(format!(
            "trailing or non canonical data in {alg} key"
        )));
    }
    Ok(key)
}

fn reason(e: KeyCodecError) -> String {
    match e {
        KeyCodecError::Decode(s) => s,
        e => e.to_string(),
    }
}

/// The canonical bytes of `key`, or `None` if it can not be encoded.
pub fn key_bytes(key: &PKey<Private>) -> Option<Vec<u8>> {
    encode(key).ok()
}

/// Check whether two keys have the same canonical encoding.
///
/// Meant for verifying stored keys, not for authentication decisions.
pub fn keys_same(a: &PKey<Private>, b: &PKey<Private>) -> bool {
    match (key_bytes(a), key_bytes(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
