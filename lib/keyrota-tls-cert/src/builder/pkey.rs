/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use anyhow::anyhow;
use openssl::ec::{EcGroup, EcKey};
use openssl::nid::Nid;
use openssl::pkey::{PKey, Private};
use openssl::rsa::Rsa;

pub fn new_ec256() -> anyhow::Result<PKey<Private>> {
    new_ec(Nid::X9_62_PRIME256V1, "P-256")
}

pub fn new_ec384() -> anyhow::Result<PKey<Private>> {
    new_ec(Nid::SECP384R1, "P-384")
}

pub fn new_ec521() -> anyhow::Result<PKey<Private>> {
    new_ec(Nid::SECP521R1, "P-521")
}

fn new_ec(curve: Nid, curve_name: &str) -> anyhow::Result<PKey<Private>> {
    let group = EcGroup::from_curve_name(curve)
        .map_err(|e| anyhow!("failed to get {curve_name} ec group: {e}"))?;
    let ec_key = EcKey::generate(&group).map_err(|e| anyhow!("failed to generate ec key: {e}"))?;
    PKey::from_ec_key(ec_key).map_err(|e| anyhow!("failed to convert ec key to pkey: {e}"))
}

pub fn new_rsa(bits: u32) -> anyhow::Result<PKey<Private>> {
    let rsa_key =
        Rsa::generate(bits).map_err(|e| anyhow!("failed to generate rsa {bits} keypair: {e}"))?;
    PKey::from_rsa(rsa_key).map_err(|e| anyhow!("failed to convert rsa key to pkey: {e}"))
}

/// Not usable for certificate storage, see [`crate::pkey::PrivateKeyAlgorithm`].
pub fn new_ed25519() -> anyhow::Result<PKey<Private>> {
    PKey::generate_ed25519().map_err(|e| anyhow!("failed to generate ed25519 pkey: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use openssl::pkey::Id;

    #[test]
    fn generate() {
        assert_eq!(new_rsa(1024).unwrap().id(), Id::RSA);
        assert_eq!(new_rsa(1024).unwrap().bits(), 1024);
        assert_eq!(new_ec256().unwrap().id(), Id::EC);
        assert_eq!(new_ec384().unwrap().bits(), 384);
        assert_eq!(new_ec521().unwrap().bits(), 521);
        assert_eq!(new_ed25519().unwrap().id(), Id::ED25519);
    }
}
