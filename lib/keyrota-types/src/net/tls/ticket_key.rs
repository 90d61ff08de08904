/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;

use anyhow::anyhow;
use openssl::rand;

use super::{TICKET_KEY_NAME_LENGTH, TicketKeyName};

pub const TICKET_KEY_LENGTH: usize = 32;

/// A session ticket key.
///
/// The 32 secret bytes are the master secret the TLS layer expands into its
/// encryption and MAC keys. The name is derived from the secret the same way
/// most TLS stacks do it: the leading bytes of its SHA-512 digest.
#[derive(Clone)]
pub struct TicketKey {
    name: TicketKeyName,
    secret: [u8; TICKET_KEY_LENGTH],
}

impl TicketKey {
    pub fn new(secret: [u8; TICKET_KEY_LENGTH]) -> Self {
        let digest = openssl::sha::sha512(&secret);
        let mut name = [0u8; TICKET_KEY_NAME_LENGTH];
        name.copy_from_slice(&digest[..TICKET_KEY_NAME_LENGTH]);
        TicketKey {
            name: name.into(),
            secret,
        }
    }

    pub fn new_random() -> anyhow::Result<Self> {
        let mut secret = [0u8; TICKET_KEY_LENGTH];
        rand::rand_bytes(&mut secret)
            .map_err(|e| anyhow!("failed to generate random ticket key: {e}"))?;
        Ok(TicketKey::new(secret))
    }

    #[inline]
    pub fn name(&self) -> &TicketKeyName {
        &self.name
    }

    #[inline]
    pub fn secret(&self) -> &[u8; TICKET_KEY_LENGTH] {
        &self.secret
    }
}

impl PartialEq for TicketKey {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq::constant_time_eq_32(&self.secret, &other.secret)
    }
}

impl Eq for TicketKey {}

impl fmt::Debug for TicketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketKey")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_keys_differ() {
        let a = TicketKey::new_random().unwrap();
        let b = TicketKey::new_random().unwrap();
        assert_ne!(a, b);
        assert_ne!(a.name(), b.name());
    }

    #[test]
    fn name_is_stable() {
        let a = TicketKey::new([1u8; TICKET_KEY_LENGTH]);
        let b = TicketKey::new([1u8; TICKET_KEY_LENGTH]);
        assert_eq!(a, b);
        assert_eq!(a.name(), b.name());

        let digest = openssl::sha::sha512(&[1u8; TICKET_KEY_LENGTH]);
        assert_eq!(a.name().as_ref(), &digest[..TICKET_KEY_NAME_LENGTH]);
    }

    #[test]
    fn debug_hides_secret() {
        let key = TicketKey::new([0x5au8; TICKET_KEY_LENGTH]);
        let s = format!("{key:?}");
        assert!(s.contains("name"));
        assert!(!s.contains("secret"));
    }
}
