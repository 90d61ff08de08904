/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::hash::{Hash, Hasher};

pub const TICKET_KEY_NAME_LENGTH: usize = 16;

/// The public identifier of a ticket key, sent in clear in every ticket.
#[derive(Clone, Copy)]
pub struct TicketKeyName([u8; TICKET_KEY_NAME_LENGTH]);

impl From<[u8; TICKET_KEY_NAME_LENGTH]> for TicketKeyName {
    fn from(value: [u8; TICKET_KEY_NAME_LENGTH]) -> Self {
        TicketKeyName(value)
    }
}

impl AsRef<[u8]> for TicketKeyName {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for TicketKeyName {
    type Error = ();

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let name = <[u8; TICKET_KEY_NAME_LENGTH]>::try_from(value).map_err(|_| ())?;
        Ok(TicketKeyName(name))
    }
}

impl Hash for TicketKeyName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl PartialEq for TicketKeyName {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq::constant_time_eq_16(&self.0, &other.0)
    }
}

impl Eq for TicketKeyName {}

impl fmt::Debug for TicketKeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TicketKeyName(")?;
        for b in self.0 {
            write!(f, "{b:02x}")?;
        }
        f.write_str(")")
    }
}

impl TicketKeyName {
    /// Compare with the leading bytes of a received ticket.
    pub fn constant_time_eq(&self, buf: &[u8]) -> bool {
        if buf.len() < TICKET_KEY_NAME_LENGTH {
            return false;
        }
        constant_time_eq::constant_time_eq(&self.0, &buf[..TICKET_KEY_NAME_LENGTH])
    }
}
