/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::num::NonZeroUsize;

use super::{TicketKey, TicketKeyName};

/// How many ticket keys are kept to decrypt resumed sessions.
pub const DEFAULT_NUM_TICKETS: NonZeroUsize = NonZeroUsize::new(4).unwrap();

/// The ticket keys currently in use, newest first.
///
/// The newest key encrypts new tickets, all keys decrypt. A window value is
/// never changed in place, [`TicketKeyWindow::push`] returns a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketKeyWindow {
    capacity: NonZeroUsize,
    keys: Vec<TicketKey>,
}

impl Default for TicketKeyWindow {
    fn default() -> Self {
        TicketKeyWindow::new(DEFAULT_NUM_TICKETS)
    }
}

impl TicketKeyWindow {
    pub fn new(capacity: NonZeroUsize) -> Self {
        TicketKeyWindow {
            capacity,
            keys: Vec::new(),
        }
    }

    /// Insert `key` in front and evict the oldest keys beyond the capacity.
    #[must_use]
    pub fn push(&self, key: TicketKey) -> TicketKeyWindow {
        let capacity = self.capacity.get();
        let mut keys = Vec::with_capacity(capacity);
        keys.push(key);
        keys.extend(self.keys.iter().take(capacity - 1).cloned());
        TicketKeyWindow {
            capacity: self.capacity,
            keys,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// The key to encrypt new tickets with.
    pub fn newest(&self) -> Option<&TicketKey> {
        self.keys.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TicketKey> {
        self.keys.iter()
    }

    pub fn keys(&self) -> &[TicketKey] {
        &self.keys
    }

    /// Find the decrypt key for a ticket key name.
    pub fn get_by_name(&self, name: &TicketKeyName) -> Option<&TicketKey> {
        self.keys.iter().find(|k| k.name() == name)
    }
}
