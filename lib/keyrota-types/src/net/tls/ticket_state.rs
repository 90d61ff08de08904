/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use arc_swap::ArcSwap;

use super::{TICKET_KEY_NAME_LENGTH, TicketKey, TicketKeyName, TicketKeyWindow};

/// Session ticket settings shared between the key rotation task and the
/// handshake tasks.
///
/// There is a single writer. Each update replaces the whole key window, so a
/// reader always gets a window that was published as a whole.
pub struct SessionTicketState {
    keys: ArcSwap<TicketKeyWindow>,
    disabled: AtomicBool,
}

impl Default for SessionTicketState {
    fn default() -> Self {
        SessionTicketState::with_window(TicketKeyWindow::default())
    }
}

impl SessionTicketState {
    pub fn new(num_tickets: NonZeroUsize) -> Self {
        SessionTicketState::with_window(TicketKeyWindow::new(num_tickets))
    }

    pub fn with_window(window: TicketKeyWindow) -> Self {
        SessionTicketState {
            keys: ArcSwap::from_pointee(window),
            disabled: AtomicBool::new(false),
        }
    }

    pub fn ticket_keys(&self) -> Arc<TicketKeyWindow> {
        self.keys.load_full()
    }

    pub fn set_ticket_keys(&self, window: Arc<TicketKeyWindow>) {
        self.keys.store(window);
    }

    pub fn session_tickets_disabled(&self) -> bool {
        self.disabled.load(Ordering::Acquire)
    }

    pub fn set_session_tickets_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::Release);
    }

    /// The key to issue new tickets with, if tickets are enabled.
    pub fn encrypt_key(&self) -> Option<TicketKey> {
        if self.session_tickets_disabled() {
            return None;
        }
        self.keys.load().newest().cloned()
    }

    /// The key to decrypt a ticket with, selected by the leading key name.
    pub fn get_decrypt_key(&self, ticket: &[u8]) -> Option<TicketKey> {
        if self.session_tickets_disabled() {
            return None;
        }
        let name = ticket.get(..TICKET_KEY_NAME_LENGTH)?;
        let key_name = TicketKeyName::try_from(name).ok()?;
        self.keys.load().get_by_name(&key_name).cloned()
    }
}
