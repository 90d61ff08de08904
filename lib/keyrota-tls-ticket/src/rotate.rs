/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2024-2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::time::Interval;
use tokio_util::sync::CancellationToken;

use keyrota_types::net::{SessionTicketState, TicketKeyWindow};

use super::{
    NoopRotationObserver, OpensslTicketKeyGenerator, RotationObserver, TicketKeyGenerator,
};

/// Periodically replaces the session ticket keys in a [`SessionTicketState`].
///
/// On every timer tick a new key is generated and put in front of the current
/// window, then the new window is published as a whole. The task stops when
/// the cancel token fires, or when no one else holds the shared state. The
/// last published keys stay in the shared state after it stops.
pub struct TicketKeyRotator {
    state: Arc<SessionTicketState>,
    window: Arc<TicketKeyWindow>,
    generator: Arc<dyn TicketKeyGenerator>,
    observer: Arc<dyn RotationObserver>,
}

impl TicketKeyRotator {
    pub fn new(state: Arc<SessionTicketState>) -> Self {
        let window = state.ticket_keys();
        TicketKeyRotator {
            state,
            window,
            generator: Arc::new(OpensslTicketKeyGenerator),
            observer: Arc::new(NoopRotationObserver),
        }
    }

    pub fn with_generator(mut self, generator: Arc<dyn TicketKeyGenerator>) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn RotationObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub async fn run(mut self, mut timer: Interval, cancel: CancellationToken) {
        info!(
            "session ticket key rotation started, with {} keys in window",
            self.window.capacity()
        );

        loop {
            if cancel.is_cancelled() {
                break;
            }

            tokio::select! {
                biased;

                _ = cancel.cancelled() => break,
                _ = timer.tick() => {}
            }

            if !self.rotate() {
                break;
            }

            if Arc::strong_count(&self.state) == 1 {
                debug!("session ticket state dropped by all users");
                break;
            }
        }

        info!("session ticket key rotation stopped");
    }

    /// Returns false if the rotation should be abandoned.
    ///
    /// A failure before any key was published is the only path that sets
    /// session tickets disabled.
    fn rotate(&mut self) -> bool {
        let key = match self.generator.generate() {
            Ok(key) => key,
            Err(e) if self.window.is_empty() => {
                error!("failed to create initial ticket key, session tickets disabled: {e:?}");
                self.state.set_session_tickets_disabled(true);
                return false;
            }
            Err(e) => {
                warn!("failed to create new ticket key, keep the old ones: {e:?}");
                return true;
            }
        };

        let window = Arc::new(self.window.push(key));
        self.state.set_ticket_keys(window.clone());
        self.state.set_session_tickets_disabled(false);
        self.window = window;
        debug!("rotated session ticket key, {} keys in use", self.window.size());

        if let Some(newest) = self.window.newest() {
            self.observer.on_rotate(newest, self.window.size());
        }
        true
    }
}
