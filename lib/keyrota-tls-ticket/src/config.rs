/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2024-2025 ByteDance and/or its affiliates.
 */

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, anyhow};
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use keyrota_types::net::{DEFAULT_NUM_TICKETS, SessionTicketState, TicketKeyWindow};

use super::{RotationController, TicketKeyGenerator};

#[cfg(feature = "yaml")]
mod yaml;

pub const DEFAULT_ROTATE_INTERVAL: Duration = Duration::from_secs(10 * 60 * 60);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TlsTicketConfig {
    pub(crate) rotate_interval: Duration,
    pub(crate) num_tickets: NonZeroUsize,
    pub(crate) disabled: bool,
}

impl Default for TlsTicketConfig {
    fn default() -> Self {
        TlsTicketConfig {
            rotate_interval: DEFAULT_ROTATE_INTERVAL,
            num_tickets: DEFAULT_NUM_TICKETS,
            disabled: false,
        }
    }
}

impl TlsTicketConfig {
    pub fn rotate_interval(&self) -> Duration {
        self.rotate_interval
    }

    pub fn set_rotate_interval(&mut self, interval: Duration) {
        self.rotate_interval = interval;
    }

    pub fn num_tickets(&self) -> NonZeroUsize {
        self.num_tickets
    }

    pub fn set_num_tickets(&mut self, num: NonZeroUsize) {
        self.num_tickets = num;
    }

    pub fn session_tickets_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_session_tickets_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub(crate) fn check(&self) -> anyhow::Result<()> {
        if !self.disabled && self.rotate_interval.is_zero() {
            return Err(anyhow!("rotate interval should not be zero"));
        }
        Ok(())
    }

    /// Build the shared session ticket state, and spawn the rotation task if
    /// session tickets are enabled.
    ///
    /// The returned state already holds one key. The rotation task keeps
    /// running until `cancel` fires or the returned state is dropped.
    pub fn build_and_spawn_rotator(
        &self,
        cancel: CancellationToken,
    ) -> anyhow::Result<Arc<SessionTicketState>> {
        self.build_and_spawn_rotator_with(&RotationController::default(), cancel)
    }

    pub fn build_and_spawn_rotator_with(
        &self,
        controller: &RotationController,
        cancel: CancellationToken,
    ) -> anyhow::Result<Arc<SessionTicketState>> {
        self.check()?;

        if self.disabled {
            let state = SessionTicketState::new(self.num_tickets);
            state.set_session_tickets_disabled(true);
            return Ok(Arc::new(state));
        }

        let initial_key = controller
            .generator()
            .generate()
            .context("failed to create initial ticket key")?;
        let window = TicketKeyWindow::new(self.num_tickets).push(initial_key);
        let state = Arc::new(SessionTicketState::with_window(window));

        let mut timer =
            tokio::time::interval_at(Instant::now() + self.rotate_interval, self.rotate_interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
        controller.start(state.clone(), timer, cancel);
        Ok(state)
    }
}
