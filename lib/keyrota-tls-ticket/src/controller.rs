/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2024-2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::Interval;
use tokio_util::sync::CancellationToken;

use keyrota_types::net::SessionTicketState;

use super::{
    NoopRotationObserver, OpensslTicketKeyGenerator, RotationObserver, TicketKeyGenerator,
    TicketKeyRotator,
};

/// Spawns ticket key rotation tasks for server TLS settings.
#[derive(Clone)]
pub struct RotationController {
    generator: Arc<dyn TicketKeyGenerator>,
    observer: Arc<dyn RotationObserver>,
}

impl Default for RotationController {
    fn default() -> Self {
        RotationController {
            generator: Arc::new(OpensslTicketKeyGenerator),
            observer: Arc::new(NoopRotationObserver),
        }
    }
}

impl RotationController {
    pub fn with_generator(mut self, generator: Arc<dyn TicketKeyGenerator>) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn RotationObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub(crate) fn generator(&self) -> &Arc<dyn TicketKeyGenerator> {
        &self.generator
    }

    /// Run rotation on `state` in a new task, until `cancel` fires.
    ///
    /// Must be called inside a tokio runtime.
    pub fn start(
        &self,
        state: Arc<SessionTicketState>,
        timer: Interval,
        cancel: CancellationToken,
    ) -> JoinHandle<()> {
        let rotator = TicketKeyRotator::new(state)
            .with_generator(self.generator.clone())
            .with_observer(self.observer.clone());
        tokio::spawn(rotator.run(timer, cancel))
    }
}
