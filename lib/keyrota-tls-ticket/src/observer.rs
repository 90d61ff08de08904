/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2024-2025 ByteDance and/or its affiliates.
 */

use keyrota_types::net::TicketKey;

/// Called by the rotation task after each published rotation.
///
/// The call is made on the rotation task, after the new keys are visible to
/// handshakes and before waiting for the next tick. Implementations should
/// return quickly.
pub trait RotationObserver: Send + Sync {
    fn on_rotate(&self, newest: &TicketKey, keys_in_use: usize);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRotationObserver;

impl RotationObserver for NoopRotationObserver {
    fn on_rotate(&self, _newest: &TicketKey, _keys_in_use: usize) {}
}
