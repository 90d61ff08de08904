/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2024-2025 ByteDance and/or its affiliates.
 */

use keyrota_types::net::TicketKey;

/// Source of new session ticket keys.
pub trait TicketKeyGenerator: Send + Sync {
    fn generate(&self) -> anyhow::Result<TicketKey>;
}

/// Generate keys from the OpenSSL CSPRNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpensslTicketKeyGenerator;

impl TicketKeyGenerator for OpensslTicketKeyGenerator {
    fn generate(&self) -> anyhow::Result<TicketKey> {
        TicketKey::new_random()
    }
}
