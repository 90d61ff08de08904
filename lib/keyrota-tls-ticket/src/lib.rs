/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2024-2025 ByteDance and/or its affiliates.
 */

mod config;
pub use config::{DEFAULT_ROTATE_INTERVAL, TlsTicketConfig};

mod generate;
pub use generate::{OpensslTicketKeyGenerator, TicketKeyGenerator};

mod observer;
pub use observer::{NoopRotationObserver, RotationObserver};

mod rotate;
pub use rotate::TicketKeyRotator;

mod controller;
pub use controller::RotationController;
