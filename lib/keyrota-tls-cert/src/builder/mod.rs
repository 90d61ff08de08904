/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

mod pkey;
pub use pkey::{new_ec256, new_ec384, new_ec521, new_ed25519, new_rsa};
