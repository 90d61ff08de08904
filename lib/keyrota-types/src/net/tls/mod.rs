/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

mod ticket_name;
pub use ticket_name::{TICKET_KEY_NAME_LENGTH, TicketKeyName};

mod ticket_key;
pub use ticket_key::{TICKET_KEY_LENGTH, TicketKey};

mod ticket_window;
pub use ticket_window::{DEFAULT_NUM_TICKETS, TicketKeyWindow};

mod ticket_state;
pub use ticket_state::SessionTicketState;
