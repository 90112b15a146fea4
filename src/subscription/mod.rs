// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host notification for entity updates.
//!
//! The unit offers no push channel, so the only state changes the host
//! needs to hear about are the ones that follow a user command: after the
//! command and its follow-up fetch, the entity dispatches its unique id
//! through a shared [`CallbackRegistry`]. Periodic polls do not notify; the
//! host re-reads properties on its own schedule after calling `update()`.

mod callback;
mod subscribable;

pub use callback::{CallbackRegistry, SubscriptionId};
pub use subscribable::Subscribable;
