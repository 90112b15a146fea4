// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for air-conditioner control.
//!
//! Each type maps one field of the unit's JSON API onto a closed set of
//! values, so that commands cannot carry strings the unit would reject.
//!
//! # Types
//!
//! - [`PowerState`] - `on` / `off`
//! - [`HvacMode`] - `cool` / `heat` / `fan_only` / `off`
//! - [`FanSpeed`] - `auto` / `low` / `medium` / `high`
//! - [`DamperState`] - `open` / `closed` (sent as `close`)
//! - [`Zone`] - Configured zone name

mod damper;
mod fan_speed;
mod hvac_mode;
mod power;
mod zone;

pub use damper::DamperState;
pub use fan_speed::FanSpeed;
pub use hvac_mode::HvacMode;
pub use power::PowerState;
pub use zone::Zone;
