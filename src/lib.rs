// SPDX-License-Identifier: MPL-2.0
//! `langswitch` selects and switches the display language of a desktop
//! application at runtime.
//!
//! It detects the host locale, loads Fluent catalogs from embedded or on-disk
//! resources, and notifies subscribers so visible strings can be refreshed
//! without a restart.

pub mod config;
pub mod error;
pub mod i18n;
