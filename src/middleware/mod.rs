// SPDX-License-Identifier: MIT

//! Middleware modules (passcode gate, security headers).

pub mod passcode;
pub mod security;

pub use passcode::require_passcode;
