// SPDX-License-Identifier: MIT OR Apache-2.0
//! Small free-standing helpers shared across the backend and coordination
//! layers.

pub mod idgen;
pub mod keys;
