//! Internal utilities for the chapoly library
//!
//! Not part of the public API contract: the little-endian codec used by the
//! cipher state setup and the constant-time primitives used by tag
//! verification.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
