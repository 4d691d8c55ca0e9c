// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod fixture;
pub mod kubernetes;
pub mod telemetry;
pub mod types;
pub mod wait;
pub mod workload;

#[cfg(test)]
mod test_utils;

pub use error::{FixtureError, Result};
pub use fixture::{RunPrefix, VeleroDescriptor, VeleroFixture};
