// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The Velero CR managed by a test run: desired state, storage prefix and lifecycle.

pub mod descriptor;
pub mod lifecycle;
pub mod prefix;

pub use descriptor::VeleroDescriptor;
pub use lifecycle::VeleroFixture;
pub use prefix::RunPrefix;
