// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resource types managed by the fixture.

pub mod velero;

pub use velero::{
    BackupStorageLocationSpec, CredentialRef, DefaultPlugin, ObjectStorageLocation, Velero,
    VeleroSpec, VeleroStatus,
};
