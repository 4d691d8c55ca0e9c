// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation and CRD availability checks.

pub mod client;
pub mod crd;

pub use client::{connect, connect_with_kubeconfig};
pub use crd::{velero_crd_available, wait_for_velero_crd};
