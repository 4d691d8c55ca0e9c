// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Inspection of the Velero deployment's pods and their logs.

pub mod logs;
pub mod pods;

pub use logs::{
    collect_failure_lines, extract_failure_lines, fetch_container_logs, Diagnostics, FailureLine,
};
pub use pods::{fetch_pods, is_velero_pod_running, pods_running, wait_for_velero_pods, PodReadiness};
