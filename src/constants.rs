// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// API coordinates of the OADP Velero custom resource
pub mod crd {
    pub const GROUP: &str = "oadp.openshift.io";
    pub const VERSION: &str = "v1alpha1";
    pub const KIND: &str = "Velero";
}

/// Velero workload identification
pub mod workload {
    /// Label selector matching the Velero deployment's pods
    pub const LABEL_SELECTOR: &str = "component=velero";
    pub const CONTAINER_NAME: &str = "velero";
    pub const POD_NAME_PREFIX: &str = "velero-";
    /// Substring marking a failure line in Velero's logrus output
    pub const ERROR_MARKER: &str = "level=error";
}

/// Backup storage location defaults
pub mod storage {
    /// Prefix of the per-process object storage path
    pub const RUN_PREFIX: &str = "velero-e2e-";
    /// Key inside the credentials secret holding the cloud credentials file
    pub const CREDENTIALS_KEY: &str = "cloud";
    pub const REGION_CONFIG_KEY: &str = "region";
}

/// Condition polling defaults
pub mod poll {
    pub const INTERVAL_SECS: u64 = 5;
    pub const TIMEOUT_SECS: u64 = 180;
}
