// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Desired configuration of the Velero CR under test

use crate::config::Config;
use crate::constants::storage::{CREDENTIALS_KEY, REGION_CONFIG_KEY};
use crate::fixture::prefix::RunPrefix;
use crate::types::{
    BackupStorageLocationSpec, CredentialRef, DefaultPlugin, ObjectStorageLocation, Velero,
    VeleroSpec,
};
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

/// Identity and storage settings of one Velero CR
#[derive(Debug, Clone, PartialEq)]
pub struct VeleroDescriptor {
    name: String,
    namespace: String,
    pub provider: String,
    pub region: String,
    pub bucket: String,
    /// Credentials secret; no credential reference is emitted when unset
    pub secret_name: Option<String>,
    pub plugins: Vec<DefaultPlugin>,
    run_prefix: RunPrefix,
}

impl VeleroDescriptor {
    pub fn new(name: &str, namespace: &str, run_prefix: RunPrefix) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            provider: "aws".to_string(),
            region: String::new(),
            bucket: String::new(),
            secret_name: None,
            plugins: vec![DefaultPlugin::OpenShift, DefaultPlugin::Aws],
            run_prefix,
        }
    }

    pub fn from_config(config: &Config, run_prefix: RunPrefix) -> Self {
        Self::new(&config.instance_name, &config.namespace, run_prefix)
            .with_storage(&config.provider, &config.region, &config.bucket)
            .with_secret(&config.secret_name)
    }

    pub fn with_storage(mut self, provider: &str, region: &str, bucket: &str) -> Self {
        self.provider = provider.to_string();
        self.region = region.to_string();
        self.bucket = bucket.to_string();
        self
    }

    pub fn with_secret(mut self, secret_name: &str) -> Self {
        self.secret_name = Some(secret_name.to_string());
        self
    }

    pub fn with_plugins(mut self, plugins: impl IntoIterator<Item = DefaultPlugin>) -> Self {
        self.plugins = plugins.into_iter().collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn run_prefix(&self) -> &RunPrefix {
        &self.run_prefix
    }

    /// Desired spec: restic enabled with a single default backup storage location
    pub fn spec(&self) -> VeleroSpec {
        let mut config = BTreeMap::new();
        if !self.region.is_empty() {
            config.insert(REGION_CONFIG_KEY.to_string(), self.region.clone());
        }

        VeleroSpec {
            enable_restic: Some(true),
            backup_storage_locations: vec![BackupStorageLocationSpec {
                provider: self.provider.clone(),
                config,
                default: true,
                object_storage: ObjectStorageLocation {
                    bucket: self.bucket.clone(),
                    prefix: self.run_prefix.to_string(),
                },
                credential: self.secret_name.as_ref().map(|name| CredentialRef {
                    name: name.clone(),
                    key: CREDENTIALS_KEY.to_string(),
                }),
            }],
            default_velero_plugins: self.plugins.clone(),
        }
    }

    /// Full desired-state document
    pub fn build(&self) -> Velero {
        self.document(self.spec())
    }

    /// Document carrying this descriptor's identity with an arbitrary spec
    pub fn document(&self, spec: VeleroSpec) -> Velero {
        Velero {
            metadata: ObjectMeta {
                name: Some(self.name.clone()),
                namespace: Some(self.namespace.clone()),
                ..Default::default()
            },
            spec,
            status: None,
        }
    }
}
