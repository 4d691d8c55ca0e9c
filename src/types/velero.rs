// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[kube(group = "oadp.openshift.io", version = "v1alpha1", kind = "Velero")]
#[kube(namespaced)]
#[kube(status = "VeleroStatus")]
#[serde(rename_all = "camelCase")]
pub struct VeleroSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_restic: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub backup_storage_locations: Vec<BackupStorageLocationSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_velero_plugins: Vec<DefaultPlugin>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BackupStorageLocationSpec {
    pub provider: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub config: BTreeMap<String, String>,
    #[serde(default)]
    pub default: bool,
    pub object_storage: ObjectStorageLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<CredentialRef>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ObjectStorageLocation {
    pub bucket: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefix: String,
}

/// Reference to a key inside a secret in the Velero namespace
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
pub struct CredentialRef {
    pub name: String,
    pub key: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DefaultPlugin {
    #[serde(rename = "openshift")]
    OpenShift,
    Aws,
    Gcp,
    Azure,
    Csi,
    #[serde(rename = "kubevirt")]
    KubeVirt,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VeleroStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
