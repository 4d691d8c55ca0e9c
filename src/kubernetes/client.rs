// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation for the cluster under test

use crate::error::{FixtureError, Result};
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config as KConfig,
};
use std::path::Path;
use tracing::{debug, info};

/// Connect using the in-cluster environment or the `KUBECONFIG` default
pub async fn connect() -> Result<Client> {
    let config = KConfig::infer()
        .await
        .map_err(|e| FixtureError::Kubeconfig(format!("Failed to infer config: {}", e)))?;
    debug!("Connecting to {}", config.cluster_url);

    let client = Client::try_from(config)
        .map_err(|e| FixtureError::Kubeconfig(format!("Failed to create client: {}", e)))?;
    info!("Connected to Kubernetes cluster");
    Ok(client)
}

/// Connect using an explicit kubeconfig file
pub async fn connect_with_kubeconfig(path: &Path) -> Result<Client> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        FixtureError::Kubeconfig(format!("Failed to read {}: {}", path.display(), e))
    })?;
    create_client_from_kubeconfig(&raw).await
}

async fn create_client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| FixtureError::Kubeconfig(format!("Failed to parse kubeconfig: {}", e)))?;

    let client_config =
        KConfig::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| FixtureError::Kubeconfig(format!("Failed to create config: {}", e)))?;

    Client::try_from(client_config)
        .map_err(|e| FixtureError::Kubeconfig(format!("Failed to create client: {}", e)))
}
