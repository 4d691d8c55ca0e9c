// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::workload::LABEL_SELECTOR;
use crate::error::Result;
use crate::wait::{poll_with, PollSettings};
use k8s_openapi::api::core::v1::Pod;
use kube::{api::ListParams, Api, Client, ResourceExt};
use tracing::{debug, info, instrument};

const RUNNING: &str = "Running";

/// How the phases of several matching pods combine into one answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PodReadiness {
    /// At least one matching pod is running
    #[default]
    AnyRunning,
    /// Every matching pod is running
    AllRunning,
}

/// List the pods in `namespace` matching `label_selector`
#[instrument(skip(client))]
pub async fn fetch_pods(client: &Client, namespace: &str, label_selector: &str) -> Result<Vec<Pod>> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let pod_list = pods
        .list(&ListParams::default().labels(label_selector))
        .await?;
    debug!("Found {} pod(s) matching {}", pod_list.items.len(), label_selector);
    Ok(pod_list.items)
}

fn is_running(pod: &Pod) -> bool {
    pod.status
        .as_ref()
        .and_then(|s| s.phase.as_deref())
        .is_some_and(|phase| phase == RUNNING)
}

/// Apply `policy` to a pod snapshot. An empty snapshot is never running.
pub fn pods_running(pods: &[Pod], policy: PodReadiness) -> bool {
    if pods.is_empty() {
        return false;
    }
    match policy {
        PodReadiness::AnyRunning => pods.iter().any(is_running),
        PodReadiness::AllRunning => pods.iter().all(is_running),
    }
}

/// One check of whether the Velero pods in `namespace` are running
pub async fn is_velero_pod_running(
    client: &Client,
    namespace: &str,
    policy: PodReadiness,
) -> Result<bool> {
    let pods = fetch_pods(client, namespace, LABEL_SELECTOR).await?;
    let running = pods_running(&pods, policy);
    if !running {
        for pod in &pods {
            debug!(
                "Pod {} phase: {}",
                pod.name_any(),
                pod.status
                    .as_ref()
                    .and_then(|s| s.phase.as_deref())
                    .unwrap_or("Unknown")
            );
        }
    }
    Ok(running)
}

/// Poll until the Velero pods satisfy `policy`
pub async fn wait_for_velero_pods(
    client: &Client,
    namespace: &str,
    policy: PodReadiness,
    settings: PollSettings,
) -> Result<()> {
    info!("Waiting for Velero pods in {} ({:?})", namespace, policy);
    poll_with(settings, move || is_velero_pod_running(client, namespace, policy)).await
}
