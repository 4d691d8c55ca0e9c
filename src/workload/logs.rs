// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Container log retrieval and failure line extraction

use crate::constants::workload::{CONTAINER_NAME, ERROR_MARKER, LABEL_SELECTOR, POD_NAME_PREFIX};
use crate::error::Result;
use crate::workload::pods::fetch_pods;
use futures::{pin_mut, AsyncReadExt};
use k8s_openapi::api::core::v1::Pod;
use kube::{api::LogParams, Api, Client, ResourceExt};
use std::fmt;
use tracing::{debug, instrument, warn};

/// A log line containing the error marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureLine {
    /// 1-based position in the log text
    pub line_number: usize,
    pub text: String,
}

impl fmt::Display for FailureLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "velero container error line#{}: {}",
            self.line_number, self.text
        )
    }
}

/// Outcome of a best-effort failure scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostics {
    /// Logs were read; the lines may be empty
    Available(Vec<FailureLine>),
    /// Logs could not be read
    Unavailable(String),
}

impl Diagnostics {
    pub fn failure_lines(&self) -> Option<&[FailureLine]> {
        match self {
            Diagnostics::Available(lines) => Some(lines),
            Diagnostics::Unavailable(_) => None,
        }
    }

    /// Logs were read and contain no failures
    pub fn is_clean(&self) -> bool {
        matches!(self, Diagnostics::Available(lines) if lines.is_empty())
    }
}

/// Lines of `logs` containing `level=error`, in order
pub fn extract_failure_lines(logs: &str) -> Vec<FailureLine> {
    logs.lines()
        .enumerate()
        .filter(|(_, line)| line.contains(ERROR_MARKER))
        .map(|(i, line)| FailureLine {
            line_number: i + 1,
            text: line.to_string(),
        })
        .collect()
}

/// Logs of `container` across the Velero pods whose name starts with `pod_prefix`.
///
/// Pods are read in name order and their logs concatenated, each starting on a
/// fresh line.
#[instrument(skip(client))]
pub async fn fetch_container_logs(
    client: &Client,
    namespace: &str,
    container: &str,
    pod_prefix: &str,
) -> Result<String> {
    let mut names: Vec<String> = fetch_pods(client, namespace, LABEL_SELECTOR)
        .await?
        .iter()
        .map(|pod| pod.name_any())
        .filter(|name| name.starts_with(pod_prefix))
        .collect();
    names.sort();

    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let mut logs = String::new();
    for name in &names {
        let pod_logs = read_container_log(&pods, name, container).await?;
        if !logs.is_empty() && !logs.ends_with('\n') {
            logs.push('\n');
        }
        logs.push_str(&pod_logs);
    }
    debug!("Read {} byte(s) of logs from {} pod(s)", logs.len(), names.len());
    Ok(logs)
}

async fn read_container_log(pods: &Api<Pod>, pod: &str, container: &str) -> Result<String> {
    let params = LogParams {
        container: Some(container.to_string()),
        ..Default::default()
    };
    let stream = pods.log_stream(pod, &params).await?;
    pin_mut!(stream);

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Scan the Velero container logs for failure lines.
///
/// Never fails: when the logs cannot be read the error is logged and
/// reported as [`Diagnostics::Unavailable`].
pub async fn collect_failure_lines(client: &Client, namespace: &str) -> Diagnostics {
    match fetch_container_logs(client, namespace, CONTAINER_NAME, POD_NAME_PREFIX).await {
        Ok(logs) => Diagnostics::Available(extract_failure_lines(&logs)),
        Err(e) => {
            warn!("Cannot get velero container logs: {}", e);
            Diagnostics::Unavailable(e.to_string())
        }
    }
}
