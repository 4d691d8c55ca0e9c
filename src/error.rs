// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Velero CR {namespace}/{name} not found")]
    NotFound { namespace: String, name: String },

    #[error("found unexpected existing Velero CR {namespace}/{name}")]
    AlreadyExists { namespace: String, name: String },

    #[error("Timed out after {waited:?} waiting for condition")]
    Timeout { waited: Duration },

    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    Kubeconfig(String),

    #[error("Failed to read log stream: {0}")]
    LogStream(#[from] std::io::Error),
}

impl FixtureError {
    pub fn is_not_found(&self) -> bool {
        match self {
            FixtureError::NotFound { .. } => true,
            FixtureError::Kube(e) => is_not_found(e),
            _ => false,
        }
    }
}

pub(crate) fn is_not_found(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(resp) if resp.code == 404)
}

pub(crate) fn is_already_exists(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(resp) if resp.code == 409 && resp.reason == "AlreadyExists")
}

pub type Result<T> = std::result::Result<T, FixtureError>;
