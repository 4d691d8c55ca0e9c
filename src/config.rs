// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::poll;
use crate::wait::PollSettings;
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Fixture configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace the OADP operator watches
    pub namespace: String,
    pub instance_name: String,
    pub bucket: String,
    pub region: String,
    pub provider: String,
    /// Secret holding the cloud credentials for the backup storage location
    pub secret_name: String,
    pub poll: PollSettings,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let namespace = lookup("VELERO_NAMESPACE")
            .context("VELERO_NAMESPACE environment variable not set")?;
        let bucket =
            lookup("VELERO_BUCKET").context("VELERO_BUCKET environment variable not set")?;
        let or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let interval = parse_secs(&lookup, "POLL_INTERVAL_SECS", poll::INTERVAL_SECS)?;
        let timeout = parse_secs(&lookup, "POLL_TIMEOUT_SECS", poll::TIMEOUT_SECS)?;

        Ok(Config {
            namespace,
            instance_name: or_default("VELERO_INSTANCE_NAME", "example-velero"),
            bucket,
            region: or_default("VELERO_REGION", "us-east-1"),
            provider: or_default("VELERO_PROVIDER", "aws"),
            secret_name: or_default("VELERO_SECRET_NAME", "cloud-credentials"),
            poll: PollSettings { interval, timeout },
        })
    }
}

fn parse_secs<F>(lookup: &F, key: &str, default: u64) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let secs = match lookup(key) {
        Some(v) => v
            .parse::<u64>()
            .with_context(|| format!("{} must be a number of seconds, got '{}'", key, v))?,
        None => default,
    };
    Ok(Duration::from_secs(secs))
}
