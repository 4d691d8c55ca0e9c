// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CRD availability checking utilities

use crate::constants::crd::{GROUP, KIND, VERSION};
use crate::error::Result;
use crate::wait::{poll_with, PollSettings};
use kube::{discovery::Discovery, Client};
use tracing::{info, warn};

/// Wait until the API server serves the Velero CRD.
///
/// Discovery failures are logged and retried; only the timeout ends the wait early.
pub async fn wait_for_velero_crd(client: &Client, settings: PollSettings) -> Result<()> {
    poll_with(settings, move || async move {
        match velero_crd_available(client).await {
            Ok(true) => {
                info!("Velero CRD ({}/{}) is available", GROUP, VERSION);
                Ok(true)
            }
            Ok(false) => {
                info!("Velero CRD ({}/{}) not yet available", GROUP, VERSION);
                Ok(false)
            }
            Err(e) => {
                warn!("Error checking for Velero CRD: {}, retrying", e);
                Ok(false)
            }
        }
    })
    .await
}

/// Check if the Velero CRD is served by attempting to discover it.
pub async fn velero_crd_available(client: &Client) -> Result<bool> {
    let discovery = Discovery::new(client.clone())
        .filter(&[GROUP])
        .run()
        .await?;

    for group in discovery.groups() {
        if group.name() == GROUP {
            for (ar, _) in group.recommended_resources() {
                if ar.kind == KIND && ar.version == VERSION {
                    return Ok(true);
                }
            }
        }
    }

    Ok(false)
}
