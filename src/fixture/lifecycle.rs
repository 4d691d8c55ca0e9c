// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Create, read, update and delete of the Velero CR under test

use crate::error::{is_already_exists, is_not_found, FixtureError, Result};
use crate::fixture::descriptor::VeleroDescriptor;
use crate::types::{Velero, VeleroSpec};
use crate::wait::{poll_with, PollSettings};
use kube::{
    api::{DeleteParams, PostParams},
    Api, Client,
};
use tracing::{debug, info, instrument};

/// A Velero CR owned by a test run.
///
/// All calls go straight to the API server. Only the built desired-state
/// document is kept locally; server replies are returned, never stored.
pub struct VeleroFixture {
    client: Client,
    descriptor: VeleroDescriptor,
    custom_resource: Option<Velero>,
}

impl VeleroFixture {
    pub fn new(client: Client, descriptor: VeleroDescriptor) -> Self {
        Self {
            client,
            descriptor,
            custom_resource: None,
        }
    }

    pub fn descriptor(&self) -> &VeleroDescriptor {
        &self.descriptor
    }

    /// Mutable access to the desired configuration; call [`build`](Self::build) afterwards
    pub fn descriptor_mut(&mut self) -> &mut VeleroDescriptor {
        &mut self.descriptor
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// The desired-state document `create` will send
    pub fn custom_resource(&self) -> Option<&Velero> {
        self.custom_resource.as_ref()
    }

    /// Populate the desired-state document from the descriptor
    pub fn build(&mut self) -> &Velero {
        self.custom_resource.insert(self.descriptor.build())
    }

    fn api(&self) -> Api<Velero> {
        Api::namespaced(self.client.clone(), self.descriptor.namespace())
    }

    fn not_found(&self) -> FixtureError {
        FixtureError::NotFound {
            namespace: self.descriptor.namespace().to_string(),
            name: self.descriptor.name().to_string(),
        }
    }

    /// Persist the built document, building it first if needed.
    ///
    /// An existing CR with the same name is an error: it was left behind by a
    /// previous run.
    #[instrument(skip(self), fields(velero = %self.key()))]
    pub async fn create(&mut self) -> Result<Velero> {
        let desired = match &self.custom_resource {
            Some(built) => built.clone(),
            None => self.descriptor.build(),
        };

        match self.api().create(&PostParams::default(), &desired).await {
            Ok(created) => {
                info!("Created Velero CR {}", self.key());
                self.custom_resource = Some(desired);
                Ok(created)
            }
            Err(e) if is_already_exists(&e) => Err(FixtureError::AlreadyExists {
                namespace: self.descriptor.namespace().to_string(),
                name: self.descriptor.name().to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch the current CR
    #[instrument(skip(self), fields(velero = %self.key()))]
    pub async fn get(&self) -> Result<Velero> {
        match self.api().get(self.descriptor.name()).await {
            Ok(velero) => Ok(velero),
            Err(e) if is_not_found(&e) => Err(self.not_found()),
            Err(e) => Err(e.into()),
        }
    }

    /// Create the CR with `spec`, or replace the spec of the existing one.
    ///
    /// Only a `NotFound` read leads to creation; any other read failure is returned.
    #[instrument(skip(self, spec), fields(velero = %self.key()))]
    pub async fn create_or_update(&mut self, spec: VeleroSpec) -> Result<Velero> {
        let mut existing = match self.get().await {
            Ok(existing) => existing,
            Err(FixtureError::NotFound { .. }) => {
                debug!("Velero CR {} absent, creating it", self.key());
                self.custom_resource = Some(self.descriptor.document(spec));
                return self.create().await;
            }
            Err(e) => return Err(e),
        };

        existing.spec = spec.clone();
        let updated = self
            .api()
            .replace(self.descriptor.name(), &PostParams::default(), &existing)
            .await?;
        info!("Updated Velero CR {}", self.key());
        self.custom_resource = Some(self.descriptor.document(spec));
        Ok(updated)
    }

    /// Delete the CR; deleting an absent CR succeeds
    #[instrument(skip(self), fields(velero = %self.key()))]
    pub async fn delete(&self) -> Result<()> {
        match self
            .api()
            .delete(self.descriptor.name(), &DeleteParams::default())
            .await
        {
            Ok(_) => {
                info!("Deleted Velero CR {}", self.key());
                Ok(())
            }
            Err(e) if is_not_found(&e) => {
                debug!("Velero CR {} already gone", self.key());
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// One check of the deletion condition: `true` once the CR is absent
    pub async fn is_deleted(&self) -> Result<bool> {
        match self.get().await {
            Ok(_) => Ok(false),
            Err(FixtureError::NotFound { .. }) => Ok(true),
            Err(e) => Err(e),
        }
    }

    /// Poll [`is_deleted`](Self::is_deleted) until the CR is gone
    pub async fn wait_deleted(&self, settings: PollSettings) -> Result<()> {
        info!("Waiting for Velero CR {} to be deleted", self.key());
        poll_with(settings, move || self.is_deleted()).await
    }

    fn key(&self) -> String {
        format!("{}/{}", self.descriptor.namespace(), self.descriptor.name())
    }
}
