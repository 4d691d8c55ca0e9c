// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Scripted Kubernetes API server for unit tests.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

type Key = (String, String);

/// A request the mock received
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

#[derive(Default)]
struct MockState {
    responses: HashMap<Key, VecDeque<(u16, String)>>,
    requests: Vec<RecordedRequest>,
}

/// A mock HTTP service answering by exact (method, path).
///
/// Registering the same method and path more than once queues the responses;
/// the last one keeps being served once the queue is drained. Unmatched
/// requests get a `NotFound` status.
#[derive(Clone, Default)]
pub struct MockService {
    state: Arc<Mutex<MockState>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .responses
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back((status, body.to_string()));
        self
    }

    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    pub fn on_put(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PUT", path, status, body)
    }

    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.on("DELETE", path, status, body)
    }

    /// Build a kube Client backed by a handle to this mock
    pub fn client(&self) -> Client {
        Client::new(self.clone(), "default")
    }

    /// Requests received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn requests_for(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    fn next_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let mut state = self.state.lock().unwrap();
        let queue = state
            .responses
            .get_mut(&(method.to_string(), path.to_string()))?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let mock = self.clone();

        Box::pin(async move {
            let method = req.method().to_string();
            let path = req.uri().path().to_string();
            let query = req.uri().query().map(str::to_string);
            let body = req.into_body().collect_bytes().await?.to_vec();

            let response = mock.next_response(&method, &path);
            mock.state.lock().unwrap().requests.push(RecordedRequest {
                method,
                path: path.clone(),
                query,
                body,
            });

            let (status, body) = response.unwrap_or_else(|| (404, not_found_json("path", &path)));
            let content_type = if path.ends_with("/log") {
                "text/plain"
            } else {
                "application/json"
            };
            Ok(Response::builder()
                .status(status)
                .header("content-type", content_type)
                .body(Body::from(body.into_bytes()))?)
        })
    }
}

fn status_json(code: u16, reason: &str, message: String) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(404, "NotFound", format!("{} \"{}\" not found", resource, name))
}

/// Create a 409 already exists response
pub fn already_exists_json(resource: &str, name: &str) -> String {
    status_json(
        409,
        "AlreadyExists",
        format!("{} \"{}\" already exists", resource, name),
    )
}

/// Create a 409 write conflict response
pub fn conflict_json(resource: &str, name: &str) -> String {
    status_json(
        409,
        "Conflict",
        format!("Operation cannot be fulfilled on {} \"{}\"", resource, name),
    )
}

pub fn forbidden_json(resource: &str, name: &str) -> String {
    status_json(403, "Forbidden", format!("{} \"{}\" is forbidden", resource, name))
}

/// Path of a Velero CR
pub fn velero_path(namespace: &str, name: &str) -> String {
    format!("{}/{}", veleros_path(namespace), name)
}

/// Collection path of Velero CRs in a namespace
pub fn veleros_path(namespace: &str) -> String {
    format!("/apis/oadp.openshift.io/v1alpha1/namespaces/{}/veleros", namespace)
}

pub fn pods_path(namespace: &str) -> String {
    format!("/api/v1/namespaces/{}/pods", namespace)
}

pub fn pod_log_path(namespace: &str, pod: &str) -> String {
    format!("{}/{}/log", pods_path(namespace), pod)
}

/// Create a Velero CR JSON response
pub fn velero_json(namespace: &str, name: &str, spec: serde_json::Value) -> String {
    serde_json::json!({
        "apiVersion": "oadp.openshift.io/v1alpha1",
        "kind": "Velero",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid",
            "resourceVersion": "42"
        },
        "spec": spec
    })
    .to_string()
}

pub fn pod_value(name: &str, phase: &str) -> serde_json::Value {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": "openshift-adp",
            "labels": {"component": "velero"}
        },
        "status": {"phase": phase}
    })
}

/// Create a PodList JSON response from (name, phase) pairs
pub fn pod_list_json(pods: &[(&str, &str)]) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "PodList",
        "metadata": {"resourceVersion": "1"},
        "items": pods
            .iter()
            .map(|(name, phase)| pod_value(name, phase))
            .collect::<Vec<_>>()
    })
    .to_string()
}
