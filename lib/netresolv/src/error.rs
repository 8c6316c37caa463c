/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use thiserror::Error;

/// Error type shared by all resolver backends.
///
/// A failed platform lookup always surfaces here, no matter which backend
/// executed it, so callers never need backend specific handling.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("no usable address found for host {0}")]
    NotFound(String),
    #[error("failed to resolve host {host}: {source}")]
    Failed { host: String, source: io::Error },
    #[error("resolver has been closed")]
    Closed,
    #[error("executor is no longer running")]
    NoExecutorRunning,
}

impl ResolveError {
    pub(crate) fn lookup_failed(host: &str, e: io::Error) -> Self {
        ResolveError::Failed {
            host: host.to_string(),
            source: e,
        }
    }

    pub fn get_type(&self) -> &str {
        match self {
            ResolveError::NotFound(_) => "NotFound",
            ResolveError::Failed { .. } => "Failed",
            ResolveError::Closed => "ResolverClosed",
            ResolveError::NoExecutorRunning => "NoExecutorRunning",
        }
    }
}
