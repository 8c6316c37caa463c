/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;

use async_trait::async_trait;

use crate::blocking::collect_filtered;
use crate::{AddressFamily, ResolveError, ResolvedAddr, Resolver, ResolverStats};

/// Resolver backed by the runtime's own asynchronous lookup facility.
///
/// No extra threads are held by this backend, which makes it the default
/// strategy. The lookup suspends only the calling task.
pub struct NativeLoopResolver {
    stats: Arc<ResolverStats>,
    closed: bool,
}

impl Default for NativeLoopResolver {
    fn default() -> Self {
        NativeLoopResolver {
            stats: Arc::new(ResolverStats::default()),
            closed: false,
        }
    }
}

impl NativeLoopResolver {
    pub fn new() -> Self {
        NativeLoopResolver::default()
    }

    pub fn stats(&self) -> Arc<ResolverStats> {
        Arc::clone(&self.stats)
    }
}

#[async_trait]
impl Resolver for NativeLoopResolver {
    async fn resolve(
        &self,
        host: &str,
        port: u16,
        family: AddressFamily,
    ) -> Result<Vec<ResolvedAddr>, ResolveError> {
        self.stats.add_query_total();
        let r = if self.closed {
            Err(ResolveError::Closed)
        } else {
            match tokio::net::lookup_host((host, port)).await {
                Ok(addrs) => collect_filtered(host, family, addrs),
                Err(e) => Err(ResolveError::lookup_failed(host, e)),
            }
        };
        if let Err(e) = &r {
            self.stats.add_error(e);
        }
        r
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
