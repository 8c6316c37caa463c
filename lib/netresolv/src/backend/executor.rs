/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;

use async_trait::async_trait;

use crate::blocking::resolve_blocking;
use crate::pool::{BlockingPool, Executor};
use crate::{AddressFamily, ResolveError, ResolvedAddr, Resolver, ResolverStats};

/// Resolver running the blocking platform lookup on an executor.
///
/// The executor and the ownership of its lifecycle are explicit state:
/// `close` shuts the executor down only when this resolver owns it, so a
/// shared executor survives any single resolver going away.
pub struct ExecutorResolver {
    executor: Option<Executor>,
    owned: bool,
    stats: Arc<ResolverStats>,
}

impl ExecutorResolver {
    pub fn new(pool: Arc<BlockingPool>, owned: bool) -> Self {
        ExecutorResolver {
            executor: Some(Executor::Pool(pool)),
            owned,
            stats: Arc::new(ResolverStats::default()),
        }
    }

    /// Use the degenerate pass-through executor.
    ///
    /// Lookups then run inline and block the calling thread for their full
    /// duration. Only for callers that cannot run worker threads at all.
    pub fn with_dummy_executor() -> Self {
        ExecutorResolver {
            executor: Some(Executor::Dummy),
            owned: false,
            stats: Arc::new(ResolverStats::default()),
        }
    }

    pub fn stats(&self) -> Arc<ResolverStats> {
        Arc::clone(&self.stats)
    }

    async fn resolve_inner(
        &self,
        host: &str,
        port: u16,
        family: AddressFamily,
    ) -> Result<Vec<ResolvedAddr>, ResolveError> {
        match self.executor.as_ref().ok_or(ResolveError::Closed)? {
            Executor::Dummy => resolve_blocking(host, port, family),
            Executor::Pool(pool) => {
                let host = host.to_string();
                let receiver = pool.spawn(move || resolve_blocking(&host, port, family))?;
                // a dropped reply channel means the pool went away before the
                // job ran
                receiver
                    .await
                    .map_err(|_| ResolveError::NoExecutorRunning)?
            }
        }
    }
}

#[async_trait]
impl Resolver for ExecutorResolver {
    async fn resolve(
        &self,
        host: &str,
        port: u16,
        family: AddressFamily,
    ) -> Result<Vec<ResolvedAddr>, ResolveError> {
        self.stats.add_query_total();
        let r = self.resolve_inner(host, port, family).await;
        if let Err(e) = &r {
            self.stats.add_error(e);
        }
        r
    }

    fn close(&mut self) {
        if let Some(Executor::Pool(pool)) = self.executor.take() {
            if self.owned {
                pool.shutdown();
            }
        }
    }
}
