/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use async_trait::async_trait;

use super::{AddressFamily, ResolveError, ResolvedAddr};

/// An asynchronous hostname resolver.
///
/// `resolve` turns a `(host, port)` pair into the ordered list of
/// connectable addresses the platform reports, suspending only the calling
/// task. `host` may be a symbolic name or a literal IP address. The list
/// order is whatever the underlying resolver returned, with no re-sorting
/// and no deduplication.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(
        &self,
        host: &str,
        port: u16,
        family: AddressFamily,
    ) -> Result<Vec<ResolvedAddr>, ResolveError>;

    /// Release backend held resources.
    ///
    /// Safe to call more than once, and safe to call on a resolver that
    /// never resolved anything. Calling `resolve` afterwards fails with
    /// [`ResolveError::Closed`].
    fn close(&mut self);
}

pub type BoxResolver = Box<dyn Resolver>;
