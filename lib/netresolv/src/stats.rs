/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::atomic::{AtomicU64, Ordering};

use super::ResolveError;

#[derive(Default)]
pub struct ResolverStats {
    query_total: AtomicU64,
    query_not_found: AtomicU64,
    query_failed: AtomicU64,
    query_closed: AtomicU64,
}

#[derive(Default)]
pub struct ResolverSnapshot {
    pub total: u64,
    pub not_found: u64,
    pub failed: u64,
    pub closed: u64,
}

impl ResolverStats {
    pub fn snapshot(&self) -> ResolverSnapshot {
        ResolverSnapshot {
            total: self.query_total.load(Ordering::Relaxed),
            not_found: self.query_not_found.load(Ordering::Relaxed),
            failed: self.query_failed.load(Ordering::Relaxed),
            closed: self.query_closed.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn add_query_total(&self) {
        self.query_total.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    fn add_not_found(&self) {
        self.query_not_found.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    fn add_failed(&self) {
        self.query_failed.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    fn add_closed(&self) {
        self.query_closed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn add_error(&self, e: &ResolveError) {
        match e {
            ResolveError::NotFound(_) => self.add_not_found(),
            ResolveError::Failed { .. } => self.add_failed(),
            ResolveError::Closed | ResolveError::NoExecutorRunning => self.add_closed(),
        }
    }
}
