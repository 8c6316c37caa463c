/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};

use crate::backend::{ExecutorResolver, NativeLoopResolver, ThreadedResolver};
use crate::resolver::BoxResolver;

const DEFAULT_POOL_THREAD_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ThreadedResolverConfig {
    pub num_threads: usize,
}

impl Default for ThreadedResolverConfig {
    fn default() -> Self {
        ThreadedResolverConfig {
            num_threads: DEFAULT_POOL_THREAD_COUNT,
        }
    }
}

/// Backend selection as plain config data.
///
/// `Blocking` runs lookups inline on the calling thread and exists as a
/// fallback for environments that cannot run worker threads.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AnyResolverConfig {
    NativeLoop,
    Blocking,
    Threaded(ThreadedResolverConfig),
}

impl AnyResolverConfig {
    pub(crate) fn check(&self) -> anyhow::Result<()> {
        match self {
            AnyResolverConfig::Threaded(c) if c.num_threads == 0 => {
                Err(anyhow!("thread count for the shared pool must be positive"))
            }
            _ => Ok(()),
        }
    }

    pub fn spawn_resolver(&self) -> anyhow::Result<BoxResolver> {
        self.check()?;
        match self {
            AnyResolverConfig::NativeLoop => Ok(Box::new(NativeLoopResolver::new())),
            AnyResolverConfig::Blocking => Ok(Box::new(ExecutorResolver::with_dummy_executor())),
            AnyResolverConfig::Threaded(c) => {
                let resolver = ThreadedResolver::new(c.num_threads)
                    .context("failed to create shared-pool resolver")?;
                Ok(Box::new(resolver))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_thread_count() {
        let config = AnyResolverConfig::Threaded(ThreadedResolverConfig { num_threads: 0 });
        assert!(config.check().is_err());
        assert!(config.spawn_resolver().is_err());
    }

    #[test]
    fn default_thread_count() {
        let config = ThreadedResolverConfig::default();
        assert_eq!(config.num_threads, DEFAULT_POOL_THREAD_COUNT);
    }
}
