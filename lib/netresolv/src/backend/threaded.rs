/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use log::debug;

use super::ExecutorResolver;
use crate::pool::BlockingPool;
use crate::{AddressFamily, ResolveError, ResolvedAddr, Resolver, ResolverStats};

const POOL_THREAD_NAME: &str = "resolve";

struct SharedPool {
    create_pid: u32,
    pool: Arc<BlockingPool>,
}

static SHARED_POOL: Mutex<Option<SharedPool>> = Mutex::new(None);

fn shared_pool(num_threads: usize) -> io::Result<Arc<BlockingPool>> {
    shared_pool_in(std::process::id(), num_threads)
}

fn shared_pool_in(pid: u32, num_threads: usize) -> io::Result<Arc<BlockingPool>> {
    let mut slot = SHARED_POOL.lock().unwrap();
    match slot.as_ref() {
        Some(shared) if shared.create_pid == pid => return Ok(Arc::clone(&shared.pool)),
        Some(shared) => {
            // the recorded workers belong to the process the pool was created
            // in and do not exist here, so the stale pool is dropped without
            // joining anything
            debug!(
                "process id changed from {} to {pid}, replacing shared resolve pool",
                shared.create_pid
            );
        }
        None => {}
    }

    let pool = BlockingPool::new(num_threads, POOL_THREAD_NAME)?;
    *slot = Some(SharedPool {
        create_pid: pid,
        pool: Arc::clone(&pool),
    });
    Ok(pool)
}

/// Resolver running blocking lookups on a process-wide shared thread pool.
///
/// All instances in one process share a single pool, sized by whoever
/// created it first. The pool is recreated lazily whenever the process id
/// no longer matches the one recorded at creation, so a forked child never
/// reuses worker threads that did not survive the fork. Closing one
/// instance never shuts the shared pool down.
pub struct ThreadedResolver {
    inner: ExecutorResolver,
}

impl ThreadedResolver {
    pub fn new(num_threads: usize) -> io::Result<Self> {
        let pool = shared_pool(num_threads)?;
        Ok(ThreadedResolver {
            inner: ExecutorResolver::new(pool, false),
        })
    }

    pub fn stats(&self) -> Arc<ResolverStats> {
        self.inner.stats()
    }
}

#[async_trait]
impl Resolver for ThreadedResolver {
    async fn resolve(
        &self,
        host: &str,
        port: u16,
        family: AddressFamily,
    ) -> Result<Vec<ResolvedAddr>, ResolveError> {
        self.inner.resolve(host, port, family).await
    }

    fn close(&mut self) {
        self.inner.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_tracks_process_identity() {
        // fake pids, so a real ThreadedResolver in some other test of this
        // binary cannot collide with these entries
        let pid_a = u32::MAX - 2;
        let pid_b = u32::MAX - 1;

        let first = shared_pool_in(pid_a, 4).unwrap();
        assert_eq!(first.size(), 4);

        // same identity: same pool, requested size loses to the creator's
        let again = shared_pool_in(pid_a, 2).unwrap();
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(again.size(), 4);

        // changed identity: fresh pool with the currently requested size
        let child = shared_pool_in(pid_b, 2).unwrap();
        assert!(!Arc::ptr_eq(&first, &child));
        assert_eq!(child.size(), 2);

        // and the replacement sticks
        let child_again = shared_pool_in(pid_b, 8).unwrap();
        assert!(Arc::ptr_eq(&child, &child_again));
    }
}
