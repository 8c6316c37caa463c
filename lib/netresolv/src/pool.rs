/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use log::warn;
use tokio::sync::oneshot;

use super::ResolveError;

type PoolJob = Box<dyn FnOnce() + Send + 'static>;

/// A fixed-size pool of OS threads running blocking jobs.
///
/// Jobs queue on an unbounded channel and at most `size` of them run at any
/// instant. Results come back through a oneshot channel, so callers await
/// them without leaving their scheduling thread.
pub struct BlockingPool {
    job_sender: kanal::Sender<PoolJob>,
    handles: Mutex<Vec<JoinHandle<()>>>,
    size: usize,
}

impl BlockingPool {
    pub fn new(size: usize, name: &str) -> io::Result<Arc<Self>> {
        if size == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "worker thread count must be positive",
            ));
        }

        let (job_sender, job_receiver) = kanal::unbounded::<PoolJob>();
        let mut handles = Vec::with_capacity(size);
        for i in 0..size {
            let receiver = job_receiver.clone();
            let handle = std::thread::Builder::new()
                .name(format!("{name}#{i}"))
                .spawn(move || {
                    while let Ok(job) = receiver.recv() {
                        job();
                    }
                })?;
            handles.push(handle);
        }

        Ok(Arc::new(BlockingPool {
            job_sender,
            handles: Mutex::new(handles),
            size,
        }))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn spawn<F, T>(&self, f: F) -> Result<oneshot::Receiver<T>, ResolveError>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (rsp_sender, rsp_receiver) = oneshot::channel();
        let job: PoolJob = Box::new(move || {
            // the caller may have given up waiting, run to completion anyway
            let _ = rsp_sender.send(f());
        });
        self.job_sender
            .send(job)
            .map_err(|_| ResolveError::NoExecutorRunning)?;
        Ok(rsp_receiver)
    }

    /// Stop accepting jobs and wait for the workers to exit.
    ///
    /// A job already running on a worker runs to completion first. Queued
    /// jobs that never started are dropped, which fails their reply channel.
    pub fn shutdown(&self) {
        let _ = self.job_sender.close();
        let mut handles = self.handles.lock().unwrap();
        for handle in handles.drain(..) {
            let thread_id = handle.thread().id();
            if let Err(e) = handle.join() {
                warn!("error while waiting for resolve worker {thread_id:?}: {e:?}");
            }
        }
    }
}

impl Drop for BlockingPool {
    fn drop(&mut self) {
        // close only: a process forked while this pool was alive inherits the
        // recorded join handles but none of the worker threads, so joining
        // here is never safe
        let _ = self.job_sender.close();
    }
}

/// The executor a resolver submits its blocking lookups to.
///
/// `Dummy` is the degenerate pass-through that runs the job inline on the
/// calling thread.
#[derive(Clone)]
pub enum Executor {
    Dummy,
    Pool(Arc<BlockingPool>),
}
