/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

//! Pluggable non-blocking hostname resolution.
//!
//! Turns a `(host, port)` pair into connectable socket addresses without
//! blocking the caller's event loop. Interchangeable backends cover native
//! in-loop resolution, executor-offloaded blocking lookups with a
//! process-shared fork-safe thread pool, and a decorator that redirects
//! selected lookups for testing or local overrides.

mod addr;
pub use addr::{AddressFamily, ResolvedAddr};

mod error;
pub use error::ResolveError;

mod stats;
pub use stats::{ResolverSnapshot, ResolverStats};

mod blocking;

mod pool;
pub use pool::{BlockingPool, Executor};

mod resolver;
pub use resolver::{BoxResolver, Resolver};

mod config;
pub use config::{AnyResolverConfig, ThreadedResolverConfig};

mod registry;
pub use registry::{configure_default, configure_default_from, new_default_resolver};

mod backend;
pub use backend::{
    ExecutorResolver, NativeLoopResolver, OverrideMap, OverrideResolver, ThreadedResolver,
};
