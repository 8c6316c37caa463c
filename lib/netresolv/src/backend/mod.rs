/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod executor;
mod mapping;
mod native_loop;
mod threaded;

pub use executor::ExecutorResolver;
pub use mapping::{OverrideMap, OverrideResolver};
pub use native_loop::NativeLoopResolver;
pub use threaded::ThreadedResolver;
