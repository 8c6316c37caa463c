/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Mutex;

use anyhow::anyhow;
use log::debug;

use crate::backend::NativeLoopResolver;
use crate::config::AnyResolverConfig;
use crate::resolver::BoxResolver;

type ResolverFactory = Box<dyn Fn() -> anyhow::Result<BoxResolver> + Send>;

struct DefaultSlot {
    factory: Option<ResolverFactory>,
    instantiated: bool,
}

impl DefaultSlot {
    const fn new() -> Self {
        DefaultSlot {
            factory: None,
            instantiated: false,
        }
    }

    fn set_factory(&mut self, factory: ResolverFactory) -> anyhow::Result<()> {
        if self.instantiated {
            return Err(anyhow!(
                "a default resolver has already been created, reconfiguration is not allowed"
            ));
        }
        self.factory = Some(factory);
        Ok(())
    }

    fn build(&mut self) -> anyhow::Result<BoxResolver> {
        self.instantiated = true;
        match &self.factory {
            Some(factory) => factory(),
            None => {
                debug!("no default resolver configured, using the native loop backend");
                Ok(Box::new(NativeLoopResolver::new()))
            }
        }
    }
}

static DEFAULT_SLOT: Mutex<DefaultSlot> = Mutex::new(DefaultSlot::new());

/// Select the concrete backend handed out by [`new_default_resolver`].
///
/// Allowed only before the first default resolver is created; a later call
/// is a hard error instead of a silent partial reconfiguration.
pub fn configure_default<F>(factory: F) -> anyhow::Result<()>
where
    F: Fn() -> anyhow::Result<BoxResolver> + Send + 'static,
{
    DEFAULT_SLOT.lock().unwrap().set_factory(Box::new(factory))
}

/// Like [`configure_default`], with the backend given as plain config data.
pub fn configure_default_from(config: AnyResolverConfig) -> anyhow::Result<()> {
    config.check()?;
    configure_default(move || config.spawn_resolver())
}

/// Create a resolver of the currently selected default backend.
///
/// With no selection made, the native loop backend is used.
pub fn new_default_resolver() -> anyhow::Result<BoxResolver> {
    DEFAULT_SLOT.lock().unwrap().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_guards_late_configuration() {
        let mut slot = DefaultSlot::new();

        slot.set_factory(Box::new(|| Err(anyhow!("marker factory"))))
            .unwrap();
        // the configured factory is the one consulted
        let err = match slot.build() {
            Err(e) => e,
            Ok(_) => panic!("expected the configured factory to be consulted"),
        };
        assert!(err.to_string().contains("marker factory"));

        // once an instance was requested the selection is frozen
        assert!(
            slot.set_factory(Box::new(|| Err(anyhow!("too late"))))
                .is_err()
        );
    }

    #[test]
    fn slot_falls_back_to_native_loop() {
        let mut slot = DefaultSlot::new();
        assert!(slot.build().is_ok());
    }
}
