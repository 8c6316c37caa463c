/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use ahash::AHashMap;
use async_trait::async_trait;

use crate::{AddressFamily, BoxResolver, ResolveError, ResolvedAddr, Resolver};

/// Redirection table consulted before a lookup is delegated.
///
/// Three rule shapes exist, matched in strict precedence order: exact
/// `(host, port, family)`, then `(host, port)`, then bare host. A bare host
/// rule rewrites only the host and keeps the requested port. The family is
/// never rewritten.
#[derive(Clone, Default)]
pub struct OverrideMap {
    by_host_port_family: AHashMap<(String, u16, AddressFamily), (String, u16)>,
    by_host_port: AHashMap<(String, u16), (String, u16)>,
    by_host: AHashMap<String, String>,
}

impl OverrideMap {
    pub fn insert_host_port_family(
        &mut self,
        host: String,
        port: u16,
        family: AddressFamily,
        to_host: String,
        to_port: u16,
    ) {
        self.by_host_port_family
            .insert((host, port, family), (to_host, to_port));
    }

    pub fn insert_host_port(&mut self, host: String, port: u16, to_host: String, to_port: u16) {
        self.by_host_port.insert((host, port), (to_host, to_port));
    }

    pub fn insert_host(&mut self, host: String, to_host: String) {
        self.by_host.insert(host, to_host);
    }

    pub fn is_empty(&self) -> bool {
        self.by_host_port_family.is_empty()
            && self.by_host_port.is_empty()
            && self.by_host.is_empty()
    }

    fn find(&self, host: &str, port: u16, family: AddressFamily) -> Option<(String, u16)> {
        if !self.by_host_port_family.is_empty() {
            if let Some((to_host, to_port)) =
                self.by_host_port_family.get(&(host.to_string(), port, family))
            {
                return Some((to_host.clone(), *to_port));
            }
        }
        if !self.by_host_port.is_empty() {
            if let Some((to_host, to_port)) = self.by_host_port.get(&(host.to_string(), port)) {
                return Some((to_host.clone(), *to_port));
            }
        }
        if let Some(to_host) = self.by_host.get(host) {
            return Some((to_host.clone(), port));
        }
        None
    }
}

/// Wraps another resolver with a redirection table.
///
/// Lets local lookups be redirected (to a loopback address, say) without
/// touching system-wide resolution configuration.
pub struct OverrideResolver {
    resolver: BoxResolver,
    mapping: OverrideMap,
}

impl OverrideResolver {
    pub fn new(resolver: BoxResolver, mapping: OverrideMap) -> Self {
        OverrideResolver { resolver, mapping }
    }
}

#[async_trait]
impl Resolver for OverrideResolver {
    async fn resolve(
        &self,
        host: &str,
        port: u16,
        family: AddressFamily,
    ) -> Result<Vec<ResolvedAddr>, ResolveError> {
        match self.mapping.find(host, port, family) {
            Some((host, port)) => self.resolver.resolve(&host, port, family).await,
            None => self.resolver.resolve(host, port, family).await,
        }
    }

    fn close(&mut self) {
        // this decorator holds no resources of its own
        self.resolver.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> OverrideMap {
        let mut mapping = OverrideMap::default();
        mapping.insert_host("a.test".to_string(), "10.0.0.1".to_string());
        mapping.insert_host_port(
            "a.test".to_string(),
            80,
            "10.0.0.2".to_string(),
            8080,
        );
        mapping.insert_host_port_family(
            "a.test".to_string(),
            80,
            AddressFamily::Ipv4,
            "10.0.0.3".to_string(),
            9090,
        );
        mapping
    }

    #[test]
    fn most_specific_rule_wins() {
        let mapping = sample_map();

        assert_eq!(
            mapping.find("a.test", 80, AddressFamily::Ipv4),
            Some(("10.0.0.3".to_string(), 9090))
        );
        assert_eq!(
            mapping.find("a.test", 80, AddressFamily::Unspecified),
            Some(("10.0.0.2".to_string(), 8080))
        );
        // bare host rule keeps the requested port
        assert_eq!(
            mapping.find("a.test", 443, AddressFamily::Unspecified),
            Some(("10.0.0.1".to_string(), 443))
        );
        assert_eq!(mapping.find("b.test", 80, AddressFamily::Unspecified), None);
    }

    #[test]
    fn empty_map() {
        let mapping = OverrideMap::default();
        assert!(mapping.is_empty());
        assert_eq!(mapping.find("a.test", 80, AddressFamily::Unspecified), None);
        assert!(!sample_map().is_empty());
    }
}
