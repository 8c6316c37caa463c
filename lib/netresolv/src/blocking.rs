/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::net::{SocketAddr, ToSocketAddrs};

use super::{AddressFamily, ResolveError, ResolvedAddr};

/// Run a synchronous platform lookup for `(host, port)`.
///
/// This blocks the calling thread for the full duration of the OS call and
/// must only be invoked from a worker thread, never on the event loop.
//
// The std lookup pins the hint socket type to SOCK_STREAM, so port lookups
// succeed even on platforms that reject a wildcard socket type, and the
// returned addresses carry no socket type field.
pub(crate) fn resolve_blocking(
    host: &str,
    port: u16,
    family: AddressFamily,
) -> Result<Vec<ResolvedAddr>, ResolveError> {
    let addrs = (host, port)
        .to_socket_addrs()
        .map_err(|e| ResolveError::lookup_failed(host, e))?;
    collect_filtered(host, family, addrs)
}

/// Apply the family restriction and normalize to the tagged address form.
///
/// An empty list after filtering is a resolution failure, not a success
/// with no results.
pub(crate) fn collect_filtered<I>(
    host: &str,
    family: AddressFamily,
    addrs: I,
) -> Result<Vec<ResolvedAddr>, ResolveError>
where
    I: Iterator<Item = SocketAddr>,
{
    let addrs: Vec<ResolvedAddr> = addrs
        .filter(|addr| family.allows(*addr))
        .map(ResolvedAddr::from)
        .collect();
    if addrs.is_empty() {
        Err(ResolveError::NotFound(host.to_string()))
    } else {
        Ok(addrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_ipv4() {
        let addrs = resolve_blocking("127.0.0.1", 80, AddressFamily::Unspecified).unwrap();
        assert_eq!(addrs.len(), 1);
        assert_eq!(addrs[0].family, AddressFamily::Ipv4);
        assert_eq!(addrs[0].sockaddr.to_string(), "127.0.0.1:80");
    }

    #[test]
    fn literal_family_mismatch() {
        let r = resolve_blocking("127.0.0.1", 80, AddressFamily::Ipv6);
        assert!(matches!(r, Err(ResolveError::NotFound(_))));
    }

    #[test]
    fn keeps_platform_order() {
        let list = vec![
            "10.0.0.1:53".parse().unwrap(),
            "[2001:db8::1]:53".parse().unwrap(),
            "10.0.0.2:53".parse().unwrap(),
        ];
        let addrs =
            collect_filtered("t.example", AddressFamily::Ipv4, list.into_iter()).unwrap();
        assert_eq!(addrs.len(), 2);
        assert_eq!(addrs[0].sockaddr.to_string(), "10.0.0.1:53");
        assert_eq!(addrs[1].sockaddr.to_string(), "10.0.0.2:53");
    }
}
