/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// Address family restriction for a lookup.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum AddressFamily {
    #[default]
    Unspecified,
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    pub fn of(addr: SocketAddr) -> Self {
        match addr {
            SocketAddr::V4(_) => AddressFamily::Ipv4,
            SocketAddr::V6(_) => AddressFamily::Ipv6,
        }
    }

    pub fn allows(&self, addr: SocketAddr) -> bool {
        match self {
            AddressFamily::Unspecified => true,
            AddressFamily::Ipv4 => addr.is_ipv4(),
            AddressFamily::Ipv6 => addr.is_ipv6(),
        }
    }
}

impl FromStr for AddressFamily {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "ipv4" | "inet" | "v4" => Ok(AddressFamily::Ipv4),
            "ipv6" | "inet6" | "v6" => Ok(AddressFamily::Ipv6),
            "unspec" | "unspecified" | "any" => Ok(AddressFamily::Unspecified),
            _ => Err(()),
        }
    }
}

/// A single connectable address returned by a lookup, tagged with its family.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResolvedAddr {
    pub family: AddressFamily,
    pub sockaddr: SocketAddr,
}

impl From<SocketAddr> for ResolvedAddr {
    fn from(sockaddr: SocketAddr) -> Self {
        ResolvedAddr {
            family: AddressFamily::of(sockaddr),
            sockaddr,
        }
    }
}

impl fmt::Display for ResolvedAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sockaddr.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn family_from_str() {
        assert_eq!(AddressFamily::from_str("ipv4"), Ok(AddressFamily::Ipv4));
        assert_eq!(AddressFamily::from_str("INET6"), Ok(AddressFamily::Ipv6));
        assert_eq!(
            AddressFamily::from_str("any"),
            Ok(AddressFamily::Unspecified)
        );
        assert!(AddressFamily::from_str("unix").is_err());
    }

    #[test]
    fn family_filter() {
        let v4 = SocketAddr::new(Ipv4Addr::LOCALHOST.into(), 80);
        let v6 = SocketAddr::new(Ipv6Addr::LOCALHOST.into(), 80);

        assert!(AddressFamily::Unspecified.allows(v4));
        assert!(AddressFamily::Unspecified.allows(v6));
        assert!(AddressFamily::Ipv4.allows(v4));
        assert!(!AddressFamily::Ipv4.allows(v6));
        assert!(AddressFamily::Ipv6.allows(v6));
        assert!(!AddressFamily::Ipv6.allows(v4));

        let addr = ResolvedAddr::from(v4);
        assert_eq!(addr.family, AddressFamily::Ipv4);
        assert_eq!(addr.sockaddr, v4);
    }
}
