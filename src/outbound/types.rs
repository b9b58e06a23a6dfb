use ip_network::IpNetwork;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::ConvertError;

/// Outbound protocol identifier
pub const PROTOCOL_TYPE: &str = "wireguard";

/// Tag given to the generated outbound
pub const DEFAULT_TAG: &str = "WARP";

/// MTU used by WARP endpoints
pub const DEFAULT_MTU: u32 = 1280;

/// Reserved bytes carried in WARP handshakes
pub const DEFAULT_RESERVED: [u8; 3] = [0, 0, 0];

/// WireGuard outbound in the shape a sing-box style router expects
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct OutboundDescriptor {
    #[serde(rename = "type")]
    pub protocol_type: String,
    pub tag: String,
    #[serde(rename = "server")]
    pub server_host: String,
    pub server_port: u16,
    #[serde(rename = "local_address")]
    pub local_addresses: Vec<InterfaceAddress>,
    pub private_key: String,
    pub peer_public_key: String,
    #[serde(rename = "reserved")]
    pub reserved_bytes: [u8; 3],
    pub mtu: u32,
}

impl fmt::Debug for OutboundDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutboundDescriptor")
            .field("protocol_type", &self.protocol_type)
            .field("tag", &self.tag)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("local_addresses", &self.local_addresses)
            .field("peer_public_key", &self.peer_public_key)
            .field("reserved_bytes", &self.reserved_bytes)
            .field("mtu", &self.mtu)
            .finish_non_exhaustive()
    }
}

impl OutboundDescriptor {
    /// Render as an indented JSON document
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Policy knobs of the outbound that never come from the profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundOptions {
    pub tag: String,
    pub mtu: u32,
    pub reserved: [u8; 3],
}

impl Default for OutboundOptions {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            mtu: DEFAULT_MTU,
            reserved: DEFAULT_RESERVED,
        }
    }
}

/// Interface address with prefix length (e.g. 172.16.0.2/32)
///
/// Unlike [`IpNetwork`], host bits are kept: `10.0.0.2/24` is the
/// address `10.0.0.2` on a /24, not the network `10.0.0.0/24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterfaceAddress {
    addr: IpAddr,
    prefix_len: u8,
    network: IpNetwork,
}

impl InterfaceAddress {
    pub fn new(addr: IpAddr, prefix_len: u8) -> Result<Self, ConvertError> {
        let network = IpNetwork::new_truncate(addr, prefix_len)
            .map_err(|_| ConvertError::AddressFormat(format!("{}/{}", addr, prefix_len)))?;
        Ok(Self {
            addr,
            prefix_len,
            network,
        })
    }

    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Network containing this address
    pub fn network(&self) -> IpNetwork {
        self.network
    }
}

impl FromStr for InterfaceAddress {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConvertError::AddressFormat(s.to_string());

        let (addr, bits) = s.split_once('/').ok_or_else(invalid)?;

        // Plain decimal without leading zeros
        if bits.is_empty()
            || bits.len() > 3
            || !bits.bytes().all(|b| b.is_ascii_digit())
            || (bits.len() > 1 && bits.starts_with('0'))
        {
            return Err(invalid());
        }

        let addr: IpAddr = addr.parse().map_err(|_| invalid())?;
        let prefix_len: u8 = bits.parse().map_err(|_| invalid())?;

        Self::new(addr, prefix_len).map_err(|_| invalid())
    }
}

impl fmt::Display for InterfaceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

impl Serialize for InterfaceAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_parse_ipv4_prefix() {
        let addr: InterfaceAddress = "172.16.0.2/32".parse().unwrap();
        assert_eq!(addr.addr(), IpAddr::V4(Ipv4Addr::new(172, 16, 0, 2)));
        assert_eq!(addr.prefix_len(), 32);
    }

    #[test]
    fn test_parse_ipv6_prefix() {
        let addr: InterfaceAddress = "fd00::1/128".parse().unwrap();
        assert_eq!(addr.addr(), IpAddr::V6("fd00::1".parse::<Ipv6Addr>().unwrap()));
        assert_eq!(addr.to_string(), "fd00::1/128");
    }

    #[test]
    fn test_host_bits_preserved() {
        let addr: InterfaceAddress = "10.0.0.2/24".parse().unwrap();
        assert_eq!(addr.to_string(), "10.0.0.2/24");
        assert_eq!(addr.network().netmask(), 24);
        assert_eq!(
            addr.network().network_address(),
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, 0))
        );
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in [
            "not-an-address",
            "10.0.0.2",
            "10.0.0.2/",
            "10.0.0.2/33",
            "fd00::1/129",
            "10.0.0.2/032",
            "10.0.0.2/+8",
            "10.0.0.2/8/8",
            " 10.0.0.2/32",
            "10.0.0.2/32 ",
            "fe80::1%eth0/64",
            "10.0.0.256/32",
        ] {
            let err = bad.parse::<InterfaceAddress>().unwrap_err();
            assert_eq!(err, ConvertError::AddressFormat(bad.to_string()), "{}", bad);
        }
    }

    #[test]
    fn test_zero_prefix_allowed() {
        let addr: InterfaceAddress = "0.0.0.0/0".parse().unwrap();
        assert_eq!(addr.prefix_len(), 0);
    }

    #[test]
    fn test_serializes_as_string() {
        let addr: InterfaceAddress = "172.16.0.2/32".parse().unwrap();
        assert_eq!(serde_json::to_string(&addr).unwrap(), "\"172.16.0.2/32\"");
    }

    #[test]
    fn test_default_options() {
        let options = OutboundOptions::default();
        assert_eq!(options.tag, "WARP");
        assert_eq!(options.mtu, 1280);
        assert_eq!(options.reserved, [0, 0, 0]);
    }
}
