use crate::error::ConvertError;
use crate::profile::Profile;

use super::types::{InterfaceAddress, OutboundDescriptor, OutboundOptions, PROTOCOL_TYPE};

/// Build the WARP outbound for a parsed profile
///
/// `server_host` and `server_port` are always taken from the caller; the
/// profile's own `Endpoint` is not consulted. MTU, tag and reserved bytes
/// are the fixed WARP defaults.
pub fn convert(
    profile: &Profile,
    server_host: &str,
    server_port: u16,
) -> Result<OutboundDescriptor, ConvertError> {
    convert_with(profile, server_host, server_port, &OutboundOptions::default())
}

/// Same as [`convert`], with explicit policy values
///
/// Fails on the first interface address that is not a valid prefix.
pub fn convert_with(
    profile: &Profile,
    server_host: &str,
    server_port: u16,
    options: &OutboundOptions,
) -> Result<OutboundDescriptor, ConvertError> {
    let local_addresses = profile
        .interface
        .addresses
        .iter()
        .map(|addr| -> Result<InterfaceAddress, ConvertError> {
            let parsed = addr.parse::<InterfaceAddress>()?;
            tracing::debug!("Local address {}", parsed);
            Ok(parsed)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let descriptor = OutboundDescriptor {
        protocol_type: PROTOCOL_TYPE.to_string(),
        tag: options.tag.clone(),
        server_host: server_host.to_string(),
        server_port,
        local_addresses,
        private_key: profile.interface.private_key.clone(),
        peer_public_key: profile.peer.public_key.clone(),
        reserved_bytes: options.reserved,
        mtu: options.mtu,
    };

    tracing::info!(
        "Built {} outbound {} -> {}:{} ({} local addresses)",
        descriptor.protocol_type,
        descriptor.tag,
        descriptor.server_host,
        descriptor.server_port,
        descriptor.local_addresses.len()
    );

    Ok(descriptor)
}
