pub mod converter;
pub mod types;

pub use converter::{convert, convert_with};
pub use types::{
    InterfaceAddress, OutboundDescriptor, OutboundOptions, DEFAULT_MTU, DEFAULT_RESERVED,
    DEFAULT_TAG, PROTOCOL_TYPE,
};
