//! warpgen - WARP outbound generator
//!
//! Reads a WireGuard client profile (as written by wgcf) and turns it into a
//! `wireguard` outbound for a sing-box style routing engine.
//!
//! # Example
//!
//! ```
//! use warpgen::outbound::convert;
//! use warpgen::profile::parse_profile;
//!
//! let profile = parse_profile(
//!     "[Interface]\nPrivateKey = PK1\nAddress = 172.16.0.2/32\n[Peer]\nPublicKey = PUB1\n",
//! );
//! let outbound = convert(&profile, "162.159.192.91", 939).unwrap();
//! assert_eq!(outbound.mtu, 1280);
//! ```

pub mod cli;
pub mod error;
pub mod identity;
pub mod outbound;
pub mod profile;

pub use error::{Error, Result};
