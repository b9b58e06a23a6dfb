pub mod parser;
pub mod types;

pub use parser::{parse_profile, parse_profile_file, parse_profile_reader};
pub use types::{InterfaceSection, PeerSection, Profile, Section};
