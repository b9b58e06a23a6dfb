use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ProfileError;

use super::types::{InterfaceSection, PeerSection, Profile, Section};

/// Parse profile text that is already in memory
///
/// Never fails: lines that are not a section header or a recognized
/// `Key = value` pair inside a known section are dropped.
pub fn parse_profile(text: &str) -> Profile {
    text.lines()
        .fold(Scanner::default(), |mut scanner, line| {
            scanner.feed(line);
            scanner
        })
        .finish()
}

/// Parse a profile from a buffered reader
pub fn parse_profile_reader<R: BufRead>(reader: R) -> Result<Profile, ProfileError> {
    let mut scanner = Scanner::default();
    for line in reader.lines() {
        scanner.feed(&line?);
    }
    Ok(scanner.finish())
}

/// Parse a profile file such as `wgcf-profile.ini`
pub fn parse_profile_file<P: AsRef<Path>>(path: P) -> Result<Profile, ProfileError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    tracing::debug!("Reading profile from {}", path.display());
    parse_profile_reader(BufReader::new(file))
}

/// Line-by-line scan state
#[derive(Default)]
struct Scanner {
    profile: Profile,
    section: Section,
}

impl Scanner {
    fn feed(&mut self, line: &str) {
        let line = line.trim();

        if let Some(name) = section_header(line) {
            self.section = Section::from_header(name);
            tracing::debug!("Entering section {:?}", self.section);
            return;
        }

        let matched = match self.section {
            Section::Interface => apply_interface_line(&mut self.profile.interface, line),
            Section::Peer => apply_peer_line(&mut self.profile.peer, line),
            Section::None | Section::Unknown(_) => false,
        };

        if !matched && !line.is_empty() {
            tracing::trace!("Skipping line in section {:?}", self.section);
        }
    }

    fn finish(self) -> Profile {
        self.profile
    }
}

/// Name inside `[...]`, trimmed
fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
}

/// Split on the first `=`; value is trimmed
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    Some((key.trim_end(), value.trim()))
}

fn apply_interface_line(interface: &mut InterfaceSection, line: &str) -> bool {
    let Some((key, value)) = split_key_value(line) else {
        return false;
    };

    if key.starts_with("PrivateKey") {
        interface.private_key = value.to_string();
    } else if key.starts_with("DNS") {
        interface.dns = value.to_string();
    } else if key.starts_with("Address") {
        interface.addresses.push(value.to_string());
    } else {
        return false;
    }
    true
}

fn apply_peer_line(peer: &mut PeerSection, line: &str) -> bool {
    let Some((key, value)) = split_key_value(line) else {
        return false;
    };

    if key.starts_with("PublicKey") {
        peer.public_key = value.to_string();
    } else if key.starts_with("AllowedIPs") {
        peer.allowed_ips.push(value.to_string());
    } else if key.starts_with("Endpoint") {
        peer.endpoint = value.to_string();
    } else {
        return false;
    }
    true
}
