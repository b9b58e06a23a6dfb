use serde::Serialize;

/// Parsed WireGuard client profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub interface: InterfaceSection,
    pub peer: PeerSection,
}

/// [Interface] section of a profile
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterfaceSection {
    /// Private key, kept as the literal text from the profile
    #[serde(serialize_with = "redact")]
    pub private_key: String,
    /// DNS servers (passthrough, never interpreted)
    pub dns: String,
    /// Address entries in order of appearance, unvalidated
    pub addresses: Vec<String>,
}

impl std::fmt::Debug for InterfaceSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterfaceSection")
            .field("private_key", &"<redacted>")
            .field("dns", &self.dns)
            .field("addresses", &self.addresses)
            .finish()
    }
}

/// [Peer] section of a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeerSection {
    /// Peer's public key, kept as the literal text from the profile
    pub public_key: String,
    /// AllowedIPs entries in order of appearance, unvalidated
    pub allowed_ips: Vec<String>,
    /// Endpoint as declared by the profile (`host:port`)
    pub endpoint: String,
}

/// Which section the parser is currently inside
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Section {
    /// Before the first section header
    #[default]
    None,
    Interface,
    Peer,
    /// A header we don't know; its lines are dropped
    Unknown(String),
}

impl Section {
    pub fn from_header(name: &str) -> Self {
        match name {
            "Interface" => Section::Interface,
            "Peer" => Section::Peer,
            other => Section::Unknown(other.to_string()),
        }
    }
}

impl Profile {
    /// Whether both required keys were seen
    pub fn is_complete(&self) -> bool {
        !self.interface.private_key.is_empty() && !self.peer.public_key.is_empty()
    }
}

fn redact<S: serde::Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_empty() {
        serializer.serialize_str("")
    } else {
        serializer.serialize_str("<redacted>")
    }
}
