use std::path::Path;

use crate::error::Result;
use crate::identity::{ensure_profile, IdentityProvider, ProfileStore};
use crate::outbound::convert_with;
use crate::profile::parse_profile_file;

use super::args::WarpArgs;

/// Execute the 'warp' command
pub fn cmd_warp(args: WarpArgs) -> Result<()> {
    let store = ProfileStore::new(&args.profile);
    ensure_profile(&store, &args.license, &args.registration_endpoint)?;

    let profile = parse_profile_file(store.profile_path())?;
    if !profile.is_complete() {
        tracing::warn!(
            "Profile {} is missing PrivateKey or PublicKey",
            store.profile_path().display()
        );
    }

    let descriptor = convert_with(&profile, &args.server, args.port, &args.outbound_options())?;
    let json = descriptor.to_json_pretty()?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, format!("{}\n", json))?;
            tracing::info!("Wrote outbound to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Execute the 'inspect' command
pub fn cmd_inspect(path: &Path) -> Result<()> {
    let profile = parse_profile_file(path)?;

    println!("{}", serde_json::to_string_pretty(&profile)?);

    if !profile.is_complete() {
        tracing::warn!("Profile is missing PrivateKey or PublicKey");
    }

    Ok(())
}

/// Show example profile
pub fn cmd_show_profile() {
    let example = r#"[Interface]
# Base64 private key issued at registration
PrivateKey = <base64-encoded-private-key>

# One Address line per family
Address = 172.16.0.2/32
Address = 2606:4700:110:8a36:df92:102a:9602:fa18/128

# Informational only
DNS = 1.1.1.1

[Peer]
PublicKey = bmXOC+F1FxEMF9dyiK2H5/1SUtzH0JuVo51h2wPfgyo=
AllowedIPs = 0.0.0.0/0
AllowedIPs = ::/0

# Ignored: the outbound server comes from --server/--port
Endpoint = engage.cloudflareclient.com:2408
"#;

    println!("{}", example);
}
