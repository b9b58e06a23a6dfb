use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::outbound::{OutboundOptions, DEFAULT_MTU, DEFAULT_TAG};

pub const DEFAULT_PROFILE_PATH: &str = "wgcf-profile.ini";
pub const DEFAULT_SERVER: &str = "162.159.192.91";
pub const DEFAULT_SERVER_PORT: u16 = 939;
pub const DEFAULT_REGISTRATION_ENDPOINT: &str = "engage.cloudflareclient.com:2408";

#[derive(Parser, Debug)]
#[command(
    name = "warpgen",
    about = "Generate a WARP WireGuard outbound from a wgcf profile",
    version
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a profile into an outbound descriptor (JSON)
    Warp(WarpArgs),

    /// Parse a profile and print what was understood (keys redacted)
    Inspect {
        /// Path to the WireGuard profile
        #[arg(short, long, env = "WARPGEN_PROFILE", default_value = DEFAULT_PROFILE_PATH)]
        profile: PathBuf,
    },

    /// Show an example profile
    ShowProfile,
}

#[derive(Args, Debug)]
pub struct WarpArgs {
    /// Path to the WireGuard profile
    #[arg(short, long, env = "WARPGEN_PROFILE", default_value = DEFAULT_PROFILE_PATH)]
    pub profile: PathBuf,

    /// Server address written to the outbound
    #[arg(short, long, env = "WARPGEN_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Server port written to the outbound
    #[arg(short = 'P', long, env = "WARPGEN_PORT", default_value_t = DEFAULT_SERVER_PORT)]
    pub port: u16,

    /// WARP license key
    #[arg(long, env = "WARPGEN_LICENSE", default_value = "", hide_env_values = true)]
    pub license: String,

    /// Registration endpoint used when no profile exists
    #[arg(
        long,
        env = "WARPGEN_REGISTRATION_ENDPOINT",
        default_value = DEFAULT_REGISTRATION_ENDPOINT
    )]
    pub registration_endpoint: String,

    /// Outbound tag
    #[arg(long, default_value = DEFAULT_TAG)]
    pub tag: String,

    /// Outbound MTU
    #[arg(long, default_value_t = DEFAULT_MTU)]
    pub mtu: u32,

    /// Reserved bytes as three comma separated values
    #[arg(long, value_parser = parse_reserved, default_value = "0,0,0")]
    pub reserved: [u8; 3],

    /// Write the JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl WarpArgs {
    pub fn outbound_options(&self) -> OutboundOptions {
        OutboundOptions {
            tag: self.tag.clone(),
            mtu: self.mtu,
            reserved: self.reserved,
        }
    }
}

fn parse_reserved(s: &str) -> Result<[u8; 3], String> {
    let values = s
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<u8>()
                .map_err(|_| format!("invalid reserved byte: {}", v))
        })
        .collect::<Result<Vec<_>, _>>()?;

    <[u8; 3]>::try_from(values)
        .map_err(|v| format!("expected 3 reserved bytes, got {}", v.len()))
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_warp_defaults() {
        let cli = Cli::try_parse_from(["warpgen", "warp"]).unwrap();
        let Commands::Warp(args) = cli.command else {
            panic!("expected warp");
        };
        assert_eq!(args.server, DEFAULT_SERVER);
        assert_eq!(args.port, DEFAULT_SERVER_PORT);
        assert_eq!(args.outbound_options(), OutboundOptions::default());
    }

    #[test]
    fn test_warp_overrides() {
        let cli = Cli::try_parse_from([
            "warpgen", "-vv", "warp", "-P", "2408", "--mtu", "1420", "--reserved", "1,2,3",
        ])
        .unwrap();
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);
        let Commands::Warp(args) = cli.command else {
            panic!("expected warp");
        };
        assert_eq!(args.port, 2408);
        let options = args.outbound_options();
        assert_eq!(options.mtu, 1420);
        assert_eq!(options.reserved, [1, 2, 3]);
    }

    #[test]
    fn test_parse_reserved() {
        assert_eq!(parse_reserved("0,0,0"), Ok([0, 0, 0]));
        assert_eq!(parse_reserved("42, 7, 255"), Ok([42, 7, 255]));
        assert!(parse_reserved("1,2,3,4").is_err());
        assert!(parse_reserved("a,b,c").is_err());
    }

    #[test]
    fn test_reserved_needs_three_bytes() {
        assert!(Cli::try_parse_from(["warpgen", "warp", "--reserved", "1,2"]).is_err());
        assert!(Cli::try_parse_from(["warpgen", "warp", "--reserved", "1,2,300"]).is_err());
    }
}
