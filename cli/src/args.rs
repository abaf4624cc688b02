//! Command-line arguments.

use clap::Parser;

use pinstack_types::{CutRange, LockProfile};

#[derive(Debug, Parser)]
#[command(name = "pinstack")]
#[command(about = "Compute pin stacks for master-keyed interchangeable cores")]
#[command(version)]
pub struct Cli {
    /// Number of pins [default: 6]
    #[arg(short = 'p', long)]
    pub pins: Option<usize>,

    /// Maximum Adjacent Cut Specification [default: 9 (sfic)]
    #[arg(short = 'M', long)]
    pub macs: Option<u8>,

    /// Range of cut depths, MIN-MAX [default: 0-9 (sfic)]
    #[arg(short = 'c', long)]
    pub cuts: Option<CutRange>,

    /// Key type: sfic (0-9) or kwikset (1-7). Overrides --macs and --cuts
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub lock_type: Option<LockProfile>,

    /// Change key, tip to bow (digits, or cuts separated by "." for ranges above 9)
    #[arg(short = 'k', long, value_name = "CUTS")]
    pub change_key: Option<String>,

    /// Control key, tip to bow
    #[arg(short = 'C', long, value_name = "CUTS")]
    pub control_key: Option<String>,

    /// Master key, tip to bow [default: same as change key]
    #[arg(short = 'm', long, value_name = "CUTS")]
    pub master_key: Option<String>,

    /// Seed the key generator for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Require literal change/master keys to match the control key's parity
    #[arg(long)]
    pub strict_parity: bool,

    /// Print the result as JSON instead of a pinning chart
    #[arg(long)]
    pub json: bool,
}
