// crates/uidpatch-cli/src/cmd/mod.rs

pub mod clear;
pub mod detect;
pub mod inspect;
pub mod session;
pub mod set;

use clap::Args;
use uidpatch_core::ScanFilter;

/// Candidate acceptance flags shared by every subcommand.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Minimum encoded length (bytes) a candidate field must have
    #[arg(long, default_value_t = 1)]
    pub min_len: usize,

    /// Minimum decoded value a candidate field must carry
    #[arg(long, default_value_t = 0)]
    pub min_value: u64,

    /// Conservative preset (min-len 3, min-value 100001); overrides both flags
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

impl FilterArgs {
    pub fn to_filter(&self) -> ScanFilter {
        if self.strict {
            ScanFilter::strict()
        } else {
            ScanFilter {
                min_len: self.min_len,
                min_value: self.min_value,
            }
        }
    }
}
