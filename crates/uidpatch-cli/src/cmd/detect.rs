use clap::Args;
use uidpatch_core::fingerprint::{blake3_16, crc32, hex16};
use uidpatch_core::find_field;

use crate::cmd::FilterArgs;
use crate::io::blob;

#[derive(Args)]
pub struct DetectArgs {
    /// Input blob path
    #[arg(long)]
    pub r#in: String,

    #[command(flatten)]
    pub filter: FilterArgs,
}

pub fn run(args: DetectArgs) -> anyhow::Result<()> {
    let bytes = blob::read(&args.r#in)?;
    let m = find_field(&bytes, &args.filter.to_filter())?;

    eprintln!("--- detect ---");
    eprintln!("file       = {}", args.r#in);
    eprintln!("bytes      = {}", bytes.len());
    eprintln!("crc32      = 0x{:08X}", crc32(&bytes));
    eprintln!("content_id = {}", hex16(&blake3_16(&bytes)));
    eprintln!("value      = {}", m.value);
    eprintln!("offset     = 0x{:X}", m.offset);
    eprintln!("length     = {}", m.length);
    Ok(())
}
