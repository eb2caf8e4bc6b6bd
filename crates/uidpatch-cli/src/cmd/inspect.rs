use clap::Args;
use uidpatch_core::fingerprint::{blake3_16, crc32, hex16};
use uidpatch_core::{find_field, PatchError};

use crate::cmd::FilterArgs;
use crate::io::blob;

#[derive(Args)]
pub struct InspectArgs {
    /// Input blob path
    #[arg(long)]
    pub r#in: String,

    /// Context bytes shown on each side of the field
    #[arg(long, default_value_t = 8)]
    pub window: usize,

    #[command(flatten)]
    pub filter: FilterArgs,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let bytes = blob::read(&args.r#in)?;

    eprintln!("--- inspect ---");
    eprintln!("file       = {}", args.r#in);
    eprintln!("bytes      = {}", bytes.len());
    eprintln!("crc32      = 0x{:08X}", crc32(&bytes));
    eprintln!("content_id = {}", hex16(&blake3_16(&bytes)));

    let m = match find_field(&bytes, &args.filter.to_filter()) {
        Ok(m) => m,
        Err(e @ PatchError::NotFound(_)) => {
            eprintln!("field      = (none: {e})");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    eprintln!("--- field ---");
    eprintln!("value      = {}", m.value);
    eprintln!("offset     = 0x{:X}", m.offset);
    eprintln!("length     = {}", m.length);

    let lead = m.offset.saturating_sub(args.window);
    let tail = (m.offset + m.length + args.window).min(bytes.len());
    eprintln!("--- context [0x{:X}, 0x{:X}) ---", lead, tail);
    eprintln!("before     = {}", hex_row(&bytes[lead..m.offset]));
    eprintln!("field      = {}", hex_row(&bytes[m.offset..m.offset + m.length]));
    eprintln!("after      = {}", hex_row(&bytes[m.offset + m.length..tail]));
    Ok(())
}

fn hex_row(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        s.push_str(&format!("{b:02X}"));
    }
    s
}
