use clap::Args;
use uidpatch_core::fingerprint::crc32;
use uidpatch_core::{find_field, replace_field};

use crate::cmd::FilterArgs;
use crate::io::blob;

#[derive(Args)]
pub struct ClearArgs {
    /// Input blob path
    #[arg(long)]
    pub r#in: String,

    /// Output path. Defaults to <stem>_modified.<ext> next to the input.
    #[arg(long)]
    pub out: Option<String>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

pub fn run(args: ClearArgs) -> anyhow::Result<()> {
    let bytes = blob::read(&args.r#in)?;
    let m = find_field(&bytes, &args.filter.to_filter())?;
    let patched = replace_field(&bytes, &m, 0)?;

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| blob::default_output_path(&args.r#in));
    blob::write(&out, &patched)?;

    eprintln!(
        "clear ok: out={} was={} offset=0x{:X} bytes={} crc32=0x{:08X}",
        out,
        m.value,
        m.offset,
        patched.len(),
        crc32(&patched)
    );
    Ok(())
}
