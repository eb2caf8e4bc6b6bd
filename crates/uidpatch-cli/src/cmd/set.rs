use clap::Args;
use uidpatch_core::fingerprint::crc32;
use uidpatch_core::{find_field, replace_field};

use crate::cmd::FilterArgs;
use crate::io::blob;

#[derive(Args)]
pub struct SetArgs {
    /// Input blob path
    #[arg(long)]
    pub r#in: String,

    /// New field value (non-negative)
    #[arg(long, allow_hyphen_values = true)]
    pub value: i64,

    /// Output path. Defaults to <stem>_modified.<ext> next to the input.
    #[arg(long)]
    pub out: Option<String>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

pub fn run(args: SetArgs) -> anyhow::Result<()> {
    let bytes = blob::read(&args.r#in)?;
    let m = find_field(&bytes, &args.filter.to_filter())?;
    let patched = replace_field(&bytes, &m, args.value)?;

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| blob::default_output_path(&args.r#in));
    blob::write(&out, &patched)?;

    let new_len = patched.len() + m.length - bytes.len();
    eprintln!(
        "set ok: out={} value={} offset=0x{:X} len={}->{} bytes={} crc32=0x{:08X}",
        out,
        args.value,
        m.offset,
        m.length,
        new_len,
        patched.len(),
        crc32(&patched)
    );
    Ok(())
}
