// crates/uidpatch-cli/src/io/mod.rs

pub mod blob;
