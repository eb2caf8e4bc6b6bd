use std::io::BufRead;

use clap::Args;
use uidpatch_core::fingerprint::crc32;
use uidpatch_core::ScanFilter;

use crate::cmd::FilterArgs;
use crate::io::blob;
use crate::session::{Effect, Event, Mode, Session};

#[derive(Args)]
pub struct SessionArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

pub fn run(args: SessionArgs) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    run_loop(&mut stdin.lock(), args.filter.to_filter())
}

fn run_loop(input: &mut impl BufRead, filter: ScanFilter) -> anyhow::Result<()> {
    banner();

    let mut session = Session::new(filter);
    let mut current_path: Option<String> = None;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // session-independent commands first
        if matches!(trimmed, "quit" | "exit") {
            break;
        }
        if trimmed == "show" {
            match session.field() {
                Some(m) => eprintln!(
                    "field: value={} offset=0x{:X} length={}",
                    m.value, m.offset, m.length
                ),
                None => eprintln!("no file loaded yet; use 'load <path>'"),
            }
            continue;
        }
        if let Some(path) = trimmed.strip_prefix("load ") {
            let path = path.trim();
            if !blob::has_expected_ext(path) {
                eprintln!("note: expected a .{} file, got {}", blob::EXPECTED_EXT, path);
            }
            match blob::read(path) {
                Ok(bytes) => {
                    current_path = Some(path.to_string());
                    apply_effect(session.handle(Event::FileLoaded(bytes)), &current_path)?;
                }
                Err(e) => eprintln!("{e:#}"),
            }
            continue;
        }

        let event = match parse_event(trimmed, session.mode()) {
            Some(ev) => ev,
            None => {
                eprintln!("unrecognized input: {trimmed}");
                continue;
            }
        };
        apply_effect(session.handle(event), &current_path)?;
    }

    eprintln!("session closed");
    Ok(())
}

/// Map one input line to a machine event, given what the session is
/// waiting for. `None` means the line makes no sense right now.
fn parse_event(line: &str, mode: Mode) -> Option<Event> {
    match line {
        "update" => return Some(Event::UpdateRequested),
        "clear" => return Some(Event::ClearRequested),
        "cancel" => return Some(Event::Cancelled),
        _ => {}
    }
    match mode {
        Mode::AwaitingClearConfirm => match line {
            "y" | "yes" => Some(Event::Confirmed),
            "n" | "no" => Some(Event::Cancelled),
            _ => None,
        },
        _ => line.parse::<i64>().ok().map(Event::ValueEntered),
    }
}

fn apply_effect(effect: Effect, current_path: &Option<String>) -> anyhow::Result<()> {
    match effect {
        Effect::Report(msg) | Effect::Prompt(msg) => {
            eprintln!("{msg}");
        }
        Effect::Patched { bytes, value } => {
            let out = current_path
                .as_deref()
                .map(blob::default_output_path)
                .unwrap_or_else(|| format!("patched.{}", blob::EXPECTED_EXT));
            blob::write(&out, &bytes)?;
            eprintln!(
                "patch ok: out={} value={} bytes={} crc32=0x{:08X}",
                out,
                value,
                bytes.len(),
                crc32(&bytes)
            );
        }
    }
    Ok(())
}

fn banner() {
    eprintln!("--- id editor session ---");
    eprintln!("load <path>    load a blob and detect its id field");
    eprintln!("update         rewrite the field (prompts for the value)");
    eprintln!("<number>       rewrite the field directly");
    eprintln!("clear          zero the field (asks for confirmation)");
    eprintln!("show           re-print the detected field");
    eprintln!("quit           exit");
}
