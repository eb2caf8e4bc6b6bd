// crates/uidpatch-cli/src/session.rs

use uidpatch_core::{find_field, replace_field, FieldMatch, ScanFilter};

/// What the edit session is waiting for next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// No blob loaded (or the last load failed detection).
    AwaitingFile,
    /// A blob is loaded and its field located.
    FieldDetected,
    /// An update was requested; the next value applies it.
    AwaitingNewValue,
    /// A clear was requested; waiting for confirmation.
    AwaitingClearConfirm,
}

/// Inputs the driver feeds into the machine. The machine never touches
/// files or streams itself.
#[derive(Debug)]
pub enum Event {
    FileLoaded(Vec<u8>),
    UpdateRequested,
    ClearRequested,
    ValueEntered(i64),
    Confirmed,
    Cancelled,
}

/// What the driver should do after a transition.
#[derive(Debug)]
pub enum Effect {
    Report(String),
    Prompt(String),
    Patched { bytes: Vec<u8>, value: i64 },
}

/// One edit session: at most one blob and one located field at a time.
///
/// The loaded blob and its match are kept as-is across patches; each patch
/// re-splices the original buffer, so repeated updates never compound.
pub struct Session {
    filter: ScanFilter,
    mode: Mode,
    blob: Option<Vec<u8>>,
    field: Option<FieldMatch>,
}

impl Session {
    pub fn new(filter: ScanFilter) -> Self {
        Session {
            filter,
            mode: Mode::AwaitingFile,
            blob: None,
            field: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn field(&self) -> Option<FieldMatch> {
        self.field
    }

    pub fn handle(&mut self, ev: Event) -> Effect {
        match (self.mode, ev) {
            // a new file restarts the cycle from any mode
            (_, Event::FileLoaded(bytes)) => self.load(bytes),

            (Mode::AwaitingFile, _) => Effect::Report("no file loaded yet; use 'load <path>'".into()),

            (Mode::FieldDetected, Event::UpdateRequested) => {
                self.mode = Mode::AwaitingNewValue;
                Effect::Prompt("enter the new value (non-negative integer), or 'cancel'".into())
            }
            (Mode::FieldDetected, Event::ClearRequested) => {
                self.mode = Mode::AwaitingClearConfirm;
                Effect::Prompt("zero the field? [y/n]".into())
            }
            // a bare value in the detected state applies immediately
            (Mode::FieldDetected, Event::ValueEntered(v)) => self.apply(v),
            (Mode::FieldDetected, Event::Confirmed | Event::Cancelled) => {
                Effect::Report("nothing pending to confirm".into())
            }

            (Mode::AwaitingNewValue, Event::ValueEntered(v)) => self.apply(v),
            (Mode::AwaitingNewValue, Event::Cancelled) => {
                self.mode = Mode::FieldDetected;
                Effect::Report("update cancelled".into())
            }
            (Mode::AwaitingNewValue, _) => {
                Effect::Prompt("a value is pending; enter it or 'cancel'".into())
            }

            (Mode::AwaitingClearConfirm, Event::Confirmed) => self.apply(0),
            (Mode::AwaitingClearConfirm, Event::Cancelled) => {
                self.mode = Mode::FieldDetected;
                Effect::Report("clear cancelled".into())
            }
            (Mode::AwaitingClearConfirm, _) => Effect::Prompt("zero the field? [y/n]".into()),
        }
    }

    fn load(&mut self, bytes: Vec<u8>) -> Effect {
        match find_field(&bytes, &self.filter) {
            Ok(m) => {
                self.blob = Some(bytes);
                self.field = Some(m);
                self.mode = Mode::FieldDetected;
                Effect::Report(format!(
                    "field detected: value={} offset=0x{:X} length={}",
                    m.value, m.offset, m.length
                ))
            }
            Err(e) => {
                self.blob = None;
                self.field = None;
                self.mode = Mode::AwaitingFile;
                Effect::Report(format!("{e}; load another file"))
            }
        }
    }

    fn apply(&mut self, value: i64) -> Effect {
        // mode guards guarantee both are present here
        let (blob, field) = match (self.blob.as_deref(), self.field.as_ref()) {
            (Some(b), Some(f)) => (b, f),
            _ => {
                self.mode = Mode::AwaitingFile;
                return Effect::Report("no file loaded yet; use 'load <path>'".into());
            }
        };
        match replace_field(blob, field, value) {
            Ok(bytes) => {
                self.mode = Mode::FieldDetected;
                Effect::Patched { bytes, value }
            }
            Err(e) => Effect::Report(format!("{e}; enter another value or 'cancel'")),
        }
    }
}
