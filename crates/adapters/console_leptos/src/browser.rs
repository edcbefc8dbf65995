//! Browser-side port implementations and logging setup.

use std::io;

use leptos::prelude::*;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

use chainwatch_app::ports::{ModalStore, Navigator};
use chainwatch_domain::modal::ModalState;

/// [`ModalStore`] backed by a signal so the dialog re-renders on every transition.
///
/// Reads through the store are untracked; views subscribe to the signal
/// directly.
#[derive(Debug, Clone, Copy)]
pub struct ReactiveModal(RwSignal<ModalState>);

impl ReactiveModal {
    pub fn new() -> Self {
        Self(RwSignal::new(ModalState::new()))
    }

    /// Tracked visibility, for use inside views.
    pub fn is_visible(self) -> bool {
        self.0.with(ModalState::is_visible)
    }
}

impl Default for ReactiveModal {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStore for ReactiveModal {
    fn read<R>(&self, f: impl FnOnce(&ModalState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn update(&self, f: impl FnOnce(&mut ModalState)) {
        self.0.update(f);
    }
}

/// [`Navigator`] driving `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, location: &str) {
        if let Err(err) = window().location().set_href(location) {
            tracing::error!(location, error = ?err, "navigation failed");
        }
    }

    fn reload(&self) {
        if let Err(err) = window().location().reload() {
            tracing::error!(error = ?err, "reload failed");
        }
    }
}

/// Route `tracing` output to the devtools console and panics to `console.error`.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(Level::DEBUG)
        .without_time()
        .with_ansi(false)
        .init();
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and flushes it to the console on drop.
struct ConsoleWriter {
    level: Level,
    line: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            line: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.line.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.line);
        let message = wasm_bindgen::JsValue::from_str(text.trim_end());
        match self.level {
            Level::ERROR => web_sys::console::error_1(&message),
            Level::WARN => web_sys::console::warn_1(&message),
            Level::INFO => web_sys::console::info_1(&message),
            _ => web_sys::console::debug_1(&message),
        }
    }
}
