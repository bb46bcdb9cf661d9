//! Routes `tracing` events to the browser console.

use std::io::{self, Write};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Collects one formatted event and logs it when dropped.
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let message = String::from_utf8_lossy(&self.buffer);
        let message = JsValue::from_str(message.trim_end());
        if self.level == Level::ERROR {
            web_sys::console::error_1(&message);
        } else if self.level == Level::WARN {
            web_sys::console::warn_1(&message);
        } else if self.level == Level::INFO {
            web_sys::console::info_1(&message);
        } else {
            web_sys::console::debug_1(&message);
        }
    }
}

/// [`MakeWriter`] handing out one [`ConsoleWriter`] per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buffer: Vec::new(),
        }
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let installed = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();

    if installed.is_ok() {
        tracing::debug!("console logging ready");
    }
}
