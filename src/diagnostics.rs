#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warn,
    Info,
}

/// Destination for diagnostic lines.
pub trait LogSink {
    fn emit(&self, level: Level, line: &str);
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn emit(&self, level: Level, line: &str) {
        (**self).emit(level, line);
    }
}

/// Browser console on wasm, stderr on the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl LogSink for Console {
    #[cfg(target_arch = "wasm32")]
    fn emit(&self, level: Level, line: &str) {
        let value = wasm_bindgen::JsValue::from_str(line);
        match level {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::log_1(&value),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn emit(&self, _level: Level, line: &str) {
        eprintln!("{line}");
    }
}

fn format_line(scope: &str, details: &str) -> String {
    if details.trim().is_empty() {
        format!("[castdeck][{scope}]")
    } else {
        format!("[castdeck][{scope}] {details}")
    }
}

#[inline]
pub fn log_error(sink: &dyn LogSink, scope: &str, details: &str) {
    sink.emit(Level::Error, &format_line(scope, details));
}

#[inline]
pub fn log_warn(sink: &dyn LogSink, scope: &str, details: &str) {
    sink.emit(Level::Warn, &format_line(scope, details));
}

#[inline]
pub fn log_info(sink: &dyn LogSink, scope: &str, details: &str) {
    sink.emit(Level::Info, &format_line(scope, details));
}
