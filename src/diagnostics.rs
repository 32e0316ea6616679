//! Diagnostic messages emitted while stepping.

/// Destination for diagnostic messages.
///
/// The integrator reports step size clamping and forced minimum steps through
/// this sink. `method` names the integrator operation that raised the message.
/// Messages are rate limited by the integrator before they reach the sink.
///
/// `Vec<String>` implements `Diagnostics` by collecting formatted messages.
pub trait Diagnostics {
    fn emit(&mut self, method: &str, message: &str);
}

/// Writes diagnostics to standard error. This is the default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stderr;

impl Diagnostics for Stderr {
    fn emit(&mut self, method: &str, message: &str) {
        eprintln!("{}", format_message(method, message));
    }
}

impl Diagnostics for Vec<String> {
    fn emit(&mut self, method: &str, message: &str) {
        self.push(format_message(method, message));
    }
}

fn format_message(method: &str, message: &str) -> String {
    if method.is_empty() {
        format!("rkck: {}", message)
    } else {
        format!("rkck::{}(): {}", method, message)
    }
}

/// Per-integrator gate in front of a [`Diagnostics`] sink.
///
/// Forwards at most `cap` messages, then a single notice that output is being
/// silenced, then nothing.
#[derive(Debug, Clone)]
pub(crate) struct RateLimited<D> {
    sink: D,
    enabled: bool,
    cap: usize,
    emitted: usize,
    silenced: bool,
}

impl<D: Diagnostics> RateLimited<D> {
    pub fn new(sink: D, enabled: bool, cap: usize) -> Self {
        Self {
            sink,
            enabled,
            cap,
            emitted: 0,
            silenced: false,
        }
    }

    pub fn log(&mut self, method: &str, message: &str) {
        if !self.enabled {
            return;
        }
        if self.emitted < self.cap {
            self.sink.emit(method, message);
            self.emitted += 1;
        } else if !self.silenced {
            self.sink.emit("", "too many warnings. Silencing further output");
            self.silenced = true;
        }
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    #[cfg(test)]
    pub fn into_sink(self) -> D {
        self.sink
    }
}
