//! Interpreter configuration.

use crate::print_handler::{buffer_handler, silent_handler, stdout_handler, SharedPrintHandler};

/// Settings for one evaluation.
///
/// ```ignore
/// let config = EvalConfig::capturing().with_max_call_depth(Some(64));
/// evaluate_with(&program, &config)?;
/// assert_eq!(config.output(), "HAI\n");
/// ```
#[derive(Clone)]
pub struct EvalConfig {
    max_call_depth: Option<usize>,
    print_handler: SharedPrintHandler,
}

impl Default for EvalConfig {
    /// Unlimited call depth, `VISIBLE` to stdout.
    fn default() -> Self {
        EvalConfig {
            max_call_depth: None,
            print_handler: stdout_handler(),
        }
    }
}

impl EvalConfig {
    /// `VISIBLE` output captured; read it back with [`output`](Self::output).
    pub fn capturing() -> Self {
        Self::default().with_print_handler(buffer_handler())
    }

    /// `VISIBLE` output discarded.
    pub fn silent() -> Self {
        Self::default().with_print_handler(silent_handler())
    }

    /// Cap on nested function calls. `None` means unlimited; the stack grows
    /// as needed.
    #[must_use]
    pub fn with_max_call_depth(mut self, limit: Option<usize>) -> Self {
        self.max_call_depth = limit;
        self
    }

    #[must_use]
    pub fn with_print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = handler;
        self
    }

    #[inline]
    pub fn max_call_depth(&self) -> Option<usize> {
        self.max_call_depth
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Output captured so far (empty unless built with
    /// [`capturing`](Self::capturing)).
    pub fn output(&self) -> String {
        self.print_handler.get_output()
    }
}
