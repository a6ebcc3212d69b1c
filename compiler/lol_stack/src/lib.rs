//! Stack growth for deeply nested programs.
//!
//! Both the parser (nested `SUM OF` chains, nested `O RLY?` blocks) and the
//! interpreter (recursive `HOW DUZ I` functions) recurse once per nesting
//! level. Wrap those recursion points in [`ensure_sufficient_stack`] so a
//! deep program grows the stack instead of overflowing it.
//!
//! On wasm the guard is a passthrough; the host manages the stack there.

/// Remaining stack below which we grow (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// Wasm version: call `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
