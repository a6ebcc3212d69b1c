//! Variable scoping.
//!
//! The program has one global scope for the whole run. Each function call
//! pushes a fresh frame that sees its own bindings and the globals, never
//! the caller's locals. Conditional and loop bodies share the frame they
//! appear in.

use rustc_hash::FxHashMap;

use lol_ir::{Name, Span};

use crate::errors::{redefinition, unbound_name, EvalError};
use crate::Value;

/// A bound value and the `I HAS A` that introduced it, if any.
#[derive(Clone, Debug)]
struct Binding {
    value: Value,
    declared_at: Option<Span>,
}

/// A single scope of owned bindings.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Binding>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name).map(|binding| &binding.value)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.bindings.get_mut(name).map(|binding| &mut binding.value)
    }

    fn insert(&mut self, name: Name, value: Value, declared_at: Option<Span>) {
        self.bindings.insert(name, Binding { value, declared_at });
    }
}

/// The global scope plus a stack of function-call frames.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    global: Scope,
    frames: Vec<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active function-call frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Enter a function call.
    pub fn push_frame(&mut self) {
        self.frames.push(Scope::new());
    }

    /// Leave a function call, dropping its bindings.
    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }

    fn current(&self) -> &Scope {
        self.frames.last().unwrap_or(&self.global)
    }

    fn current_mut(&mut self) -> &mut Scope {
        match self.frames.last_mut() {
            Some(frame) => frame,
            None => &mut self.global,
        }
    }

    /// Is `name` bound in the innermost frame?
    pub fn is_declared_here(&self, name: &str) -> bool {
        self.current().contains(name)
    }

    /// Bind a new name in the innermost frame.
    pub fn declare(&mut self, name: &str, value: Value) -> Result<(), EvalError> {
        self.bind(name, value, None)
    }

    /// Bind a name for the `I HAS A` at `site`.
    ///
    /// The same declaration running again (a loop body's next iteration)
    /// rebinds the name; a different declaration of it in this frame is a
    /// redefinition.
    pub fn declare_at(&mut self, name: &str, value: Value, site: Span) -> Result<(), EvalError> {
        self.bind(name, value, Some(site))
    }

    fn bind(&mut self, name: &str, value: Value, site: Option<Span>) -> Result<(), EvalError> {
        let scope = self.current_mut();
        if let Some(existing) = scope.bindings.get_mut(name) {
            if site.is_none() || existing.declared_at != site {
                return Err(redefinition(name));
            }
            existing.value = value;
            return Ok(());
        }
        scope.insert(name.to_owned(), value, site);
        Ok(())
    }

    /// Look a name up in the innermost frame, then the globals.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.frames
            .last()
            .and_then(|frame| frame.get(name))
            .or_else(|| self.global.get(name))
    }

    /// Rebind an existing name wherever [`lookup`](Self::lookup) would
    /// find it.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), EvalError> {
        let slot = match self.frames.last_mut() {
            Some(frame) if frame.contains(name) => frame.get_mut(name),
            _ => self.global.get_mut(name),
        };
        match slot {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(unbound_name(name)),
        }
    }
}

#[cfg(test)]
mod tests;
