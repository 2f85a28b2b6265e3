use std::collections::HashMap;

use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// The stack of scope frames active during one program run.
///
/// Lookup starts at the innermost frame (the top of the stack) and proceeds
/// outward. The bottom frame is the program-global scope: it exists from
/// construction and [`Environment::pop_scope`] refuses to remove it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    scope_stack: Vec<HashMap<String, Value>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only the global frame.
    #[must_use]
    pub fn new() -> Self {
        Self { scope_stack: vec![HashMap::new()] }
    }

    /// Returns the number of frames, including the global one.
    ///
    /// # Example
    /// ```
    /// use arith::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// assert_eq!(env.depth(), 1);
    ///
    /// env.push_scope();
    /// assert_eq!(env.depth(), 2);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scope_stack.len()
    }

    /// Adds a fresh empty frame on top of the stack.
    pub fn push_scope(&mut self) {
        self.scope_stack.push(HashMap::new());
        trace!(depth = self.scope_stack.len(), "pushed scope");
    }

    /// Removes the innermost frame and every binding declared in it.
    ///
    /// # Errors
    /// Returns [`RuntimeError::ScopeUnderflow`] if only the global frame is
    /// left.
    ///
    /// # Example
    /// ```
    /// use arith::{error::RuntimeError, interpreter::environment::Environment};
    ///
    /// let mut env = Environment::new();
    /// env.push_scope();
    ///
    /// assert!(env.pop_scope().is_ok());
    /// assert!(matches!(env.pop_scope(), Err(RuntimeError::ScopeUnderflow)));
    /// ```
    pub fn pop_scope(&mut self) -> EvalResult<()> {
        if self.scope_stack.len() <= 1 {
            return Err(RuntimeError::ScopeUnderflow);
        }
        self.scope_stack.pop();
        trace!(depth = self.scope_stack.len(), "popped scope");
        Ok(())
    }

    /// Retrieves a variable, searching from the innermost frame outward.
    ///
    /// Returns `None` if no active frame defines `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.scope_stack
            .iter()
            .rev()
            .find_map(|scope| scope.get(name).copied())
    }

    /// Looks up a variable for a read in the program.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedVariable`] when no active frame
    /// defines `name`.
    ///
    /// # Example
    /// ```
    /// use arith::{error::RuntimeError, interpreter::environment::Environment};
    ///
    /// let mut env = Environment::new();
    /// env.assign("x", 5);
    ///
    /// assert_eq!(env.lookup("x", 1).unwrap(), 5);
    /// assert!(matches!(env.lookup("y", 2),
    ///                  Err(RuntimeError::UndefinedVariable { line: 2, .. })));
    /// ```
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                              line })
    }

    /// Assigns to an existing variable, or declares it.
    ///
    /// The frame that already binds `name`, searching innermost first, is
    /// updated in place. If no frame binds it, the variable is created in the
    /// innermost frame: the first write to a name is its declaration.
    ///
    /// # Example
    /// ```
    /// use arith::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.assign("total", 1);
    ///
    /// env.push_scope();
    /// env.assign("total", 2); // updates the global binding
    /// env.assign("local", 3); // declared in the inner frame
    /// env.pop_scope().unwrap();
    ///
    /// assert_eq!(env.get("total"), Some(2));
    /// assert_eq!(env.get("local"), None);
    /// ```
    pub fn assign(&mut self, name: &str, value: Value) {
        for scope in self.scope_stack.iter_mut().rev() {
            if let Some(slot) = scope.get_mut(name) {
                *slot = value;
                return;
            }
        }
        if let Some(scope) = self.scope_stack.last_mut() {
            scope.insert(name.to_string(), value);
        }
    }
}
