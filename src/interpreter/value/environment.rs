use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// Shared reference to an environment.
///
/// Closures hold one of these for the scope they were defined in, so an
/// environment lives for as long as any closure (or enclosed scope) can
/// still reach it.
pub type EnvRef = Rc<RefCell<Environment>>;

/// A lexical scope: name-to-value bindings with an optional outer link.
///
/// Lookup walks the chain outward until a binding is found; `let` always
/// writes to the innermost scope. Blocks do not create scopes; only
/// function calls enclose a fresh environment over the closure's captured
/// one.
///
/// # Example
/// ```
/// use brio::interpreter::value::{core::Value, environment::{Environment, enclosed}};
///
/// let global = Environment::new().into_ref();
/// global.borrow_mut().set("x".to_owned(), Value::Integer(1));
///
/// let local = enclosed(&global);
/// local.borrow_mut().set("y".to_owned(), Value::Integer(2));
///
/// assert_eq!(local.borrow().get("x"), Some(Value::Integer(1)));
/// assert_eq!(local.borrow().get("y"), Some(Value::Integer(2)));
/// assert_eq!(global.borrow().get("y"), None);
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<EnvRef>,
}

impl Environment {
    /// Creates a fresh global environment with no outer link.
    #[must_use]
    pub fn new() -> Self {
        Self { store: HashMap::new(),
               outer: None }
    }

    /// Creates an environment that encloses `outer`; names not bound here
    /// resolve through the outer chain.
    #[must_use]
    pub fn enclosing(outer: EnvRef) -> Self {
        Self { store: HashMap::new(),
               outer: Some(outer) }
    }

    /// Wraps the environment into a shared [`EnvRef`].
    #[must_use]
    pub fn into_ref(self) -> EnvRef {
        Rc::new(RefCell::new(self))
    }

    /// Looks a name up through the scope chain.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            Some(value.clone())
        } else if let Some(outer) = &self.outer {
            outer.borrow().get(name)
        } else {
            None
        }
    }

    /// Binds a name in this scope, shadowing any outer binding of the same
    /// name. Rebinding an existing name overwrites it.
    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}

/// Creates a child environment enclosing `outer`.
#[must_use]
pub fn enclosed(outer: &EnvRef) -> EnvRef {
    Environment::enclosing(Rc::clone(outer)).into_ref()
}
