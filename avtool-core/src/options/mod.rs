// ============================================================================
// avtool-core/src/options/mod.rs
// ============================================================================
//
// OPTION REGISTRY: Descriptors for the flat option table
//
// This module defines the immutable option descriptors the front end
// registers at startup and the append-only registry the dispatcher reads.
// The source of truth for which options exist lives in the CLI's declarative
// table; this module only enforces the shape rules.
//
// KEY COMPONENTS:
// - OptionKind: arity/category of an option (exit, value-taking, function)
// - Handler: the three legal callable shapes, selected by kind
// - OptionDescriptor: one registered flag (aliases are separate entries)
// - OptionRegistry / OptionRegistryBuilder: build-once, read-only lookup

use std::fmt;
use std::rc::Rc;

use crate::error::{CoreError, CoreResult};

pub mod dispatch;

/// Category of a registered option. The kind decides how many tokens the
/// dispatcher consumes and which [`Handler`] shape is legal for the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Informational action. Runs once, then dispatch is terminal; the
    /// caller is expected to flush output and exit 0.
    Exit,
    /// Consumes the following token and stores it through a setter.
    TakesValue,
    /// Function-style dispatch without a value; the handler receives the
    /// option name and an empty value.
    Func,
    /// Function-style dispatch that consumes the following token.
    FuncTakesValue,
}

impl OptionKind {
    /// Whether this kind consumes the token after the option itself.
    pub fn takes_value(self) -> bool {
        matches!(self, OptionKind::TakesValue | OptionKind::FuncTakesValue)
    }
}

/// The three legal handler shapes.
///
/// Handlers are reference-counted so aliases of one logical option
/// (e.g. `h`, `?`, `help`, `-help`) can share a single closure; registering
/// the same handler under several names is idempotent in behavior.
///
/// Setter and function handlers report rejection with a plain reason string;
/// the dispatcher translates that into the [`CoreError`] taxonomy so
/// handlers stay decoupled from it.
#[derive(Clone)]
pub enum Handler {
    /// Zero-argument informational action (legal only under [`OptionKind::Exit`]).
    Exit(Rc<dyn Fn() -> CoreResult<()>>),
    /// Single-argument setter storing a parsed value (legal only under
    /// [`OptionKind::TakesValue`]).
    Set(Rc<dyn Fn(&str) -> Result<(), String>>),
    /// Two-argument function `(name, value)` (legal under
    /// [`OptionKind::Func`] and [`OptionKind::FuncTakesValue`]).
    Func2(Rc<dyn Fn(&str, &str) -> Result<(), String>>),
}

impl Handler {
    fn shape_name(&self) -> &'static str {
        match self {
            Handler::Exit(_) => "exit",
            Handler::Set(_) => "setter",
            Handler::Func2(_) => "func2",
        }
    }

    /// Whether this handler shape is legal for `kind`.
    fn matches_kind(&self, kind: OptionKind) -> bool {
        matches!(
            (kind, self),
            (OptionKind::Exit, Handler::Exit(_))
                | (OptionKind::TakesValue, Handler::Set(_))
                | (OptionKind::Func, Handler::Func2(_))
                | (OptionKind::FuncTakesValue, Handler::Func2(_))
        )
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.shape_name())
    }
}

/// One registered option: a flag name bound to its kind, handler and help
/// text. Immutable once built; aliases are independent descriptors sharing a
/// cloned [`Handler`].
#[derive(Debug, Clone)]
pub struct OptionDescriptor {
    name: String,
    kind: OptionKind,
    handler: Handler,
    help: String,
    arg_name: Option<String>,
}

impl OptionDescriptor {
    pub fn new(
        name: impl Into<String>,
        kind: OptionKind,
        handler: Handler,
        help: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            handler,
            help: help.into(),
            arg_name: None,
        }
    }

    /// Display name for the expected argument, e.g. `loglevel` in
    /// `-loglevel <loglevel>`. Only meaningful for value-taking kinds.
    pub fn with_arg_name(mut self, arg_name: impl Into<String>) -> Self {
        self.arg_name = Some(arg_name.into());
        self
    }

    /// Clone this descriptor under another name, sharing the same handler.
    pub fn aliased(&self, name: impl Into<String>) -> Self {
        let mut clone = self.clone();
        clone.name = name.into();
        clone
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn arg_name(&self) -> Option<&str> {
        self.arg_name.as_deref()
    }
}

/// Process-wide, read-only option table. Built once by
/// [`OptionRegistryBuilder`] before argument parsing begins and never
/// modified afterwards.
#[derive(Debug, Default)]
pub struct OptionRegistry {
    entries: Vec<OptionDescriptor>,
}

impl OptionRegistry {
    pub fn builder() -> OptionRegistryBuilder {
        OptionRegistryBuilder::default()
    }

    /// Find the descriptor registered under `name`.
    ///
    /// Registration order defines precedence: when names collide, the
    /// first-registered entry wins.
    pub fn lookup(&self, name: &str) -> Option<&OptionDescriptor> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// All registered descriptors in registration order (used by help
    /// rendering).
    pub fn entries(&self) -> &[OptionDescriptor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Append-only builder for [`OptionRegistry`].
///
/// `register` fails when the descriptor's handler shape does not match its
/// kind. That is an authoring error in the option table, caught here rather
/// than at dispatch time.
#[derive(Debug, Default)]
pub struct OptionRegistryBuilder {
    entries: Vec<OptionDescriptor>,
}

impl OptionRegistryBuilder {
    pub fn register(mut self, descriptor: OptionDescriptor) -> CoreResult<Self> {
        if !descriptor.handler().matches_kind(descriptor.kind()) {
            return Err(CoreError::Registration(format!(
                "option '{}' binds a {} handler under {:?}",
                descriptor.name(),
                descriptor.handler().shape_name(),
                descriptor.kind(),
            )));
        }
        self.entries.push(descriptor);
        Ok(self)
    }

    /// Register `descriptor` under each name in `names`, sharing one handler.
    pub fn register_aliases(mut self, names: &[&str], descriptor: OptionDescriptor) -> CoreResult<Self> {
        for name in names {
            self = self.register(descriptor.aliased(*name))?;
        }
        Ok(self)
    }

    pub fn build(self) -> OptionRegistry {
        OptionRegistry {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn exit_handler() -> Handler {
        Handler::Exit(Rc::new(|| Ok(())))
    }

    fn setter_handler() -> Handler {
        Handler::Set(Rc::new(|_| Ok(())))
    }

    #[test]
    fn register_rejects_mismatched_handler_shape() {
        // A zero-arg handler bound under a value-taking kind is an authoring
        // error and must fail at registration time.
        let err = OptionRegistry::builder()
            .register(OptionDescriptor::new(
                "loglevel",
                OptionKind::TakesValue,
                exit_handler(),
                "set logging level",
            ))
            .unwrap_err();
        assert!(matches!(err, CoreError::Registration(_)));

        let err = OptionRegistry::builder()
            .register(OptionDescriptor::new(
                "version",
                OptionKind::Exit,
                setter_handler(),
                "show version",
            ))
            .unwrap_err();
        assert!(matches!(err, CoreError::Registration(_)));
    }

    #[test]
    fn register_accepts_func2_with_and_without_value() {
        let func = Handler::Func2(Rc::new(|_, _| Ok(())));
        let registry = OptionRegistry::builder()
            .register(OptionDescriptor::new(
                "loglevel",
                OptionKind::FuncTakesValue,
                func.clone(),
                "set logging level",
            ))
            .unwrap()
            .register(OptionDescriptor::new(
                "report",
                OptionKind::Func,
                func,
                "enable report dump",
            ))
            .unwrap()
            .build();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn lookup_prefers_first_registered_entry() {
        let first = Rc::new(Cell::new(0u32));
        let second = Rc::new(Cell::new(0u32));
        let first_hit = Rc::clone(&first);
        let second_hit = Rc::clone(&second);

        let registry = OptionRegistry::builder()
            .register(OptionDescriptor::new(
                "version",
                OptionKind::Exit,
                Handler::Exit(Rc::new(move || {
                    first_hit.set(first_hit.get() + 1);
                    Ok(())
                })),
                "show version",
            ))
            .unwrap()
            .register(OptionDescriptor::new(
                "version",
                OptionKind::Exit,
                Handler::Exit(Rc::new(move || {
                    second_hit.set(second_hit.get() + 1);
                    Ok(())
                })),
                "shadowed duplicate",
            ))
            .unwrap()
            .build();

        let descriptor = registry.lookup("version").expect("version registered");
        assert_eq!(descriptor.help(), "show version");
        if let Handler::Exit(run) = descriptor.handler() {
            run().unwrap();
        }
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }

    #[test]
    fn register_aliases_shares_one_handler() {
        let hits = Rc::new(Cell::new(0u32));
        let handler_hits = Rc::clone(&hits);
        let descriptor = OptionDescriptor::new(
            "help",
            OptionKind::Exit,
            Handler::Exit(Rc::new(move || {
                handler_hits.set(handler_hits.get() + 1);
                Ok(())
            })),
            "show help",
        );

        let registry = OptionRegistry::builder()
            .register_aliases(&["h", "?", "help", "-help"], descriptor)
            .unwrap()
            .build();
        assert_eq!(registry.len(), 4);

        for name in ["h", "?", "help", "-help"] {
            let entry = registry.lookup(name).expect("alias registered");
            assert_eq!(entry.kind(), OptionKind::Exit);
            if let Handler::Exit(run) = entry.handler() {
                run().unwrap();
            }
        }
        assert_eq!(hits.get(), 4);
    }

    #[test]
    fn lookup_misses_unregistered_names() {
        let registry = OptionRegistry::builder().build();
        assert!(registry.is_empty());
        assert!(registry.lookup("bogus").is_none());
    }
}
