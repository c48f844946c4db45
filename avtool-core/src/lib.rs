//! Core library for the avtool multimedia front end.
//!
//! This crate owns the option-table-driven argument machinery: an immutable
//! [`OptionRegistry`](options::OptionRegistry) of option descriptors, the
//! [`dispatch`](options::dispatch::dispatch) loop that walks a raw argument
//! vector against it, log-level parsing for the `-loglevel` option, and the
//! compiled-in capability tables behind `-formats`, `-codecs`, `-bsfs`,
//! `-protocols` and `-filters`.
//!
//! ## Usage Example
//!
//! ```rust
//! use avtool_core::options::{Handler, OptionDescriptor, OptionKind, OptionRegistry};
//! use avtool_core::options::dispatch::{dispatch, DispatchOutcome};
//! use std::rc::Rc;
//!
//! let registry = OptionRegistry::builder()
//!     .register(OptionDescriptor::new(
//!         "version",
//!         OptionKind::Exit,
//!         Handler::Exit(Rc::new(|| {
//!             println!("avtool 0.2.0");
//!             Ok(())
//!         })),
//!         "show version",
//!     ))
//!     .unwrap()
//!     .build();
//!
//! let args = vec!["-version".to_string()];
//! let outcome = dispatch(&registry, &args).unwrap();
//! assert_eq!(outcome, DispatchOutcome::ExitRequested);
//! ```

pub mod capabilities;
pub mod error;
pub mod logging;
pub mod options;

// Re-exports for public API
pub use capabilities::{Capability, CapabilityKind};
pub use error::{CoreError, CoreResult};
pub use options::dispatch::{dispatch, DispatchOutcome};
pub use options::{Handler, OptionDescriptor, OptionKind, OptionRegistry, OptionRegistryBuilder};
