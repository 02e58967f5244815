//! Concurrent alphanumeric code generation.
//!
//! A run spawns a fixed number of workers. Each worker owns an independently
//! seeded [`RandSource`], draws one digit-token and one letter-token from two
//! [`Vocabulary`]s, and sends the resulting [`Draw`] to a single
//! [`Collector`]. Only the collector ever touches the aggregate, so workers
//! share no mutable state.
//!
//! ```
//! use alnum::{GeneratorConfig, generate};
//!
//! let config = GeneratorConfig::builder().workers(4).seed(7).build()?;
//! let set = generate(&config)?;
//! assert_eq!(set.len(), 4);
//! # Ok::<(), alnum::Error>(())
//! ```

mod army;
mod collector;
mod error;
mod generator;
mod json;
mod policy;
mod record;
#[cfg(feature = "async-tokio")]
mod runtime;
mod source;
mod vocabulary;


pub use crate::army::*;
pub use crate::collector::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::policy::*;
pub use crate::record::*;
#[cfg(feature = "async-tokio")]
pub use crate::runtime::*;
pub use crate::source::*;
pub use crate::vocabulary::*;
