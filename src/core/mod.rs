//! Query orchestration and output rendering.

pub mod query;

pub use query::{execute, run, QueryError};
