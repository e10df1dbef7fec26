//! cheatquiz-core — cheatsheet parsing and the quiz loop.
//!
//! This crate turns a markdown cheatsheet into question records and plays
//! them as a terminal quiz. The CLI crate only wires it to stdin/stdout.

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod session;
pub mod style;

pub use config::{load_config, load_config_from, QuizConfig};
pub use error::QuizError;
pub use model::{GameMode, Record};
pub use session::{QuizRunner, Session, SessionState, StopReason, DEFAULT_SENTINEL};
pub use style::{styler_for, AnsiStyler, PlainStyler, StyleRole, Styler};
