//! Core logic for the termfolio terminal: command registry, dispatcher,
//! virtual filesystem, mock auth, project store, and the interactive
//! multi-step command flows.
//!
//! This crate is deliberately synchronous: every user input line is one
//! call into [`interpreter::Interpreter::handle_line`], which returns the
//! structured results a presentation layer renders. No global state; all
//! state lives in an explicitly constructed [`interpreter::SessionContext`].

pub mod auth;
pub mod command;
pub mod dispatch;
pub mod error;
pub mod flow;
pub mod interpreter;
pub mod output;
pub mod portfolio;
pub mod project;
pub mod theme;
pub mod vfs;

pub use error::{Result, TermError};
pub use interpreter::{Interpreter, SessionContext};
pub use output::{Block, CommandResult, Output, OutputKind};
