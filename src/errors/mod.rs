//! Error types and error handling for the lexer front end.
//!
//! This module defines the errors produced while scanning and while
//! resolving spans against a session. It includes:
//!
//! - Error structures carrying the offending source span
//! - Specific error variants for scanning and session setup
//! - Error names and suggestions used by the diagnostic renderer

pub mod errors;
