//! Core library for sdkgen
//!
//! This crate implements the **Functional Core** of the sdkgen application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! - **`sdkgen_core`** (this crate): pure transformation functions with zero I/O
//! - **`sdkgen`**: file system access, HTTP calls, and orchestration (the
//!   Imperative Shell)
//!
//! All functions here are deterministic and side-effect free: the markdown
//! code extractor, the filename generator, the service-name extractor, the
//! prompt builders, the prompt-budget assembler, and the final-message
//! composer. They can be tested with simple fixture data, no mocking
//! required.
//!
//! # Module Organization
//!
//! - [`extract`]: pulling fenced code blocks out of model responses
//! - [`filename`]: mapping (service, language) to a normalized file name
//! - [`service`]: extracting a service name from a free-text request
//! - [`prompt`]: building the two request prompts sent to the model
//! - [`assemble`]: packing scanned files into a budgeted context block
//! - [`compose`]: rendering the final user-facing message
//! - [`types`]: domain models shared with the shell

pub mod assemble;
pub mod compose;
pub mod extract;
pub mod filename;
pub mod prompt;
pub mod service;
pub mod types;
