//! Core library for the `cassette` CLI.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, configuration, the consent gate, the CSRF-bearing API
//! session, the slot repository client, and the guided-tour sequencer. The
//! primary user-facing interface is the `cassette` command-line application;
//! library APIs may evolve as the CLI grows.
pub mod args;
pub mod config;
pub mod consent;
pub mod error;
pub mod session;
pub mod slots;
pub mod tour;
