//! CLI infrastructure for the oxo engine
//!
//! This module provides the command-line interface for solving positions,
//! playing against the engine, and analyzing the game tree.

pub mod commands;
pub mod output;
