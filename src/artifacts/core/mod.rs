//! Core utilities and shared types
//!
//! This module contains the error taxonomy shared by every area and command.

pub mod error;
