//! API data models
//!
//! This module contains data structures for the Claude and Gemini APIs.

pub mod claude;
pub mod gemini;
