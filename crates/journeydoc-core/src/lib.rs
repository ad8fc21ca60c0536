#![forbid(unsafe_code)]

//! Data model and exporters for the FertilityAI documentation assets.
//!
//! This crate holds the literal user-journey graph rendered by
//! `journeydoc-render`, the literal sample datasets (conversation
//! transcripts, usage patterns, capability taxonomy, assistant profile),
//! and the JSON/CSV exporters that write them to disk.

pub mod error;
pub mod export;
pub mod geom;
pub mod journey;
pub mod samples;
pub mod style;

pub use error::{Error, Result};
pub use journey::{Interaction, InteractionKind, JourneyGraph, Step, StepType};
pub use style::{LEGEND_ITEMS, MarkerSymbol, NodeStyle};
