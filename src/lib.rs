//! Cutting plan for a sofa-side storage box: derive the panel and beam cuts,
//! check the beam total, pack the panel pieces into one sheet and draw it.

pub mod config;
pub mod error;
pub mod guillotine;
pub mod packer;
pub mod pieces;
pub mod plan;
pub mod render;
pub mod report;
pub mod svg;
pub mod types;

pub use config::BoxConfig;
pub use error::{PlanError, Result};
pub use packer::{GuillotinePacker, RectPacker};
pub use plan::{CutPlan, PackOutcome};
