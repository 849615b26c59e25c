//! Pipeline conversions module
//!
//! This module contains orchestration logic for texture conversions.

mod batch;
mod texture_to_header;


pub use batch::BatchReport;
pub use texture_to_header::TextureToHeaderPipeline;
