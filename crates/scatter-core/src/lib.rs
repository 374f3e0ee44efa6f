// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports public API for scatter chart layout and rendering.

pub mod chart;
pub mod data;
pub mod error;
pub mod grid;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod types;

pub use chart::{RenderOptions, ScatterChart};
pub use data::{load_csv_path, load_csv_reader, DataPoint, LoadReport};
pub use error::DataError;
pub use scale::LinearScale;
pub use scene::{Mark, Scene, Tick};
pub use theme::Theme;
pub use types::{Insets, RectI32};
