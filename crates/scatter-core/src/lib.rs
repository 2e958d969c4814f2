// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the scatter/regression scene, renderer and interaction API.

pub mod convert;
pub mod geometry;
pub mod grid;
pub mod interaction;
pub mod raster;
pub mod render;
pub mod scene;
pub mod stats;
pub mod summary;
pub mod surface;
pub mod theme;
pub mod types;

pub use convert::{to_canvas, to_data, ViewportSource};
pub use interaction::{Controls, InteractionController, InteractionOptions, InteractionState, Mode, PointerButton};
pub use raster::RasterSurface;
pub use render::{RenderOptions, RenderPipeline, ViewToggles};
pub use scene::{ClickBuffer, ReferenceLine, Scene};
pub use stats::{correlation, linear_regression, mean, Regression, StatsError};
pub use summary::Summary;
pub use surface::{DrawCommand, RecordingSurface, Stroke, Surface};
pub use theme::Theme;
pub use types::{DataPoint, PixelPoint, Viewport};
