//! GraphPad — interactive 2D point-and-line graph editor.
//!
//! Left-click places markers, right-clicking two markers links them with a
//! segment, and an edit mode drags markers around while attached segments
//! follow. The in-memory graph and its gesture protocol live in [`graph`]
//! and [`editor`]; [`app`] is the egui shell around them.

pub mod app;
pub mod editor;
pub mod graph;
pub mod model;

pub use editor::{Editor, Mode};
pub use graph::Graph;
pub use model::{HIT_THRESHOLD, Line, LineId, PointId, PointMarker, Pt};
