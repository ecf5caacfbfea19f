pub mod geometry;
pub mod layout;
pub mod palette;
pub mod types;

pub use geometry::{compute_spans, pointer_angle_deg};
pub use hit_test::{
    HitResult, find_active_index, hit_test, is_inside_bounds, is_inside_bounds_legacy,
};
pub use layout::ChartMetrics;
pub use palette::{ColorPolicy, FixedPalette, HuePalette, PaletteSpec, SeededRgbPalette};
pub use types::{AngleSpan, Slice, Viewport};
