mod engine;
mod engine_config;
mod snapshot;

pub use engine::PieChartEngine;
pub use engine_config::PieChartEngineConfig;
pub use snapshot::EngineSnapshot;
