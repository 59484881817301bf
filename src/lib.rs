pub mod cleaning;
pub mod config;
pub mod heading;
pub mod pipeline;
pub mod reader;
pub mod segmenter;

// Re-export main types for convenient access
pub use cleaning::NoiseFilter;
pub use config::PipelineConfig;
pub use heading::HeadingClassifier;
pub use segmenter::{Lesson, LessonSegmenter, Segmentation};

// Re-export the pipeline entry point
pub use pipeline::{extract_lessons, ExtractionReport, RunStats};
