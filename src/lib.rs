pub mod stream;
pub mod error;

pub mod stream_configuration;
pub mod stream_performance_metrics;

// Re-export the stream surface at the crate root
pub use stream::*;
pub use error::{StreamError, StreamResult};
pub use stream_configuration::StreamConfig;
pub use stream_performance_metrics::{run_sequential, run_threaded, RunTiming, DEFAULT_CALLS};
