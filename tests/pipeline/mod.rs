pub mod executor;
pub mod properties;
#[cfg(feature = "tracing")]
pub mod tracing_events;
