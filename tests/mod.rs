pub mod actions;
pub mod methods;
pub mod pipeline;
pub mod schemas;
pub mod types;
