pub mod app;
pub mod app_orchestrator;
pub mod change_sampler;
