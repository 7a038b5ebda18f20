//! Startup: configuration, tracing and adapter wiring.
//! 启动：配置、日志与依赖装配

pub mod config;
pub mod tracing;
pub mod wiring;
