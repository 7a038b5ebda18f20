//! Tracing configuration for `cscopes`
//!
//! One fmt layer on stderr (stdout carries JSON output), an `EnvFilter`
//! that `RUST_LOG` overrides, and a bridge so the `log` records emitted by
//! `cs-infra` end up in the same subscriber.
//!
//! 日志输出到 stderr，`log` 记录通过 tracing-log 桥接。

use std::io;

use anyhow::Context;
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives when `RUST_LOG` is unset.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "warn" };
    vec![
        level.to_string(),
        format!("cs_app={}", if is_dev { "debug" } else { "info" }),
        format!("cs_infra={level}"),
        "diesel=warn".to_string(),
    ]
}

/// Install the global subscriber. Call once, before any logging.
///
/// # Errors / 错误
///
/// Fails if a logger or subscriber is already installed.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(is_development()).join(",")));

    let stderr_layer = fmt::layer()
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    LogTracer::init().context("Failed to bridge log records into tracing")?;

    let subscriber = registry().with(env_filter).with(stderr_layer);
    tracing::subscriber::set_global_default(subscriber)
        .context("Tracing subscriber already initialized")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev = build_filter_directives(true);
        assert!(dev.contains(&"debug".to_string()));
        assert!(dev.contains(&"cs_infra=debug".to_string()));

        let prod = build_filter_directives(false);
        assert!(prod.contains(&"warn".to_string()));
        assert!(prod.contains(&"cs_app=info".to_string()));
        assert!(prod.contains(&"diesel=warn".to_string()));
    }
}
