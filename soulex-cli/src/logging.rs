//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分目标日志控制。

use soulex_config::Phase;
use std::io;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::config::LogConfig;

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 使用指定格式和日志配置初始化日志系统
pub fn init(log_config: &LogConfig, format: LogFormat) {
    // Build filter targets
    let lexer_target = Phase::Lexer.target();
    let api_target = Phase::Api.target();
    let targets = Targets::new()
        .with_default(log_config.global)
        .with_target(lexer_target.clone(), log_config.level_for(&lexer_target))
        .with_target(api_target.clone(), log_config.level_for(&api_target))
        .with_target(Phase::Cli.target(), log_config.global);

    let stderr_layer = match format {
        LogFormat::Pretty => fmt::layer().with_writer(io::stderr).pretty().boxed(),
        LogFormat::Compact => fmt::layer().with_writer(io::stderr).compact().boxed(),
        LogFormat::Json => fmt::layer().with_writer(io::stderr).json().boxed(),
    };

    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(targets))
        .init();
}
