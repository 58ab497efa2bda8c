//! 配置管理
//!
//! 配置来源依次为：`config.toml`、`config.{APP_ENV}.toml`、`EXTASSIGN_` 前缀环境变量，
//! 最后是若干独立环境变量的覆盖。

mod r#impl;
mod structs;

pub use structs::*;
