//! External Assignment - 外部评分作业后端服务
//!
//! 作业在外部系统（如自动评测平台）中完成，外部系统通过 webservice 回写成绩，
//! 教师在本系统中补充人工评分、授予延期并查看成绩列表。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `grading`: 评分核心逻辑（有效日期、提交状态、成绩回写、成绩列表）
//! - `integrations`: 成绩册、完成条件、日历等协作方接口
//! - `middlewares`: 当前用户中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod grading;
pub mod integrations;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
