//! # Throttler
//!
//! 限流分发模块。
//!
//! 负责：
//! - 接收任意速率的 `Submission`
//! - 每个固定窗口最多释放 `limit` 个出站请求
//! - 隔离失败的请求，不阻塞后续窗口

pub mod client;
pub mod cycle;
pub mod error;
pub mod metrics;
pub mod queue;
pub mod transports;

pub use client::RegistrarClient;
pub use contracts::{Document, Submission, ThrottleConfig, Transport};
pub use cycle::ReleaseCycle;
pub use error::ThrottlerError;
pub use metrics::{MetricsSnapshot, ThrottleMetrics};
pub use queue::SubmissionQueue;
pub use transports::{HttpTransport, LogTransport};
