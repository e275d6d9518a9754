//! 限流客户端指标收集模块
//!
//! 在轮询 `ThrottleMetrics` 快照或处理回调时调用这些函数。

use metrics::{counter, gauge, histogram};

/// 记录一次提交入队
pub fn record_submission_enqueued() {
    counter!("registrar_submissions_enqueued_total").increment(1);
}

/// 记录一次分发结果
pub fn record_dispatch_outcome(transport: &str, success: bool) {
    let status = if success { "success" } else { "failure" };
    counter!(
        "registrar_dispatch_total",
        "transport" => transport.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// 记录当前队列深度
pub fn record_queue_depth(depth: usize) {
    gauge!("registrar_queue_depth").set(depth as f64);
}

/// 记录一个窗口释放的提交数
pub fn record_window_released(count: usize) {
    histogram!("registrar_window_released").record(count as f64);

    if count > 0 {
        counter!("registrar_windows_with_releases_total").increment(1);
    }
}
