//! Hallエッジ通知タスク
//!
//! Hall入力1本につき1タスクを起動し、各タスクが自分のラインだけを待ちます。
//! 番号 → モーターの対応はライブラリ側の `SignalMap` が持つので、
//! ここではEXTIライン番号をそのまま渡します。

use f1_driver::config::MOTOR_COUNT;
use f1_driver::hall::listen;

use crate::hardware::HallInput;
use crate::shared::SENSORS;

/// Hallエッジ通知タスク（モーター数だけ起動）
///
/// # 引数
/// * `input` - Hall入力
/// * `line` - 入力のEXTIライン番号
#[embassy_executor::task(pool_size = MOTOR_COUNT)]
pub async fn hall_edge_task(mut input: HallInput, line: u8) {
    info!("Hall edge task started: EXTI{}", line);
    listen(SENSORS.hall(), &mut input, line).await
}
