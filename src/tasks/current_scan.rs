//! 電流取得タスク

use crate::hardware::AdcScan;
use crate::shared::SENSORS;

/// 電流取得タスク - 起動後は戻らずサンプルバッファを更新し続ける
#[embassy_executor::task]
pub async fn current_scan_task(mut scan: AdcScan) {
    SENSORS.current().run(&mut scan).await
}
