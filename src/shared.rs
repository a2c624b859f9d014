//! タスク間で共有される状態
//!
//! センサー状態はロックなし（アトミック）で共有し、
//! 異常通知だけをキューでメインループへ送ります。

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use f1_driver::{Fault, SensorState};

/// 1周期に出うる異常（取得停止1件 + NTC 2件）を取りこぼさない深さ
pub const FAULT_QUEUE_DEPTH: usize = 4;

/// Hallカウンタと電流サンプル（エッジタスク・取得タスク・フォアグラウンドで共有）
pub static SENSORS: SensorState = SensorState::new();

/// 異常通知（ステータスタスク → メインループ）
pub static FAULTS: Channel<CriticalSectionRawMutex, Fault, FAULT_QUEUE_DEPTH> = Channel::new();
