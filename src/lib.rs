//! STM32F103 6モーター制御ボードのアクチュエータ/センサーコア
//!
//! | モジュール | 内容 |
//! |------------|------|
//! | [`motor_driver`] | 正転/反転の排他付き方向制御 |
//! | [`hall`] | Hallパルスカウンタ・信号対応表・共通イネーブル線 |
//! | [`current_sense`] | 6チャネル電流の連続取得 |
//! | [`conversion`] | ADC生値 → 電流[A]・温度[℃] |
//! | [`heater`] | ヒーター出力8チャネル |
//! | [`monitor`] | 周期監視の異常判定（NTC・電流取得停止） |
//! | [`state`] | 割り込みと共有する状態オブジェクト |
//!
//! ハードウェア依存部（embassy-stm32）はバイナリ側（`main.rs`）にあり、
//! このライブラリは `embedded_hal::digital::OutputPin` と [`current_sense::ScanSource`]
//! だけに依存するため、ホストで `cargo test --lib` できます。
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod conversion;
pub mod current_sense;
pub mod error;
pub mod hall;
pub mod heater;
pub mod ids;
pub mod line;
pub mod monitor;
pub mod motor_driver;
pub mod state;

pub use conversion::adc_to_celsius;
pub use error::Error;
pub use ids::{HeaterChannel, MotorId};
pub use line::ActiveLevel;
pub use monitor::{Fault, StatusMonitor};
pub use motor_driver::{MotorDirection, MotorDriver};
pub use state::SensorState;
