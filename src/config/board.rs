//! 基板ピン割り当て（STM32F103RCT6, LQFP64）
//!
//! | 機能 | ピン |
//! |------|------|
//! | モーター正転 1〜6 | PB12, PB13, PB14, PB15, PC10, PC11 |
//! | モーター反転 1〜6 | PC12, PC13, PC14, PC15, PA11, PA12 |
//! | Hall入力 1〜6 | PA15, PC4, PC5, PC6, PC7, PC8 |
//! | モーター電流 1〜6 | PA0〜PA5 (ADC1 CH0〜CH5) |
//! | Hall共通イネーブル | PD0（HSE未使用時のみ） |
//! | ヒーター 1〜8 | PB8, PB9, PB10, PB11, PC9, PA13, PA14, PD2 |
//! | NTC 1〜2 | PB0, PB1 (ADC2 CH8, CH9) |
//!
//! ヒーター6/7（PA13/PA14）はSWDと兼用のため `release-swd` フィーチャー有効時のみ配線されます。
//!
//! 実際のペリフェラル取得は `hardware.rs` で行い、ここでは論理的な対応だけを持ちます。

use super::params::MOTOR_COUNT;
use crate::line::ActiveLevel;

/// 各モーターのHall入力が接続されたEXTIライン（= ピン番号）
///
/// PA15はJTDIと兼用のため、起動時にJTAGを無効化する必要がある。
pub const HALL_EXTI_LINES: [u8; MOTOR_COUNT] = [15, 4, 5, 6, 7, 8];

/// モーター方向線の有効レベル
pub const MOTOR_LINE_ACTIVE: ActiveLevel = ActiveLevel::High;

/// ヒーター出力の有効レベル（High = 外部ハイサイドスイッチON）
pub const HEATER_ACTIVE: ActiveLevel = ActiveLevel::High;

/// Hallモジュール共通イネーブルの有効レベル
#[cfg(not(feature = "hall-active-low"))]
pub const HALL_GATE_ACTIVE: ActiveLevel = ActiveLevel::High;
#[cfg(feature = "hall-active-low")]
pub const HALL_GATE_ACTIVE: ActiveLevel = ActiveLevel::Low;
