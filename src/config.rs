//! Configuration module
//!
//! 制御パラメータ（ADC・電流検出・サーミスタ定数）と基板のピン割り当てを提供します。
//! 設定はすべてコンパイル時定数で、永続化は行いません。

pub mod board;
pub mod params;

// params.rsから主要な定数を再エクスポート
pub use params::*;
