//! ADC生値 → 物理量の換算
//!
//! 電流取得とNTC監視の両方から使う純粋関数です。

pub mod current;
pub mod thermistor;

pub use current::{code_to_amperes, CurrentSenseConfig};
pub use thermistor::{adc_to_celsius, TemperatureReading, ThermistorConfig, Topology};
