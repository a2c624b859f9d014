//! 制御・変換パラメータ

/// モーター数
pub const MOTOR_COUNT: usize = 6;

/// ヒーター出力数
pub const HEATER_COUNT: usize = 8;

/// NTCサーミスタ数
pub const NTC_COUNT: usize = 2;

/// EXTIライン数（STM32F1: ライン0〜15がGPIOに割り当て可能）
pub const EXTI_LINE_COUNT: usize = 16;

/// ADC設定（STM32F103、12ビット）
pub mod adc {
    /// 電圧換算に使うフルスケール値
    pub const FULL_SCALE: u16 = 4096;

    /// 12ビットADCの最大コード
    pub const MAX_CODE: u16 = 4095;

    /// ADC基準電圧 [V]
    pub const VREF: f32 = 3.3;
}

/// モーター電流検出回路（シャント抵抗＋電流検出アンプ）
pub mod current {
    /// シャント抵抗 [Ω]
    pub const R_SHUNT_OHMS: f32 = 0.01;

    /// 電流検出アンプのゲイン [V/V]
    pub const AMP_GAIN: f32 = 20.0;
}

/// NTCサーミスタ（10kΩ@25℃、B=3950）
pub mod thermistor {
    /// 25℃での抵抗値 [Ω]
    pub const R0_OHMS: f32 = 10_000.0;

    /// B定数
    pub const BETA: f32 = 3950.0;

    /// 基準温度 25℃ [K]
    pub const T0_KELVIN: f32 = 298.15;

    /// 分圧用の固定抵抗 [Ω]
    pub const R_FIXED_OHMS: f32 = 10_000.0;

    /// 短絡（ADCほぼ0）時に返す温度 [℃]
    pub const SHORT_SENTINEL_C: f32 = -273.15;

    /// 断線（ADCほぼフルスケール）時に返す温度 [℃]
    pub const OPEN_SENTINEL_C: f32 = 999.0;
}

/// タスク周期
pub mod tasks {
    /// ステータス出力周期 [ms]
    pub const STATUS_PERIOD_MS: u64 = 1000;
}
