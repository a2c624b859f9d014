//! シャント抵抗＋電流検出アンプの換算

use crate::config::{adc, current};

/// 電流検出チャネルの校正値
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentSenseConfig {
    /// 電圧換算に使うADCフルスケール（12bitなら4096）
    pub full_scale: u16,
    /// ADC基準電圧 [V]
    pub vref: f32,
    /// シャント抵抗 [Ω]
    pub r_shunt: f32,
    /// アンプゲイン [V/V]
    pub amp_gain: f32,
}

impl CurrentSenseConfig {
    pub const DEFAULT: Self = Self {
        full_scale: adc::FULL_SCALE,
        vref: adc::VREF,
        r_shunt: current::R_SHUNT_OHMS,
        amp_gain: current::AMP_GAIN,
    };
}

impl Default for CurrentSenseConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// ADC生値をモーター電流に換算
///
/// `v_sense = code / full_scale * vref`、`I = v_sense / (r_shunt * amp_gain)`。
/// クランプはしない（異常値の判定は呼び出し側）。
///
/// # 戻り値
/// 電流 [A]
#[inline]
pub fn code_to_amperes(code: u16, config: &CurrentSenseConfig) -> f32 {
    let v_sense = (code as f32 / config.full_scale as f32) * config.vref;
    v_sense / (config.r_shunt * config.amp_gain)
}
