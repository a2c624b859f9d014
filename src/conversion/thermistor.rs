//! NTCサーミスタ → 摂氏温度の換算（B定数式）

use libm::logf;

use crate::config::{adc, thermistor};

/// ケルビンと摂氏の差
const KELVIN_OFFSET: f32 = 273.15;

/// 分圧回路の構成
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Topology {
    /// VREF → 固定抵抗 → (測定点) → サーミスタ → GND
    ThermistorToGround,
    /// VREF → サーミスタ → (測定点) → 固定抵抗 → GND
    ThermistorToSupply,
}

/// サーミスタと分圧回路のパラメータ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermistorConfig {
    /// B定数
    pub beta: f32,
    /// `t0_kelvin` での抵抗値 [Ω]
    pub r0: f32,
    /// 基準温度 [K]
    pub t0_kelvin: f32,
    /// 分圧の固定抵抗 [Ω]
    pub r_fixed: f32,
    /// ADC基準電圧 [V]
    pub vref: f32,
    /// 電圧換算に使うADCフルスケール
    pub full_scale: u16,
    /// ADCが出力しうる最大コード
    pub max_code: u16,
    pub topology: Topology,
}

impl ThermistorConfig {
    pub const DEFAULT: Self = Self {
        beta: thermistor::BETA,
        r0: thermistor::R0_OHMS,
        t0_kelvin: thermistor::T0_KELVIN,
        r_fixed: thermistor::R_FIXED_OHMS,
        vref: adc::VREF,
        full_scale: adc::FULL_SCALE,
        max_code: adc::MAX_CODE,
        topology: Topology::ThermistorToGround,
    };

    /// 生値を短絡・断線・正常温度に分類
    pub fn classify(&self, code: u16) -> TemperatureReading {
        // 電源/GND張り付きは短絡か断線
        if code <= 1 {
            return TemperatureReading::Short;
        }
        if code >= self.max_code.saturating_sub(1) {
            return TemperatureReading::Open;
        }

        let v_node = (code as f32 / self.full_scale as f32) * self.vref;
        let resistance = match self.topology {
            Topology::ThermistorToGround => self.r_fixed * v_node / (self.vref - v_node),
            Topology::ThermistorToSupply => self.r_fixed * (self.vref - v_node) / v_node,
        };

        // R <= 0 はlogfが定義されない（設定が壊れている場合のみ）
        if resistance.is_nan() || resistance <= 0.0 {
            return TemperatureReading::Short;
        }

        // 1/T = 1/T0 + (1/B) * ln(R/R0)
        let inv_t = 1.0 / self.t0_kelvin + logf(resistance / self.r0) / self.beta;
        let celsius = 1.0 / inv_t - KELVIN_OFFSET;

        if celsius.is_finite() {
            TemperatureReading::Celsius(celsius)
        } else {
            TemperatureReading::Open
        }
    }

    /// 生値を摂氏に換算（異常は番兵値で返す）
    ///
    /// # 戻り値
    /// 温度 [℃]。短絡は `-273.15`、断線は `999.0`
    #[inline]
    pub fn adc_to_celsius(&self, code: u16) -> f32 {
        self.classify(code).celsius()
    }
}

impl Default for ThermistorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// サーミスタ換算の結果
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureReading {
    Celsius(f32),
    /// 0付近: 短絡
    Short,
    /// フルスケール付近: 断線
    Open,
}

impl TemperatureReading {
    /// 温度（異常は番兵値）
    pub fn celsius(self) -> f32 {
        match self {
            TemperatureReading::Celsius(c) => c,
            TemperatureReading::Short => thermistor::SHORT_SENTINEL_C,
            TemperatureReading::Open => thermistor::OPEN_SENTINEL_C,
        }
    }

    #[inline]
    pub fn is_fault(self) -> bool {
        !matches!(self, TemperatureReading::Celsius(_))
    }
}

/// 基板標準のサーミスタ設定で生値を摂氏に換算
#[inline]
pub fn adc_to_celsius(code: u16) -> f32 {
    ThermistorConfig::DEFAULT.adc_to_celsius(code)
}
