//! ハードウェア初期化モジュール
//!
//! クロック設定・デバッグピン解放・ADC巡回変換の実機実装を集約します。

use embassy_stm32::{
    adc::{self, Adc, AnyAdcChannel, SampleTime},
    bind_interrupts,
    exti::ExtiInput,
    pac, peripherals, Config,
};

use f1_driver::config::MOTOR_COUNT;
use f1_driver::current_sense::ScanSource;
use f1_driver::hall::EdgeSource;

// ADC1/ADC2共通の割り込みをバインド
bind_interrupts!(pub struct Irqs {
    ADC1_2 => adc::InterruptHandler<peripherals::ADC1>, adc::InterruptHandler<peripherals::ADC2>;
});

/// RCCクロック設定を初期化
///
/// PD0をHallイネーブルに使うためHSEは使わない。
/// HSI/2 → PLL ×16 で64MHz、ADCクロックは APB2/6 ≈ 10.7MHz（上限14MHz）。
pub fn create_clock_config() -> Config {
    let mut config = Config::default();
    {
        use embassy_stm32::rcc::{
            ADCPrescaler, AHBPrescaler, APBPrescaler, Pll, PllMul, PllPreDiv, PllSource, Sysclk,
        };

        config.rcc.hsi = true;
        config.rcc.hse = None;
        config.rcc.pll = Some(Pll {
            src: PllSource::HSI,
            prediv: PllPreDiv::DIV2,
            mul: PllMul::MUL16,
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV2; // APB1上限36MHz
        config.rcc.apb2_pre = APBPrescaler::DIV1;
        config.rcc.adc_pre = ADCPrescaler::DIV6;
    }
    config
}

/// AFIOリマップでデバッグピンとOSCピンをGPIOとして解放
///
/// - JTAG無効化（SWDは残す）: PA15（モーター1 Hall入力）を使うため必須
/// - `release-swd`: SWDも無効化してPA13/PA14をヒーター6/7に使う（以後デバッガ接続不可）
/// - PD0/PD1リマップ: PD0をHallイネーブル出力に使う
pub fn remap_debug_pins() {
    // SWJ_CFG: 0b010 = JTAG-DP無効/SW-DP有効、0b100 = 両方無効
    #[cfg(not(feature = "release-swd"))]
    const SWJ_CFG: u8 = 0b010;
    #[cfg(feature = "release-swd")]
    const SWJ_CFG: u8 = 0b100;

    pac::RCC.apb2enr().modify(|w| w.set_afioen(true));
    pac::AFIO.mapr().modify(|w| {
        w.set_swj_cfg(SWJ_CFG);
        w.set_pd01_remap(true);
    });

    if cfg!(feature = "release-swd") {
        warn!("SWD released: PA13/PA14 are heater outputs, debugger detached");
    }
    info!("Debug pins remapped: SWJ_CFG={=u8:#b}, PD0/PD1 as GPIO", SWJ_CFG);
}

/// ADC1による6チャネル電流の巡回変換
pub struct AdcScan {
    adc: Adc<'static, peripherals::ADC1>,
    channels: [AnyAdcChannel<peripherals::ADC1>; MOTOR_COUNT],
}

impl AdcScan {
    /// # 引数
    /// * `adc` - ADC1
    /// * `channels` - モーター順の電流検出チャネル（PA0〜PA5）
    pub fn new(
        adc: Adc<'static, peripherals::ADC1>,
        channels: [AnyAdcChannel<peripherals::ADC1>; MOTOR_COUNT],
    ) -> Self {
        Self { adc, channels }
    }
}

impl ScanSource for AdcScan {
    fn start(&mut self) {
        // シャントアンプ出力はインピーダンスが低いので71.5サイクルで十分
        self.adc.set_sample_time(SampleTime::CYCLES71_5);
    }

    async fn convert(&mut self, slot: usize) -> u16 {
        self.adc.read(&mut self.channels[slot]).await
    }
}

/// Hall入力1本（EXTI、立ち上がりエッジ）
pub struct HallInput(ExtiInput<'static>);

impl HallInput {
    pub fn new(input: ExtiInput<'static>) -> Self {
        Self(input)
    }
}

impl EdgeSource for HallInput {
    async fn wait_for_edge(&mut self) {
        self.0.wait_for_rising_edge().await
    }
}
