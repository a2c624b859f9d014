//! ステータス監視タスク
//!
//! 周期的にHallカウント・電流・NTC温度をログへ出し、
//! 異常（NTC短絡/断線、電流取得の停止）を `FAULTS` でメインループへ通知します。

use embassy_stm32::{
    adc::{Adc, AnyAdcChannel, SampleTime},
    peripherals,
};
use embassy_time::{Duration, Ticker};

use f1_driver::config::{tasks::STATUS_PERIOD_MS, MOTOR_COUNT, NTC_COUNT};
use f1_driver::conversion::ThermistorConfig;
use f1_driver::StatusMonitor;

use crate::shared::{FAULTS, SENSORS};

/// ステータス監視タスク
///
/// # 引数
/// * `adc` - ADC2（NTC専用）
/// * `ntc` - NTC 1〜2 のチャネル（PB0, PB1）
#[embassy_executor::task]
pub async fn status_task(
    mut adc: Adc<'static, peripherals::ADC2>,
    mut ntc: [AnyAdcChannel<peripherals::ADC2>; NTC_COUNT],
) {
    info!("Status task started: period={}ms", STATUS_PERIOD_MS);

    // 分圧抵抗の出力インピーダンスが高いので長めにサンプリング
    adc.set_sample_time(SampleTime::CYCLES239_5);

    let mut monitor = StatusMonitor::new(ThermistorConfig::DEFAULT, SENSORS.current().cycles());
    let mut ticker = Ticker::every(Duration::from_millis(STATUS_PERIOD_MS));

    loop {
        ticker.next().await;

        let counts = SENSORS.hall().snapshot();
        info!("Hall counts: {}", counts);

        let mut amps = [0.0f32; MOTOR_COUNT];
        for (id, a) in amps.iter_mut().enumerate() {
            *a = SENSORS.current().get_amperes(id as u8);
        }
        debug!("Motor currents [A]: {}", amps);

        let cycles = SENSORS.current().cycles();
        if let Some(fault) = monitor.check_acquisition(cycles) {
            warn!("Current acquisition stalled at cycle {}", cycles);
            FAULTS.send(fault).await;
        }

        for (sensor, channel) in ntc.iter_mut().enumerate() {
            let code = adc.read(channel).await;
            match monitor.check_thermistor(sensor as u8, code) {
                Ok(celsius) => info!("NTC {}: {} degC", sensor, celsius),
                Err(fault) => {
                    error!("NTC {} fault: code={} {}", sensor, code, fault);
                    FAULTS.send(fault).await;
                }
            }
        }
    }
}
