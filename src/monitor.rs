//! 周期監視の判定
//!
//! ステータスタスクが周期ごとに呼び、出力を落とすべき異常を [`Fault`] として返します。
//! 判定はすべて独立で、同じ周期に複数の異常が出ればそれぞれ返します
//! （通知側はキューで全件をメインループへ渡す）。

use crate::conversion::{TemperatureReading, ThermistorConfig};

/// メインループが出力を落とす原因
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// NTCの短絡/断線（ヒーターを全OFF）
    Thermistor {
        sensor: u8,
        reading: TemperatureReading,
    },
    /// 電流取得が1周期の間に1巡も進まなかった（モーターを全停止）
    AcquisitionStalled,
}

pub struct StatusMonitor {
    thermistor: ThermistorConfig,
    last_cycles: u32,
}

impl StatusMonitor {
    /// # 引数
    /// * `thermistor` - NTCの換算設定
    /// * `cycles` - 監視開始時点の電流取得の巡回数
    pub const fn new(thermistor: ThermistorConfig, cycles: u32) -> Self {
        Self {
            thermistor,
            last_cycles: cycles,
        }
    }

    /// 巡回数が前回から進んでいなければ停止とみなす
    pub fn check_acquisition(&mut self, cycles: u32) -> Option<Fault> {
        let stalled = cycles == self.last_cycles;
        self.last_cycles = cycles;
        stalled.then_some(Fault::AcquisitionStalled)
    }

    /// NTCの生値を判定
    ///
    /// # 戻り値
    /// 正常なら温度 [℃]、短絡/断線なら `Fault::Thermistor`
    pub fn check_thermistor(&self, sensor: u8, code: u16) -> Result<f32, Fault> {
        match self.thermistor.classify(code) {
            TemperatureReading::Celsius(c) => Ok(c),
            reading => Err(Fault::Thermistor { sensor, reading }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor(cycles: u32) -> StatusMonitor {
        StatusMonitor::new(ThermistorConfig::default(), cycles)
    }

    #[test]
    fn test_stall_when_cycles_unchanged() {
        let mut m = monitor(10);
        assert_eq!(m.check_acquisition(10), Some(Fault::AcquisitionStalled));
        assert_eq!(m.check_acquisition(10), Some(Fault::AcquisitionStalled));
    }

    #[test]
    fn test_no_stall_while_advancing() {
        let mut m = monitor(10);
        assert_eq!(m.check_acquisition(11), None);
        assert_eq!(m.check_acquisition(500), None);
        // u32を一周しても進んでいれば正常
        let mut m = monitor(u32::MAX);
        assert_eq!(m.check_acquisition(0), None);
    }

    #[test]
    fn test_thermistor_ok_and_faults() {
        let m = monitor(0);
        let c = m.check_thermistor(0, 2048).unwrap();
        assert!((c - 25.0).abs() < 0.5);
        assert_eq!(
            m.check_thermistor(1, 0),
            Err(Fault::Thermistor {
                sensor: 1,
                reading: TemperatureReading::Short
            })
        );
        assert_eq!(
            m.check_thermistor(0, 4095),
            Err(Fault::Thermistor {
                sensor: 0,
                reading: TemperatureReading::Open
            })
        );
    }

    #[test]
    fn test_stall_and_thermistor_fault_in_same_period_both_reported() {
        let mut m = monitor(7);
        let mut queue = Vec::new();

        // ステータスタスク1周期分と同じ順で判定
        queue.extend(m.check_acquisition(7));
        for (sensor, code) in [(0u8, 2048u16), (1, 0)] {
            if let Err(fault) = m.check_thermistor(sensor, code) {
                queue.push(fault);
            }
        }

        assert_eq!(
            queue,
            vec![
                Fault::AcquisitionStalled,
                Fault::Thermistor {
                    sensor: 1,
                    reading: TemperatureReading::Short
                },
            ]
        );
    }
}
