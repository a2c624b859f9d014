//! 割り込み・フォアグラウンド間の共有状態
//!
//! Hallカウンタと電流サンプルバッファをひとまとめにした1つのオブジェクトです。
//! `const` で構築できるので、ファームウェアでは `static` に1つだけ置き、
//! エッジ通知側とフォアグラウンド側の両方から `&SensorState` で参照します。

use crate::config::board::HALL_EXTI_LINES;
use crate::conversion::current::CurrentSenseConfig;
use crate::current_sense::CurrentSampler;
use crate::hall::{HallCounters, SignalMap};

pub struct SensorState {
    hall: HallCounters,
    current: CurrentSampler,
}

impl SensorState {
    /// 基板のHall配線とデフォルトの電流検出設定で作成
    pub const fn new() -> Self {
        Self::with_config(
            SignalMap::from_lines(&HALL_EXTI_LINES),
            CurrentSenseConfig::DEFAULT,
        )
    }

    pub const fn with_config(signals: SignalMap, current: CurrentSenseConfig) -> Self {
        Self {
            hall: HallCounters::new(signals),
            current: CurrentSampler::new(current),
        }
    }

    #[inline]
    pub fn hall(&self) -> &HallCounters {
        &self.hall
    }

    #[inline]
    pub fn current(&self) -> &CurrentSampler {
        &self.current
    }

    /// エッジ通知（割り込みディスパッチャから呼ぶ）
    #[inline(always)]
    pub fn on_hall_edge(&self, signal_id: u8) {
        self.hall.on_hall_edge(signal_id);
    }

    /// 起動時の初期化: 全Hallカウンタと電流サンプルを0にする
    pub fn init(&self) {
        self.hall.init();
        self.current.init();
        info!("Sensor state initialized");
    }
}

impl Default for SensorState {
    fn default() -> Self {
        Self::new()
    }
}
