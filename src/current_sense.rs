//! モーター電流の連続取得
//!
//! ADCが6チャネルを固定順に巡回変換し、各チャネルの最新値を
//! モーターごとのスロット（`AtomicU16`）に上書きし続けます。
//! 読み出し側はロックなしで最新値を取得できます（過去値のバッファリングはなし）。
//!
//! 変換の起動・待ちは [`ScanSource`] として外部から注入します
//! （実機ではADC1の巡回タスク、テストでは固定値の列）。

use core::sync::atomic::{AtomicU16, AtomicU32, Ordering};

use crate::config::MOTOR_COUNT;
use crate::conversion::current::{code_to_amperes, CurrentSenseConfig};
use crate::ids::MotorId;

/// 巡回変換を行うADC
#[allow(async_fn_in_trait)]
pub trait ScanSource {
    /// 巡回変換を開始する（一度だけ呼ばれる）
    fn start(&mut self);

    /// 指定スロット（モーター順）のチャネルを1回変換して生値を返す
    async fn convert(&mut self, slot: usize) -> u16;
}

pub struct CurrentSampler {
    samples: [AtomicU16; MOTOR_COUNT],
    cycles: AtomicU32,
    config: CurrentSenseConfig,
}

impl CurrentSampler {
    /// 全スロット0で作成
    pub const fn new(config: CurrentSenseConfig) -> Self {
        Self {
            samples: [const { AtomicU16::new(0) }; MOTOR_COUNT],
            cycles: AtomicU32::new(0),
            config,
        }
    }

    /// サンプルバッファと巡回カウンタをクリア
    pub fn init(&self) {
        for slot in &self.samples {
            slot.store(0, Ordering::Relaxed);
        }
        self.cycles.store(0, Ordering::Relaxed);
    }

    /// 巡回変換を開始し、以後ずっと全チャネルを更新し続ける
    ///
    /// 1巡ごとに自動で次の巡回に入るため、呼び出し側が再起動する必要はない。
    pub async fn run<S: ScanSource>(&self, scan: &mut S) -> ! {
        scan.start();
        info!("Current acquisition started: {} channels", MOTOR_COUNT);
        loop {
            self.scan_once(scan).await;
        }
    }

    /// 全チャネルを0から順に1巡変換する
    pub async fn scan_once<S: ScanSource>(&self, scan: &mut S) {
        for slot in 0..MOTOR_COUNT {
            let code = scan.convert(slot).await;
            self.record(slot, code);
        }
        self.cycles.fetch_add(1, Ordering::Relaxed);
    }

    /// 変換結果を書き込む（取得エンジン専用、範囲外スロットは無視）
    #[inline(always)]
    pub fn record(&self, slot: usize, code: u16) {
        if let Some(sample) = self.samples.get(slot) {
            sample.store(code, Ordering::Relaxed);
        }
    }

    /// 最新の生値（範囲外IDは0）
    #[inline]
    pub fn get_raw(&self, id: u8) -> u16 {
        match MotorId::new(id) {
            Some(id) => self.samples[id.index()].load(Ordering::Relaxed),
            None => 0,
        }
    }

    /// 最新の電流値 [A]（範囲外IDは0.0）
    pub fn get_amperes(&self, id: u8) -> f32 {
        match MotorId::new(id) {
            Some(id) => code_to_amperes(
                self.samples[id.index()].load(Ordering::Relaxed),
                &self.config,
            ),
            None => 0.0,
        }
    }

    /// 完了した巡回の回数（取得エンジンの停止検出用）
    #[inline]
    pub fn cycles(&self) -> u32 {
        self.cycles.load(Ordering::Relaxed)
    }
}
