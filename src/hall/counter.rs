//! Hallパルスカウンタ
//!
//! モーターごとに1つの `AtomicU32` を持ち、EXTI割り込み（エッジ通知）から加算、
//! フォアグラウンドから読み出し/クリアします。
//!
//! ## 排他の考え方
//! - 加算・読み出し・ゼロ書き込みはそれぞれ単一のアトミック命令（Cortex-M3のLDREX/STREX）
//! - `get_count` → `clear` の間に来たパルスは失われうる（±1パルスの不確かさとして許容）
//! - 正確なパルス数が必要な場合は `take_count`（swap）を使う

use core::sync::atomic::{AtomicU32, Ordering};

use super::signal_map::SignalMap;
use crate::config::MOTOR_COUNT;
use crate::ids::MotorId;

pub struct HallCounters {
    counts: [AtomicU32; MOTOR_COUNT],
    signals: SignalMap,
}

impl HallCounters {
    /// 全カウンタ0で作成
    pub const fn new(signals: SignalMap) -> Self {
        Self {
            counts: [const { AtomicU32::new(0) }; MOTOR_COUNT],
            signals,
        }
    }

    /// 全カウンタをクリア（エッジ通知の有効化前に一度呼ぶ）
    pub fn init(&self) {
        self.clear_all();
    }

    /// エッジ通知のエントリーポイント
    ///
    /// 割り込みコンテキストから呼ばれるため、処理はテーブル参照と加算のみ。
    /// 未割り当ての信号IDは無視する。
    #[inline(always)]
    pub fn on_hall_edge(&self, signal_id: u8) {
        if let Some(id) = self.signals.lookup(signal_id) {
            self.increment(id);
        }
    }

    /// 指定モーターのカウンタを1加算（u32::MAXで0に戻る）
    #[inline(always)]
    pub fn increment(&self, id: MotorId) {
        self.counts[id.index()].fetch_add(1, Ordering::Relaxed);
    }

    /// カウント値を取得（範囲外IDは0）
    #[inline]
    pub fn get_count(&self, id: u8) -> u32 {
        match MotorId::new(id) {
            Some(id) => self.counts[id.index()].load(Ordering::Relaxed),
            None => 0,
        }
    }

    /// 指定モーターのカウンタをクリア（範囲外IDは何もしない）
    #[inline]
    pub fn clear(&self, id: u8) {
        if let Some(id) = MotorId::new(id) {
            self.counts[id.index()].store(0, Ordering::Relaxed);
        }
    }

    /// 全カウンタをクリア
    pub fn clear_all(&self) {
        for count in &self.counts {
            count.store(0, Ordering::Relaxed);
        }
    }

    /// カウント値を読み出すと同時に0にする
    ///
    /// 読み出しとクリアが1命令なので、間に来たパルスを取りこぼさない。
    #[inline]
    pub fn take_count(&self, id: u8) -> u32 {
        match MotorId::new(id) {
            Some(id) => self.counts[id.index()].swap(0, Ordering::Relaxed),
            None => 0,
        }
    }

    /// 全カウンタの値（スロット単位でアトミック、スロット間の順序保証なし）
    pub fn snapshot(&self) -> [u32; MOTOR_COUNT] {
        core::array::from_fn(|i| self.counts[i].load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::board::HALL_EXTI_LINES;
    use std::sync::Arc;
    use std::thread;

    fn counters() -> HallCounters {
        HallCounters::new(SignalMap::from_lines(&HALL_EXTI_LINES))
    }

    #[test]
    fn test_edge_increments_mapped_motor() {
        let hall = counters();
        hall.on_hall_edge(15);
        hall.on_hall_edge(15);
        hall.on_hall_edge(6);
        assert_eq!(hall.get_count(0), 2);
        assert_eq!(hall.get_count(3), 1);
        assert_eq!(hall.snapshot(), [2, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_unknown_signal_ignored() {
        let hall = counters();
        hall.on_hall_edge(0);
        hall.on_hall_edge(12);
        hall.on_hall_edge(200);
        assert_eq!(hall.snapshot(), [0; MOTOR_COUNT]);
    }

    #[test]
    fn test_clear_and_clear_all() {
        let hall = counters();
        for line in HALL_EXTI_LINES {
            hall.on_hall_edge(line);
        }
        hall.clear(2);
        assert_eq!(hall.snapshot(), [1, 1, 0, 1, 1, 1]);

        hall.clear_all();
        for id in 0..MOTOR_COUNT as u8 {
            assert_eq!(hall.get_count(id), 0);
        }
    }

    #[test]
    fn test_invalid_id_is_noop() {
        let hall = counters();
        hall.on_hall_edge(15);
        assert_eq!(hall.get_count(6), 0);
        assert_eq!(hall.take_count(6), 0);
        hall.clear(6);
        hall.clear(u8::MAX);
        assert_eq!(hall.get_count(0), 1);
    }

    #[test]
    fn test_take_count_resets() {
        let hall = counters();
        hall.on_hall_edge(4);
        hall.on_hall_edge(4);
        assert_eq!(hall.take_count(1), 2);
        assert_eq!(hall.get_count(1), 0);
    }

    #[test]
    fn test_counter_wraps() {
        let hall = counters();
        let id = MotorId::new(0).unwrap();
        hall.counts[0].store(u32::MAX, Ordering::Relaxed);
        hall.increment(id);
        assert_eq!(hall.get_count(0), 0);
    }

    #[test]
    fn test_concurrent_reads_never_exceed_increments() {
        const EDGES: u32 = 100_000;
        let hall = Arc::new(counters());

        let writer = {
            let hall = Arc::clone(&hall);
            thread::spawn(move || {
                for _ in 0..EDGES {
                    hall.on_hall_edge(7);
                }
            })
        };

        let mut last = 0;
        while !writer.is_finished() {
            let now = hall.get_count(4);
            assert!(now >= last, "count went backwards: {} -> {}", last, now);
            assert!(now <= EDGES);
            last = now;
        }
        writer.join().unwrap();
        assert_eq!(hall.get_count(4), EDGES);
    }

    #[test]
    fn test_take_count_loses_no_pulses() {
        const EDGES: u32 = 100_000;
        let hall = Arc::new(counters());

        let writer = {
            let hall = Arc::clone(&hall);
            thread::spawn(move || {
                for _ in 0..EDGES {
                    hall.on_hall_edge(8);
                }
            })
        };

        let mut total = 0;
        while !writer.is_finished() {
            total += hall.take_count(5);
        }
        writer.join().unwrap();
        total += hall.take_count(5);
        assert_eq!(total, EDGES);
    }
}
