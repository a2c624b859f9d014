//! Hallモジュール共通イネーブル線（PD0）
//!
//! 6個のHallセンサーの電源/選択をまとめて切り替える1本の出力線です。
//! 状態は呼び出し側への参考情報であり、カウンタ側では参照しません。
//! 無効中のカウント値を信用するかどうかは呼び出し側の判断です。

use embedded_hal::digital::OutputPin;

use crate::line::{ActiveLevel, DriveLine};

pub struct HallGate<P: OutputPin> {
    line: DriveLine<P>,
}

impl<P: OutputPin> HallGate<P> {
    /// 無効状態（非有効レベル）で作成
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self {
            line: DriveLine::new(pin, active),
        }
    }

    /// イネーブル線を有効レベルにする
    pub fn enable(&mut self) {
        self.line.assert();
        debug!("Hall module enabled");
    }

    /// イネーブル線を非有効レベルにする
    pub fn disable(&mut self) {
        self.line.deassert();
        debug!("Hall module disabled");
    }

    /// 最後に設定した状態
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.line.is_asserted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::mock::{level_of, new_log, MockPin};

    #[test]
    fn test_starts_disabled() {
        let log = new_log();
        let gate = HallGate::new(MockPin::new(0, &log), ActiveLevel::High);
        assert!(!gate.is_enabled());
        assert_eq!(level_of(&log, 0), Some(false));
    }

    #[test]
    fn test_enable_disable_active_high() {
        let log = new_log();
        let mut gate = HallGate::new(MockPin::new(0, &log), ActiveLevel::High);
        gate.enable();
        assert!(gate.is_enabled());
        assert_eq!(level_of(&log, 0), Some(true));
        gate.disable();
        assert!(!gate.is_enabled());
        assert_eq!(level_of(&log, 0), Some(false));
    }

    #[test]
    fn test_enable_active_low() {
        let log = new_log();
        let mut gate = HallGate::new(MockPin::new(0, &log), ActiveLevel::Low);
        assert_eq!(level_of(&log, 0), Some(true));
        gate.enable();
        assert!(gate.is_enabled());
        assert_eq!(level_of(&log, 0), Some(false));
    }
}
