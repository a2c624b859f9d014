//! モーター方向制御
//!
//! 6台のDCモーターを、それぞれ正転線(FWD)と反転線(REV)の2本で駆動します。
//!
//! | 状態 | FWD | REV |
//! |------|-----|-----|
//! | 停止 | 無効 | 無効 |
//! | 正転 | 有効 | 無効 |
//! | 反転 | 無効 | 有効 |
//!
//! 2本の書き込みは同時ではないため、方向切り替え時は必ず
//! 「反対側を先に無効化 → 目的側を有効化」の順で書き込み、
//! 両線が同時に有効になる瞬間を作りません（Hブリッジの貫通防止）。
//!
//! 方向線に書き込むのはフォアグラウンドのみという前提です。
//! 割り込み側から遮断を行う場合は別途排他が必要になります。

use embedded_hal::digital::OutputPin;

use crate::config::MOTOR_COUNT;
use crate::ids::MotorId;
use crate::line::{ActiveLevel, DriveLine};

/// モーター運転方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorDirection {
    Stopped,
    Forward,
    Reverse,
}

/// 1台分の方向線
struct MotorLines<P: OutputPin> {
    forward: DriveLine<P>,
    reverse: DriveLine<P>,
}

/// 6台分の方向制御
pub struct MotorDriver<P: OutputPin> {
    motors: [MotorLines<P>; MOTOR_COUNT],
    directions: [MotorDirection; MOTOR_COUNT],
}

impl<P: OutputPin> MotorDriver<P> {
    /// 新しいモータードライバーを作成（全モーター停止状態）
    ///
    /// # 引数
    /// * `lines` - モーター順の (正転線, 反転線)
    /// * `active` - 方向線の有効レベル
    pub fn new(lines: [(P, P); MOTOR_COUNT], active: ActiveLevel) -> Self {
        let motors = lines.map(|(forward, reverse)| MotorLines {
            forward: DriveLine::new(forward, active),
            reverse: DriveLine::new(reverse, active),
        });
        let mut driver = Self {
            motors,
            directions: [MotorDirection::Stopped; MOTOR_COUNT],
        };
        driver.init();
        driver
    }

    /// 全モーターを停止状態にする
    pub fn init(&mut self) {
        self.stop_all();
        info!("Motor driver initialized: {} motors stopped", MOTOR_COUNT);
    }

    /// 運転方向を設定（範囲外IDは何もしない）
    pub fn set_direction(&mut self, id: u8, dir: MotorDirection) {
        let Some(id) = MotorId::new(id) else {
            return;
        };
        let motor = &mut self.motors[id.index()];

        match dir {
            MotorDirection::Stopped => {
                motor.forward.deassert();
                motor.reverse.deassert();
            }
            MotorDirection::Forward => {
                motor.reverse.deassert();
                motor.forward.assert();
            }
            MotorDirection::Reverse => {
                motor.forward.deassert();
                motor.reverse.assert();
            }
        }
        self.directions[id.index()] = dir;
    }

    #[inline]
    pub fn forward(&mut self, id: u8) {
        self.set_direction(id, MotorDirection::Forward);
    }

    #[inline]
    pub fn reverse(&mut self, id: u8) {
        self.set_direction(id, MotorDirection::Reverse);
    }

    #[inline]
    pub fn stop(&mut self, id: u8) {
        self.set_direction(id, MotorDirection::Stopped);
    }

    /// 全モーター停止
    pub fn stop_all(&mut self) {
        for id in MotorId::all() {
            self.stop(id.index() as u8);
        }
    }

    /// 最後に指令した方向（範囲外IDはNone）
    pub fn direction(&self, id: u8) -> Option<MotorDirection> {
        MotorId::new(id).map(|id| self.directions[id.index()])
    }
}
