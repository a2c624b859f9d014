//! ヒーター出力（8チャネル）
//!
//! 各チャネルは外部ハイサイドスイッチを駆動する単純なGPIO出力です。
//! 電源投入時の誤加熱を防ぐため、作成時に全チャネルをOFFにします。
//! 未配線のチャネル（SWD未解放時のヒーター6/7）への操作は無視されます。

use embedded_hal::digital::OutputPin;

use crate::config::HEATER_COUNT;
use crate::ids::HeaterChannel;
use crate::line::{ActiveLevel, DriveLine};

pub struct HeaterBank<P: OutputPin> {
    lines: [Option<DriveLine<P>>; HEATER_COUNT],
}

impl<P: OutputPin> HeaterBank<P> {
    /// 全チャネルOFFで作成
    ///
    /// # 引数
    /// * `pins` - チャネル順の出力ピン（未配線はNone）
    /// * `active` - ヒーターONとなる出力レベル
    pub fn new(pins: [Option<P>; HEATER_COUNT], active: ActiveLevel) -> Self {
        let mut bank = Self {
            lines: pins.map(|pin| pin.map(|pin| DriveLine::new(pin, active))),
        };
        bank.init_all();
        bank
    }

    /// 全チャネルをOFFにする
    pub fn init_all(&mut self) {
        for line in self.lines.iter_mut().flatten() {
            line.deassert();
        }
        info!("Heater outputs initialized: all off");
    }

    /// 指定チャネルをON/OFF（範囲外・未配線は何もしない）
    pub fn set(&mut self, channel: u8, on: bool) {
        let Some(ch) = HeaterChannel::new(channel) else {
            return;
        };
        match &mut self.lines[ch.index()] {
            Some(line) => {
                line.write(on);
                debug!("Heater {} -> {}", channel, on);
            }
            None => warn!("Heater {} is not wired, ignoring", channel),
        }
    }

    /// 最後に指令した状態（範囲外・未配線はfalse）
    pub fn is_on(&self, channel: u8) -> bool {
        HeaterChannel::new(channel)
            .and_then(|ch| self.lines[ch.index()].as_ref())
            .is_some_and(DriveLine::is_asserted)
    }
}
