//! 有効レベル付きデジタル出力線
//!
//! モーター方向線・ヒーター出力・Hallモジュールのイネーブル線はすべて
//! 「有効レベル」を持つ単純なGPIO出力です。このモジュールは
//! `embedded_hal::digital::OutputPin` を包み、論理的なON/OFF（assert/deassert）を
//! 物理レベルに変換します。

use embedded_hal::digital::OutputPin;

/// 信号の「有効」を表す論理レベル
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    High,
    Low,
}

/// 有効レベルと最後に書き込んだ論理状態を保持する出力線
pub struct DriveLine<P: OutputPin> {
    pin: P,
    active: ActiveLevel,
    asserted: bool,
}

impl<P: OutputPin> DriveLine<P> {
    /// 出力線を作成し、非有効レベルに初期化する
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        let mut line = Self {
            pin,
            active,
            asserted: false,
        };
        line.write(false);
        line
    }

    /// 論理的に有効（true）/無効（false）を書き込む
    ///
    /// OutputPinのエラーは無視する（embassyの出力はInfallible）。
    pub fn write(&mut self, asserted: bool) {
        match (self.active, asserted) {
            (ActiveLevel::High, true) | (ActiveLevel::Low, false) => self.pin.set_high().ok(),
            (ActiveLevel::High, false) | (ActiveLevel::Low, true) => self.pin.set_low().ok(),
        };
        self.asserted = asserted;
    }

    #[inline]
    pub fn assert(&mut self) {
        self.write(true);
    }

    #[inline]
    pub fn deassert(&mut self) {
        self.write(false);
    }

    /// 最後に書き込んだ論理状態
    #[inline]
    pub fn is_asserted(&self) -> bool {
        self.asserted
    }
}
