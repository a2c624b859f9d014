//! 範囲検査付きのモーターID・ヒーターチャネル

use crate::config::{HEATER_COUNT, MOTOR_COUNT};
use crate::error::Error;

/// モーターID（0〜5）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorId(u8);

impl MotorId {
    /// 範囲内ならSomeを返す
    #[inline]
    pub const fn new(id: u8) -> Option<Self> {
        if (id as usize) < MOTOR_COUNT {
            Some(Self(id))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 全モーターIDを昇順に列挙
    pub fn all() -> impl Iterator<Item = MotorId> {
        (0..MOTOR_COUNT as u8).map(MotorId)
    }
}

impl TryFrom<u8> for MotorId {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        MotorId::new(id).ok_or(Error::InvalidMotor(id))
    }
}

/// ヒーターチャネル（0〜7）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeaterChannel(u8);

impl HeaterChannel {
    #[inline]
    pub const fn new(ch: u8) -> Option<Self> {
        if (ch as usize) < HEATER_COUNT {
            Some(Self(ch))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for HeaterChannel {
    type Error = Error;

    fn try_from(ch: u8) -> Result<Self, Self::Error> {
        HeaterChannel::new(ch).ok_or(Error::InvalidHeater(ch))
    }
}
