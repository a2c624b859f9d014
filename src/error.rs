//! エラー型
//!
//! ドライバーAPIはインデックス範囲外を黙って無視するため、
//! このエラーは型付きIDの生成時にのみ使われます。

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// モーターIDが範囲外
    InvalidMotor(u8),
    /// ヒーターチャネルが範囲外
    InvalidHeater(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMotor(id) => write!(f, "motor id {} out of range", id),
            Error::InvalidHeater(ch) => write!(f, "heater channel {} out of range", ch),
        }
    }
}
