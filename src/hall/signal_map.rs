//! EXTIライン → モーターIDの対応表
//!
//! 割り込みディスパッチャから渡される信号ID（EXTIライン番号）を、
//! 起動時に一度だけ構築したテーブルでO(1)に引きます。

use crate::config::{EXTI_LINE_COUNT, MOTOR_COUNT};
use crate::ids::MotorId;

#[derive(Debug, Clone, Copy)]
pub struct SignalMap {
    slots: [Option<MotorId>; EXTI_LINE_COUNT],
}

impl SignalMap {
    /// モーター順に並んだEXTIライン番号から対応表を構築
    ///
    /// 範囲外のライン番号は無視する。同じラインが重複した場合は後のモーターが優先。
    pub const fn from_lines(lines: &[u8; MOTOR_COUNT]) -> Self {
        let mut slots = [None; EXTI_LINE_COUNT];
        let mut i = 0;
        while i < MOTOR_COUNT {
            let line = lines[i] as usize;
            if line < EXTI_LINE_COUNT {
                slots[line] = MotorId::new(i as u8);
            }
            i += 1;
        }
        Self { slots }
    }

    /// 信号IDに対応するモーター（未割り当てならNone）
    #[inline(always)]
    pub fn lookup(&self, signal_id: u8) -> Option<MotorId> {
        self.slots.get(signal_id as usize).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::board::HALL_EXTI_LINES;

    #[test]
    fn test_board_lines() {
        let map = SignalMap::from_lines(&HALL_EXTI_LINES);
        assert_eq!(map.lookup(15), MotorId::new(0));
        assert_eq!(map.lookup(4), MotorId::new(1));
        assert_eq!(map.lookup(8), MotorId::new(5));
    }

    #[test]
    fn test_unmapped_lines() {
        let map = SignalMap::from_lines(&HALL_EXTI_LINES);
        assert_eq!(map.lookup(0), None);
        assert_eq!(map.lookup(9), None);
        assert_eq!(map.lookup(16), None);
        assert_eq!(map.lookup(u8::MAX), None);
    }

    #[test]
    fn test_out_of_range_line_ignored() {
        let map = SignalMap::from_lines(&[0, 1, 2, 3, 4, 200]);
        assert_eq!(map.lookup(4), MotorId::new(4));
        assert_eq!(map.lookup(200), None);
    }
}
