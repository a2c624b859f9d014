//! Hallセンサー処理
//!
//! - [`counter`]: モーターごとのHallパルスカウンタ（割り込みから加算）
//! - [`signal_map`]: EXTIライン → モーターIDの対応表
//! - [`gate`]: 全Hallセンサー共通の電源/イネーブル線
//! - [`listener`]: ラインごとのエッジ待ち受け

pub mod counter;
pub mod gate;
pub mod listener;
pub mod signal_map;

pub use counter::HallCounters;
pub use gate::HallGate;
pub use listener::{listen, EdgeSource};
pub use signal_map::SignalMap;
