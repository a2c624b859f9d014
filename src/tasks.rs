//! 非同期タスク
//!
//! | タスク | 内容 |
//! |--------|------|
//! | [`current_scan`] | ADC1で6チャネル電流を巡回変換し続ける |
//! | [`hall_edge`] | Hall入力1本ごとに立ち上がりエッジをカウンタへ通知 |
//! | [`status`] | 周期ログ・NTC監視・取得停止の検出 |

pub mod current_scan;
pub mod hall_edge;
pub mod status;

pub use current_scan::current_scan_task;
pub use hall_edge::hall_edge_task;
pub use status::status_task;
