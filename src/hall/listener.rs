//! Hallエッジ待ち受け
//!
//! 1本のHall入力につき1つの待ち受けループを回し、エッジが来るたびに
//! そのラインの信号IDで [`HallCounters::on_hall_edge`] を呼びます。
//! ラインごとに待ちが独立しているので、別ラインのエッジを待つ処理が
//! 他のラインの保留中エッジを消費することはありません。

use super::counter::HallCounters;

/// エッジ検出入力（実機ではEXTI入力）
#[allow(async_fn_in_trait)]
pub trait EdgeSource {
    /// 次の有効エッジまで待つ
    async fn wait_for_edge(&mut self);
}

/// 指定ラインのエッジを数え続ける（戻らない）
///
/// # 引数
/// * `hall` - 加算先のカウンタ
/// * `source` - このラインの入力
/// * `signal_id` - このラインの信号ID（EXTIライン番号）
pub async fn listen<E: EdgeSource>(hall: &HallCounters, source: &mut E, signal_id: u8) -> ! {
    debug!("Hall listener armed on line {}", signal_id);
    loop {
        source.wait_for_edge().await;
        hall.on_hall_edge(signal_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::board::HALL_EXTI_LINES;
    use crate::hall::SignalMap;
    use core::cell::Cell;
    use core::future::poll_fn;
    use core::task::Poll;
    use embassy_futures::poll_once;
    use std::rc::Rc;

    /// 保留中エッジ数を共有する入力（0ならPending）
    struct FakeLine {
        pending: Rc<Cell<u32>>,
    }

    impl EdgeSource for FakeLine {
        async fn wait_for_edge(&mut self) {
            poll_fn(|_| match self.pending.get() {
                0 => Poll::Pending,
                n => {
                    self.pending.set(n - 1);
                    Poll::Ready(())
                }
            })
            .await
        }
    }

    fn lines() -> ([Rc<Cell<u32>>; 6], [FakeLine; 6]) {
        let pending: [Rc<Cell<u32>>; 6] = core::array::from_fn(|_| Rc::new(Cell::new(0)));
        let sources = core::array::from_fn(|i| FakeLine {
            pending: pending[i].clone(),
        });
        (pending, sources)
    }

    #[test]
    fn test_simultaneous_edges_on_two_lines_both_counted() {
        let hall = HallCounters::new(SignalMap::from_lines(&HALL_EXTI_LINES));
        let (pending, mut sources) = lines();

        // モーター0と3が同じ起床区間でエッジ
        pending[0].set(1);
        pending[3].set(1);
        for (source, line) in sources.iter_mut().zip(HALL_EXTI_LINES) {
            assert!(poll_once(listen(&hall, source, line)).is_pending());
        }

        assert_eq!(hall.get_count(0), 1);
        assert_eq!(hall.get_count(3), 1);
        assert_eq!(pending[0].get() + pending[3].get(), 0);
    }

    #[test]
    fn test_burst_on_one_line_counts_every_edge() {
        let hall = HallCounters::new(SignalMap::from_lines(&HALL_EXTI_LINES));
        let (pending, mut sources) = lines();

        pending[5].set(4);
        assert!(poll_once(listen(&hall, &mut sources[5], HALL_EXTI_LINES[5])).is_pending());
        assert_eq!(hall.snapshot(), [0, 0, 0, 0, 0, 4]);
    }

    #[test]
    fn test_idle_line_leaves_others_untouched() {
        let hall = HallCounters::new(SignalMap::from_lines(&HALL_EXTI_LINES));
        let (pending, mut sources) = lines();

        pending[2].set(1);
        assert!(poll_once(listen(&hall, &mut sources[1], HALL_EXTI_LINES[1])).is_pending());
        assert_eq!(hall.snapshot(), [0; 6]);
        assert_eq!(pending[2].get(), 1);
    }
}
