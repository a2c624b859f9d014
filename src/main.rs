#![no_std]
#![no_main]

#[macro_use]
mod fmt;

mod hardware;
mod shared;
mod tasks;

#[cfg(not(feature = "defmt"))]
use panic_halt as _;
#[cfg(feature = "defmt")]
use {defmt_rtt as _, panic_probe as _};

use embassy_executor::Spawner;
use embassy_stm32::{
    adc::{Adc, AdcChannel},
    exti::ExtiInput,
    gpio::{AnyPin, Level, Output, Pull, Speed},
    Peri,
};

use f1_driver::config::board;
use f1_driver::hall::HallGate;
use f1_driver::heater::HeaterBank;
use f1_driver::{Fault, MotorDriver};

use crate::hardware::{AdcScan, HallInput};
use crate::shared::{FAULTS, SENSORS};

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(hardware::create_clock_config());
    info!("F103 6-motor driver starting");

    // PA15 / PD0 / (PA13, PA14) をGPIOとして使う前に解放
    hardware::remap_debug_pins();
    SENSORS.init();

    // モーター方向線: (正転, 反転)
    let out = |pin: Peri<'static, AnyPin>| Output::new(pin, Level::Low, Speed::Low);
    let mut motors = MotorDriver::new(
        [
            (out(p.PB12.into()), out(p.PC12.into())),
            (out(p.PB13.into()), out(p.PC13.into())),
            (out(p.PB14.into()), out(p.PC14.into())),
            (out(p.PB15.into()), out(p.PC15.into())),
            (out(p.PC10.into()), out(p.PA11.into())),
            (out(p.PC11.into()), out(p.PA12.into())),
        ],
        board::MOTOR_LINE_ACTIVE,
    );

    #[cfg(feature = "release-swd")]
    let (heater6, heater7) = (Some(out(p.PA13.into())), Some(out(p.PA14.into())));
    #[cfg(not(feature = "release-swd"))]
    let (heater6, heater7) = (None, None);

    let mut heaters = HeaterBank::new(
        [
            Some(out(p.PB8.into())),
            Some(out(p.PB9.into())),
            Some(out(p.PB10.into())),
            Some(out(p.PB11.into())),
            Some(out(p.PC9.into())),
            heater6,
            heater7,
            Some(out(p.PD2.into())),
        ],
        board::HEATER_ACTIVE,
    );

    // Hall入力はエッジタスクが待ち始めてからモジュールへ給電する
    let hall_inputs = [
        ExtiInput::new(p.PA15, p.EXTI15, Pull::Up),
        ExtiInput::new(p.PC4, p.EXTI4, Pull::Up),
        ExtiInput::new(p.PC5, p.EXTI5, Pull::Up),
        ExtiInput::new(p.PC6, p.EXTI6, Pull::Up),
        ExtiInput::new(p.PC7, p.EXTI7, Pull::Up),
        ExtiInput::new(p.PC8, p.EXTI8, Pull::Up),
    ];
    let mut hall_gate = HallGate::new(out(p.PD0.into()), board::HALL_GATE_ACTIVE);

    let current_scan = AdcScan::new(
        Adc::new(p.ADC1),
        [
            p.PA0.degrade_adc(),
            p.PA1.degrade_adc(),
            p.PA2.degrade_adc(),
            p.PA3.degrade_adc(),
            p.PA4.degrade_adc(),
            p.PA5.degrade_adc(),
        ],
    );

    // 1ラインに1タスク: 同時に来た別ラインのエッジを互いに消費しない
    for (input, line) in hall_inputs.into_iter().zip(board::HALL_EXTI_LINES) {
        spawner.spawn(tasks::hall_edge_task(HallInput::new(input), line).unwrap());
    }
    spawner.spawn(tasks::current_scan_task(current_scan).unwrap());
    spawner.spawn(
        tasks::status_task(
            Adc::new(p.ADC2),
            [p.PB0.degrade_adc(), p.PB1.degrade_adc()],
        )
        .unwrap(),
    );

    hall_gate.enable();
    info!("Initialization complete");

    // 異常通知を受けて出力を安全側へ落とす
    loop {
        match FAULTS.receive().await {
            Fault::Thermistor { sensor, reading } => {
                error!("Thermistor {} fault ({}), heaters off", sensor, reading);
                heaters.init_all();
            }
            Fault::AcquisitionStalled => {
                error!("Current acquisition stalled, stopping all motors");
                motors.stop_all();
            }
        }
    }
}
