//! Board binding
//!
//! Owns every pin and implements the controller's hardware interface on
//! top of the drivers.
//!
//! | Function     | Pin    | Notes                            |
//! |--------------|--------|----------------------------------|
//! | Power hold   | GPIO2  | high keeps the regulator on      |
//! | Lock         | GPIO3  | pulse while locking              |
//! | Unlock       | GPIO4  | pulse while unlocking            |
//! | ACC          | GPIO5  | high with ignition in ACC or on  |
//! | Switch       | GPIO6  | three-position, bias switched    |
//! | Motor fold   | GPIO7  | H-bridge direction               |
//! | Motor unfold | GPIO8  | H-bridge direction, PWM4 A buzz  |
//! | Motor enable | GPIO9  | H-bridge enable                  |
//! | Speaker      | GPIO10 | PWM5 A                           |

use embassy_rp::gpio::{Flex, Input, Level, Output, Pull};
use embassy_rp::peripherals::{
    PIN_10, PIN_3, PIN_4, PIN_5, PIN_6, PIN_7, PIN_8, PIN_9, PWM_SLICE4, PWM_SLICE5,
};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::Peri;
use embassy_time::{Delay, Instant};

use wingfold_core::input::LogicalInput;
use wingfold_core::tone::OutputId;
use wingfold_core::traits::{HardwareIo, MotorCommand, MotorDriver};
use wingfold_core::Timestamp;
use wingfold_drivers::input::{LockSensor, TriStateSwitch};
use wingfold_drivers::motor::HBridge;
use wingfold_drivers::tone::ToneTimer;
use wingfold_hal_rp2040::{GpioFlex, GpioInput, GpioOutput, InputPin, OutputPin, PwmTone};

/// Peripherals used by the board, apart from the power hold pin
pub struct BoardPins {
    pub lock: Peri<'static, PIN_3>,
    pub unlock: Peri<'static, PIN_4>,
    pub acc: Peri<'static, PIN_5>,
    pub switch: Peri<'static, PIN_6>,
    pub motor_fold: Peri<'static, PIN_7>,
    pub motor_unfold: Peri<'static, PIN_8>,
    pub motor_enable: Peri<'static, PIN_9>,
    pub speaker: Peri<'static, PIN_10>,
    pub motor_pwm: Peri<'static, PWM_SLICE4>,
    pub speaker_pwm: Peri<'static, PWM_SLICE5>,
}

type Motor = HBridge<GpioOutput<'static>, PwmTone<'static>, GpioOutput<'static>>;

/// The controller board
pub struct Board {
    power_hold: GpioOutput<'static>,
    lock: LockSensor<GpioInput<'static>, GpioInput<'static>>,
    acc: GpioInput<'static>,
    switch: TriStateSwitch<GpioFlex<'static>, Delay>,
    motor: Motor,
    speaker: PwmTone<'static>,
    speaker_timer: ToneTimer,
    motor_timer: ToneTimer,
}

impl Board {
    /// Set up all pins
    ///
    /// `power_hold` must already be driven high.
    pub fn new(power_hold: Output<'static>, pins: BoardPins, switch_settle_us: u16) -> Self {
        let lock = LockSensor::new(
            GpioInput::new(Input::new(pins.lock, Pull::Down)),
            GpioInput::new(Input::new(pins.unlock, Pull::Down)),
        );
        let acc = GpioInput::new(Input::new(pins.acc, Pull::Down));
        let switch = TriStateSwitch::new(GpioFlex::new(Flex::new(pins.switch)), Delay, switch_settle_us);

        let motor_unfold = PwmTone::new(Pwm::new_output_a(
            pins.motor_pwm,
            pins.motor_unfold,
            PwmConfig::default(),
        ));
        let motor = HBridge::new(
            GpioOutput::new(Output::new(pins.motor_fold, Level::Low)),
            motor_unfold,
            GpioOutput::new(Output::new(pins.motor_enable, Level::Low)),
        );

        let speaker = PwmTone::new(Pwm::new_output_a(
            pins.speaker_pwm,
            pins.speaker,
            PwmConfig::default(),
        ));

        Self {
            power_hold: GpioOutput::new(power_hold),
            lock,
            acc,
            switch,
            motor,
            speaker,
            speaker_timer: ToneTimer::new(),
            motor_timer: ToneTimer::new(),
        }
    }

    /// Silence notes whose duration is up
    pub fn service_tones(&mut self) {
        let now = self.now_ms();
        self.speaker_timer.service(&mut self.speaker, now);
        self.motor_timer.service(&mut self.motor, now);
    }
}

impl HardwareIo for Board {
    fn set_power_hold(&mut self, hold: bool) {
        self.power_hold.set_state(hold);
    }

    fn set_motor(&mut self, command: MotorCommand) {
        self.motor_timer.silence(&mut self.motor);
        self.motor.drive(command);
    }

    fn play_tone(&mut self, output: OutputId, frequency_hz: u16, duration_ms: u16) {
        let now = self.now_ms();
        match output {
            OutputId::Speaker => {
                self.speaker_timer
                    .play(&mut self.speaker, frequency_hz, duration_ms, now)
            }
            OutputId::Motor => {
                self.motor_timer
                    .play(&mut self.motor, frequency_hz, duration_ms, now)
            }
        }
    }

    fn read_lock(&mut self) -> LogicalInput {
        self.lock.read()
    }

    fn read_acc(&mut self) -> bool {
        self.acc.is_high()
    }

    fn read_switch(&mut self) -> LogicalInput {
        self.switch.read()
    }

    fn now_ms(&self) -> Timestamp {
        Timestamp::from_ticks(Instant::now().as_millis())
    }
}
