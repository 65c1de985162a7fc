// src/common/hal_traits.rs

use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;

/// A point in time supplied by a [`LoxTimer`].
///
/// Implemented for any `Copy + Ord` type that can be offset by a `Duration`
/// and subtracted to yield one, e.g. `std::time::Instant`.
pub trait LoxInstant:
    Copy + Ord + Add<Duration, Output = Self> + Sub<Self, Output = Duration>
{
}

impl<T> LoxInstant for T where
    T: Copy + Ord + Add<Duration, Output = T> + Sub<T, Output = Duration>
{
}

/// Abstraction for timer/delay operations required by the driver.
pub trait LoxTimer {
    type Instant: LoxInstant;

    /// Delay for at least the specified number of microseconds.
    fn delay_us(&mut self, us: u32);

    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);

    /// Current time on a monotonic clock.
    fn now(&self) -> Self::Instant;
}

/// Abstraction for non-blocking serial communication with the sensor.
pub trait LoxSerial {
    /// Associated error type for communication errors.
    type Error: Debug;

    /// Attempts to read a single byte from the serial interface.
    ///
    /// Returns `Ok(byte)` if a byte was read, or `Err(nb::Error::WouldBlock)`
    /// if no byte is available yet.
    fn read_byte(&mut self) -> nb::Result<u8, Self::Error>;

    /// Attempts to write a single byte to the serial interface.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` if the write buffer is full.
    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error>;

    /// Attempts to flush the transmit buffer.
    fn flush(&mut self) -> nb::Result<(), Self::Error>;

    /// Discards any bytes already received but not yet read.
    fn discard_input(&mut self) -> Result<(), Self::Error>;
}

/// Combines a separate serial port and timer into one driver interface.
#[derive(Debug)]
pub struct SplitInterface<S, T> {
    pub serial: S,
    pub timer: T,
}

impl<S, T> SplitInterface<S, T> {
    pub fn new(serial: S, timer: T) -> Self {
        SplitInterface { serial, timer }
    }

    pub fn into_parts(self) -> (S, T) {
        (self.serial, self.timer)
    }
}

impl<S: LoxSerial, T> LoxSerial for SplitInterface<S, T> {
    type Error = S::Error;

    fn read_byte(&mut self) -> nb::Result<u8, Self::Error> {
        self.serial.read_byte()
    }

    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        self.serial.write_byte(byte)
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        self.serial.flush()
    }

    fn discard_input(&mut self) -> Result<(), Self::Error> {
        self.serial.discard_input()
    }
}

impl<S, T: LoxTimer> LoxTimer for SplitInterface<S, T> {
    type Instant = T::Instant;

    fn delay_us(&mut self, us: u32) {
        self.timer.delay_us(us)
    }

    fn delay_ms(&mut self, ms: u32) {
        self.timer.delay_ms(ms)
    }

    fn now(&self) -> Self::Instant {
        self.timer.now()
    }
}

/// Timer backed by `std::time::Instant` and `std::thread::sleep`.
#[cfg(feature = "std")]
#[derive(Debug, Default, Copy, Clone)]
pub struct StdTimer;

#[cfg(feature = "std")]
impl LoxTimer for StdTimer {
    type Instant = std::time::Instant;

    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }

    fn now(&self) -> Self::Instant {
        std::time::Instant::now()
    }
}

/// Adapts an `embedded-hal` delay provider and a monotonic clock function
/// into a [`LoxTimer`].
#[cfg(feature = "impl-generic-hal")]
pub struct HalTimer<D, I> {
    delay: D,
    clock: fn() -> I,
}

#[cfg(feature = "impl-generic-hal")]
impl<D, I> HalTimer<D, I>
where
    D: embedded_hal::delay::DelayNs,
    I: LoxInstant,
{
    pub fn new(delay: D, clock: fn() -> I) -> Self {
        HalTimer { delay, clock }
    }

    pub fn release(self) -> D {
        self.delay
    }
}

#[cfg(feature = "impl-generic-hal")]
impl<D, I> LoxTimer for HalTimer<D, I>
where
    D: embedded_hal::delay::DelayNs,
    I: LoxInstant,
{
    type Instant = I;

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn now(&self) -> Self::Instant {
        (self.clock)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
    struct TickInstant(u64);
    impl Add<Duration> for TickInstant {
        type Output = Self;
        fn add(self, rhs: Duration) -> Self {
            TickInstant(self.0.saturating_add(rhs.as_micros() as u64))
        }
    }
    impl Sub<TickInstant> for TickInstant {
        type Output = Duration;
        fn sub(self, rhs: TickInstant) -> Duration {
            Duration::from_micros(self.0.saturating_sub(rhs.0))
        }
    }

    struct TickTimer(u64);
    impl LoxTimer for TickTimer {
        type Instant = TickInstant;
        fn delay_us(&mut self, us: u32) {
            self.0 += u64::from(us);
        }
        fn delay_ms(&mut self, ms: u32) {
            self.0 += u64::from(ms) * 1000;
        }
        fn now(&self) -> Self::Instant {
            TickInstant(self.0)
        }
    }

    #[derive(Debug, Default)]
    struct LoopbackSerial {
        pending: Option<u8>,
        discarded: bool,
    }
    impl LoxSerial for LoopbackSerial {
        type Error = ();
        fn read_byte(&mut self) -> nb::Result<u8, ()> {
            self.pending.take().ok_or(nb::Error::WouldBlock)
        }
        fn write_byte(&mut self, byte: u8) -> nb::Result<(), ()> {
            self.pending = Some(byte);
            Ok(())
        }
        fn flush(&mut self) -> nb::Result<(), ()> {
            Ok(())
        }
        fn discard_input(&mut self) -> Result<(), ()> {
            self.pending = None;
            self.discarded = true;
            Ok(())
        }
    }

    #[test]
    fn test_split_interface_delegates() {
        let mut iface = SplitInterface::new(LoopbackSerial::default(), TickTimer(0));

        assert_eq!(iface.read_byte(), Err(nb::Error::WouldBlock));
        assert_eq!(iface.write_byte(b'M'), Ok(()));
        assert_eq!(iface.read_byte(), Ok(b'M'));

        iface.write_byte(b'O').unwrap();
        iface.discard_input().unwrap();
        assert_eq!(iface.read_byte(), Err(nb::Error::WouldBlock));

        iface.delay_ms(2);
        iface.delay_us(5);
        assert_eq!(iface.now(), TickInstant(2_005));

        let (serial, timer) = iface.into_parts();
        assert!(serial.discarded);
        assert_eq!(timer.0, 2_005);
    }

    #[test]
    fn test_instant_arithmetic() {
        let start = TickInstant(1_000);
        let later = start + Duration::from_millis(3);
        assert_eq!(later - start, Duration::from_millis(3));
        assert!(later > start);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_std_timer_advances() {
        let mut timer = StdTimer;
        let start = timer.now();
        timer.delay_ms(1);
        assert!(timer.now() - start >= Duration::from_millis(1));
    }

    #[cfg(feature = "impl-generic-hal")]
    #[derive(Debug, Default)]
    struct CountingDelay {
        total_ns: u64,
    }

    #[cfg(feature = "impl-generic-hal")]
    impl embedded_hal::delay::DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    #[cfg(feature = "impl-generic-hal")]
    #[test]
    fn test_hal_timer_delegates() {
        fn clock() -> TickInstant {
            TickInstant(42)
        }

        let mut timer = HalTimer::new(CountingDelay::default(), clock);
        timer.delay_us(5);
        timer.delay_ms(2);
        assert_eq!(timer.now(), TickInstant(42));

        let delay = timer.release();
        assert!(delay.total_ns >= 2_005_000);
    }
}
