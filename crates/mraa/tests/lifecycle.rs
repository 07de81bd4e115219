//! 全链路生命周期测试
//!
//! 在 mock 后端上走一遍「平台初始化、三类设备并用、显式/隐式释放」的
//! 完整流程，并用关闭计数器验证每个原生句柄恰好被释放一次。

use mraa::{Gpio, GpioDir, GpioValue, Pwm, Uart, UartParity, platform};
use mraa_sys::mock::control;
use serial_test::serial;

#[test]
#[serial]
fn test_full_device_lifecycle_releases_each_handle_once() {
    control::reset();
    platform::init().unwrap();

    {
        let mut gpio = Gpio::with_direction(13, GpioDir::Out, false).unwrap();
        let mut pwm = Pwm::new(3).unwrap();
        let mut uart = Uart::new(0).unwrap();
        assert_eq!(control::live_handle_count(), 3);

        gpio.write(GpioValue::High).unwrap();
        assert_eq!(gpio.read().unwrap(), GpioValue::High);

        pwm.set_period_us(200).unwrap();
        pwm.set_enable(true).unwrap();
        pwm.write(0.5).unwrap();
        assert_eq!(pwm.read().unwrap(), 0.5);

        uart.set_baudrate(9600).unwrap();
        uart.set_mode(8, UartParity::Even, 1).unwrap();
        assert_eq!(uart.write(b"ok").unwrap(), 2);
        let mut buf = [0u8; 8];
        assert_eq!(uart.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"ok");

        // GPIO 显式关闭，PWM 与 UART 留给 Drop
        assert!(gpio.close());
        assert!(gpio.close());
    }

    assert_eq!(control::gpio_close_count(), 1);
    assert_eq!(control::pwm_close_count(), 1);
    assert_eq!(control::uart_stop_count(), 1);
    assert_eq!(control::live_handle_count(), 0);

    platform::deinit();
    assert!(!control::is_initialized());
}

#[test]
#[serial]
fn test_reinit_after_deinit_round() {
    control::reset();
    platform::init().unwrap();
    platform::init().unwrap();
    platform::deinit();
    platform::init().unwrap();
    assert!(control::is_initialized());
    assert_eq!(platform::platform_type(), mraa::Platform::RaspberryPi);
}

#[test]
#[serial]
fn test_disposed_devices_reject_all_result_channel_operations() {
    control::reset();
    platform::init().unwrap();

    let mut gpio = Gpio::new(1, false).unwrap();
    let mut pwm = Pwm::new(2).unwrap();
    let mut uart = Uart::new(1).unwrap();

    gpio.close();
    pwm.close();
    uart.stop().unwrap();

    assert!(matches!(
        gpio.write(GpioValue::Low),
        Err(mraa::Error::Disposed { device: "gpio" })
    ));
    assert!(matches!(
        pwm.write(0.5),
        Err(mraa::Error::Disposed { device: "pwm" })
    ));
    assert!(matches!(
        uart.stop(),
        Err(mraa::Error::Disposed { device: "uart" })
    ));

    // 哨兵通道不受释放影响
    assert_eq!(gpio.pin(), -1);
    assert_eq!(control::live_handle_count(), 0);
}
