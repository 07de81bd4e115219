//! # mraa-sys
//!
//! libmraa 的原始 FFI 绑定层，只做签名适配，不包含任何逻辑。
//!
//! ## 契约
//!
//! - 返回 `c_int` 结果码的调用以 `0` 表示成功，非零值由上层翻译为类型化错误。
//! - 初始化函数返回不透明上下文指针，失败时为空指针；指针只会原样传回原生层，
//!   绝不会在此处被解引用或释放。
//! - 布尔标志跨边界时始终是 `0`/`1` 整数。
//! - 返回 `*const c_char` 的调用指向原生层拥有的内存，调用方只能拷贝，不能释放。
//!
//! ## Mock 模式
//!
//! 启用 `mock` feature（或编译本 crate 自身的单元测试）时，extern 块被一个
//! 进程内的 libmraa 模拟替换：全局句柄注册表、关闭计数器、UART 回环缓冲。
//! 上层 crate 在 dev-dependencies 中开启该 feature 即可在无硬件、无
//! libmraa 的环境下运行完整测试。

use libc::c_void;

/// 原生 GPIO 上下文（不透明指针）
pub type MraaGpioContext = *mut c_void;
/// 原生 PWM 上下文（不透明指针）
pub type MraaPwmContext = *mut c_void;
/// 原生 UART 上下文（不透明指针）
pub type MraaUartContext = *mut c_void;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(any(test, feature = "mock"))]
pub use mock::*;

#[cfg(not(any(test, feature = "mock")))]
mod ffi {
    use super::{MraaGpioContext, MraaPwmContext, MraaUartContext};
    use libc::{c_char, c_float, c_int, c_uint};

    #[link(name = "mraa")]
    unsafe extern "C" {
        // common.h
        pub fn mraa_init() -> c_int;
        pub fn mraa_deinit();
        pub fn mraa_pin_mode_test(pin: c_int, mode: c_int) -> c_int;
        pub fn mraa_adc_raw_bits() -> c_uint;
        pub fn mraa_get_platform_adc_raw_bits(platform_offset: u8) -> c_uint;
        pub fn mraa_adc_supported_bits() -> c_uint;
        pub fn mraa_get_platform_adc_supported_bits(platform_offset: u8) -> c_uint;
        pub fn mraa_set_log_level(level: c_int) -> c_int;
        pub fn mraa_get_platform_name() -> *const c_char;
        pub fn mraa_get_platform_version(platform_offset: c_int) -> *const c_char;
        pub fn mraa_set_priority(priority: c_int) -> c_int;
        pub fn mraa_get_version() -> *const c_char;
        pub fn mraa_get_platform_type() -> c_int;
        pub fn mraa_get_platform_combined_type() -> c_int;
        pub fn mraa_get_pin_count() -> c_uint;
        pub fn mraa_get_i2c_bus_count() -> c_int;
        pub fn mraa_get_i2c_bus_id(i2c_bus: c_uint) -> c_int;
        pub fn mraa_get_platform_pin_count(platform_offset: u8) -> c_uint;
        pub fn mraa_get_pin_name(pin: c_int) -> *const c_char;
        pub fn mraa_get_default_i2c_bus(platform_offset: u8) -> c_int;
        pub fn mraa_has_sub_platform() -> c_int;
        pub fn mraa_is_sub_platform_id(pin_or_bus_id: c_int) -> c_int;
        pub fn mraa_get_sub_platform_id(pin_or_bus_index: c_int) -> c_int;
        pub fn mraa_get_sub_platform_index(pin_or_bus_id: c_int) -> c_int;

        // gpio.h
        pub fn mraa_gpio_init(pin: c_int) -> MraaGpioContext;
        pub fn mraa_gpio_init_raw(gpiopin: c_int) -> MraaGpioContext;
        pub fn mraa_gpio_edge_mode(dev: MraaGpioContext, mode: c_int) -> c_int;
        pub fn mraa_gpio_mode(dev: MraaGpioContext, mode: c_int) -> c_int;
        pub fn mraa_gpio_dir(dev: MraaGpioContext, dir: c_int) -> c_int;
        pub fn mraa_gpio_read_dir(dev: MraaGpioContext, dir: *mut c_int) -> c_int;
        pub fn mraa_gpio_close(dev: MraaGpioContext) -> c_int;
        pub fn mraa_gpio_read(dev: MraaGpioContext) -> c_int;
        pub fn mraa_gpio_write(dev: MraaGpioContext, value: c_int) -> c_int;
        pub fn mraa_gpio_owner(dev: MraaGpioContext, owner: c_int) -> c_int;
        pub fn mraa_gpio_use_mmaped(dev: MraaGpioContext, mmap: c_int) -> c_int;
        pub fn mraa_gpio_get_pin(dev: MraaGpioContext) -> c_int;
        pub fn mraa_gpio_get_pin_raw(dev: MraaGpioContext) -> c_int;

        // pwm.h
        pub fn mraa_pwm_init(pin: c_int) -> MraaPwmContext;
        pub fn mraa_pwm_init_raw(chipid: c_int, pin: c_int) -> MraaPwmContext;
        pub fn mraa_pwm_write(dev: MraaPwmContext, percentage: c_float) -> c_int;
        pub fn mraa_pwm_read(dev: MraaPwmContext) -> c_float;
        pub fn mraa_pwm_period(dev: MraaPwmContext, seconds: c_float) -> c_int;
        pub fn mraa_pwm_period_ms(dev: MraaPwmContext, ms: c_int) -> c_int;
        pub fn mraa_pwm_period_us(dev: MraaPwmContext, us: c_int) -> c_int;
        pub fn mraa_pwm_pulsewidth(dev: MraaPwmContext, seconds: c_float) -> c_int;
        pub fn mraa_pwm_pulsewidth_ms(dev: MraaPwmContext, ms: c_int) -> c_int;
        pub fn mraa_pwm_pulsewidth_us(dev: MraaPwmContext, us: c_int) -> c_int;
        pub fn mraa_pwm_enable(dev: MraaPwmContext, enable: c_int) -> c_int;
        pub fn mraa_pwm_owner(dev: MraaPwmContext, owner: c_int) -> c_int;
        pub fn mraa_pwm_close(dev: MraaPwmContext) -> c_int;
        pub fn mraa_pwm_config_ms(dev: MraaPwmContext, period: c_int, duty: c_float) -> c_int;
        pub fn mraa_pwm_config_percent(dev: MraaPwmContext, period: c_int, duty: c_float) -> c_int;
        pub fn mraa_pwm_get_max_period() -> c_int;
        pub fn mraa_pwm_get_min_period() -> c_int;

        // uart.h
        pub fn mraa_uart_init(uart: c_int) -> MraaUartContext;
        pub fn mraa_uart_init_raw(path: *const c_char) -> MraaUartContext;
        pub fn mraa_uart_flush(dev: MraaUartContext) -> c_int;
        pub fn mraa_uart_set_baudrate(dev: MraaUartContext, baud: c_uint) -> c_int;
        pub fn mraa_uart_set_mode(
            dev: MraaUartContext,
            bytesize: c_int,
            parity: c_int,
            stopbits: c_int,
        ) -> c_int;
        pub fn mraa_uart_set_flowcontrol(dev: MraaUartContext, xonxoff: c_int, rtscts: c_int)
        -> c_int;
        pub fn mraa_uart_settimeout(
            dev: MraaUartContext,
            read: c_int,
            write: c_int,
            interchar: c_int,
        ) -> c_int;
        pub fn mraa_uart_get_dev_path(dev: MraaUartContext) -> *const c_char;
        pub fn mraa_uart_stop(dev: MraaUartContext) -> c_int;
        pub fn mraa_uart_read(dev: MraaUartContext, buf: *mut u8, length: c_int) -> c_int;
        pub fn mraa_uart_write(dev: MraaUartContext, buf: *const u8, length: c_int) -> c_int;
        pub fn mraa_uart_data_available(dev: MraaUartContext, millis: c_uint) -> c_int;
    }
}

#[cfg(not(any(test, feature = "mock")))]
pub use ffi::*;
