//! 进程内 libmraa 模拟
//!
//! 以全局注册表模拟原生库的句柄生命周期：`*_init` 分配句柄并登记，
//! `*_close`/`*_stop` 注销并累加关闭计数，其余调用按结果码协议返回。
//! UART 的 `write` 写入回环缓冲，`read` 从同一缓冲取出，便于在无硬件
//! 环境下测试透传 I/O。
//!
//! 模拟只追求契约一致，不追求电气语义：
//!
//! - 结果码协议：`0` 成功，已注销句柄返回 `ERROR_INVALID_HANDLE`；
//! - 哨兵协议：`mraa_gpio_read`、`mraa_gpio_get_pin` 等对无效句柄返回 `-1`；
//! - `mraa_init` 重复调用返回 `ERROR_PLATFORM_ALREADY_INITIALISED`；
//! - `mraa_pwm_write` 将占空比钳位到 `[0.0, 1.0]`（与原生层一致，
//!   适配层不得自行校验）。
//!
//! [`control`] 模块提供测试专用的重置与计数查询入口。

use libc::{c_char, c_float, c_int, c_uint};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::ffi::{CStr, CString, c_void};
use std::sync::LazyLock;

use crate::{MraaGpioContext, MraaPwmContext, MraaUartContext};

/// 模拟板载 GPIO 引脚数
pub const MOCK_PIN_COUNT: c_uint = 64;
/// 模拟 UART 总线数（逻辑编号 0..MOCK_UART_COUNT）
pub const MOCK_UART_COUNT: c_int = 4;
/// 模拟 PWM 最大周期（微秒）
pub const MOCK_MAX_PERIOD_US: c_int = 218_453;
/// 模拟 PWM 最小周期（微秒）
pub const MOCK_MIN_PERIOD_US: c_int = 1;
/// 子平台编号掩码偏移（与 libmraa 的 MRAA_SUB_PLATFORM_OFFSET 对应）
pub const MOCK_SUB_PLATFORM_OFFSET: c_int = 512;

const SUCCESS: c_int = 0;
const ERROR_INVALID_VERBOSITY_LEVEL: c_int = 3;
const ERROR_INVALID_HANDLE: c_int = 5;
const ERROR_PLATFORM_ALREADY_INITIALISED: c_int = 12;

static PLATFORM_NAME: &CStr = c"MRAA Mock Platform";
static PLATFORM_VERSION: &CStr = c"mock-1.0";
static LIB_VERSION: &CStr = c"v2.2.0-mock";
static PIN_NAME: &CStr = c"GPIO";

#[derive(Debug, Default)]
struct GpioState {
    pin: c_int,
    pin_raw: c_int,
    dir: c_int,
    value: c_int,
    mode: c_int,
    edge: c_int,
    owner: c_int,
    mmaped: c_int,
}

#[derive(Debug, Default)]
struct PwmState {
    chip: c_int,
    pin: c_int,
    duty: f32,
    period_us: c_int,
    pulsewidth_us: c_int,
    enabled: c_int,
    owner: c_int,
}

#[derive(Debug, Default)]
struct UartState {
    path: CString,
    baud: c_uint,
    bytesize: c_int,
    parity: c_int,
    stopbits: c_int,
    xonxoff: c_int,
    rtscts: c_int,
    read_timeout: c_int,
    write_timeout: c_int,
    interchar_timeout: c_int,
    // 回环缓冲：write 追加，read 取出
    loopback: VecDeque<u8>,
}

#[derive(Debug, Default)]
struct MockState {
    initialized: bool,
    next_handle: usize,
    gpios: HashMap<usize, GpioState>,
    pwms: HashMap<usize, PwmState>,
    uarts: HashMap<usize, UartState>,
    gpio_closes: usize,
    pwm_closes: usize,
    uart_stops: usize,
}

impl MockState {
    fn alloc_handle(&mut self) -> usize {
        self.next_handle += 1;
        self.next_handle
    }
}

static STATE: LazyLock<Mutex<MockState>> = LazyLock::new(|| Mutex::new(MockState::default()));

fn key(dev: *mut c_void) -> usize {
    dev as usize
}

/// 测试控制入口：重置注册表、查询关闭计数
pub mod control {
    use super::STATE;

    /// 清空全部模拟状态（句柄、计数器、初始化标志）
    pub fn reset() {
        *STATE.lock() = super::MockState::default();
    }

    pub fn is_initialized() -> bool {
        STATE.lock().initialized
    }

    /// `mraa_gpio_close` 被实际调用的次数
    pub fn gpio_close_count() -> usize {
        STATE.lock().gpio_closes
    }

    /// `mraa_pwm_close` 被实际调用的次数
    pub fn pwm_close_count() -> usize {
        STATE.lock().pwm_closes
    }

    /// `mraa_uart_stop` 被实际调用的次数
    pub fn uart_stop_count() -> usize {
        STATE.lock().uart_stops
    }

    /// 仍未关闭的句柄总数
    pub fn live_handle_count() -> usize {
        let s = STATE.lock();
        s.gpios.len() + s.pwms.len() + s.uarts.len()
    }
}

// ---------------------------------------------------------------------------
// common.h
// ---------------------------------------------------------------------------

pub unsafe extern "C" fn mraa_init() -> c_int {
    let mut s = STATE.lock();
    if s.initialized {
        ERROR_PLATFORM_ALREADY_INITIALISED
    } else {
        s.initialized = true;
        SUCCESS
    }
}

pub unsafe extern "C" fn mraa_deinit() {
    STATE.lock().initialized = false;
}

pub unsafe extern "C" fn mraa_pin_mode_test(pin: c_int, _mode: c_int) -> c_int {
    if pin >= 0 && (pin as c_uint) < MOCK_PIN_COUNT {
        1
    } else {
        0
    }
}

pub unsafe extern "C" fn mraa_adc_raw_bits() -> c_uint {
    12
}

pub unsafe extern "C" fn mraa_get_platform_adc_raw_bits(platform_offset: u8) -> c_uint {
    if platform_offset == 0 { 12 } else { 0 }
}

pub unsafe extern "C" fn mraa_adc_supported_bits() -> c_uint {
    10
}

pub unsafe extern "C" fn mraa_get_platform_adc_supported_bits(platform_offset: u8) -> c_uint {
    if platform_offset == 0 { 10 } else { 0 }
}

pub unsafe extern "C" fn mraa_set_log_level(level: c_int) -> c_int {
    if (0..=7).contains(&level) {
        SUCCESS
    } else {
        ERROR_INVALID_VERBOSITY_LEVEL
    }
}

pub unsafe extern "C" fn mraa_get_platform_name() -> *const c_char {
    PLATFORM_NAME.as_ptr()
}

pub unsafe extern "C" fn mraa_get_platform_version(platform_offset: c_int) -> *const c_char {
    if platform_offset == 0 {
        PLATFORM_VERSION.as_ptr()
    } else {
        std::ptr::null()
    }
}

pub unsafe extern "C" fn mraa_set_priority(priority: c_int) -> c_int {
    if priority < 0 { -1 } else { priority.min(99) }
}

pub unsafe extern "C" fn mraa_get_version() -> *const c_char {
    LIB_VERSION.as_ptr()
}

pub unsafe extern "C" fn mraa_get_platform_type() -> c_int {
    // RaspberryPi
    5
}

pub unsafe extern "C" fn mraa_get_platform_combined_type() -> c_int {
    // (sub << 8) | main，无子平台时 sub = UnknownPlatform
    (99 << 8) | 5
}

pub unsafe extern "C" fn mraa_get_pin_count() -> c_uint {
    MOCK_PIN_COUNT
}

pub unsafe extern "C" fn mraa_get_i2c_bus_count() -> c_int {
    2
}

pub unsafe extern "C" fn mraa_get_i2c_bus_id(i2c_bus: c_uint) -> c_int {
    if i2c_bus < 2 { i2c_bus as c_int + 1 } else { -1 }
}

pub unsafe extern "C" fn mraa_get_platform_pin_count(platform_offset: u8) -> c_uint {
    if platform_offset == 0 { MOCK_PIN_COUNT } else { 0 }
}

pub unsafe extern "C" fn mraa_get_pin_name(pin: c_int) -> *const c_char {
    if pin >= 0 && (pin as c_uint) < MOCK_PIN_COUNT {
        PIN_NAME.as_ptr()
    } else {
        std::ptr::null()
    }
}

pub unsafe extern "C" fn mraa_get_default_i2c_bus(platform_offset: u8) -> c_int {
    if platform_offset == 0 { 0 } else { -1 }
}

pub unsafe extern "C" fn mraa_has_sub_platform() -> c_int {
    0
}

pub unsafe extern "C" fn mraa_is_sub_platform_id(pin_or_bus_id: c_int) -> c_int {
    (pin_or_bus_id >= MOCK_SUB_PLATFORM_OFFSET) as c_int
}

pub unsafe extern "C" fn mraa_get_sub_platform_id(pin_or_bus_index: c_int) -> c_int {
    pin_or_bus_index + MOCK_SUB_PLATFORM_OFFSET
}

pub unsafe extern "C" fn mraa_get_sub_platform_index(pin_or_bus_id: c_int) -> c_int {
    pin_or_bus_id - MOCK_SUB_PLATFORM_OFFSET
}

// ---------------------------------------------------------------------------
// gpio.h
// ---------------------------------------------------------------------------

pub unsafe extern "C" fn mraa_gpio_init(pin: c_int) -> MraaGpioContext {
    if pin < 0 || pin as c_uint >= MOCK_PIN_COUNT {
        return std::ptr::null_mut();
    }
    let mut s = STATE.lock();
    s.initialized = true; // 原生层在首次设备 init 时自动初始化平台
    let h = s.alloc_handle();
    s.gpios.insert(
        h,
        GpioState {
            pin,
            pin_raw: pin,
            ..GpioState::default()
        },
    );
    h as MraaGpioContext
}

pub unsafe extern "C" fn mraa_gpio_init_raw(gpiopin: c_int) -> MraaGpioContext {
    if gpiopin < 0 {
        return std::ptr::null_mut();
    }
    let mut s = STATE.lock();
    s.initialized = true;
    let h = s.alloc_handle();
    s.gpios.insert(
        h,
        GpioState {
            pin: -1,
            pin_raw: gpiopin,
            ..GpioState::default()
        },
    );
    h as MraaGpioContext
}

fn with_gpio(dev: MraaGpioContext, f: impl FnOnce(&mut GpioState)) -> c_int {
    match STATE.lock().gpios.get_mut(&key(dev)) {
        Some(g) => {
            f(g);
            SUCCESS
        },
        None => ERROR_INVALID_HANDLE,
    }
}

pub unsafe extern "C" fn mraa_gpio_edge_mode(dev: MraaGpioContext, mode: c_int) -> c_int {
    with_gpio(dev, |g| g.edge = mode)
}

pub unsafe extern "C" fn mraa_gpio_mode(dev: MraaGpioContext, mode: c_int) -> c_int {
    with_gpio(dev, |g| g.mode = mode)
}

pub unsafe extern "C" fn mraa_gpio_dir(dev: MraaGpioContext, dir: c_int) -> c_int {
    with_gpio(dev, |g| g.dir = dir)
}

pub unsafe extern "C" fn mraa_gpio_read_dir(dev: MraaGpioContext, dir: *mut c_int) -> c_int {
    match STATE.lock().gpios.get(&key(dev)) {
        Some(g) => {
            unsafe { *dir = g.dir };
            SUCCESS
        },
        None => ERROR_INVALID_HANDLE,
    }
}

pub unsafe extern "C" fn mraa_gpio_close(dev: MraaGpioContext) -> c_int {
    let mut s = STATE.lock();
    if s.gpios.remove(&key(dev)).is_some() {
        s.gpio_closes += 1;
        SUCCESS
    } else {
        ERROR_INVALID_HANDLE
    }
}

pub unsafe extern "C" fn mraa_gpio_read(dev: MraaGpioContext) -> c_int {
    match STATE.lock().gpios.get(&key(dev)) {
        Some(g) => g.value,
        None => -1,
    }
}

pub unsafe extern "C" fn mraa_gpio_write(dev: MraaGpioContext, value: c_int) -> c_int {
    with_gpio(dev, |g| g.value = value)
}

pub unsafe extern "C" fn mraa_gpio_owner(dev: MraaGpioContext, owner: c_int) -> c_int {
    with_gpio(dev, |g| g.owner = owner)
}

pub unsafe extern "C" fn mraa_gpio_use_mmaped(dev: MraaGpioContext, mmap: c_int) -> c_int {
    with_gpio(dev, |g| g.mmaped = mmap)
}

pub unsafe extern "C" fn mraa_gpio_get_pin(dev: MraaGpioContext) -> c_int {
    match STATE.lock().gpios.get(&key(dev)) {
        Some(g) => g.pin,
        None => -1,
    }
}

pub unsafe extern "C" fn mraa_gpio_get_pin_raw(dev: MraaGpioContext) -> c_int {
    match STATE.lock().gpios.get(&key(dev)) {
        Some(g) => g.pin_raw,
        None => -1,
    }
}

// ---------------------------------------------------------------------------
// pwm.h
// ---------------------------------------------------------------------------

pub unsafe extern "C" fn mraa_pwm_init(pin: c_int) -> MraaPwmContext {
    if pin < 0 || pin as c_uint >= MOCK_PIN_COUNT {
        return std::ptr::null_mut();
    }
    let mut s = STATE.lock();
    s.initialized = true;
    let h = s.alloc_handle();
    s.pwms.insert(
        h,
        PwmState {
            chip: -1,
            pin,
            ..PwmState::default()
        },
    );
    h as MraaPwmContext
}

pub unsafe extern "C" fn mraa_pwm_init_raw(chipid: c_int, pin: c_int) -> MraaPwmContext {
    if chipid < 0 || pin < 0 {
        return std::ptr::null_mut();
    }
    let mut s = STATE.lock();
    s.initialized = true;
    let h = s.alloc_handle();
    s.pwms.insert(
        h,
        PwmState {
            chip: chipid,
            pin,
            ..PwmState::default()
        },
    );
    h as MraaPwmContext
}

fn with_pwm(dev: MraaPwmContext, f: impl FnOnce(&mut PwmState)) -> c_int {
    match STATE.lock().pwms.get_mut(&key(dev)) {
        Some(p) => {
            f(p);
            SUCCESS
        },
        None => ERROR_INVALID_HANDLE,
    }
}

pub unsafe extern "C" fn mraa_pwm_write(dev: MraaPwmContext, percentage: c_float) -> c_int {
    // 与原生层一致：越界占空比钳位而非报错
    with_pwm(dev, |p| p.duty = percentage.clamp(0.0, 1.0))
}

pub unsafe extern "C" fn mraa_pwm_read(dev: MraaPwmContext) -> c_float {
    match STATE.lock().pwms.get(&key(dev)) {
        Some(p) => p.duty,
        None => -1.0,
    }
}

pub unsafe extern "C" fn mraa_pwm_period(dev: MraaPwmContext, seconds: c_float) -> c_int {
    with_pwm(dev, |p| p.period_us = (seconds * 1_000_000.0) as c_int)
}

pub unsafe extern "C" fn mraa_pwm_period_ms(dev: MraaPwmContext, ms: c_int) -> c_int {
    with_pwm(dev, |p| p.period_us = ms.saturating_mul(1000))
}

pub unsafe extern "C" fn mraa_pwm_period_us(dev: MraaPwmContext, us: c_int) -> c_int {
    with_pwm(dev, |p| p.period_us = us)
}

pub unsafe extern "C" fn mraa_pwm_pulsewidth(dev: MraaPwmContext, seconds: c_float) -> c_int {
    with_pwm(dev, |p| p.pulsewidth_us = (seconds * 1_000_000.0) as c_int)
}

pub unsafe extern "C" fn mraa_pwm_pulsewidth_ms(dev: MraaPwmContext, ms: c_int) -> c_int {
    with_pwm(dev, |p| p.pulsewidth_us = ms.saturating_mul(1000))
}

pub unsafe extern "C" fn mraa_pwm_pulsewidth_us(dev: MraaPwmContext, us: c_int) -> c_int {
    with_pwm(dev, |p| p.pulsewidth_us = us)
}

pub unsafe extern "C" fn mraa_pwm_enable(dev: MraaPwmContext, enable: c_int) -> c_int {
    with_pwm(dev, |p| p.enabled = enable)
}

pub unsafe extern "C" fn mraa_pwm_owner(dev: MraaPwmContext, owner: c_int) -> c_int {
    with_pwm(dev, |p| p.owner = owner)
}

pub unsafe extern "C" fn mraa_pwm_close(dev: MraaPwmContext) -> c_int {
    let mut s = STATE.lock();
    if s.pwms.remove(&key(dev)).is_some() {
        s.pwm_closes += 1;
        SUCCESS
    } else {
        ERROR_INVALID_HANDLE
    }
}

pub unsafe extern "C" fn mraa_pwm_config_ms(
    dev: MraaPwmContext,
    period: c_int,
    duty: c_float,
) -> c_int {
    with_pwm(dev, |p| {
        p.period_us = period.saturating_mul(1000);
        p.pulsewidth_us = (duty * 1000.0) as c_int;
    })
}

pub unsafe extern "C" fn mraa_pwm_config_percent(
    dev: MraaPwmContext,
    period: c_int,
    duty: c_float,
) -> c_int {
    with_pwm(dev, |p| {
        p.period_us = period.saturating_mul(1000);
        p.duty = duty.clamp(0.0, 1.0);
    })
}

pub unsafe extern "C" fn mraa_pwm_get_max_period() -> c_int {
    MOCK_MAX_PERIOD_US
}

pub unsafe extern "C" fn mraa_pwm_get_min_period() -> c_int {
    MOCK_MIN_PERIOD_US
}

// ---------------------------------------------------------------------------
// uart.h
// ---------------------------------------------------------------------------

pub unsafe extern "C" fn mraa_uart_init(uart: c_int) -> MraaUartContext {
    if uart < 0 || uart >= MOCK_UART_COUNT {
        return std::ptr::null_mut();
    }
    let path = CString::new(format!("/dev/ttyS{uart}")).expect("no interior NUL");
    let mut s = STATE.lock();
    s.initialized = true;
    let h = s.alloc_handle();
    s.uarts.insert(
        h,
        UartState {
            path,
            ..UartState::default()
        },
    );
    h as MraaUartContext
}

pub unsafe extern "C" fn mraa_uart_init_raw(path: *const c_char) -> MraaUartContext {
    if path.is_null() {
        return std::ptr::null_mut();
    }
    let owned = unsafe { CStr::from_ptr(path) }.to_owned();
    if owned.as_bytes().is_empty() {
        return std::ptr::null_mut();
    }
    let mut s = STATE.lock();
    s.initialized = true;
    let h = s.alloc_handle();
    s.uarts.insert(
        h,
        UartState {
            path: owned,
            ..UartState::default()
        },
    );
    h as MraaUartContext
}

fn with_uart(dev: MraaUartContext, f: impl FnOnce(&mut UartState)) -> c_int {
    match STATE.lock().uarts.get_mut(&key(dev)) {
        Some(u) => {
            f(u);
            SUCCESS
        },
        None => ERROR_INVALID_HANDLE,
    }
}

pub unsafe extern "C" fn mraa_uart_flush(dev: MraaUartContext) -> c_int {
    with_uart(dev, |_| {})
}

pub unsafe extern "C" fn mraa_uart_set_baudrate(dev: MraaUartContext, baud: c_uint) -> c_int {
    with_uart(dev, |u| u.baud = baud)
}

pub unsafe extern "C" fn mraa_uart_set_mode(
    dev: MraaUartContext,
    bytesize: c_int,
    parity: c_int,
    stopbits: c_int,
) -> c_int {
    with_uart(dev, |u| {
        u.bytesize = bytesize;
        u.parity = parity;
        u.stopbits = stopbits;
    })
}

pub unsafe extern "C" fn mraa_uart_set_flowcontrol(
    dev: MraaUartContext,
    xonxoff: c_int,
    rtscts: c_int,
) -> c_int {
    with_uart(dev, |u| {
        u.xonxoff = xonxoff;
        u.rtscts = rtscts;
    })
}

pub unsafe extern "C" fn mraa_uart_settimeout(
    dev: MraaUartContext,
    read: c_int,
    write: c_int,
    interchar: c_int,
) -> c_int {
    with_uart(dev, |u| {
        u.read_timeout = read;
        u.write_timeout = write;
        u.interchar_timeout = interchar;
    })
}

pub unsafe extern "C" fn mraa_uart_get_dev_path(dev: MraaUartContext) -> *const c_char {
    match STATE.lock().uarts.get(&key(dev)) {
        // CString 堆缓冲在句柄注销前保持稳定
        Some(u) => u.path.as_ptr(),
        None => std::ptr::null(),
    }
}

pub unsafe extern "C" fn mraa_uart_stop(dev: MraaUartContext) -> c_int {
    let mut s = STATE.lock();
    if s.uarts.remove(&key(dev)).is_some() {
        s.uart_stops += 1;
        SUCCESS
    } else {
        ERROR_INVALID_HANDLE
    }
}

pub unsafe extern "C" fn mraa_uart_read(dev: MraaUartContext, buf: *mut u8, length: c_int) -> c_int {
    if buf.is_null() || length < 0 {
        return -1;
    }
    match STATE.lock().uarts.get_mut(&key(dev)) {
        Some(u) => {
            let out = unsafe { std::slice::from_raw_parts_mut(buf, length as usize) };
            let mut n = 0;
            while n < out.len() {
                match u.loopback.pop_front() {
                    Some(b) => {
                        out[n] = b;
                        n += 1;
                    },
                    None => break,
                }
            }
            n as c_int
        },
        None => -1,
    }
}

pub unsafe extern "C" fn mraa_uart_write(
    dev: MraaUartContext,
    buf: *const u8,
    length: c_int,
) -> c_int {
    if buf.is_null() || length < 0 {
        return -1;
    }
    match STATE.lock().uarts.get_mut(&key(dev)) {
        Some(u) => {
            let data = unsafe { std::slice::from_raw_parts(buf, length as usize) };
            u.loopback.extend(data.iter().copied());
            length
        },
        None => -1,
    }
}

pub unsafe extern "C" fn mraa_uart_data_available(dev: MraaUartContext, _millis: c_uint) -> c_int {
    match STATE.lock().uarts.get(&key(dev)) {
        Some(u) => (!u.loopback.is_empty()) as c_int,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_init_is_reported_once() {
        control::reset();
        assert_eq!(unsafe { mraa_init() }, SUCCESS);
        assert_eq!(unsafe { mraa_init() }, ERROR_PLATFORM_ALREADY_INITIALISED);
        unsafe { mraa_deinit() };
        assert!(!control::is_initialized());
    }

    #[test]
    #[serial]
    fn test_gpio_handle_lifecycle() {
        control::reset();
        let dev = unsafe { mraa_gpio_init(7) };
        assert!(!dev.is_null());
        assert_eq!(unsafe { mraa_gpio_write(dev, 1) }, SUCCESS);
        assert_eq!(unsafe { mraa_gpio_read(dev) }, 1);
        assert_eq!(unsafe { mraa_gpio_get_pin(dev) }, 7);

        assert_eq!(unsafe { mraa_gpio_close(dev) }, SUCCESS);
        assert_eq!(control::gpio_close_count(), 1);
        // 注销后的句柄遵循结果码/哨兵双协议
        assert_eq!(unsafe { mraa_gpio_close(dev) }, ERROR_INVALID_HANDLE);
        assert_eq!(unsafe { mraa_gpio_read(dev) }, -1);
        assert_eq!(unsafe { mraa_gpio_get_pin(dev) }, -1);
    }

    #[test]
    #[serial]
    fn test_gpio_init_rejects_out_of_range_pin() {
        control::reset();
        assert!(unsafe { mraa_gpio_init(-1) }.is_null());
        assert!(unsafe { mraa_gpio_init(MOCK_PIN_COUNT as c_int) }.is_null());
        assert!(unsafe { mraa_gpio_init_raw(-3) }.is_null());
        assert_eq!(control::live_handle_count(), 0);
    }

    #[test]
    #[serial]
    fn test_pwm_write_clamps_duty() {
        control::reset();
        let dev = unsafe { mraa_pwm_init(3) };
        assert!(!dev.is_null());

        assert_eq!(unsafe { mraa_pwm_write(dev, -0.5) }, SUCCESS);
        assert_eq!(unsafe { mraa_pwm_read(dev) }, 0.0);
        assert_eq!(unsafe { mraa_pwm_write(dev, 1.5) }, SUCCESS);
        assert_eq!(unsafe { mraa_pwm_read(dev) }, 1.0);

        assert_eq!(unsafe { mraa_pwm_close(dev) }, SUCCESS);
    }

    #[test]
    #[serial]
    fn test_uart_loopback_roundtrip() {
        control::reset();
        let dev = unsafe { mraa_uart_init(0) };
        assert!(!dev.is_null());

        let path = unsafe { CStr::from_ptr(mraa_uart_get_dev_path(dev)) };
        assert_eq!(path.to_str().unwrap(), "/dev/ttyS0");

        let msg = b"ping";
        assert_eq!(
            unsafe { mraa_uart_write(dev, msg.as_ptr(), msg.len() as c_int) },
            4
        );
        assert_eq!(unsafe { mraa_uart_data_available(dev, 0) }, 1);

        let mut buf = [0u8; 16];
        let n = unsafe { mraa_uart_read(dev, buf.as_mut_ptr(), buf.len() as c_int) };
        assert_eq!(n, 4);
        assert_eq!(&buf[..4], msg);
        assert_eq!(unsafe { mraa_uart_data_available(dev, 0) }, 0);

        assert_eq!(unsafe { mraa_uart_stop(dev) }, SUCCESS);
        assert_eq!(control::uart_stop_count(), 1);
    }

    #[test]
    #[serial]
    fn test_uart_init_raw_rejects_empty_path() {
        control::reset();
        assert!(unsafe { mraa_uart_init_raw(c"".as_ptr()) }.is_null());
        assert!(unsafe { mraa_uart_init_raw(std::ptr::null()) }.is_null());
        let dev = unsafe { mraa_uart_init_raw(c"/dev/ttyAMA0".as_ptr()) };
        assert!(!dev.is_null());
        assert_eq!(unsafe { mraa_uart_stop(dev) }, SUCCESS);
    }
}
