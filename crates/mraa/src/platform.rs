//! 平台初始化与能力查询
//!
//! [`init`] / [`deinit`] 管理原生层的全局状态，在一把进程级互斥锁内
//! 完成，重复初始化被视为成功（幂等）。其余查询只读板级信息，可在
//! 初始化之后任意并发调用。

use std::ffi::CStr;

use libc::{c_char, c_int};
use mraa_sys as sys;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::error::{NativeError, Result, ResultCode, check};
use crate::types::{PinMode, Platform, PlatformOffset};

// init/deinit 共用，保证全局初始化流程串行
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// 初始化原生平台层
///
/// 幂等：平台已初始化时原生层返回 `PlatformAlreadyInitialised`，这里
/// 视为成功。该例外只存在于本流程，其他调用点不豁免该结果码。
pub fn init() -> Result<()> {
    let _guard = INIT_LOCK.lock();
    let raw = unsafe { sys::mraa_init() };
    match ResultCode::from(raw) {
        ResultCode::Success => {
            debug!("mraa platform initialized");
            Ok(())
        },
        ResultCode::PlatformAlreadyInitialised => {
            trace!("mraa platform already initialized");
            Ok(())
        },
        _ => Err(NativeError::from_raw(raw).into()),
    }
}

/// 反初始化原生平台层
///
/// 原生调用无返回值，失败不可观测。
pub fn deinit() {
    let _guard = INIT_LOCK.lock();
    unsafe { sys::mraa_deinit() };
    debug!("mraa platform deinitialized");
}

// 原生层拥有返回的 C 字符串，这里立即拷贝；空指针表示信息缺失
fn copy_native_str(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
    }
}

/// 板型名称（如 "Intel Edison"）；未知时为 `None`
pub fn platform_name() -> Option<String> {
    copy_native_str(unsafe { sys::mraa_get_platform_name() })
}

/// 指定平台（主/子）的版本串；未知时为 `None`
pub fn platform_version(offset: PlatformOffset) -> Option<String> {
    copy_native_str(unsafe { sys::mraa_get_platform_version(u8::from(offset) as c_int) })
}

/// libmraa 自身的版本串（如 "v2.2.0"）
pub fn version() -> Option<String> {
    copy_native_str(unsafe { sys::mraa_get_version() })
}

/// 主平台类型
pub fn platform_type() -> Platform {
    Platform::from(unsafe { sys::mraa_get_platform_type() })
}

/// 组合平台类型：`(子平台 << 8) | 主平台`，原始位域原样返回
pub fn platform_combined_type() -> i32 {
    unsafe { sys::mraa_get_platform_combined_type() }
}

/// 主平台引脚总数
pub fn pin_count() -> u32 {
    unsafe { sys::mraa_get_pin_count() }
}

/// 指定平台（主/子）的引脚总数
pub fn platform_pin_count(offset: PlatformOffset) -> u32 {
    unsafe { sys::mraa_get_platform_pin_count(offset.into()) }
}

/// 引脚名称（如 "IO6"）；无此引脚时为 `None`
pub fn pin_name(pin: i32) -> Option<String> {
    copy_native_str(unsafe { sys::mraa_get_pin_name(pin) })
}

/// 引脚是否支持给定模式
pub fn pin_mode_test(pin: i32, mode: PinMode) -> bool {
    (unsafe { sys::mraa_pin_mode_test(pin, mode.into()) }) != 0
}

/// ADC 原始位宽；无 ADC 时为 `0`
pub fn adc_raw_bits() -> u32 {
    unsafe { sys::mraa_adc_raw_bits() }
}

/// 指定平台（主/子）的 ADC 原始位宽
pub fn platform_adc_raw_bits(offset: PlatformOffset) -> u32 {
    unsafe { sys::mraa_get_platform_adc_raw_bits(offset.into()) }
}

/// ADC 对外换算位宽；无 ADC 时为 `0`
pub fn adc_supported_bits() -> u32 {
    unsafe { sys::mraa_adc_supported_bits() }
}

/// 指定平台（主/子）的 ADC 对外换算位宽
pub fn platform_adc_supported_bits(offset: PlatformOffset) -> u32 {
    unsafe { sys::mraa_get_platform_adc_supported_bits(offset.into()) }
}

/// 可用 I2C 总线数；板型未初始化时为 `-1`（哨兵，不报错）
pub fn i2c_bus_count() -> i32 {
    unsafe { sys::mraa_get_i2c_bus_count() }
}

/// 第 `bus` 个 I2C 总线的内核编号；无此总线时为 `-1`
pub fn i2c_bus_id(bus: u32) -> i32 {
    unsafe { sys::mraa_get_i2c_bus_id(bus) }
}

/// 指定平台（主/子）的默认 I2C 总线编号
pub fn default_i2c_bus(offset: PlatformOffset) -> i32 {
    unsafe { sys::mraa_get_default_i2c_bus(offset.into()) }
}

/// 是否挂载了子平台
pub fn has_sub_platform() -> bool {
    (unsafe { sys::mraa_has_sub_platform() }) != 0
}

/// 编号是否落在子平台空间（偏移 512 及以上）
pub fn is_sub_platform_id(pin_or_bus_id: i32) -> bool {
    (unsafe { sys::mraa_is_sub_platform_id(pin_or_bus_id) }) != 0
}

/// 把主平台空间的索引换算为子平台空间编号
pub fn sub_platform_id(pin_or_bus_index: i32) -> i32 {
    unsafe { sys::mraa_get_sub_platform_id(pin_or_bus_index) }
}

/// 把子平台空间编号换算回索引
pub fn sub_platform_index(pin_or_bus_id: i32) -> i32 {
    unsafe { sys::mraa_get_sub_platform_index(pin_or_bus_id) }
}

/// 设置原生层日志级别（syslog 级别，`0..=7`）
pub fn set_log_level(level: i32) -> Result<()> {
    check(unsafe { sys::mraa_set_log_level(level) })?;
    Ok(())
}

/// 尝试提升进程调度优先级，返回实际生效值；失败为 `-1`（哨兵，不报错）
pub fn set_priority(priority: i32) -> i32 {
    unsafe { sys::mraa_set_priority(priority) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mraa_sys::mock::control;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_init_is_idempotent() {
        control::reset();
        init().unwrap();
        assert!(control::is_initialized());
        // 重复初始化同样成功
        init().unwrap();
        init().unwrap();

        deinit();
        assert!(!control::is_initialized());
        init().unwrap();
        assert!(control::is_initialized());
    }

    #[test]
    #[serial]
    fn test_platform_identity_queries() {
        control::reset();
        init().unwrap();

        assert_eq!(platform_name().as_deref(), Some("MRAA Mock Platform"));
        assert_eq!(
            platform_version(PlatformOffset::Main).as_deref(),
            Some("mock-1.0")
        );
        assert_eq!(platform_version(PlatformOffset::Sub), None);
        assert_eq!(version().as_deref(), Some("v2.2.0-mock"));
        assert_eq!(platform_type(), Platform::RaspberryPi);

        let combined = platform_combined_type();
        assert_eq!(Platform::from(combined & 0xff), Platform::RaspberryPi);
        assert_eq!(Platform::from(combined >> 8), Platform::UnknownPlatform);
    }

    #[test]
    #[serial]
    fn test_pin_and_bus_queries() {
        control::reset();
        init().unwrap();

        assert_eq!(pin_count(), mraa_sys::MOCK_PIN_COUNT);
        assert_eq!(platform_pin_count(PlatformOffset::Main), mraa_sys::MOCK_PIN_COUNT);
        assert_eq!(platform_pin_count(PlatformOffset::Sub), 0);
        assert!(pin_mode_test(0, PinMode::Gpio));
        assert!(!pin_mode_test(-1, PinMode::Gpio));
        assert_eq!(pin_name(3).as_deref(), Some("GPIO"));
        assert_eq!(pin_name(-1), None);

        assert_eq!(adc_raw_bits(), 12);
        assert_eq!(adc_supported_bits(), 10);
        assert_eq!(platform_adc_raw_bits(PlatformOffset::Sub), 0);

        assert_eq!(i2c_bus_count(), 2);
        assert_eq!(i2c_bus_id(0), 1);
        assert_eq!(i2c_bus_id(9), -1);
        assert_eq!(default_i2c_bus(PlatformOffset::Main), 0);
    }

    #[test]
    #[serial]
    fn test_sub_platform_id_arithmetic() {
        control::reset();
        assert!(!has_sub_platform());
        assert!(!is_sub_platform_id(5));
        assert!(is_sub_platform_id(sub_platform_id(5)));
        assert_eq!(sub_platform_index(sub_platform_id(5)), 5);
    }

    #[test]
    #[serial]
    fn test_log_level_and_priority() {
        control::reset();
        set_log_level(7).unwrap();
        let err = set_log_level(8).unwrap_err();
        assert_eq!(
            err.result_code(),
            Some(crate::error::ResultCode::InvalidVerbosityLevel)
        );

        assert_eq!(set_priority(50), 50);
        assert_eq!(set_priority(-2), -1);
    }
}
