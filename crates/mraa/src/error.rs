//! 错误类型与结果码翻译
//!
//! 原生层的整数结果码协议在这里统一翻译为类型化错误；除此之外没有任何
//! 地方构造 [`NativeError`]。翻译本身不做上下文判断：
//! `PlatformAlreadyInitialised` 只在全局初始化流程中被调用方视为成功
//! （见 [`crate::platform::init`]），[`check`] 不为它开例外。

use num_enum::FromPrimitive;
use thiserror::Error;

/// libmraa 结果码
///
/// `0` 表示成功；未识别的码统一落到 `Unspecified`，原始值由
/// [`NativeError::raw`] 保留。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(i32)]
pub enum ResultCode {
    Success = 0,
    FeatureNotImplemented = 1,
    FeatureNotSupported = 2,
    InvalidVerbosityLevel = 3,
    InvalidParameter = 4,
    InvalidHandle = 5,
    NoResources = 6,
    InvalidResource = 7,
    InvalidQueueType = 8,
    NoDataAvailable = 9,
    InvalidPlatform = 10,
    PlatformNotInitialised = 11,
    PlatformAlreadyInitialised = 12,
    /// 未识别的结果码
    #[num_enum(default)]
    Unspecified = 99,
}

impl ResultCode {
    pub fn is_success(self) -> bool {
        self == ResultCode::Success
    }

    /// 结果码的文字描述（对应 libmraa 的 mraa_result_print）
    pub fn description(self) -> &'static str {
        match self {
            ResultCode::Success => "expected response",
            ResultCode::FeatureNotImplemented => "feature not implemented",
            ResultCode::FeatureNotSupported => "feature not supported by hardware",
            ResultCode::InvalidVerbosityLevel => "invalid verbosity level",
            ResultCode::InvalidParameter => "invalid parameter",
            ResultCode::InvalidHandle => "invalid handle",
            ResultCode::NoResources => "no resource of that type available",
            ResultCode::InvalidResource => "invalid resource",
            ResultCode::InvalidQueueType => "invalid queue type",
            ResultCode::NoDataAvailable => "no data available",
            ResultCode::InvalidPlatform => "platform not recognised",
            ResultCode::PlatformNotInitialised => "board information not initialised",
            ResultCode::PlatformAlreadyInitialised => "board is already initialised",
            ResultCode::Unspecified => "unknown error",
        }
    }
}

/// 原生调用返回的类型化错误
///
/// `raw` 永远是原生层返回的原始整数，即使它未被 [`ResultCode`] 识别，
/// 调用方也能据此检视原始协议值。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code:?} (raw {raw}): {message}")]
pub struct NativeError {
    pub code: ResultCode,
    pub raw: i32,
    pub message: String,
}

impl NativeError {
    pub fn new(code: ResultCode, raw: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            raw,
            message: message.into(),
        }
    }

    pub(crate) fn from_raw(raw: i32) -> Self {
        let code = ResultCode::from(raw);
        Self::new(code, raw, code.description())
    }
}

/// 适配层统一错误类型
///
/// 三条错误通道中的两条（结果码通道、Disposed 通道）在这里汇合；
/// 哨兵通道（`Gpio::read`、`pin()` 等）按契约不进入错误类型。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 原生调用返回非零结果码
    #[error("mraa call failed: {0}")]
    Native(#[from] NativeError),

    /// 底层句柄已释放，操作在进入原生层之前被本地拒绝
    #[error("{device} context already disposed")]
    Disposed { device: &'static str },
}

impl Error {
    /// 若为原生错误，返回翻译后的结果码
    pub fn result_code(&self) -> Option<ResultCode> {
        match self {
            Error::Native(e) => Some(e.code),
            Error::Disposed { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// 结果码翻译入口
///
/// `Success` 无任何可观察效果；非零码翻译为携带原始值的 [`NativeError`]。
/// 本层从不重试。
pub fn check(raw: i32) -> std::result::Result<(), NativeError> {
    if ResultCode::from(raw).is_success() {
        Ok(())
    } else {
        Err(NativeError::from_raw(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_success_is_noop() {
        assert!(check(0).is_ok());
    }

    #[test]
    fn test_check_maps_known_codes() {
        let err = check(5).unwrap_err();
        assert_eq!(err.code, ResultCode::InvalidHandle);
        assert_eq!(err.raw, 5);

        let err = check(12).unwrap_err();
        assert_eq!(err.code, ResultCode::PlatformAlreadyInitialised);
        assert_eq!(err.raw, 12);
    }

    #[test]
    fn test_check_preserves_unknown_raw_code() {
        let err = check(55).unwrap_err();
        assert_eq!(err.code, ResultCode::Unspecified);
        assert_eq!(err.raw, 55);
        let msg = format!("{err}");
        assert!(msg.contains("raw 55"), "message was: {msg}");
    }

    #[test]
    fn test_error_result_code_accessor() {
        let err = Error::from(NativeError::from_raw(4));
        assert_eq!(err.result_code(), Some(ResultCode::InvalidParameter));

        let err = Error::Disposed { device: "gpio" };
        assert_eq!(err.result_code(), None);
        assert_eq!(format!("{err}"), "gpio context already disposed");
    }
}
