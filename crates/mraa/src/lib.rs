//! # mraa
//!
//! libmraa 的安全 Rust 适配层：GPIO、PWM、UART 三类外设驱动，加上
//! 平台初始化与能力查询。
//!
//! ## 设计
//!
//! - 每个设备独占一个内部句柄守卫，原生关闭函数在
//!   整个生命周期内至多执行一次，显式关闭与 `Drop` 的竞争是安全的；
//! - 原生整数结果码统一经 [`error::check`] 翻译为类型化错误，未识别的
//!   码保留原始值；
//! - 原生层的三条结果通道（结果码、哨兵值、字节计数）在安全层原样
//!   保留，不做归一化。
//!
//! ## 示例
//!
//! ```no_run
//! use mraa::{Gpio, GpioDir, GpioValue, platform};
//!
//! platform::init()?;
//! tracing::info!(
//!     platform = ?platform::platform_type(),
//!     pins = platform::pin_count(),
//!     "board detected"
//! );
//!
//! let mut led = Gpio::with_direction(13, GpioDir::Out, false)?;
//! led.write(GpioValue::High)?;
//! # Ok::<(), mraa::Error>(())
//! ```
//!
//! ## Mock 模式
//!
//! 开启 `mock` feature 时全部原生调用转发到 `mraa-sys` 的进程内模拟，
//! 无硬件、无 libmraa 也能运行与测试。

pub mod boards;
pub mod error;
mod gpio;
mod handle;
pub mod platform;
mod pwm;
pub mod types;
mod uart;

pub use error::{Error, NativeError, Result, ResultCode};
pub use gpio::Gpio;
pub use pwm::Pwm;
pub use types::{
    GpioDir, GpioEdge, GpioMode, GpioValue, PinMode, Platform, PlatformOffset, UartParity,
};
pub use uart::Uart;
