//! 原生枚举类型
//!
//! 与 libmraa 头文件中的 C 枚举一一对应，跨 FFI 边界时统一经由
//! `num_enum` 的整数转换，不在此处附加任何语义。

use num_enum::{FromPrimitive, IntoPrimitive, TryFromPrimitive};

/// GPIO 电平值
///
/// `Fatal` 是哨兵值：`Gpio::read` 失败时不报错，而是返回 `Fatal(-1)`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, FromPrimitive)]
#[repr(i32)]
pub enum GpioValue {
    /// 读取失败（带外哨兵，非电平）
    #[num_enum(default)]
    Fatal = -1,
    Low = 0,
    High = 1,
}

/// GPIO 方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum GpioDir {
    /// 输出，可另行设置输出模式
    Out = 0,
    /// 输入
    In = 1,
    /// 输出，初始高电平
    OutHigh = 2,
    /// 输出，初始低电平
    OutLow = 3,
}

/// GPIO 中断边沿类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum GpioEdge {
    /// 不触发中断
    None = 0,
    /// 上升沿与下降沿
    Both = 1,
    /// 仅上升沿
    Rising = 2,
    /// 仅下降沿
    Falling = 3,
}

/// GPIO 输出模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum GpioMode {
    /// 默认，强驱动高低电平
    Strong = 0,
    PullUp = 1,
    PullDown = 2,
    /// 高阻
    HiZ = 3,
}

/// UART 校验位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum UartParity {
    None = 0,
    Even = 1,
    Odd = 2,
    Mark = 3,
    Space = 4,
}

/// 引脚可用模式（用于 [`crate::platform::pin_mode_test`]）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum PinMode {
    Valid = 0,
    Gpio = 1,
    Pwm = 2,
    FastGpio = 3,
    Spi = 4,
    I2c = 5,
    Aio = 6,
    Uart = 7,
}

/// libmraa 支持的平台类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, FromPrimitive)]
#[repr(i32)]
pub enum Platform {
    IntelGalileoGen1 = 0,
    IntelGalileoGen2 = 1,
    IntelEdisonFabC = 2,
    IntelDe3815 = 3,
    IntelMinnowboardMax = 4,
    RaspberryPi = 5,
    Beaglebone = 6,
    Banana = 7,
    IntelNuc5 = 8,
    Linaro96boards = 9,
    IntelSofia3gr = 10,
    IntelCherryhills = 11,
    Up = 12,
    /// 无自身能力、仅承载子平台的平台
    NullPlatform = 98,
    /// 未识别的平台
    #[num_enum(default)]
    UnknownPlatform = 99,
    /// FTDI FT4222 USB 扩展平台（USB 平台编号从 256 起）
    FtdiFt4222 = 256,
}

/// 平台偏移：主平台或子平台
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PlatformOffset {
    Main = 0,
    Sub = 1,
}
