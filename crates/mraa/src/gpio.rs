//! GPIO 驱动
//!
//! libmraa 的通用 IO 接口。具体能力取决于板型：可能走内核模块导出的
//! sysfs（gpiolib），也可能经 `/dev/uio` 或 `/dev/mem` 做内存映射 IO。
//!
//! 错误通道的不对称是外部契约，必须原样保留：
//!
//! - [`Gpio::write`] 走结果码通道，失败即报错；
//! - [`Gpio::read`] 走哨兵通道，除存活检查外从不报错，致命状况只以
//!   [`GpioValue::Fatal`] 表达；
//! - [`Gpio::pin`] / [`Gpio::pin_raw`] 永不报错，无效（含已释放）时
//!   返回 `-1`。

use libc::c_int;
use mraa_sys as sys;
use tracing::debug;

use crate::error::{Result, check};
use crate::handle::HandleGuard;
use crate::types::{GpioDir, GpioEdge, GpioMode, GpioValue};

/// 一个已打开的 GPIO 上下文
///
/// # 示例
///
/// ```no_run
/// use mraa::{Gpio, GpioDir, GpioValue};
///
/// let mut led = Gpio::with_direction(13, GpioDir::Out, false)?;
/// led.write(GpioValue::High)?;
/// # Ok::<(), mraa::Error>(())
/// ```
#[derive(Debug)]
pub struct Gpio {
    guard: HandleGuard,
    pin: c_int,
    raw: bool,
    last_dir: Option<GpioDir>,
}

impl Gpio {
    /// 打开一个 GPIO 上下文
    ///
    /// # 参数
    /// - `pin`: 板上读到的引脚编号（IO3 即 3）；`raw` 为真时为 SYSFS
    ///   中列出的 gpio 编号
    /// - `raw`: 为真时不经引脚映射
    ///
    /// # 错误
    /// - 原生 init 返回空上下文时为 `InvalidHandle`
    pub fn new(pin: i32, raw: bool) -> Result<Self> {
        let ctx = unsafe {
            if raw {
                sys::mraa_gpio_init_raw(pin)
            } else {
                sys::mraa_gpio_init(pin)
            }
        };
        let guard = HandleGuard::acquire("gpio", ctx, sys::mraa_gpio_close)?;
        debug!(pin, raw, "gpio context opened");
        Ok(Self {
            guard,
            pin,
            raw,
            last_dir: None,
        })
    }

    /// 打开并立即设置方向
    pub fn with_direction(pin: i32, dir: GpioDir, raw: bool) -> Result<Self> {
        let mut gpio = Self::new(pin, raw)?;
        gpio.set_direction(dir)?;
        Ok(gpio)
    }

    /// 打开并立即设置输出模式与方向（先模式后方向）
    pub fn with_mode(pin: i32, dir: GpioDir, mode: GpioMode, raw: bool) -> Result<Self> {
        let mut gpio = Self::new(pin, raw)?;
        gpio.set_mode(mode)?;
        gpio.set_direction(dir)?;
        Ok(gpio)
    }

    /// 设置方向
    pub fn set_direction(&mut self, dir: GpioDir) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_gpio_dir(dev, dir.into()) })?;
        self.last_dir = Some(dir);
        Ok(())
    }

    /// 从原生层回读当前方向
    pub fn direction(&self) -> Result<GpioDir> {
        let dev = self.guard.get()?;
        let mut raw_dir: c_int = 0;
        check(unsafe { sys::mraa_gpio_read_dir(dev, &mut raw_dir) })?;
        GpioDir::try_from(raw_dir)
            .map_err(|_| crate::error::NativeError::from_raw(raw_dir).into())
    }

    /// 经本适配器最近一次成功设置的方向（本地缓存，不访问原生层）
    pub fn last_direction(&self) -> Option<GpioDir> {
        self.last_dir
    }

    /// 设置中断边沿类型
    pub fn set_edge_mode(&mut self, mode: GpioEdge) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_gpio_edge_mode(dev, mode.into()) })?;
        Ok(())
    }

    /// 设置输出模式
    pub fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_gpio_mode(dev, mode.into()) })?;
        Ok(())
    }

    /// 转移上下文所有权标志
    pub fn set_owner(&mut self, owner: bool) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_gpio_owner(dev, owner as c_int) })?;
        Ok(())
    }

    /// 改用内存映射 IO 而非 sysfs
    pub fn set_use_mmapped(&mut self, mmapped: bool) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_gpio_use_mmaped(dev, mmapped as c_int) })?;
        Ok(())
    }

    /// 写电平
    pub fn write(&mut self, value: GpioValue) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_gpio_write(dev, value.into()) })?;
        Ok(())
    }

    /// 读电平
    ///
    /// 哨兵通道：存活检查之后不再报错，原生层失败以
    /// [`GpioValue::Fatal`] 返回，由调用方自行检查。
    pub fn read(&self) -> Result<GpioValue> {
        let dev = self.guard.get()?;
        Ok(GpioValue::from(unsafe { sys::mraa_gpio_read(dev) }))
    }

    /// 逻辑引脚编号；无效（含已释放）返回 `-1`，永不报错
    pub fn pin(&self) -> i32 {
        match self.guard.get() {
            Ok(dev) => unsafe { sys::mraa_gpio_get_pin(dev) },
            Err(_) => -1,
        }
    }

    /// sysfs 中的 gpio 编号；无效（含已释放）返回 `-1`，永不报错
    pub fn pin_raw(&self) -> i32 {
        match self.guard.get() {
            Ok(dev) => unsafe { sys::mraa_gpio_get_pin_raw(dev) },
            Err(_) => -1,
        }
    }

    /// 上下文是否仍然存活
    pub fn is_valid(&self) -> bool {
        self.guard.is_valid()
    }

    /// 显式释放；幂等，重复调用返回首次记录的关闭结果
    pub fn close(&mut self) -> bool {
        debug!(pin = self.pin, raw = self.raw, "gpio context closed");
        self.guard.release()
    }
}
