//! UART 驱动
//!
//! 读写走原生计数通道：返回实际传输的字节数，`-1` 是失败哨兵，本层
//! 原样透传，不翻译为错误。配置调用走结果码通道。

use std::ffi::{CStr, CString};

use libc::{c_int, c_uint};
use mraa_sys as sys;
use tracing::debug;

use crate::error::{NativeError, Result, ResultCode, check};
use crate::handle::HandleGuard;
use crate::types::UartParity;

/// 一个已打开的 UART 上下文
///
/// # 示例
///
/// ```no_run
/// use mraa::{Uart, UartParity};
///
/// let mut uart = Uart::new(0)?;
/// uart.set_baudrate(115_200)?;
/// uart.set_mode(8, UartParity::None, 1)?;
/// let sent = uart.write(b"AT\r\n")?;
/// assert_eq!(sent, 4);
/// # Ok::<(), mraa::Error>(())
/// ```
#[derive(Debug)]
pub struct Uart {
    guard: HandleGuard,
}

impl Uart {
    /// 按逻辑编号打开板载 UART
    pub fn new(index: i32) -> Result<Self> {
        let ctx = unsafe { sys::mraa_uart_init(index) };
        let guard = HandleGuard::acquire("uart", ctx, sys::mraa_uart_stop)?;
        debug!(index, "uart context opened");
        Ok(Self { guard })
    }

    /// 绕过引脚映射，直接按设备路径打开（如 `/dev/ttyS0`）
    ///
    /// # 错误
    /// - 路径含内嵌 NUL 时为 `InvalidParameter`
    pub fn new_raw(path: &str) -> Result<Self> {
        let c_path = CString::new(path).map_err(|_| {
            NativeError::new(
                ResultCode::InvalidParameter,
                ResultCode::InvalidParameter as i32,
                format!("device path contains an interior NUL byte: {path:?}"),
            )
        })?;
        let ctx = unsafe { sys::mraa_uart_init_raw(c_path.as_ptr()) };
        let guard = HandleGuard::acquire("uart", ctx, sys::mraa_uart_stop)?;
        debug!(path, "uart context opened (raw)");
        Ok(Self { guard })
    }

    /// 冲刷输出缓冲
    pub fn flush(&mut self) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_uart_flush(dev) })?;
        Ok(())
    }

    /// 设置波特率
    pub fn set_baudrate(&mut self, baud: u32) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_uart_set_baudrate(dev, baud as c_uint) })?;
        Ok(())
    }

    /// 设置帧格式：数据位、校验位、停止位
    pub fn set_mode(&mut self, bytesize: i32, parity: UartParity, stopbits: i32) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_uart_set_mode(dev, bytesize, parity.into(), stopbits) })?;
        Ok(())
    }

    /// 设置流控（软件 XON/XOFF 与硬件 RTS/CTS）
    pub fn set_flow_control(&mut self, xonxoff: bool, rtscts: bool) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe {
            sys::mraa_uart_set_flowcontrol(dev, xonxoff as c_int, rtscts as c_int)
        })?;
        Ok(())
    }

    /// 设置读、写、字符间超时（毫秒）
    pub fn set_timeout(&mut self, read: i32, write: i32, interchar: i32) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_uart_settimeout(dev, read, write, interchar) })?;
        Ok(())
    }

    /// 底层设备路径；原生层未记录路径时为 `None`
    pub fn dev_path(&self) -> Result<Option<String>> {
        let dev = self.guard.get()?;
        let ptr = unsafe { sys::mraa_uart_get_dev_path(dev) };
        if ptr.is_null() {
            Ok(None)
        } else {
            // 原生层拥有该内存，这里立即拷贝
            Ok(Some(
                unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned(),
            ))
        }
    }

    /// 读入缓冲区，返回实际读到的字节数；`-1` 为原生失败哨兵
    pub fn read(&mut self, buf: &mut [u8]) -> Result<i32> {
        let dev = self.guard.get()?;
        Ok(unsafe { sys::mraa_uart_read(dev, buf.as_mut_ptr(), buf.len() as c_int) })
    }

    /// 写出缓冲区，返回实际写出的字节数；`-1` 为原生失败哨兵
    pub fn write(&mut self, buf: &[u8]) -> Result<i32> {
        let dev = self.guard.get()?;
        Ok(unsafe { sys::mraa_uart_write(dev, buf.as_ptr(), buf.len() as c_int) })
    }

    /// 在 `millis` 毫秒内是否有数据可读
    pub fn data_available(&mut self, millis: u32) -> Result<bool> {
        let dev = self.guard.get()?;
        Ok(unsafe { sys::mraa_uart_data_available(dev, millis as c_uint) } != 0)
    }

    /// 上下文是否仍然存活
    pub fn is_valid(&self) -> bool {
        self.guard.is_valid()
    }

    /// 停止并释放 UART
    ///
    /// 与其他设备的 `close` 不同：已释放后再次调用以 `Disposed` 报错，
    /// 而非静默返回。
    pub fn stop(&mut self) -> Result<bool> {
        self.guard.get()?;
        debug!("uart context stopped");
        Ok(self.guard.release())
    }
}
