//! UART 收发示例
//!
//! ```bash
//! cargo run --example uart_echo --features mock
//! ```
//!
//! mock 模式下 UART 是回环的：写出的字节可以立即读回。

use mraa::{Uart, UartParity, platform};

fn main() -> mraa::Result<()> {
    tracing_subscriber::fmt().init();

    platform::init()?;

    let mut uart = Uart::new(0)?;
    uart.set_baudrate(115_200)?;
    uart.set_mode(8, UartParity::None, 1)?;
    uart.set_flow_control(false, false)?;
    tracing::info!(path = ?uart.dev_path()?, "uart opened");

    let sent = uart.write(b"AT\r\n")?;
    tracing::info!(sent, "request written");

    if uart.data_available(100)? {
        let mut buf = [0u8; 64];
        let n = uart.read(&mut buf)?;
        if n >= 0 {
            tracing::info!(received = n, data = ?&buf[..n as usize], "response");
        }
    }

    uart.stop()?;
    platform::deinit();
    Ok(())
}
