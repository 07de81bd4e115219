//! LED 闪烁示例
//!
//! ```bash
//! cargo run --example blink --features mock
//! ```
//!
//! 真机运行时去掉 `--features mock`，并按板型调整引脚号。

use std::thread;
use std::time::Duration;

use mraa::{Gpio, GpioDir, GpioValue, platform};

fn main() -> mraa::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    platform::init()?;
    tracing::info!(
        name = platform::platform_name().as_deref().unwrap_or("unknown"),
        kind = ?platform::platform_type(),
        pins = platform::pin_count(),
        "platform ready"
    );

    let mut led = Gpio::with_direction(13, GpioDir::Out, false)?;
    for i in 0..10 {
        let value = if i % 2 == 0 {
            GpioValue::High
        } else {
            GpioValue::Low
        };
        led.write(value)?;
        tracing::info!(?value, "led");
        thread::sleep(Duration::from_millis(200));
    }

    led.close();
    platform::deinit();
    Ok(())
}
