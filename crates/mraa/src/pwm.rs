//! PWM 驱动
//!
//! 占空比以 `[0.0, 1.0]` 的浮点百分比表达。本层不做范围校验：越界值
//! 原样透传，原生层自行钳位，这是对外契约的一部分。

use libc::c_int;
use mraa_sys as sys;
use tracing::debug;

use crate::error::{Result, check};
use crate::handle::HandleGuard;

/// 一个已打开的 PWM 上下文
///
/// # 示例
///
/// ```no_run
/// use mraa::Pwm;
///
/// let mut pwm = Pwm::new(3)?;
/// pwm.set_period_us(200)?;
/// pwm.set_enable(true)?;
/// pwm.write(0.25)?;
/// # Ok::<(), mraa::Error>(())
/// ```
#[derive(Debug)]
pub struct Pwm {
    guard: HandleGuard,
    pin: c_int,
    chip: Option<c_int>,
}

impl Pwm {
    /// 经引脚映射打开一个 PWM 上下文
    pub fn new(pin: i32) -> Result<Self> {
        let ctx = unsafe { sys::mraa_pwm_init(pin) };
        let guard = HandleGuard::acquire("pwm", ctx, sys::mraa_pwm_close)?;
        debug!(pin, "pwm context opened");
        Ok(Self {
            guard,
            pin,
            chip: None,
        })
    }

    /// 绕过引脚映射，直接按 pwmchip 编号打开
    ///
    /// # 参数
    /// - `chip`: `/sys/class/pwm` 下的 pwmchip 编号
    /// - `pin`: 该 chip 内的通道编号
    pub fn new_raw(chip: i32, pin: i32) -> Result<Self> {
        let ctx = unsafe { sys::mraa_pwm_init_raw(chip, pin) };
        let guard = HandleGuard::acquire("pwm", ctx, sys::mraa_pwm_close)?;
        debug!(chip, pin, "pwm context opened (raw)");
        Ok(Self {
            guard,
            pin,
            chip: Some(chip),
        })
    }

    /// 写占空比（`0.0` 到 `1.0` 的百分比）
    ///
    /// 越界值透传给原生层钳位，本层不报错。
    pub fn write(&mut self, percentage: f32) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_pwm_write(dev, percentage) })?;
        Ok(())
    }

    /// 回读当前占空比
    pub fn read(&self) -> Result<f32> {
        let dev = self.guard.get()?;
        Ok(unsafe { sys::mraa_pwm_read(dev) })
    }

    /// 设置周期（秒）
    pub fn set_period(&mut self, seconds: f32) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_pwm_period(dev, seconds) })?;
        Ok(())
    }

    /// 设置周期（毫秒）
    pub fn set_period_ms(&mut self, ms: i32) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_pwm_period_ms(dev, ms) })?;
        Ok(())
    }

    /// 设置周期（微秒）
    pub fn set_period_us(&mut self, us: i32) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_pwm_period_us(dev, us) })?;
        Ok(())
    }

    /// 设置脉宽（秒）
    pub fn set_pulsewidth(&mut self, seconds: f32) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_pwm_pulsewidth(dev, seconds) })?;
        Ok(())
    }

    /// 设置脉宽（毫秒）
    pub fn set_pulsewidth_ms(&mut self, ms: i32) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_pwm_pulsewidth_ms(dev, ms) })?;
        Ok(())
    }

    /// 设置脉宽（微秒）
    pub fn set_pulsewidth_us(&mut self, us: i32) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_pwm_pulsewidth_us(dev, us) })?;
        Ok(())
    }

    /// 开关 PWM 输出
    pub fn set_enable(&mut self, enable: bool) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_pwm_enable(dev, enable as c_int) })?;
        Ok(())
    }

    /// 转移上下文所有权标志
    pub fn set_owner(&mut self, owner: bool) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_pwm_owner(dev, owner as c_int) })?;
        Ok(())
    }

    /// 一次性配置周期（毫秒）与脉宽（毫秒）
    pub fn config_ms(&mut self, period: i32, duty: f32) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_pwm_config_ms(dev, period, duty) })?;
        Ok(())
    }

    /// 一次性配置周期（毫秒）与占空比（百分比）
    pub fn config_percent(&mut self, period: i32, duty: f32) -> Result<()> {
        let dev = self.guard.get()?;
        check(unsafe { sys::mraa_pwm_config_percent(dev, period, duty) })?;
        Ok(())
    }

    /// 硬件支持的最大周期（微秒）
    pub fn max_period(&self) -> Result<i32> {
        self.guard.get()?;
        Ok(unsafe { sys::mraa_pwm_get_max_period() })
    }

    /// 硬件支持的最小周期（微秒）
    pub fn min_period(&self) -> Result<i32> {
        self.guard.get()?;
        Ok(unsafe { sys::mraa_pwm_get_min_period() })
    }

    /// 经引脚映射时的引脚编号
    pub fn pin(&self) -> i32 {
        self.pin
    }

    /// `new_raw` 打开时的 pwmchip 编号
    pub fn chip(&self) -> Option<i32> {
        self.chip
    }

    /// 上下文是否仍然存活
    pub fn is_valid(&self) -> bool {
        self.guard.is_valid()
    }

    /// 显式释放；幂等，重复调用返回首次记录的关闭结果
    pub fn close(&mut self) -> bool {
        debug!(pin = self.pin, "pwm context closed");
        self.guard.release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ResultCode};
    use mraa_sys::mock::control;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_write_then_read_roundtrip() {
        control::reset();
        let mut pwm = Pwm::new(3).unwrap();
        pwm.set_period_us(200).unwrap();
        pwm.set_enable(true).unwrap();

        pwm.write(0.25).unwrap();
        assert_eq!(pwm.read().unwrap(), 0.25);
        assert_eq!(pwm.pin(), 3);
        assert_eq!(pwm.chip(), None);
    }

    #[test]
    #[serial]
    fn test_out_of_range_duty_passes_through_and_is_clamped() {
        control::reset();
        let mut pwm = Pwm::new(5).unwrap();

        // 本层不校验，原生层钳位
        pwm.write(1.5).unwrap();
        assert_eq!(pwm.read().unwrap(), 1.0);
        pwm.write(-0.5).unwrap();
        assert_eq!(pwm.read().unwrap(), 0.0);
    }

    #[test]
    #[serial]
    fn test_raw_constructor_records_chip() {
        control::reset();
        let pwm = Pwm::new_raw(0, 2).unwrap();
        assert_eq!(pwm.chip(), Some(0));
        assert_eq!(pwm.pin(), 2);

        let err = Pwm::new_raw(-1, 2).unwrap_err();
        assert_eq!(err.result_code(), Some(ResultCode::InvalidHandle));
    }

    #[test]
    #[serial]
    fn test_period_queries_require_live_handle() {
        control::reset();
        let mut pwm = Pwm::new(7).unwrap();
        assert_eq!(pwm.max_period().unwrap(), mraa_sys::MOCK_MAX_PERIOD_US);
        assert_eq!(pwm.min_period().unwrap(), mraa_sys::MOCK_MIN_PERIOD_US);

        assert!(pwm.close());
        assert!(matches!(pwm.max_period(), Err(Error::Disposed { .. })));
        assert!(matches!(pwm.min_period(), Err(Error::Disposed { .. })));
    }

    #[test]
    #[serial]
    fn test_close_is_idempotent_and_drop_skips_after_close() {
        control::reset();
        {
            let mut pwm = Pwm::new(9).unwrap();
            pwm.config_percent(20, 0.5).unwrap();
            assert!(pwm.close());
            assert!(pwm.close());
            assert!(matches!(pwm.write(0.1), Err(Error::Disposed { .. })));
            assert!(matches!(pwm.read(), Err(Error::Disposed { .. })));
        }
        assert_eq!(control::pwm_close_count(), 1);
        assert_eq!(control::live_handle_count(), 0);
    }
}
