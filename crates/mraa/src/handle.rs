//! 原生句柄守卫
//!
//! [`HandleGuard`] 独占一个非空原生上下文指针，保证对应的原生关闭函数在
//! 守卫整个生命周期内至多被调用一次——无论显式 `release` 与 `Drop` 回收
//! 路径如何竞争。状态检查与转移在同一把锁内完成，关闭决策因此是单个
//! 原子步骤。

use std::ffi::c_void;
use std::ptr::NonNull;

use libc::c_int;
use parking_lot::Mutex;
use tracing::{trace, warn};

use crate::error::{Error, NativeError, Result, ResultCode};

/// 原生关闭/停止函数指针（`mraa_gpio_close` / `mraa_pwm_close` / `mraa_uart_stop`）
pub(crate) type CloseFn = unsafe extern "C" fn(*mut c_void) -> c_int;

#[derive(Debug)]
enum GuardState {
    Valid(NonNull<c_void>),
    /// 已释放；`ok` 记录首次关闭调用的结果，供后续 `release` 原样返回
    Released { ok: bool },
}

/// 独占一个原生句柄，保证至多一次释放
#[derive(Debug)]
pub(crate) struct HandleGuard {
    device: &'static str,
    close: CloseFn,
    state: Mutex<GuardState>,
}

// 句柄只是原生层的堆分配，所有访问都经由内部互斥锁串行化。
unsafe impl Send for HandleGuard {}
unsafe impl Sync for HandleGuard {}

impl HandleGuard {
    /// 包装一个原始句柄；空指针说明原生 init 失败，以 `InvalidHandle` 报错
    pub fn acquire(device: &'static str, raw: *mut c_void, close: CloseFn) -> Result<Self> {
        match NonNull::new(raw) {
            Some(ptr) => {
                trace!(device, "native context acquired");
                Ok(Self {
                    device,
                    close,
                    state: Mutex::new(GuardState::Valid(ptr)),
                })
            },
            None => Err(NativeError::new(
                ResultCode::InvalidHandle,
                ResultCode::InvalidHandle as i32,
                format!("{device} init returned a null context"),
            )
            .into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(*self.state.lock(), GuardState::Valid(_))
    }

    /// 每次原生调用前的存活检查；已释放则以 `Disposed` 拒绝
    pub fn get(&self) -> Result<*mut c_void> {
        match *self.state.lock() {
            GuardState::Valid(ptr) => Ok(ptr.as_ptr()),
            GuardState::Released { .. } => Err(Error::Disposed {
                device: self.device,
            }),
        }
    }

    /// 幂等释放
    ///
    /// 首次调用在持锁状态下执行原生关闭并记录结果；后续调用不再触碰
    /// 原生层，直接返回首次记录的结果。
    pub fn release(&self) -> bool {
        let mut state = self.state.lock();
        match *state {
            GuardState::Released { ok } => ok,
            GuardState::Valid(ptr) => {
                let ret = unsafe { (self.close)(ptr.as_ptr()) };
                let ok = ret == 0;
                if ok {
                    trace!(device = self.device, "native context released");
                } else {
                    warn!(device = self.device, ret, "native close reported failure");
                }
                *state = GuardState::Released { ok };
                ok
            },
        }
    }
}

impl Drop for HandleGuard {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // 句柄本身指向计数器，关闭函数经由句柄累加——每个测试的计数彼此隔离
    unsafe extern "C" fn counting_close(dev: *mut c_void) -> c_int {
        unsafe { &*(dev as *const AtomicUsize) }.fetch_add(1, Ordering::SeqCst);
        0
    }

    unsafe extern "C" fn failing_close(dev: *mut c_void) -> c_int {
        unsafe { &*(dev as *const AtomicUsize) }.fetch_add(1, Ordering::SeqCst);
        7
    }

    #[test]
    fn test_acquire_rejects_null_handle() {
        let err = HandleGuard::acquire("gpio", std::ptr::null_mut(), counting_close).unwrap_err();
        assert_eq!(err.result_code(), Some(ResultCode::InvalidHandle));
    }

    #[test]
    fn test_release_is_idempotent() {
        let closes = AtomicUsize::new(0);
        let handle = &closes as *const AtomicUsize as *mut c_void;
        let guard = HandleGuard::acquire("gpio", handle, counting_close).unwrap();

        assert!(guard.is_valid());
        assert!(guard.release());
        assert!(!guard.is_valid());
        assert!(guard.get().is_err());

        // 再次释放不触碰原生层，返回首次记录的结果
        assert!(guard.release());
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_release_records_first_outcome() {
        let closes = AtomicUsize::new(0);
        let handle = &closes as *const AtomicUsize as *mut c_void;
        let guard = HandleGuard::acquire("pwm", handle, failing_close).unwrap();

        assert!(!guard.release());
        assert!(!guard.release());
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_releases_exactly_once() {
        let closes = AtomicUsize::new(0);
        let handle = &closes as *const AtomicUsize as *mut c_void;
        {
            let _guard = HandleGuard::acquire("uart", handle, counting_close).unwrap();
        }
        assert_eq!(closes.load(Ordering::SeqCst), 1);

        // 显式释放后 Drop 不再关闭
        let guard = HandleGuard::acquire("uart", handle, counting_close).unwrap();
        guard.release();
        drop(guard);
        assert_eq!(closes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_concurrent_release_closes_exactly_once() {
        let closes = Box::leak(Box::new(AtomicUsize::new(0)));
        let handle = closes as *const AtomicUsize as *mut c_void;
        let guard = Arc::new(HandleGuard::acquire("gpio", handle, counting_close).unwrap());

        let threads: Vec<_> = (0..8)
            .map(|_| {
                let g = Arc::clone(&guard);
                std::thread::spawn(move || g.release())
            })
            .collect();
        for t in threads {
            assert!(t.join().unwrap());
        }

        assert_eq!(closes.load(Ordering::SeqCst), 1);
        assert!(!guard.is_valid());
    }
}
