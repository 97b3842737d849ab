use super::*;
use std::sync::atomic::AtomicUsize;

#[derive(Default)]
struct RecordingOps {
    setups: AtomicUsize,
    restores: AtomicUsize,
    fail_setup: bool,
}

impl TerminalOps for RecordingOps {
    fn setup(&self) -> io::Result<()> {
        if self.fail_setup {
            return Err(io::Error::new(io::ErrorKind::Other, "setup failed"));
        }
        self.setups.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        self.restores.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn test_drop_restores_terminal() {
    let ops = Arc::new(RecordingOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
        assert_eq!(ops.setups.load(Ordering::SeqCst), 1);
        assert_eq!(ops.restores.load(Ordering::SeqCst), 0);
    }
    assert_eq!(ops.restores.load(Ordering::SeqCst), 1);
}

#[test]
fn test_restore_is_idempotent() {
    let ops = Arc::new(RecordingOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();

    let restorer = guard.restorer();
    restorer.restore().unwrap();
    restorer.restore().unwrap();
    drop(guard);

    assert_eq!(ops.restores.load(Ordering::SeqCst), 1);
}

#[test]
fn test_setup_failure_propagates() {
    let ops = Arc::new(RecordingOps {
        fail_setup: true,
        ..RecordingOps::default()
    });

    assert!(TerminalGuard::with_ops(ops.clone()).is_err());
    assert_eq!(ops.setups.load(Ordering::SeqCst), 0);
}

#[test]
fn test_signal_exit_codes() {
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
}
