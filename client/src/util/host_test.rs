use super::*;

#[test]
fn memory_area_set_get_remove() {
    let area = MemoryArea::default();
    assert!(area.is_empty());
    area.set("accessToken", "abc");
    assert_eq!(area.get("accessToken"), Some("abc".to_owned()));
    area.set("accessToken", "def");
    assert_eq!(area.get("accessToken"), Some("def".to_owned()));
    assert_eq!(area.len(), 1);
    area.remove("accessToken");
    assert_eq!(area.get("accessToken"), None);
}

#[test]
fn memory_area_remove_missing_key_is_noop() {
    let area = MemoryArea::default();
    area.remove("nope");
    assert!(area.is_empty());
}

#[test]
fn headless_host_is_not_browser() {
    let host = Host::headless();
    assert_eq!(host.kind, HostKind::Headless);
    assert!(!host.is_browser());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn detect_without_hydrate_is_headless() {
    assert_eq!(Host::detect().kind, HostKind::Headless);
}

struct FixedClock(i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

#[test]
fn now_secs_truncates_millis() {
    assert_eq!(FixedClock(1_700_000_000_999).now_secs(), 1_700_000_000);
    assert_eq!(FixedClock(0).now_secs(), 0);
}

#[test]
fn system_clock_is_after_2020() {
    assert!(SystemClock.now_secs() > 1_577_836_800);
}

#[test]
fn inert_scheduler_never_runs_task() {
    let ran = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
    let flag = ran.clone();
    let id = InertScheduler.schedule(
        Duration::from_millis(0),
        Box::new(move || flag.store(true, std::sync::atomic::Ordering::SeqCst)),
    );
    InertScheduler.cancel(id);
    assert!(!ran.load(std::sync::atomic::Ordering::SeqCst));
}
