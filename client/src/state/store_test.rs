use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn get_returns_initial_value() {
    let store = Store::new(3_u32);
    assert_eq!(store.get(), 3);
    assert_eq!(store.with(|v| v * 2), 6);
}

#[test]
fn clones_share_state() {
    let store = Store::new(String::from("a"));
    let other = store.clone();
    other.set("b".to_owned());
    assert_eq!(store.get(), "b");
}

#[test]
fn subscribers_see_every_change() {
    let store = Store::new(0_u32);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |v| sink.lock().unwrap().push(*v));

    store.set(1);
    store.update(|v| *v += 10);

    assert_eq!(*seen.lock().unwrap(), vec![1, 11]);
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = Store::new(0_u32);
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let id = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    store.set(1);
    store.unsubscribe(id);
    store.set(2);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn listener_may_read_store_reentrantly() {
    let store = Store::new(0_u32);
    let reader = store.clone();
    let observed = Arc::new(AtomicUsize::new(0));
    let sink = observed.clone();
    store.subscribe(move |_| {
        sink.store(reader.get() as usize, Ordering::SeqCst);
    });

    store.set(7);

    assert_eq!(observed.load(Ordering::SeqCst), 7);
}
