use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use resolvable::{FutureError, ResolvableFuture};

#[test]
fn cancel_releases_blocked_waiter() {
    let future = Arc::new(ResolvableFuture::<String>::new());
    let (started_tx, started_rx) = mpsc::channel();
    let (done_tx, done_rx) = mpsc::channel();

    let waiter = {
        let future = Arc::clone(&future);
        thread::spawn(move || {
            started_tx.send(()).unwrap();
            done_tx.send(future.get()).unwrap();
        })
    };

    started_rx.recv().unwrap();
    thread::sleep(Duration::from_millis(10));
    assert!(future.cancel());

    let outcome = done_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("waiter was not released");
    assert!(matches!(outcome, Err(FutureError::Cancelled)));
    waiter.join().unwrap();

    assert!(future.is_cancelled());
    assert!(!future.resolve("late".to_string()));
    assert!(future.is_cancelled());
    assert!(matches!(future.get(), Err(FutureError::Cancelled)));
}

#[test]
fn cancel_releases_timed_waiter_before_deadline() {
    let future = Arc::new(ResolvableFuture::<u32>::new());
    let waiter = {
        let future = Arc::clone(&future);
        thread::spawn(move || future.get_timeout(Duration::from_secs(30)))
    };
    thread::sleep(Duration::from_millis(10));
    future.cancel();
    let outcome = waiter.join().unwrap();
    assert!(outcome.unwrap_err().is_cancelled());
}
