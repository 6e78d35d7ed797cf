use ratio::{Ratio, RatioError};
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_types_are_send_sync() {
    assert_send_sync::<Ratio>();
    assert_send_sync::<RatioError>();
}

#[test]
fn test_ratio_is_shared_across_threads() {
    let shared = Arc::new(Ratio::parse("102.1").unwrap());

    let mut handles = vec![];

    // Spawn 5 threads that all read the same value
    for i in 0..5 {
        let value = Arc::clone(&shared);
        let handle = thread::spawn(move || {
            let step = Ratio::from(i);
            value.add(&step).unwrap().sub(&step).unwrap()
        });
        handles.push(handle);
    }

    for handle in handles {
        assert_eq!(handle.join().unwrap(), *shared);
    }
}

#[test]
fn test_ratio_can_be_copied_into_threads() {
    let value = Ratio::new(5, 3).unwrap();

    let handle = thread::spawn(move || format!("{}", value.fract()));

    assert_eq!(handle.join().unwrap(), "Ratio (2/3)");
    assert_eq!(value.to_string(), "Ratio (5/3)");
}
