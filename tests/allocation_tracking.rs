// Allocation tracking tests for BoundedQueue
//
// Note: dhat only allows one profiler to run at a time, so the profiled test
// is marked #[serial_test::serial].
//
// # Run all allocation tracking tests
// cargo test --test allocation_tracking -- --nocapture

use nmqueue::MPMC::Buffer::BoundedQueue;
use nmqueue::{CallerId, Message, QueueBuilder};
use std::sync::Arc;
use std::thread;

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[test]
#[serial_test::serial]
fn test_steady_state_send_receive_with_dhat() {
    println!("\n--- Running send/receive with dhat ---");
    let _profiler = dhat::Profiler::builder().testing().build();

    let queue = BoundedQueue::<u64>::new(1024).unwrap();
    let me = CallerId::next();

    let before = dhat::HeapStats::get();
    // Keep the ring half full so the cursors wrap many times.
    for i in 0..10_000u64 {
        queue.send(Message::new(1, i, 8), me).unwrap();
        if i >= 512 {
            assert_eq!(queue.receive(me).unwrap().data, i - 512);
        }
    }
    while queue.try_receive().is_ok() {}
    assert!(queue.is_empty());
    let after = dhat::HeapStats::get();

    println!(
        "Blocks allocated during operations: {}",
        after.total_blocks - before.total_blocks
    );
    // The slot band is allocated up front; send/receive only move values.
    dhat::assert_eq!(after.total_blocks, before.total_blocks);
}

#[test]
#[serial_test::serial]
fn test_boxed_payloads_are_moved_not_copied() {
    let queue = QueueBuilder::new().with_capacity(64).build::<Box<[u8]>>().unwrap();

    let producer = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || {
            let me = CallerId::next();
            let mut addrs = Vec::with_capacity(1000);
            for i in 0..1000usize {
                let payload: Box<[u8]> = vec![(i % 251) as u8; 32].into_boxed_slice();
                addrs.push(payload.as_ptr() as usize);
                queue.send(Message::new(0, payload, 32), me).unwrap();
            }
            addrs
        })
    };

    let me = CallerId::next();
    let mut seen = Vec::with_capacity(1000);
    for i in 0..1000usize {
        let message = queue.receive(me).unwrap();
        assert_eq!(message.size, 32);
        assert!(message.data.iter().all(|&b| b == (i % 251) as u8));
        seen.push(message.data.as_ptr() as usize);
    }

    let addrs = producer.join().unwrap();
    assert_eq!(addrs, seen);
}
