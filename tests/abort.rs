use nmqueue::{CallerId, Message, QueueBuilder, QueueError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn settle() {
    thread::sleep(Duration::from_millis(50));
}

#[test]
fn abort_wakes_blocked_receiver() {
    let queue = QueueBuilder::new().with_capacity(4).build::<u32>().unwrap();
    let target = CallerId::next();

    let waiter = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || queue.receive(target))
    };

    settle();
    queue.abort(target);
    assert_eq!(waiter.join().unwrap().unwrap_err(), QueueError::Abort);
    assert!(!queue.is_abort_pending(target));
}

#[test]
fn abort_wakes_blocked_sender_without_enqueueing() {
    let queue = QueueBuilder::new().with_capacity(2).build::<u32>().unwrap();
    queue.try_send(Message::new(0, 0, 0)).unwrap();
    queue.try_send(Message::new(0, 1, 0)).unwrap();

    let target = CallerId::next();
    let waiter = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || queue.send(Message::new(9, 99, 0), target))
    };

    settle();
    queue.abort(target);
    let err = waiter.join().unwrap().unwrap_err();
    assert_eq!(err.cause, QueueError::Abort);
    assert_eq!(err.message.source, 9);
    assert_eq!(err.message.data, 99);

    // Ring untouched.
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.try_receive().unwrap().data, 0);
    assert_eq!(queue.try_receive().unwrap().data, 1);
}

#[test]
fn non_target_keeps_waiting() {
    let queue = QueueBuilder::new().with_capacity(4).build::<u32>().unwrap();
    let target = CallerId::next();
    let bystander = CallerId::next();
    let bystander_done = Arc::new(AtomicBool::new(false));

    let target_thread = {
        let queue = Arc::clone(&queue);
        thread::spawn(move || queue.receive(target))
    };
    let bystander_thread = {
        let queue = Arc::clone(&queue);
        let done = Arc::clone(&bystander_done);
        thread::spawn(move || {
            let result = queue.receive(bystander);
            done.store(true, Ordering::SeqCst);
            result
        })
    };

    settle();
    queue.abort(target);
    assert_eq!(target_thread.join().unwrap().unwrap_err(), QueueError::Abort);

    settle();
    assert!(!bystander_done.load(Ordering::SeqCst));

    queue.send(Message::new(2, 42, 0), CallerId::next()).unwrap();
    let message = bystander_thread.join().unwrap().unwrap();
    assert_eq!(message.data, 42);
}

#[test]
fn abort_before_call_is_consumed_once() {
    let queue = QueueBuilder::new().with_capacity(4).build::<u32>().unwrap();
    let me = CallerId::next();

    queue.abort(me);
    assert!(queue.is_abort_pending(me));

    // Takes priority even though a slot is free.
    let err = queue.send(Message::new(0, 1, 0), me).unwrap_err();
    assert_eq!(err.cause, QueueError::Abort);
    assert!(queue.is_empty());

    // One-shot: the retry goes through.
    queue.send(err.into_message(), me).unwrap();
    assert_eq!(queue.receive(me).unwrap().data, 1);
}

#[test]
fn abort_takes_priority_over_available_data() {
    let queue = QueueBuilder::new().with_capacity(4).build::<u32>().unwrap();
    let me = CallerId::next();
    queue.try_send(Message::new(0, 5, 0)).unwrap();

    queue.abort(me);
    assert_eq!(queue.receive(me).unwrap_err(), QueueError::Abort);
    assert_eq!(queue.len(), 1);
}

#[test]
fn discard_abort_drops_token() {
    let queue = QueueBuilder::new().with_capacity(1).build::<u32>().unwrap();
    let me = CallerId::next();

    assert!(!queue.discard_abort(me));
    queue.abort(me);
    assert!(queue.discard_abort(me));
    assert!(!queue.is_abort_pending(me));

    queue.try_send(Message::new(0, 1, 0)).unwrap();
    assert_eq!(queue.receive(me).unwrap().data, 1);
}

#[test]
fn concurrent_aborts_are_not_lost() {
    let queue = QueueBuilder::new().with_capacity(4).build::<u32>().unwrap();
    let callers: Vec<CallerId> = (0..8).map(|_| CallerId::next()).collect();

    let waiters: Vec<_> = callers
        .iter()
        .map(|&caller| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || queue.receive(caller))
        })
        .collect();

    settle();

    // Fire every abort at once, before any waiter has a chance to run.
    let aborters: Vec<_> = callers
        .iter()
        .map(|&caller| {
            let queue = Arc::clone(&queue);
            thread::spawn(move || queue.abort(caller))
        })
        .collect();
    for aborter in aborters {
        aborter.join().unwrap();
    }

    for waiter in waiters {
        assert_eq!(waiter.join().unwrap().unwrap_err(), QueueError::Abort);
    }
    for caller in callers {
        assert!(!queue.is_abort_pending(caller));
    }
}
