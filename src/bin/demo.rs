// Demo: many senders and receivers around one bounded queue.
use nmqueue::{Message, Production, QueueBuilder, ReceiverWorker, SenderWorker};
use sha2::{Digest, Sha256};
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

const SENDERS: usize = 10;
const RECEIVERS: usize = 20;
const BUFFER_SIZE: usize = 1024;

struct SenderState {
    source: i32,
    sequence: u64,
    running: Arc<AtomicBool>,
}

/// Make believe source: fills the buffer with chained digests.
fn get_external_data(state: &mut SenderState, buffer: &mut [u8]) -> bool {
    // Slow down the process to watch
    std::thread::sleep(Duration::from_secs(1));
    if !state.running.load(Ordering::Acquire) {
        return false;
    }

    let mut digest = Sha256::digest(format!("{}:{}", state.source, state.sequence).as_bytes());
    for chunk in buffer.chunks_mut(digest.len()) {
        chunk.copy_from_slice(&digest[..chunk.len()]);
        digest = Sha256::digest(digest);
    }
    state.sequence += 1;
    true
}

/// Make believe sink
fn process_data(buffer: &[u8]) {
    let prefix: String = buffer.iter().take(4).map(|b| format!("{b:02x}")).collect();
    info!(len = buffer.len(), prefix = %prefix, "process");
}

fn producer(state: &mut SenderState) -> Production<Vec<u8>> {
    let mut data = vec![0u8; BUFFER_SIZE];
    if !get_external_data(state, &mut data) {
        // Buffer is released here; let the worker loop check for termination.
        return Production::NoData;
    }
    Production::Send(Message::new(state.source, data, BUFFER_SIZE))
}

fn consumer(message: Message<Vec<u8>>, received: &mut (usize, u64)) {
    let (receiver, count) = received;
    info!(source = message.source, receiver = *receiver, "consume");
    process_data(&message.data[..message.size]);
    *count += 1;
}

fn parse_arg(args: &[String], index: usize, default: usize) -> usize {
    match args.get(index) {
        Some(arg) => match arg.parse() {
            Ok(value) if value > 0 => value,
            _ => {
                eprintln!("Invalid value '{}', expected a positive integer", arg);
                std::process::exit(1);
            }
        },
        None => default,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    nmqueue::trace::init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: {} [senders] [receivers] [capacity]", args[0]);
        return Ok(());
    }
    let senders = parse_arg(&args, 1, SENDERS);
    let receivers = parse_arg(&args, 2, RECEIVERS);
    let capacity = parse_arg(&args, 3, 1024);

    // Create a bounded message queue
    let queue = QueueBuilder::new().with_capacity(capacity).build::<Vec<u8>>()?;

    let running = Arc::new(AtomicBool::new(true));
    let running_for_handler = Arc::clone(&running);

    // Handle Ctrl+C to shut down the workers
    ctrlc::set_handler(move || {
        running_for_handler.store(false, Ordering::SeqCst);
    })?;

    info!(senders, receivers, capacity, "starting workers, press Ctrl+C to exit");

    let mut sender_workers = Vec::with_capacity(senders);
    for i in 0..senders {
        let state = SenderState {
            source: i as i32,
            sequence: 0,
            running: Arc::clone(&running),
        };
        sender_workers.push(SenderWorker::spawn(Arc::clone(&queue), producer, state)?);
    }

    let mut receiver_workers = Vec::with_capacity(receivers);
    for i in 0..receivers {
        receiver_workers.push(ReceiverWorker::spawn(Arc::clone(&queue), consumer, (i, 0u64))?);
    }

    while running.load(Ordering::SeqCst) {
        std::thread::sleep(Duration::from_millis(100));
    }

    info!("shutting down");

    for worker in sender_workers {
        if let Err(e) = worker.stop() {
            error!("sender stop failed: {}", e);
        }
    }

    for worker in receiver_workers {
        match worker.stop() {
            Ok((receiver, count)) => println!("Receiver-Thread {} received {}", receiver, count),
            Err(e) => error!("receiver stop failed: {}", e),
        }
    }

    println!("Undelivered messages left in queue: {}", queue.len());
    Ok(())
}
