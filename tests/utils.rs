use statsd_emitter::prelude::*;
use statsd_emitter::{Destination, MetricEmitter};
use std::net::UdpSocket;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[allow(dead_code)]
pub const NUM_THREADS: u64 = 4;

#[allow(dead_code)]
pub const NUM_ITERATIONS: u64 = 25;

#[allow(dead_code)]
pub fn run_arc_threaded_test(emitter: MetricEmitter, num_threads: u64, iterations: u64) {
    let shared_emitter = Arc::new(emitter);

    let threads: Vec<_> = (0..num_threads)
        .map(|_| {
            let local_emitter = Arc::clone(&shared_emitter);

            thread::spawn(move || {
                for i in 0..iterations {
                    local_emitter.count("some.counter", i).unwrap();
                    local_emitter.count(["some.counter", "other.counter"], i).unwrap();
                    local_emitter.count_with_rate("some.counter", i, 1.0).unwrap();
                }
            })
        })
        .collect();

    for t in threads {
        t.join().unwrap();
    }
}

/// Bind a UDP socket on loopback that plays the role of the Statsd server.
#[allow(dead_code)]
pub fn new_statsd_server() -> (UdpSocket, Destination) {
    let server = UdpSocket::bind("127.0.0.1:0").unwrap();
    server.set_read_timeout(Some(Duration::from_secs(2))).unwrap();
    let port = server.local_addr().unwrap().port();
    (server, Destination::new("127.0.0.1", port))
}

/// Receive a single datagram and decode it as UTF-8.
#[allow(dead_code)]
pub fn recv_datagram(server: &UdpSocket) -> String {
    let mut buf = [0u8; 1024];
    let (n, _) = server.recv_from(&mut buf).unwrap();
    String::from_utf8(buf[..n].to_vec()).unwrap()
}
