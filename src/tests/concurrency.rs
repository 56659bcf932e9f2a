use std::{sync::mpsc, thread};

use crate::{Decoder, DecodedMessage};

const SENTENCES: [&str; 4] = [
    "$GNRMC,041704.000,A,2935.21718,N,10631.58906,E,0.00,172.39,071124,,,A*7E",
    "$GNGGA,001043.00,4404.14036,N,12118.85961,W,1,12,0.98,1113.0,M,-21.3,M,1.5,0042*6B",
    "$GPGSV,1,1,01,05,45,120,38*44",
    "$GPGSV,1,1,01,05,45,120,38*45",
];

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_types_are_thread_safe() {
    assert_send_sync::<Decoder>();
    assert_send_sync::<DecodedMessage>();
}

#[test]
fn test_concurrent_decoding() {
    let decoder = Decoder::default();
    let expected: Vec<_> = SENTENCES.iter().map(|&sentence| decoder.decode(sentence)).collect();

    let (sender, receiver) = mpsc::channel();
    thread::scope(|scope| {
        for worker in 0..8 {
            let sender = sender.clone();
            scope.spawn(move || {
                for (index, &sentence) in SENTENCES.iter().enumerate().cycle().skip(worker).take(64) {
                    let _ = sender.send((index, decoder.decode(sentence)));
                }
            });
        }
    });
    drop(sender);

    let results: Vec<_> = receiver.into_iter().collect();
    assert_eq!(results.len(), 8 * 64);
    for (index, message) in results {
        assert_eq!(message, expected[index]);
    }
}
