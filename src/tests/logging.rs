use std::{io, sync::{Arc, Mutex}};

use tracing::Level;

use crate::{mutate_in_place, transform_in_place, try_mutate_in_place, try_transform_in_place};

use super::util::Rejected;

/// Collects formatted events in memory
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn in_place_operations_trace_entry() {
    let logs = capture(|| {
        let mut data = vec![1, 2, 3];
        transform_in_place(&mut data, |v| v + 1);
        try_transform_in_place(&mut data, |&v| Ok::<_, Rejected>(v * 2)).unwrap();
        mutate_in_place(&mut data, |v| *v -= 1);
        try_mutate_in_place(&mut data, |v| {
            *v += 1;
            Ok::<_, Rejected>(())
        }).unwrap();
    });

    for message in ["transform in place", "try transform in place", "mutate in place", "try mutate in place"] {
        assert!(logs.contains(message), "No {:?} event in {:?}", message, logs);
    }
    assert!(logs.contains("len=3"));
}

#[test]
fn try_mutate_in_place_reports_failure() {
    let logs = capture(|| {
        let mut data = vec![1, -2, 3];
        let result = try_mutate_in_place(&mut data, |v| if *v < 0 { Err(Rejected(*v)) } else { Ok(()) });
        assert!(result.is_err());
    });

    let entry = logs.find("try mutate in place").expect("Entry event is logged");
    let failure = logs.find("in-place mutation failed").expect("Failure event is logged");
    assert!(entry < failure);
    assert!(logs.contains("index=1"));
}
