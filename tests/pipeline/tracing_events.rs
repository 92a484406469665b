use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use vali_rail::actions::{cron, isbn, iso_country_code};
use vali_rail::{parse, pipe, run, Config, Value};

/// Collects formatted log lines in memory.
#[derive(Clone, Default)]
struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let buffer = self.buffer.lock().expect("log buffer lock poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

struct CapturedLogsGuard {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CapturedLogsGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .buffer
            .lock()
            .map_err(|_| io::Error::other("log buffer lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogsGuard;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedLogsGuard { buffer: Arc::clone(&self.buffer) }
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(logs.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn every_step_emits_a_trace_event() {
    let logs = capture(|| {
        let schema = pipe!(cron(), isbn());
        run(&schema, Value::from("x"), &Config::default());
    });

    assert_eq!(logs.matches("pipeline step finished").count(), 2);
    assert!(logs.contains("cron"));
    assert!(logs.contains("isbn"));
    assert!(!logs.contains("pipeline aborted"));
}

#[test]
fn abort_emits_a_debug_event_naming_the_skipped_step() {
    let logs = capture(|| {
        let schema = pipe!(cron(), isbn(), iso_country_code());
        run(&schema, Value::from("x"), &Config::fail_fast());
    });

    assert_eq!(logs.matches("pipeline step finished").count(), 1);
    let aborted = logs
        .lines()
        .find(|line| line.contains("pipeline aborted"))
        .expect("no abort event");
    assert!(aborted.contains("DEBUG"));
    assert!(aborted.contains("isbn"));
    assert!(aborted.contains("step=1"));
}

#[test]
fn parse_failure_is_logged() {
    let logs = capture(|| {
        let schema = pipe!(cron());
        assert!(parse(&schema, Value::from("x"), &Config::default()).is_err());
    });

    let failed = logs.lines().find(|line| line.contains("parse failed")).expect("no parse event");
    assert!(failed.contains("issues=1"));
}
