use log::{Level, LevelFilter, Log, Metadata, Record};
use microgradient_core::{Graph, MicroGradError};
use std::sync::Mutex;

/// Keeps every warning emitted by the engine. This binary holds a single test,
/// so the global logger is installed exactly once.
struct CapturingLogger {
    warnings: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) && record.target().starts_with("microgradient_core") {
            if let Ok(mut warnings) = self.warnings.lock() {
                warnings.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    warnings: Mutex::new(Vec::new()),
};

fn take_warnings() -> Vec<String> {
    std::mem::take(&mut *LOGGER.warnings.lock().unwrap())
}

#[test]
fn backward_warns_when_root_gradient_is_stale() -> Result<(), MicroGradError> {
    log::set_logger(&LOGGER).expect("logger already installed");
    log::set_max_level(LevelFilter::Warn);

    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let c = a * 3.0;

    c.backward()?;
    assert!(take_warnings().is_empty());
    assert_eq!(a.grad(), 3.0);

    c.backward()?;
    let warnings = take_warnings();
    assert_eq!(warnings.len(), 1, "{:?}", warnings);
    assert!(warnings[0].contains("already has gradient 1"), "{}", warnings[0]);
    assert_eq!(a.grad(), 6.0);

    graph.zero_grad();
    c.backward()?;
    assert!(take_warnings().is_empty());
    assert_eq!(a.grad(), 3.0);
    Ok(())
}
