//! A `metrics` recorder that keeps every counter increment and description.
//!
//! Install it for a scope with [`metrics::with_local_recorder`]; it never
//! touches the global recorder, so tests using it can run in parallel.

use std::sync::{Arc, Mutex};

use metrics::{
    Counter, CounterFn, Gauge, Histogram, HistogramFn, Key, KeyName, Metadata, Recorder,
    SharedString, Unit,
};

/// One emitted sample: metric name plus its labels in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub name: String,
    pub labels: Vec<(String, String)>,
}

impl Sample {
    /// Value of label `key`, if present.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A metric description registered through `describe_*!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub name: String,
    pub unit: Option<Unit>,
    pub help: String,
}

#[derive(Debug, Default)]
struct Captured {
    counters: Vec<Sample>,
    histograms: Vec<Sample>,
    descriptions: Vec<Description>,
}

/// Records counter increments, histogram samples and descriptions.
#[derive(Debug, Clone, Default)]
pub struct CapturingRecorder {
    captured: Arc<Mutex<Captured>>,
}

impl CapturingRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counter increments named `name`, one entry per increment.
    pub fn counters(&self, name: &str) -> Vec<Sample> {
        self.lock()
            .counters
            .iter()
            .filter(|s| s.name == name)
            .cloned()
            .collect()
    }

    /// Histogram samples named `name`.
    pub fn histograms(&self, name: &str) -> Vec<Sample> {
        self.lock()
            .histograms
            .iter()
            .filter(|s| s.name == name)
            .cloned()
            .collect()
    }

    /// The description registered for `name`, if any.
    pub fn description(&self, name: &str) -> Option<Description> {
        self.lock()
            .descriptions
            .iter()
            .find(|d| d.name == name)
            .cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Captured> {
        self.captured
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn describe(&self, key: KeyName, unit: Option<Unit>, help: SharedString) {
        self.lock().descriptions.push(Description {
            name: key.as_str().to_string(),
            unit,
            help: help.to_string(),
        });
    }

    fn sample(key: &Key) -> Sample {
        Sample {
            name: key.name().to_string(),
            labels: key
                .labels()
                .map(|l| (l.key().to_string(), l.value().to_string()))
                .collect(),
        }
    }
}

struct CapturedCounter {
    sample: Sample,
    captured: Arc<Mutex<Captured>>,
}

impl CounterFn for CapturedCounter {
    fn increment(&self, value: u64) {
        if let Ok(mut captured) = self.captured.lock() {
            for _ in 0..value {
                captured.counters.push(self.sample.clone());
            }
        }
    }

    fn absolute(&self, _value: u64) {}
}

struct CapturedHistogram {
    sample: Sample,
    captured: Arc<Mutex<Captured>>,
}

impl HistogramFn for CapturedHistogram {
    fn record(&self, _value: f64) {
        if let Ok(mut captured) = self.captured.lock() {
            captured.histograms.push(self.sample.clone());
        }
    }
}

impl Recorder for CapturingRecorder {
    fn describe_counter(&self, key: KeyName, unit: Option<Unit>, description: SharedString) {
        self.describe(key, unit, description);
    }

    fn describe_gauge(&self, key: KeyName, unit: Option<Unit>, description: SharedString) {
        self.describe(key, unit, description);
    }

    fn describe_histogram(&self, key: KeyName, unit: Option<Unit>, description: SharedString) {
        self.describe(key, unit, description);
    }

    fn register_counter(&self, key: &Key, _metadata: &Metadata<'_>) -> Counter {
        Counter::from_arc(Arc::new(CapturedCounter {
            sample: Self::sample(key),
            captured: Arc::clone(&self.captured),
        }))
    }

    fn register_gauge(&self, _key: &Key, _metadata: &Metadata<'_>) -> Gauge {
        Gauge::noop()
    }

    fn register_histogram(&self, key: &Key, _metadata: &Metadata<'_>) -> Histogram {
        Histogram::from_arc(Arc::new(CapturedHistogram {
            sample: Self::sample(key),
            captured: Arc::clone(&self.captured),
        }))
    }
}
