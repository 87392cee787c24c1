use anyhow::anyhow;

use tickrun::{CompletionObserver, CompletionSignal, Result, Task, TickrunError};

use crate::recorder::EventLog;

/// A primitive task that completes after a fixed number of steps.
///
/// With an [`EventLog`] attached it records `"{name}:step"` on every
/// drive and `"{name}:done"` when it completes, which is what the
/// ordering tests assert on. A tick count of zero completes
/// synchronously on the first step, like an exhausted workload.
pub struct CountedTask {
    name: String,
    remaining: usize,
    done: bool,
    signal: CompletionSignal,
    log: Option<EventLog>,
}

impl CountedTask {
    pub fn new(ticks: usize) -> Self {
        Self::named("task", ticks)
    }

    pub fn named(name: &str, ticks: usize) -> Self {
        Self {
            name: name.to_string(),
            remaining: ticks,
            done: false,
            signal: CompletionSignal::new(),
            log: None,
        }
    }

    pub fn with_log(mut self, log: &EventLog) -> Self {
        self.log = Some(log.clone());
        self
    }
}

impl Task for CountedTask {
    fn step(&mut self) -> Result<()> {
        if self.done {
            return Err(TickrunError::SteppedAfterDone);
        }
        if let Some(log) = &self.log {
            log.record(format!("{}:step", self.name));
        }
        if self.remaining > 0 {
            self.remaining -= 1;
        }
        if self.remaining == 0 {
            self.done = true;
            if let Some(log) = &self.log {
                log.record(format!("{}:done", self.name));
            }
            self.signal.fire();
        }
        Ok(())
    }

    fn is_done(&self) -> bool {
        self.done
    }

    fn on_complete(&mut self, observer: CompletionObserver) {
        self.signal.subscribe(observer);
    }
}

/// A task that errors out of `step` after a fixed number of successful
/// steps, and never reports done.
pub struct FailingTask {
    name: String,
    steps_before_failure: usize,
    log: Option<EventLog>,
}

impl FailingTask {
    pub fn named(name: &str, steps_before_failure: usize) -> Self {
        Self {
            name: name.to_string(),
            steps_before_failure,
            log: None,
        }
    }

    pub fn with_log(mut self, log: &EventLog) -> Self {
        self.log = Some(log.clone());
        self
    }
}

impl Task for FailingTask {
    fn step(&mut self) -> Result<()> {
        if self.steps_before_failure == 0 {
            if let Some(log) = &self.log {
                log.record(format!("{}:fail", self.name));
            }
            return Err(anyhow!("workload {} blew up", self.name).into());
        }
        self.steps_before_failure -= 1;
        if let Some(log) = &self.log {
            log.record(format!("{}:step", self.name));
        }
        Ok(())
    }

    fn is_done(&self) -> bool {
        false
    }

    fn on_complete(&mut self, _observer: CompletionObserver) {
        // Never fires; this task never completes.
    }
}
