use async_trait::async_trait;
use sqlbulk_core::{
    driver::{Operation, Response},
    Executor, Result,
};
use std::{
    fmt,
    sync::{Arc, Mutex},
};

/// Executor that records every operation and reports all rows as affected.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    ops: Arc<Mutex<Vec<Operation>>>,
}

/// A handle on the operations recorded by a [`RecordingExecutor`].
pub struct ExecLog {
    ops: Arc<Mutex<Vec<Operation>>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> ExecLog {
        ExecLog {
            ops: self.ops.clone(),
        }
    }
}

#[async_trait]
impl Executor for RecordingExecutor {
    async fn exec(&self, operation: Operation) -> Result<Response> {
        let response = Response::count(operation.rows.len() as u64);
        self.ops.lock().unwrap().push(operation);
        Ok(response)
    }
}

impl ExecLog {
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Remove and return the first operation from the log
    #[track_caller]
    pub fn pop(&mut self) -> Operation {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            panic!("no operations in log");
        }
        ops.remove(0)
    }
}

impl fmt::Debug for ExecLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ops = self.ops.lock().unwrap();
        f.debug_struct("ExecLog").field("ops", &*ops).finish()
    }
}
