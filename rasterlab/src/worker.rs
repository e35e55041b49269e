use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::{debug, error};
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::error::Result;
use crate::ops::Filter;
use crate::pixel_buffer::PixelBuffer;
use crate::raster::{AlgorithmResult, RasterRequest};

pub type JobId = u64;

#[derive(Debug)]
pub enum WorkerMessage {
    Exit,
    Filter {
        id: JobId,
        input: Arc<PixelBuffer>,
        filter: Filter,
    },
    Rasterize {
        id: JobId,
        request: RasterRequest,
    },
    Multi {
        msgs: Vec<WorkerMessage>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum JobOutput {
    Filtered(PixelBuffer),
    Rasterized(AlgorithmResult),
}

/// Completion of one job, delivered to the worker callback.
#[derive(Debug, Clone, PartialEq)]
pub struct JobResult {
    pub id: JobId,
    pub output: Result<JobOutput>,
}

/// Runs filter and rasterization jobs off the caller's task.
///
/// Jobs execute one at a time on the blocking pool, in submission order, and
/// each completion is passed to the callback. Call [`Worker::exit`] before
/// dropping.
#[derive(Debug)]
pub struct Worker {
    thread_handle: Option<JoinHandle<()>>,
    tx: UnboundedSender<WorkerMessage>,
    next_id: AtomicU64,
}

impl Worker {
    pub fn new<Callback>(callback: Callback) -> Self
    where
        Callback: FnMut(JobResult) + Send + 'static,
    {
        let callback = Arc::new(Mutex::new(callback));
        let (tx, rx) = unbounded_channel::<WorkerMessage>();
        let thread_handle: JoinHandle<()> = tokio::spawn(async move {
            worker_loop(rx, callback).await;
        });

        Self {
            thread_handle: Some(thread_handle),
            tx,
            next_id: AtomicU64::new(0),
        }
    }

    pub fn send(&self, msg: WorkerMessage) {
        if self.tx.send(msg).is_err() {
            error!("Worker message dropped; the worker loop has already stopped");
        }
    }

    /// Allocates an id for a job submitted through [`Worker::send`].
    pub fn next_id(&self) -> JobId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    pub fn filter(&self, input: Arc<PixelBuffer>, filter: Filter) -> JobId {
        let id = self.next_id();
        self.send(WorkerMessage::Filter { id, input, filter });
        id
    }

    pub fn rasterize(&self, request: RasterRequest) -> JobId {
        let id = self.next_id();
        self.send(WorkerMessage::Rasterize { id, request });
        id
    }

    /// Stops the loop after every job queued before this call has completed.
    pub async fn exit(&mut self) {
        self.send(WorkerMessage::Exit);

        if let Some(thread_handle) = self.thread_handle.take() {
            if let Err(err) = thread_handle.await {
                error!("Worker loop failed to join: {err}");
            }
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        if self.thread_handle.is_some() {
            error!("Worker dropped while the loop is still running; call Worker::exit() first");
        }
    }
}

#[derive(Debug)]
enum Job {
    Filter {
        id: JobId,
        input: Arc<PixelBuffer>,
        filter: Filter,
    },
    Rasterize {
        id: JobId,
        request: RasterRequest,
    },
}

impl Job {
    fn id(&self) -> JobId {
        match self {
            Job::Filter { id, .. } | Job::Rasterize { id, .. } => *id,
        }
    }

    fn execute(self) -> JobResult {
        match self {
            Job::Filter { id, input, filter } => JobResult {
                id,
                output: filter.apply(&input).map(JobOutput::Filtered),
            },
            Job::Rasterize { id, request } => JobResult {
                id,
                output: request.execute().map(JobOutput::Rasterized),
            },
        }
    }
}

async fn worker_loop<Callback>(
    mut rx: UnboundedReceiver<WorkerMessage>,
    callback: Arc<Mutex<Callback>>,
) where
    Callback: FnMut(JobResult) + Send + 'static,
{
    let mut msgs: VecDeque<WorkerMessage> = VecDeque::default();
    let mut jobs: Vec<Job> = Vec::default();

    'worker: loop {
        let msg = rx.recv().await;
        let Some(msg) = msg else { break };
        msgs.push_back(msg);

        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(msg) => msgs.push_back(msg),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        let mut exit = disconnected;
        while let Some(msg) = msgs.pop_front() {
            match msg {
                WorkerMessage::Exit => {
                    exit = true;
                    break;
                }
                WorkerMessage::Filter { id, input, filter } => {
                    jobs.push(Job::Filter { id, input, filter })
                }
                WorkerMessage::Rasterize { id, request } => {
                    jobs.push(Job::Rasterize { id, request })
                }
                WorkerMessage::Multi { msgs: new_msgs } => {
                    for (idx, new_msg) in new_msgs.into_iter().enumerate() {
                        msgs.insert(idx, new_msg);
                    }
                }
            }
        }
        msgs.clear();

        for job in jobs.drain(..) {
            let id = job.id();
            debug!("Worker running job {id}");

            match tokio::task::spawn_blocking(move || job.execute()).await {
                Ok(result) => {
                    let mut callback = callback.lock().await;
                    (*callback)(result);
                }
                Err(err) => error!("Worker job {id} failed: {err}"),
            }
        }

        if exit {
            break 'worker;
        }
    }
}
