// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::env;
use std::sync::Arc;
use std::time::Instant;

use the_taskrunner::backends::local::LocalProcessorFactory;
use the_taskrunner::config::{load_and_validate_config, RuntimeBuilder, WorkerConfig};
use the_taskrunner::engine::TaskDispatcher;
use the_taskrunner::observability::init_tracing;
use the_taskrunner::persistence::InMemoryTaskStore;
use the_taskrunner::reporting::{ChannelReportSink, TrackerMessage};
use the_taskrunner::resolver::ProcessorRegistry;
use the_taskrunner::task::consts::{LAST_TASK_ID, LAST_TASK_NAME, ROOT_TASK_ID, ROOT_TASK_NAME};
use the_taskrunner::task::{ExecuteType, TaskAssignment, TaskStatus};

/// Number of worker nodes the broadcast demo pretends to fan out to
const BROADCAST_NODES: usize = 3;

/// One demo job, run as a single instance
struct DemoJob {
    instance_id: &'static str,
    title: &'static str,
    processor_info: &'static str,
    execute_type: ExecuteType,
    job_params: Option<&'static str>,
}

fn demo_jobs() -> Vec<DemoJob> {
    vec![
        DemoJob {
            instance_id: "1001",
            title: "Standalone echo",
            processor_info: "echo",
            execute_type: ExecuteType::Standalone,
            job_params: Some("hello from the taskrunner"),
        },
        DemoJob {
            instance_id: "1002",
            title: "Map-reduce word count",
            processor_info: "word_count",
            execute_type: ExecuteType::MapReduce,
            job_params: Some("the quick brown fox\njumps over\nthe lazy dog"),
        },
        DemoJob {
            instance_id: "1003",
            title: "Broadcast host probe",
            processor_info: "host_probe",
            execute_type: ExecuteType::Broadcast,
            job_params: None,
        },
    ]
}

struct InstanceState {
    job: DemoJob,
    outstanding: usize,
    outcome: Option<(bool, String)>,
}

/// Minimal in-process stand-in for the tracker: fans out child tasks, records
/// results and schedules the last task once everything else has finished.
struct LocalTracker {
    store: Arc<InMemoryTaskStore>,
    instances: BTreeMap<String, InstanceState>,
}

impl LocalTracker {
    fn new(store: Arc<InMemoryTaskStore>) -> Self {
        Self {
            store,
            instances: BTreeMap::new(),
        }
    }

    fn start(&mut self, dispatcher: &TaskDispatcher, job: DemoJob) {
        let (task_id, task_name) = match job.execute_type {
            ExecuteType::Standalone => ("1", "ECHO"),
            _ => (ROOT_TASK_ID, ROOT_TASK_NAME),
        };
        dispatcher.submit(assignment(&job, task_id, task_name));

        self.instances.insert(
            job.instance_id.to_string(),
            InstanceState {
                job,
                outstanding: 1,
                outcome: None,
            },
        );
    }

    fn has_open_instances(&self) -> bool {
        self.instances.values().any(|state| state.outcome.is_none())
    }

    fn handle(&mut self, dispatcher: &TaskDispatcher, message: TrackerMessage) -> anyhow::Result<()> {
        let Some(state) = self.instances.get_mut(message.instance_id()) else {
            return Ok(());
        };

        match message {
            TrackerMessage::MapTask(request) => {
                for sub_task in &request.sub_tasks {
                    let child = assignment(&state.job, &sub_task.task_id, &request.task_name)
                        .with_sub_task(serde_json::to_vec(&sub_task.payload)?);
                    dispatcher.submit(child);
                }
                state.outstanding += request.sub_tasks.len();
            }
            TrackerMessage::BroadcastPreExecuteFinished(report) => {
                if !report.success {
                    state.outcome = Some((false, report.msg.unwrap_or_default()));
                    return Ok(());
                }
                // the root task itself never reports a terminal status
                state.outstanding = BROADCAST_NODES;
                for node in 1..=BROADCAST_NODES {
                    dispatcher.submit(assignment(&state.job, &node.to_string(), "PROBE"));
                }
            }
            TrackerMessage::ReportTaskStatus(report) => {
                if !report.status.is_terminal() {
                    return Ok(());
                }
                let success = report.status == TaskStatus::ProcessSuccess;
                let result = report.result.unwrap_or_default();

                if report.task_id == LAST_TASK_ID {
                    state.outcome = Some((success, result));
                    return Ok(());
                }

                self.store
                    .record_result(&report.instance_id, &report.task_id, result.clone())?;
                state.outstanding = state.outstanding.saturating_sub(1);
                if state.outstanding > 0 {
                    return Ok(());
                }

                if state.job.execute_type.has_fan_in() {
                    dispatcher.submit(assignment(&state.job, LAST_TASK_ID, LAST_TASK_NAME));
                } else {
                    state.outcome = Some((success, result));
                }
            }
        }
        Ok(())
    }

    fn print_summary(&self) {
        for (instance_id, state) in &self.instances {
            let (icon, result) = match &state.outcome {
                Some((true, result)) => ("✅", result.as_str()),
                Some((false, result)) => ("❌", result.as_str()),
                None => ("⏳", "still running"),
            };
            println!(
                "{} {} (instance {}, {}): {}",
                icon, state.job.title, instance_id, state.job.execute_type, result
            );
        }
    }
}

fn assignment(job: &DemoJob, task_id: &str, task_name: &str) -> TaskAssignment {
    let assignment = TaskAssignment::new(
        job.instance_id,
        task_id,
        task_name,
        "demo",
        job.processor_info,
        job.execute_type,
    );
    match job.job_params {
        Some(params) => assignment.with_job_params(params),
        None => assignment,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let cfg = match args.get(1) {
        Some(path) => load_and_validate_config(path)?,
        None => WorkerConfig::default(),
    };
    init_tracing(&cfg.log_filter)?;

    println!("🚀 Taskrunner Execution Demo");
    println!("═══════════════════════════════════");
    println!(
        "Processors: {}",
        LocalProcessorFactory::list_available_implementations().join(", ")
    );
    println!();

    let mut registry = ProcessorRegistry::new();
    LocalProcessorFactory::register_builtins(&mut registry);
    let store = Arc::new(InMemoryTaskStore::new());
    let (sink, mut tracker_rx) = ChannelReportSink::channel();
    let dispatcher = RuntimeBuilder::from_config(&cfg, registry, None, store.clone(), Arc::new(sink));

    let started = Instant::now();
    let mut tracker = LocalTracker::new(store);
    for job in demo_jobs() {
        tracker.start(&dispatcher, job);
    }

    while tracker.has_open_instances() {
        let Some(message) = tracker_rx.recv().await else {
            break;
        };
        tracker.handle(&dispatcher, message)?;
    }
    dispatcher.shutdown().await;

    tracker.print_summary();
    println!();
    println!("⏱️  Completed in {:?}", started.elapsed());
    Ok(())
}
