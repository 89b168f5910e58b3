use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::status_notification::StatusNotificationService};

/// Starts the status update scheduler
///
/// Runs one publish cycle immediately, awaiting its completion, then schedules
/// a cycle at the top of every hour for the lifetime of the process. Cycles
/// are serialized: a tick that fires while a previous cycle is still in flight
/// skips with a warning instead of overlapping.
///
/// Cycle errors are logged inside the job so the schedule itself survives a
/// failed cycle; the next tick proceeds normally.
///
/// # Arguments
/// - `service`: Status notification service cloned into each job invocation
pub async fn start_scheduler(service: StatusNotificationService) -> Result<(), AppError> {
    let cycle_lock = Arc::new(Mutex::new(()));

    // First cycle runs to completion before the timer is registered.
    run_cycle(&service, &cycle_lock).await;

    let scheduler = JobScheduler::new().await?;

    let job_service = service.clone();
    let job_lock = cycle_lock.clone();

    // Schedule job to run at the top of every hour
    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let service = job_service.clone();
        let cycle_lock = job_lock.clone();

        Box::pin(async move {
            run_cycle(&service, &cycle_lock).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Status update scheduler started");

    Ok(())
}

/// Runs one publish cycle unless a previous cycle is still in flight.
async fn run_cycle(service: &StatusNotificationService, cycle_lock: &Mutex<()>) {
    let Ok(_guard) = cycle_lock.try_lock() else {
        tracing::warn!("Previous status cycle still running, skipping this tick");
        return;
    };

    if let Err(e) = service.publish_cycle().await {
        tracing::error!("Error publishing status update: {}", e);
    }
}
