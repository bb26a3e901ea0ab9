use crate::{jobs::daily_assignments::DailyAssignmentsJob, state::AppStateV2, structs::jobs::AppJob};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

pub async fn initialize_scheduler(state: AppStateV2) -> Arc<Mutex<JobScheduler>> {
    let scheduler = Arc::new(Mutex::new(JobScheduler::new().await.unwrap()));

    register(&scheduler, DailyAssignmentsJob, state.clone()).await;

    scheduler.lock().await.start().await.unwrap();

    scheduler
}

async fn register<J>(scheduler: &Arc<Mutex<JobScheduler>>, app_job: J, state: AppStateV2)
where
    J: AppJob + Clone + Send + Sync + 'static,
{
    if !app_job.enabled() {
        return;
    }

    let cron_expression = app_job.cron_expression().to_string();
    let job = Job::new_async(cron_expression.as_str(), move |_uuid, _lock| {
        let app_job = app_job.clone();
        let state = state.clone();
        Box::pin(async move {
            app_job.run(state).await;
        })
    })
    .unwrap();

    scheduler.lock().await.add(job).await.unwrap();
}
