/*!
Fixtures pour tests

Constructeurs courts pour les modèles du kernel et une session pré-remplie.
*/

use fleet_kernel::{
    AssetId, AssetRecord, AssetStatus, Capacities, HealthReport, HealthStatus, SchedulerTask,
    ServerId, Session, TaskId,
};

/// Init logging pour tests (ignore une seconde initialisation)
pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}

pub fn asset(id: AssetId, status: AssetStatus) -> AssetRecord {
    AssetRecord { id, name: format!("asset-{id}"), status }
}

pub fn report(server_id: ServerId, status: HealthStatus) -> HealthReport {
    let cpu = (server_id.rem_euclid(100)) as f32;
    HealthReport::new(server_id, status, cpu, 100.0 - cpu)
}

pub fn task(id: TaskId, priority: i32) -> SchedulerTask {
    SchedulerTask { id, name: format!("task-{id}"), priority }
}

/// Petite flotte : 4 assets, 5 serveurs, 3 tâches, 2 rapports
pub fn sample_session() -> Session {
    let mut session = Session::new(&Capacities { assets: 16, tasks: 16, reports: 4 })
        .expect("sample capacities are non-zero");

    for a in [
        asset(1, AssetStatus::Active),
        asset(2, AssetStatus::Active),
        asset(3, AssetStatus::Inactive),
        asset(4, AssetStatus::Active),
    ] {
        session.inventory.add(a.id, &a.name, a.status).expect("fixture asset");
    }
    for (id, load) in [(50, 35), (20, 80), (70, 5), (10, 60), (30, 80)] {
        session.loads.upsert(id, load).expect("fixture load");
    }
    for t in [task(1, 4), task(2, 0), task(3, 9)] {
        session.scheduler.insert(t.id, &t.name, t.priority).expect("fixture task");
    }
    session.reports.enqueue(report(101, HealthStatus::Warning)).expect("fixture report");
    session.reports.enqueue(report(102, HealthStatus::Healthy)).expect("fixture report");

    log::info!("🧪 sample session ready");
    session
}
