//! Text rendering of registry snapshots.

use std::fmt::Write;

use fleet_kernel::{AssetRecord, HealthReport, LoadEntry, SchedulerTask, StatusCounts};

const RULE: &str = "--------------------------------------------";

pub fn asset_line(a: &AssetRecord) -> String {
    format!("Asset ID: {} | Name: {} | Status: {}", a.id, a.name, a.status)
}

pub fn asset_table(assets: &[AssetRecord]) -> String {
    let mut out = String::from("--- Current Asset Inventory ---\n");
    if assets.is_empty() {
        out.push_str("(empty)");
        return out;
    }
    let _ = write!(out, "{:<10} {:<20} {:<10}", "Asset ID", "Name", "Status");
    for a in assets {
        let _ = write!(out, "\n{:<10} {:<20} {:<10}", a.id, a.name, a.status.to_string());
    }
    out
}

pub fn status_counts(counts: &StatusCounts) -> String {
    format!("Active Assets   : {}\nInactive Assets : {}", counts.active, counts.inactive)
}

pub fn load_line(e: &LoadEntry) -> String {
    format!("Server ID: {} | Load: {}", e.id, e.load)
}

/// Consumes the lazy traversal directly
pub fn load_listing(entries: impl Iterator<Item = LoadEntry>) -> String {
    let lines: Vec<String> = entries.map(|e| load_line(&e)).collect();
    if lines.is_empty() {
        "(empty)".into()
    } else {
        lines.join("\n")
    }
}

pub fn task_table(tasks: &[SchedulerTask]) -> String {
    if tasks.is_empty() {
        return "📋 No maintenance tasks scheduled.".into();
    }
    let mut out = String::from("=== Current Scheduled Maintenance Tasks ===\n");
    let _ = writeln!(out, "{:<8}{:<24}{}", "ID", "Task Name", "Priority");
    out.push_str(RULE);
    for t in tasks {
        let _ = write!(out, "\n{:<8}{:<24}{}", t.id, t.name, t.priority);
    }
    out.push('\n');
    out.push_str(RULE);
    out
}

pub fn task_line(t: &SchedulerTask) -> String {
    format!("🛠️ Task {}: {} (Priority {})", t.id, t.name, t.priority)
}

pub fn report_detail(r: &HealthReport) -> String {
    format!(
        "Server ID: {}\nStatus: {}\nCPU: {:.2}%\nMEM: {:.2}%",
        r.server_id, r.status, r.cpu_usage, r.memory_usage
    )
}

pub fn report_listing(reports: &[HealthReport]) -> String {
    if reports.is_empty() {
        return "(no reports)".into();
    }
    let mut out = String::from("--- Reports in Queue ---");
    for (i, r) in reports.iter().enumerate() {
        let _ = write!(
            out,
            "\n[{}] ID:{} | {} | CPU:{:.2}% | MEM:{:.2}%",
            i + 1,
            r.server_id,
            r.status,
            r.cpu_usage,
            r.memory_usage
        );
    }
    out
}
