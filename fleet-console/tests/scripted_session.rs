use std::io::Cursor;

use fleet_console::Console;
use fleet_kernel::{AssetStatus, Capacities, Role, Session};

fn run_script(role: Role, capacities: Capacities, script: &str) -> (String, Session) {
    let session = Session::new(&capacities).unwrap();
    let mut console = Console::new(session, role, Cursor::new(script.as_bytes().to_vec()), Vec::new());
    console.run().unwrap();
    let (session, output) = console.into_parts();
    (String::from_utf8(output).unwrap(), session)
}

fn caps(reports: usize) -> Capacities {
    Capacities { assets: 10, tasks: 10, reports }
}

#[test]
fn test_inventory_add_update_count() {
    let script = "1\n\
        1\n7\ncore-switch\nactive\n\
        1\n7\ndup\nActive\n\
        2\n7\n-\nInactive\n\
        5\n\
        7\n5\n";
    let (out, session) = run_script(Role::Operator, caps(3), script);

    assert!(out.contains("✅ Added Asset 7."));
    assert!(out.contains("duplicate key: 7 already exists"));
    assert!(out.contains("Asset ID: 7 | Name: core-switch | Status: Inactive"));
    assert!(out.contains("Active Assets   : 0\nInactive Assets : 1"));
    assert!(out.ends_with("Bye!\n"));
    assert_eq!(session.inventory.find(7).unwrap().status, AssetStatus::Inactive);
}

#[test]
fn test_load_index_scenario() {
    let script = "2\n\
        1\n5\n10\n\
        1\n3\n50\n\
        1\n8\n20\n\
        3\n5\n6\n5\n";
    let (out, session) = run_script(Role::Operator, caps(3), script);

    assert!(out.contains("Server ID: 3 | Load: 50\nServer ID: 5 | Load: 10\nServer ID: 8 | Load: 20"));
    assert!(out.contains("Min load -> Server ID: 5 | Load: 10"));
    assert!(out.contains("Max load -> Server ID: 3 | Load: 50"));
    assert_eq!(session.loads.len(), 3);
}

#[test]
fn test_load_out_of_range_is_reprompted() {
    let script = "2\n1\n4\n250\n90\n4\n4\n6\n5\n";
    let (out, session) = run_script(Role::Operator, caps(3), script);
    assert!(out.contains("Value must be between 0 and 100"));
    assert!(out.contains("Found -> ID: 4 | Load: 90"));
    assert_eq!(session.loads.find(4), Some(90));
}

#[test]
fn test_scheduler_extracts_most_urgent() {
    let script = "3\n\
        1\n1\nA\n5\n\
        1\n2\nB\n1\n\
        1\n3\nC\n3\n\
        3\n3\n5\n5\n";
    let (out, session) = run_script(Role::Operator, caps(3), script);

    let first = out.find("Extracted Task: B (Priority 1)").unwrap();
    let second = out.find("Extracted Task: C (Priority 3)").unwrap();
    assert!(first < second);
    assert_eq!(session.scheduler.len(), 1);
}

#[test]
fn test_health_queue_full_then_fifo() {
    let script = "4\n\
        1\n101\nHealthy\n10\n20\n\
        1\n102\nbogus\nWarning\n30\n40\n\
        1\n103\nCritical\n99.5\n80\n\
        1\n\
        2\n3\n4\n5\n";
    let (out, session) = run_script(Role::Operator, caps(3), script);

    assert!(out.contains("Invalid input"));
    assert!(out.contains("Queue FULL."));
    assert!(out.contains("Processed Report:\nServer ID: 101"));
    assert!(out.contains("[1] ID:102 | Warning"));
    assert!(out.contains("[2] ID:103 | Critical"));
    assert_eq!(session.reports.len(), 2);
}

#[test]
fn test_viewer_cannot_mutate() {
    let script = "1\n1\n4\n7\n2\n1\n6\n5\n";
    let (out, session) = run_script(Role::Viewer, caps(3), script);

    assert!(out.contains("1. Add Asset (operator only)"));
    assert_eq!(out.matches("⛔ permission denied").count(), 2);
    assert!(out.contains("--- Current Asset Inventory ---\n(empty)"));
    assert!(session.inventory.is_empty());
    assert!(session.loads.is_empty());
}

#[test]
fn test_eof_ends_session_cleanly() {
    let (out, _) = run_script(Role::Operator, caps(3), "3\n1\n9\n");
    assert!(out.contains("Enter Task Name: "));
    assert!(!out.contains("Bye!"));
}

#[test]
fn test_garbage_menu_choice() {
    let (out, _) = run_script(Role::Operator, caps(3), "nope\n9\n5\n");
    assert!(out.matches("Invalid choice.").count() >= 2);
}
