use std::io::{BufRead, Write};

use fleet_kernel::{HealthReport, HealthStatus, ServerId};

use crate::console::{entry, Console, MenuEntry};
use crate::prompt::PromptResult;
use crate::render;

const MENU: &[MenuEntry] = &[
    entry("Add Server Report", true),
    entry("Process Next Report", true),
    entry("Display All Reports", false),
    entry("Back", false),
];

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn health_menu(&mut self) -> PromptResult<()> {
        loop {
            let choice = self.menu("Server Health Queue", MENU)?;
            if !self.permitted(MENU, choice)? {
                continue;
            }
            match choice {
                1 => self.add_report()?,
                2 => self.process_report()?,
                3 => {
                    let listing = render::report_listing(&self.session.reports.snapshot());
                    self.io.say(listing)?;
                }
                4 => return Ok(()),
                _ => self.io.say("Invalid choice.")?,
            }
        }
    }

    fn add_report(&mut self) -> PromptResult<()> {
        // nothing to collect when the ring is full
        if self.session.reports.is_full() {
            return self.io.say("Queue FULL.");
        }
        let server_id: ServerId = self.io.parsed("Enter Server ID")?;
        let status: HealthStatus = self.io.parsed("Enter Status (Healthy/Warning/Critical)")?;
        let cpu: f32 = self.io.ranged("Enter CPU Usage (%)", 0.0, 100.0)?;
        let mem: f32 = self.io.ranged("Enter Memory Usage (%)", 0.0, 100.0)?;

        match self.session.reports.enqueue(HealthReport::new(server_id, status, cpu, mem)) {
            Ok(()) => self.io.say(format_args!("Report for Server {server_id} added.")),
            Err(e) => self.io.say(format_args!("❌ {e}")),
        }
    }

    fn process_report(&mut self) -> PromptResult<()> {
        match self.session.reports.dequeue() {
            Some(report) => self.io.say(format_args!(
                "\nProcessed Report:\n{}",
                render::report_detail(&report)
            )),
            None => self.io.say("Queue EMPTY."),
        }
    }
}
