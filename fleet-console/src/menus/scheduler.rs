use std::io::{BufRead, Write};

use fleet_kernel::TaskId;

use crate::console::{entry, Console, MenuEntry};
use crate::prompt::PromptResult;
use crate::render;

const MENU: &[MenuEntry] = &[
    entry("Add Task", true),
    entry("View Tasks", false),
    entry("Extract Most Urgent Task", true),
    entry("Drain All Tasks by Priority", true),
    entry("Back", false),
];

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn scheduler_menu(&mut self) -> PromptResult<()> {
        loop {
            let choice = self.menu("Maintenance Scheduler (Min-Heap)", MENU)?;
            if !self.permitted(MENU, choice)? {
                continue;
            }
            match choice {
                1 => self.add_task()?,
                2 => {
                    let table = render::task_table(self.session.scheduler.snapshot());
                    self.io.say(table)?;
                }
                3 => self.extract_task()?,
                4 => self.drain_tasks()?,
                5 => return Ok(()),
                _ => self.io.say("Invalid choice. Try again.")?,
            }
        }
    }

    fn add_task(&mut self) -> PromptResult<()> {
        let id: TaskId = self.io.parsed("Enter Task ID")?;
        let name = self.io.line("Enter Task Name")?;
        let priority: i32 = self.io.parsed("Enter Priority (lower = more urgent)")?;

        match self.session.scheduler.insert(id, &name, priority) {
            Ok(()) => self.io.say(format_args!(
                "✅ Task '{name}' added successfully with priority {priority}."
            )),
            Err(e) => self.io.say(format_args!("❌ {e}")),
        }
    }

    fn extract_task(&mut self) -> PromptResult<()> {
        match self.session.scheduler.extract_min() {
            Some(task) => self.io.say(format_args!(
                "🛠️ Extracted Task: {} (Priority {})",
                task.name, task.priority
            )),
            None => self.io.say("⚠️ No tasks available to extract."),
        }
    }

    fn drain_tasks(&mut self) -> PromptResult<()> {
        if self.session.scheduler.is_empty() {
            return self.io.say("⚠️ No tasks available to extract.");
        }
        while let Some(task) = self.session.scheduler.extract_min() {
            self.io.say(render::task_line(&task))?;
        }
        Ok(())
    }
}
