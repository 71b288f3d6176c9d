//! Main menu loop and role gating.

use std::io::{BufRead, Write};

use fleet_kernel::{Role, Session};
use tracing::{debug, info};

use crate::prompt::{PromptError, PromptResult, Prompter};

/// One numbered line of a menu
pub(crate) struct MenuEntry {
    pub label: &'static str,
    pub mutates: bool,
}

pub(crate) const fn entry(label: &'static str, mutates: bool) -> MenuEntry {
    MenuEntry { label, mutates }
}

const MAIN_MENU: &[MenuEntry] = &[
    entry("Asset Inventory", false),
    entry("Load Index", false),
    entry("Maintenance Scheduler", false),
    entry("Health Queue", false),
    entry("Exit", false),
];

pub struct Console<R, W> {
    pub(crate) io: Prompter<R, W>,
    pub(crate) session: Session,
    role: Role,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(session: Session, role: Role, input: R, output: W) -> Self {
        Self {
            io: Prompter::new(input, output),
            session,
            role,
        }
    }

    /// Hands back the registries and the output sink once the console is done
    pub fn into_parts(self) -> (Session, W) {
        (self.session, self.io.into_output())
    }

    /// Runs until the operator exits or input is closed
    pub fn run(&mut self) -> Result<(), PromptError> {
        info!(role = ?self.role, "console started");
        match self.main_menu() {
            Err(PromptError::Eof) => {
                debug!("input closed, leaving console");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> PromptResult<()> {
        loop {
            match self.menu("FLEET CONSOLE", MAIN_MENU)? {
                1 => self.inventory_menu()?,
                2 => self.loads_menu()?,
                3 => self.scheduler_menu()?,
                4 => self.health_menu()?,
                5 => {
                    self.io.say("Bye!")?;
                    return Ok(());
                }
                _ => self.io.say("Invalid choice.")?,
            }
        }
    }

    /// Prints the menu and reads a choice; mutating entries are marked for viewers
    pub(crate) fn menu(&mut self, title: &str, entries: &[MenuEntry]) -> PromptResult<usize> {
        self.io.say(format_args!("\n====== {title} ======"))?;
        for (i, e) in entries.iter().enumerate() {
            if e.mutates && !self.role.can_mutate() {
                self.io.say(format_args!("{}. {} (operator only)", i + 1, e.label))?;
            } else {
                self.io.say(format_args!("{}. {}", i + 1, e.label))?;
            }
        }
        self.io.choice()
    }

    /// `false` (after telling the operator) when the role may not use this entry
    pub(crate) fn permitted(&mut self, entries: &[MenuEntry], choice: usize) -> PromptResult<bool> {
        let locked = choice
            .checked_sub(1)
            .and_then(|i| entries.get(i))
            .is_some_and(|e| e.mutates && !self.role.can_mutate());
        if locked {
            self.io.say("⛔ permission denied")?;
        }
        Ok(!locked)
    }
}
