use std::io::{BufRead, Write};

use fleet_kernel::{ServerId, Upsert};

use crate::console::{entry, Console, MenuEntry};
use crate::prompt::PromptResult;
use crate::render;

const MENU: &[MenuEntry] = &[
    entry("Insert/Update Server (ID, Load)", true),
    entry("Delete Server by ID", true),
    entry("Display All Servers (sorted by ID)", false),
    entry("Find Server by ID", false),
    entry("Show Min/Max Load Server", false),
    entry("Back", false),
];

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn loads_menu(&mut self) -> PromptResult<()> {
        loop {
            let choice = self.menu("Load Index", MENU)?;
            if !self.permitted(MENU, choice)? {
                continue;
            }
            match choice {
                1 => self.upsert_load()?,
                2 => self.delete_server()?,
                3 => {
                    let listing = render::load_listing(self.session.loads.iter_sorted());
                    self.io.say(listing)?;
                }
                4 => self.find_server()?,
                5 => self.show_extremes()?,
                6 => return Ok(()),
                _ => self.io.say("Invalid choice.")?,
            }
        }
    }

    fn upsert_load(&mut self) -> PromptResult<()> {
        let id: ServerId = self.io.parsed("Enter Server ID")?;
        let load: u8 = self.io.ranged("Enter Load (0-100)", 0, 100)?;

        let line = match self.session.loads.upsert(id, load) {
            Ok(Upsert::Inserted) => format!("✅ Upserted server {id} (new, load {load})."),
            Ok(Upsert::Updated { previous }) => {
                format!("✅ Upserted server {id} (load {previous} -> {load}).")
            }
            Err(e) => format!("❌ {e}"),
        };
        self.io.say(line)
    }

    fn delete_server(&mut self) -> PromptResult<()> {
        let id: ServerId = self.io.parsed("Enter ID to delete")?;
        if self.session.loads.delete(id) {
            self.io.say(format_args!("Deleted server {id}."))
        } else {
            self.io.say(format_args!("Server {id} not present, nothing deleted."))
        }
    }

    fn find_server(&mut self) -> PromptResult<()> {
        let id: ServerId = self.io.parsed("Enter ID to find")?;
        match self.session.loads.find(id) {
            Some(load) => self.io.say(format_args!("Found -> ID: {id} | Load: {load}")),
            None => self.io.say("Not found."),
        }
    }

    fn show_extremes(&mut self) -> PromptResult<()> {
        let loads = &self.session.loads;
        let (Some(min), Some(max)) = (loads.min_load(), loads.max_load()) else {
            return self.io.say("No servers.");
        };
        self.io.say(format_args!("Min load -> {}", render::load_line(&min)))?;
        self.io.say(format_args!("Max load -> {}", render::load_line(&max)))
    }
}
