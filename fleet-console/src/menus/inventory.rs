use std::io::{BufRead, Write};

use fleet_kernel::{AssetId, AssetPatch, AssetStatus};

use crate::console::{entry, Console, MenuEntry};
use crate::prompt::PromptResult;
use crate::render;

const MENU: &[MenuEntry] = &[
    entry("Add Asset", true),
    entry("Update Asset", true),
    entry("Search Asset", false),
    entry("View All Assets", false),
    entry("Count by Status", false),
    entry("Dump as JSON", false),
    entry("Back", false),
];

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn inventory_menu(&mut self) -> PromptResult<()> {
        loop {
            let choice = self.menu("Asset Inventory Management", MENU)?;
            if !self.permitted(MENU, choice)? {
                continue;
            }
            match choice {
                1 => self.add_asset()?,
                2 => self.update_asset()?,
                3 => self.search_asset()?,
                4 => {
                    let table = render::asset_table(self.session.inventory.list_all());
                    self.io.say(table)?;
                }
                5 => {
                    let counts = self.session.inventory.count_by_status();
                    self.io.say(render::status_counts(&counts))?;
                }
                6 => self.dump_assets()?,
                7 => return Ok(()),
                _ => self.io.say("Invalid choice.")?,
            }
        }
    }

    fn add_asset(&mut self) -> PromptResult<()> {
        let id: AssetId = self.io.parsed("Enter Asset ID")?;
        let name = self.io.line("Enter Name")?;
        let status: AssetStatus = self.io.parsed("Enter Status (Active/Inactive)")?;

        match self.session.inventory.add(id, &name, status) {
            Ok(()) => self.io.say(format_args!("✅ Added Asset {id}.")),
            Err(e) => self.io.say(format_args!("❌ {e}")),
        }
    }

    fn update_asset(&mut self) -> PromptResult<()> {
        let id: AssetId = self.io.parsed("Enter Asset ID to update")?;
        let name = self.io.skippable("Enter New Name (or '-' to skip)")?;
        let status = self
            .io
            .skippable_parsed::<AssetStatus>("Enter New Status (Active/Inactive or '-' to skip)")?;

        let line = match self.session.inventory.update(id, AssetPatch { name, status }) {
            Ok(record) => format!("✅ Updated Asset {id}.\n{}", render::asset_line(record)),
            Err(e) => format!("❌ {e}"),
        };
        self.io.say(line)
    }

    fn search_asset(&mut self) -> PromptResult<()> {
        let id: AssetId = self.io.parsed("Enter Asset ID to search")?;
        let line = match self.session.inventory.find(id) {
            Some(record) => format!("Found: {}", render::asset_line(record)),
            None => "Not found.".to_string(),
        };
        self.io.say(line)
    }

    fn dump_assets(&mut self) -> PromptResult<()> {
        let line = match serde_json::to_string_pretty(self.session.inventory.list_all()) {
            Ok(json) => json,
            Err(e) => format!("❌ failed to serialize inventory: {e}"),
        };
        self.io.say(line)
    }
}
