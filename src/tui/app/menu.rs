use crate::dealer::{DealConfig, Dealer};

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Labels,
    FixedSeed,
    Seed,
}

const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Labels, MenuItem::FixedSeed, MenuItem::Seed];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Labels => format!("Labels: {}", app.cfg_ruleset),
            MenuItem::FixedSeed => {
                format!("Fixed Seed: {}", if app.cfg_fixed_seed { "On" } else { "Off" })
            }
            MenuItem::Seed if app.cfg_fixed_seed => format!("Seed: {}", app.cfg_seed),
            MenuItem::Seed => String::from("Seed: random"),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Labels => app.cfg_ruleset = app.cfg_ruleset.toggled(),
            MenuItem::FixedSeed => app.cfg_fixed_seed = !app.cfg_fixed_seed,
            MenuItem::Seed => {
                if app.cfg_fixed_seed {
                    app.cfg_seed = app.cfg_seed.wrapping_add(1);
                }
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Labels => app.cfg_ruleset = app.cfg_ruleset.toggled(),
            MenuItem::FixedSeed => app.cfg_fixed_seed = !app.cfg_fixed_seed,
            MenuItem::Seed => {
                if app.cfg_fixed_seed {
                    app.cfg_seed = app.cfg_seed.wrapping_sub(1);
                }
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        match self.scene {
            Scene::Menu => self.cancel_menu(),
            _ => self.open_menu(),
        }
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        let config = self.dealer.config();
        self.cfg_ruleset = config.ruleset;
        self.cfg_fixed_seed = config.seed.is_some();
        self.cfg_seed = self.dealer.seed();
        self.scene = Scene::Menu;
    }

    /// Start a fresh session with the edited settings; tally and history reset.
    pub fn apply_menu(&mut self) {
        let config = DealConfig {
            seed: self.cfg_fixed_seed.then_some(self.cfg_seed),
            ruleset: self.cfg_ruleset,
        };
        self.dealer = Dealer::new(config);
        self.cfg_seed = self.dealer.seed();
        self.scene = Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
