use std::collections::HashMap;

use crate::Addon;
use crate::addons::{LoginAddon, SnmpAddon};

/// Category name to addon factory.
pub struct Registry {
    addons: HashMap<&'static str, Box<dyn Addon>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            addons: HashMap::new(),
        }
    }

    /// Every built-in addon, one per supported category.
    pub fn builtin() -> Self {
        let mut registry: Registry = Self::new();
        for category in ["ssh", "telnet", "ftp", "mysql", "redis", "tomcat", "vnc"] {
            registry.register(Box::new(LoginAddon::new(category)));
        }
        registry.register(Box::new(SnmpAddon));
        registry
    }

    /// Last registration wins for a repeated category.
    pub fn register(&mut self, addon: Box<dyn Addon>) {
        self.addons.insert(addon.category(), addon);
    }

    pub fn get(&self, category: &str) -> Option<&dyn Addon> {
        self.addons.get(category).map(|addon| addon.as_ref())
    }

    pub fn supports(&self, category: &str) -> bool {
        self.addons.contains_key(category)
    }

    /// Registered categories in sorted order.
    pub fn categories(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.addons.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
