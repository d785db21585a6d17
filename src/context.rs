//! Application Context
//!
//! Shared state provided via Leptos Context API.

use bucket_core::AppConfig;
use leptos::prelude::*;

use crate::models::{NavStack, Screen};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Navigation stack - read
    pub nav: ReadSignal<NavStack>,
    /// Navigation stack - write
    set_nav: WriteSignal<NavStack>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(nav: (ReadSignal<NavStack>, WriteSignal<NavStack>), config: AppConfig) -> Self {
        Self {
            nav: nav.0,
            set_nav: nav.1,
            config: StoredValue::new(config),
        }
    }

    /// Push a screen
    pub fn navigate(&self, screen: Screen) {
        log::debug!("[NAV] -> {}", screen.title());
        self.set_nav.update(|stack| stack.push(screen));
    }

    /// Pop back to the previous screen
    pub fn back(&self) {
        self.set_nav.update(|stack| {
            stack.pop();
        });
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}
