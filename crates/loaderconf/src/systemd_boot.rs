//! # systemd-boot `loader.conf`
//!
//! The concrete model shipped with this crate.
//!
//! ```text
//! # Loader configuration
//! timeout 10
//! console_mode keep
//! default linux
//! ```
//!
//! | Attribute | Key | Default |
//! |-----------|-----|---------|
//! | `menu_timeout` | `timeout` | `""` |
//! | `console_mode` | `console_mode` | `""` |
//! | `default` | `default` | `""` |
//!
//! Reading and writing stays string based. [`MenuTimeout`] and [`ConsoleMode`]
//! are the typed views for callers that want them; a malformed value only
//! fails when one of those conversions is requested.

use crate::attributes::{AttributeDef, ConfigModel};
use crate::config_file::ConfigFile;
use crate::error::{Error, Result};
use crate::store::{FsStorage, Storage};
use std::fmt;
use std::str::FromStr;

const MENU_TIMEOUT: AttributeDef = AttributeDef::new("menu_timeout", "timeout");
const CONSOLE_MODE: AttributeDef = AttributeDef::new("console_mode", "console_mode");
const DEFAULT_ENTRY: AttributeDef = AttributeDef::new("default", "default");

/// Marker type for the systemd-boot loader configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemdBoot;

impl ConfigModel for SystemdBoot {
    const NAME: &'static str = "systemd-boot";
    const DEFAULT_PATH: &'static str = "/boot/efi/loader/loader.conf";
    const ATTRIBUTES: &'static [AttributeDef] = &[MENU_TIMEOUT, CONSOLE_MODE, DEFAULT_ENTRY];

    fn validate(def: &AttributeDef, value: &str) -> Result<()> {
        match def.name {
            "menu_timeout" => value.parse::<MenuTimeout>().map(drop),
            "console_mode" => value.parse::<ConsoleMode>().map(drop),
            _ => Ok(()),
        }
    }
}

/// `loader.conf` read and written through `S`.
pub type LoaderConf<S = FsStorage> = ConfigFile<SystemdBoot, S>;

impl<S: Storage> ConfigFile<SystemdBoot, S> {
    pub fn menu_timeout(&self) -> &str {
        MENU_TIMEOUT.read(self.document())
    }

    pub fn set_menu_timeout(&mut self, value: impl Into<String>) {
        MENU_TIMEOUT.write(self.document_mut(), value);
    }

    pub fn console_mode(&self) -> &str {
        CONSOLE_MODE.read(self.document())
    }

    pub fn set_console_mode(&mut self, value: impl Into<String>) {
        CONSOLE_MODE.write(self.document_mut(), value);
    }

    /// The `default` key: a boot entry id or glob.
    pub fn default_entry(&self) -> &str {
        DEFAULT_ENTRY.read(self.document())
    }

    pub fn set_default_entry(&mut self, value: impl Into<String>) {
        DEFAULT_ENTRY.write(self.document_mut(), value);
    }

    /// `None` when the key is absent or empty.
    pub fn typed_menu_timeout(&self) -> Result<Option<MenuTimeout>> {
        parse_optional(self.menu_timeout())
    }

    pub fn set_typed_menu_timeout(&mut self, timeout: MenuTimeout) {
        self.set_menu_timeout(timeout.to_string());
    }

    /// `None` when the key is absent or empty.
    pub fn typed_console_mode(&self) -> Result<Option<ConsoleMode>> {
        parse_optional(self.console_mode())
    }

    pub fn set_typed_console_mode(&mut self, mode: ConsoleMode) {
        self.set_console_mode(mode.to_string());
    }
}

fn parse_optional<T: FromStr<Err = Error>>(raw: &str) -> Result<Option<T>> {
    if raw.is_empty() {
        Ok(None)
    } else {
        raw.parse().map(Some)
    }
}

/// How long the boot menu waits before starting the default entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTimeout {
    Seconds(u32),
    /// Always show the menu and wait for input.
    MenuForce,
    /// Boot immediately unless a key is pressed.
    MenuHidden,
    /// Never show the menu.
    MenuDisabled,
}

impl FromStr for MenuTimeout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            // sdbootutil reports a forced menu as -1.
            "menu-force" | "-1" => Ok(MenuTimeout::MenuForce),
            "menu-hidden" => Ok(MenuTimeout::MenuHidden),
            "menu-disabled" => Ok(MenuTimeout::MenuDisabled),
            other => other
                .parse::<u32>()
                .map(MenuTimeout::Seconds)
                .map_err(|_| Error::InvalidValue {
                    attribute: MENU_TIMEOUT.name,
                    value: s.to_string(),
                }),
        }
    }
}

impl fmt::Display for MenuTimeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuTimeout::Seconds(secs) => write!(f, "{secs}"),
            MenuTimeout::MenuForce => f.write_str("menu-force"),
            MenuTimeout::MenuHidden => f.write_str("menu-hidden"),
            MenuTimeout::MenuDisabled => f.write_str("menu-disabled"),
        }
    }
}

/// UEFI console resolution selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMode {
    /// Firmware mode number.
    Mode(u32),
    Auto,
    Max,
    Keep,
}

impl FromStr for ConsoleMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(ConsoleMode::Auto),
            "max" => Ok(ConsoleMode::Max),
            "keep" => Ok(ConsoleMode::Keep),
            other => other
                .parse::<u32>()
                .map(ConsoleMode::Mode)
                .map_err(|_| Error::InvalidValue {
                    attribute: CONSOLE_MODE.name,
                    value: s.to_string(),
                }),
        }
    }
}

impl fmt::Display for ConsoleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleMode::Mode(n) => write!(f, "{n}"),
            ConsoleMode::Auto => f.write_str("auto"),
            ConsoleMode::Max => f.write_str("max"),
            ConsoleMode::Keep => f.write_str("keep"),
        }
    }
}
