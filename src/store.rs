use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

use static_cell::StaticCell;

use crate::config::Config;
use crate::error::LoadError;
use crate::sources::ConfigSource;

/// Lifecycle of a [`ConfigStore`]. `Loaded` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Uninitialized,
    Loading,
    Loaded,
    Failed,
}

impl State {
    const fn to_u8(self) -> u8 {
        match self {
            State::Uninitialized => 0,
            State::Loading => 1,
            State::Loaded => 2,
            State::Failed => 3,
        }
    }

    const fn from_u8(v: u8) -> Self {
        match v {
            0 => State::Uninitialized,
            1 => State::Loading,
            2 => State::Loaded,
            _ => State::Failed,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            State::Uninitialized => "uninitialized",
            State::Loading => "loading",
            State::Loaded => "loaded",
            State::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Holds the process-wide configuration in a `static`.
///
/// ```ignore
/// static STORE: ConfigStore = ConfigStore::new();
///
/// let config: &'static Config = STORE.install(&Embedded::compiled())?;
/// ```
///
/// The returned reference is what gets passed to the rest of the
/// application; the store itself has no getter.
pub struct ConfigStore {
    cell: StaticCell<Config>,
    state: AtomicU8,
}

impl ConfigStore {
    pub const fn new() -> Self {
        Self {
            cell: StaticCell::new(),
            state: AtomicU8::new(State::Uninitialized.to_u8()),
        }
    }

    pub fn state(&self) -> State {
        State::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Loads from `source` and keeps the result for the rest of the process.
    ///
    /// Only the first call does any work. Later calls fail with
    /// [`LoadError::AlreadyInitialized`] whatever the first outcome was.
    pub fn install<S: ConfigSource + ?Sized>(&'static self, source: &S) -> Result<&'static Config, LoadError> {
        if let Err(current) = self.state.compare_exchange(
            State::Uninitialized.to_u8(),
            State::Loading.to_u8(),
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            return Err(LoadError::AlreadyInitialized(State::from_u8(current)));
        }

        let config = match crate::load(source) {
            Ok(config) => config,
            Err(e) => {
                self.state.store(State::Failed.to_u8(), Ordering::Release);
                return Err(e);
            }
        };

        match self.cell.try_init(config) {
            Some(config) => {
                self.state.store(State::Loaded.to_u8(), Ordering::Release);
                Ok(&*config)
            }
            None => {
                self.state.store(State::Failed.to_u8(), Ordering::Release);
                Err(LoadError::AlreadyInitialized(State::Loaded))
            }
        }
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
