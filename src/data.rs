//! Boot ROM variant identification.
//!
//! Real boot ROM dumps are copyrighted and are not embedded here. Callers
//! that want authentic boot ROM behaviour must supply their own dump via
//! [`crate::gb::GameBoy::load_boot`]; the default boot-skip path jumps
//! the CPU directly to the post-boot register state instead.

use std::fmt::{self, Display, Formatter};

#[cfg_attr(feature = "wasm", wasm_bindgen::prelude::wasm_bindgen)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BootRom {
    Dmg,
    DmgBootix,
    Mgb,
    MgbBootix,
    Cgb,
    CgbFast,
    Sgb,
    None,
}

impl BootRom {
    pub fn description(&self) -> &'static str {
        match self {
            BootRom::Dmg => "DMG",
            BootRom::DmgBootix => "DMG Bootix",
            BootRom::Mgb => "MGB",
            BootRom::MgbBootix => "MGB Bootix",
            BootRom::Cgb => "CGB",
            BootRom::CgbFast => "CGB Fast",
            BootRom::Sgb => "SGB",
            BootRom::None => "None",
        }
    }

    /// Whether this boot ROM variant is expected to run on a DMG-class
    /// machine (regular DMG or MGB hardware).
    pub fn is_dmg_compat(&self) -> bool {
        matches!(self, BootRom::Dmg | BootRom::DmgBootix | BootRom::Mgb | BootRom::MgbBootix)
    }

    /// Whether this boot ROM variant is expected to run on CGB hardware.
    pub fn is_cgb_compat(&self) -> bool {
        matches!(self, BootRom::Cgb | BootRom::CgbFast)
    }
}

impl Display for BootRom {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl Default for BootRom {
    fn default() -> Self {
        BootRom::None
    }
}
