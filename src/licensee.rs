//! Cartridge publisher ("licensee") lookup, based on the header's old
//! licensee byte and, when that byte signals an extended code, the two
//! character new licensee code.

use std::fmt::{self, Display, Formatter};

#[cfg_attr(feature = "wasm", wasm_bindgen::prelude::wasm_bindgen)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Licensee {
    None,
    Nintendo,
    Capcom,
    ElectronicArts,
    Hudson,
    BAi,
    Kss,
    PcmComplete,
    SanX,
    Kemco,
    SetaCorporation,
    Viacom,
    Banpresto,
    Konami,
    Hector,
    Taito,
    Tokuma,
    Namco,
    Asmik,
    Squaresoft,
    Lucasarts,
    Ocean,
    Infogrames,
    Activision,
    Sammy,
    Acclaim,
    Bandai,
    Enix,
    Hal,
    Itc,
    Yanoman,
    Spectrum,
    Irem,
    Malibu,
    Angel,
    Bullet,
    Sony,
    Chunsoft,
    Videosystem,
    Varie,
    Imagineer,
    Nihon,
    Lozc,
    Titus,
    Virgin,
    Interplay,
    Broderbund,
    Sculptured,
    Thq,
    Accolade,
    Misawa,
    Kaneko,
    Unknown(u8),
}

impl Licensee {
    /// Resolves a [`Licensee`] from the cartridge header's old licensee
    /// code, falling back to the new (two character) licensee code when
    /// the old code signals an extended lookup (0x33).
    pub fn from_data(old_code: u8, new_code: &[u8]) -> Licensee {
        if old_code == 0x33 {
            let code = std::str::from_utf8(new_code).unwrap_or("").trim();
            return Self::from_new_code(code);
        }
        Self::from_old_code(old_code)
    }

    fn from_old_code(code: u8) -> Licensee {
        match code {
            0x00 => Licensee::None,
            0x01 => Licensee::Nintendo,
            0x08 => Licensee::Capcom,
            0x09 => Licensee::Hal,
            0x13 => Licensee::ElectronicArts,
            0x18 => Licensee::Hudson,
            0x19 => Licensee::BAi,
            0x1a => Licensee::Yanoman,
            0x1f => Licensee::Virgin,
            0x24 => Licensee::PcmComplete,
            0x25 => Licensee::SanX,
            0x28 => Licensee::Kemco,
            0x29 => Licensee::SetaCorporation,
            0x30 => Licensee::Viacom,
            0x31 => Licensee::Nintendo,
            0x32 => Licensee::Bandai,
            0x34 => Licensee::Konami,
            0x35 => Licensee::Hector,
            0x38 => Licensee::Capcom,
            0x39 => Licensee::Banpresto,
            0x41 => Licensee::Ocean,
            0x44 => Licensee::Malibu,
            0x46 => Licensee::Angel,
            0x47 => Licensee::Bullet,
            0x49 => Licensee::Irem,
            0x4a => Licensee::Virgin,
            0x4d => Licensee::Malibu,
            0x51 => Licensee::Acclaim,
            0x52 => Licensee::Activision,
            0x53 => Licensee::Sammy,
            0x54 => Licensee::Konami,
            0x5a => Licensee::Itc,
            0x5c => Licensee::Spectrum,
            0x5d => Licensee::Irem,
            0x60 => Licensee::Titus,
            0x61 => Licensee::Virgin,
            0x67 => Licensee::Ocean,
            0x69 => Licensee::ElectronicArts,
            0x70 => Licensee::Infogrames,
            0x71 => Licensee::Interplay,
            0x72 => Licensee::Broderbund,
            0x73 => Licensee::Sculptured,
            0x78 => Licensee::Thq,
            0x79 => Licensee::Accolade,
            0x7f => Licensee::Kemco,
            0x80 => Licensee::Misawa,
            0x83 => Licensee::Lozc,
            0x86 => Licensee::Tokuma,
            0x8b => Licensee::Bullet,
            0x91 => Licensee::Chunsoft,
            0x92 => Licensee::Videosystem,
            0x93 => Licensee::Ocean,
            0x95 => Licensee::Varie,
            0x97 => Licensee::Kaneko,
            0x9a => Licensee::Nihon,
            0x9c => Licensee::Imagineer,
            0x9d => Licensee::Banpresto,
            0xa2 => Licensee::Bandai,
            0xa4 => Licensee::Konami,
            0xaf => Licensee::Namco,
            0xb0 => Licensee::Acclaim,
            0xb2 => Licensee::Bandai,
            0xb4 => Licensee::Enix,
            0xb6 => Licensee::Hal,
            0xbd => Licensee::Sony,
            0xc0 => Licensee::Taito,
            0xc2 => Licensee::Kemco,
            0xc3 => Licensee::Squaresoft,
            0xc4 => Licensee::Tokuma,
            0xcf => Licensee::Angel,
            0xd0 => Licensee::Taito,
            0xd5 => Licensee::Kss,
            0xd9 => Licensee::Banpresto,
            0xe0 => Licensee::Namco,
            0xe3 => Licensee::Varie,
            0xe8 => Licensee::Asmik,
            0xeb => Licensee::Acclaim,
            0xfa => Licensee::Infogrames,
            code => Licensee::Unknown(code),
        }
    }

    fn from_new_code(code: &str) -> Licensee {
        match code {
            "00" => Licensee::None,
            "01" => Licensee::Nintendo,
            "08" => Licensee::Capcom,
            "13" => Licensee::ElectronicArts,
            "18" => Licensee::Hudson,
            "19" => Licensee::BAi,
            "20" => Licensee::Kss,
            "24" => Licensee::PcmComplete,
            "25" => Licensee::SanX,
            "28" => Licensee::Kemco,
            "29" => Licensee::SetaCorporation,
            "30" => Licensee::Viacom,
            "31" => Licensee::Nintendo,
            "32" => Licensee::Bandai,
            "33" => Licensee::Ocean,
            "34" => Licensee::Konami,
            "35" => Licensee::Hector,
            "37" => Licensee::Taito,
            "38" => Licensee::Hudson,
            "39" => Licensee::Banpresto,
            "41" => Licensee::Ocean,
            "44" => Licensee::Malibu,
            "46" => Licensee::Angel,
            "47" => Licensee::Bullet,
            "49" => Licensee::Irem,
            "51" => Licensee::Acclaim,
            "52" => Licensee::Activision,
            "53" => Licensee::Sammy,
            "54" => Licensee::Konami,
            "60" => Licensee::Titus,
            "61" => Licensee::Virgin,
            "64" => Licensee::Lucasarts,
            "67" => Licensee::Ocean,
            "69" => Licensee::ElectronicArts,
            "70" => Licensee::Infogrames,
            "71" => Licensee::Interplay,
            "72" => Licensee::Broderbund,
            "73" => Licensee::Sculptured,
            "78" => Licensee::Thq,
            "79" => Licensee::Accolade,
            "80" => Licensee::Misawa,
            "83" => Licensee::Lozc,
            "86" => Licensee::Tokuma,
            "91" => Licensee::Chunsoft,
            "92" => Licensee::Videosystem,
            "93" => Licensee::Ocean,
            "95" => Licensee::Varie,
            "97" => Licensee::Kaneko,
            "9a" | "9A" => Licensee::Nihon,
            "a4" | "A4" => Licensee::Konami,
            _ => Licensee::Unknown(code.as_bytes().first().copied().unwrap_or(0)),
        }
    }

    pub fn description(&self) -> String {
        match self {
            Licensee::None => String::from("None"),
            Licensee::Nintendo => String::from("Nintendo"),
            Licensee::Capcom => String::from("Capcom"),
            Licensee::ElectronicArts => String::from("Electronic Arts"),
            Licensee::Hudson => String::from("Hudson Soft"),
            Licensee::BAi => String::from("B-AI"),
            Licensee::Kss => String::from("Kss"),
            Licensee::PcmComplete => String::from("PCM Complete"),
            Licensee::SanX => String::from("San-X"),
            Licensee::Kemco => String::from("Kemco"),
            Licensee::SetaCorporation => String::from("Seta Corporation"),
            Licensee::Viacom => String::from("Viacom"),
            Licensee::Banpresto => String::from("Banpresto"),
            Licensee::Konami => String::from("Konami"),
            Licensee::Hector => String::from("Hector"),
            Licensee::Taito => String::from("Taito"),
            Licensee::Tokuma => String::from("Tokuma Shoten"),
            Licensee::Namco => String::from("Namco"),
            Licensee::Asmik => String::from("Asmik Ace Entertainment"),
            Licensee::Squaresoft => String::from("Squaresoft"),
            Licensee::Lucasarts => String::from("LucasArts"),
            Licensee::Ocean => String::from("Ocean Software"),
            Licensee::Infogrames => String::from("Infogrames"),
            Licensee::Activision => String::from("Activision"),
            Licensee::Sammy => String::from("Sammy"),
            Licensee::Acclaim => String::from("Acclaim"),
            Licensee::Bandai => String::from("Bandai"),
            Licensee::Enix => String::from("Enix"),
            Licensee::Hal => String::from("HAL Laboratory"),
            Licensee::Itc => String::from("ITC Entertainment"),
            Licensee::Yanoman => String::from("Yanoman"),
            Licensee::Spectrum => String::from("Spectrum Holobyte"),
            Licensee::Irem => String::from("Irem"),
            Licensee::Malibu => String::from("Malibu Games"),
            Licensee::Angel => String::from("Angel"),
            Licensee::Bullet => String::from("Bullet-Proof Software"),
            Licensee::Sony => String::from("Sony Imagesoft"),
            Licensee::Chunsoft => String::from("Chunsoft"),
            Licensee::Videosystem => String::from("Video System"),
            Licensee::Varie => String::from("Varie"),
            Licensee::Imagineer => String::from("Imagineer"),
            Licensee::Nihon => String::from("Nihon Bussan"),
            Licensee::Lozc => String::from("Lozc"),
            Licensee::Titus => String::from("Titus"),
            Licensee::Virgin => String::from("Virgin Games"),
            Licensee::Interplay => String::from("Interplay"),
            Licensee::Broderbund => String::from("Broderbund"),
            Licensee::Sculptured => String::from("Sculptured Software"),
            Licensee::Thq => String::from("THQ"),
            Licensee::Accolade => String::from("Accolade"),
            Licensee::Misawa => String::from("Misawa Entertainment"),
            Licensee::Kaneko => String::from("Kaneko"),
            Licensee::Unknown(code) => format!("Unknown (0x{:02x})", code),
        }
    }
}

impl Display for Licensee {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
