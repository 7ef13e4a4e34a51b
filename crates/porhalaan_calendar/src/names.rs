//! Batak month and day names.
//!
//! The porhalaan year has 13 lunar months and each month 30 named days.
//! Ordinals are 1-based; lookups outside the table return `None`.

use std::fmt;

/// The 13 months of the Batak year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatakMonth {
    SipahaSada,
    SipahaDuwa,
    SipahaTolu,
    SipahaOpat,
    SipahaLima,
    SipahaOnom,
    SipahaPitu,
    SipahaWalu,
    SipahaSiya,
    SipahaSampulu,
    Li,
    Hurung,
    Lamadu,
}

/// All months in calendar order.
pub const ALL_MONTHS: [BatakMonth; 13] = [
    BatakMonth::SipahaSada,
    BatakMonth::SipahaDuwa,
    BatakMonth::SipahaTolu,
    BatakMonth::SipahaOpat,
    BatakMonth::SipahaLima,
    BatakMonth::SipahaOnom,
    BatakMonth::SipahaPitu,
    BatakMonth::SipahaWalu,
    BatakMonth::SipahaSiya,
    BatakMonth::SipahaSampulu,
    BatakMonth::Li,
    BatakMonth::Hurung,
    BatakMonth::Lamadu,
];

impl BatakMonth {
    /// Batak name of the month.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SipahaSada => "Sipaha Sada",
            Self::SipahaDuwa => "Sipaha Duwa",
            Self::SipahaTolu => "Sipaha Tolu",
            Self::SipahaOpat => "Sipaha Opat",
            Self::SipahaLima => "Sipaha Lima",
            Self::SipahaOnom => "Sipaha Onom",
            Self::SipahaPitu => "Sipaha Pitu",
            Self::SipahaWalu => "Sipaha Walu",
            Self::SipahaSiya => "Sipaha Siya",
            Self::SipahaSampulu => "Sipaha Sampulu",
            Self::Li => "Li",
            Self::Hurung => "Hurung",
            Self::Lamadu => "Lamadu",
        }
    }

    /// 1-based position in the year.
    pub fn ordinal(self) -> u32 {
        ALL_MONTHS
            .iter()
            .position(|&m| m == self)
            .map_or(0, |i| i as u32 + 1)
    }

    /// Month for a 1-based ordinal, `None` outside 1..=13.
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        let index = usize::try_from(ordinal.checked_sub(1)?).ok()?;
        ALL_MONTHS.get(index).copied()
    }
}

impl fmt::Display for BatakMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The 30 days of a Batak month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatakDay {
    Artia,
    Soma,
    Anggara,
    Muda,
    Boraspati,
    Singkora,
    Samisara,
    AntianNiAek,
    SumaNiMangadop,
    AnggaraSampulu,
    MudaNiMangadop,
    BoraspatiNiTangkop,
    SingkoraPurnama,
    SamisaraPurnama,
    Tula,
    SumaNiHolom,
    AnggaraNiHolom,
    MudaNiHolom,
    BoraspatiNiHolom,
    SingkoraDuapulu,
    SamisaraMoraTurun,
    AntianNiAngga,
    SumaNiMate,
    AnggaraNaBegu,
    MudaNiMate,
    BoraspatiNiGok,
    SingkoraDuduk,
    SamisaraBulanMate,
    Hurung,
    Ringkar,
}

/// All days in month order.
pub const ALL_DAYS: [BatakDay; 30] = [
    BatakDay::Artia,
    BatakDay::Soma,
    BatakDay::Anggara,
    BatakDay::Muda,
    BatakDay::Boraspati,
    BatakDay::Singkora,
    BatakDay::Samisara,
    BatakDay::AntianNiAek,
    BatakDay::SumaNiMangadop,
    BatakDay::AnggaraSampulu,
    BatakDay::MudaNiMangadop,
    BatakDay::BoraspatiNiTangkop,
    BatakDay::SingkoraPurnama,
    BatakDay::SamisaraPurnama,
    BatakDay::Tula,
    BatakDay::SumaNiHolom,
    BatakDay::AnggaraNiHolom,
    BatakDay::MudaNiHolom,
    BatakDay::BoraspatiNiHolom,
    BatakDay::SingkoraDuapulu,
    BatakDay::SamisaraMoraTurun,
    BatakDay::AntianNiAngga,
    BatakDay::SumaNiMate,
    BatakDay::AnggaraNaBegu,
    BatakDay::MudaNiMate,
    BatakDay::BoraspatiNiGok,
    BatakDay::SingkoraDuduk,
    BatakDay::SamisaraBulanMate,
    BatakDay::Hurung,
    BatakDay::Ringkar,
];

impl BatakDay {
    /// Batak name of the day.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Artia => "Artia",
            Self::Soma => "Soma",
            Self::Anggara => "Anggara",
            Self::Muda => "Muda",
            Self::Boraspati => "Boraspati",
            Self::Singkora => "Singkora",
            Self::Samisara => "Samisara",
            Self::AntianNiAek => "Antian ni Aek",
            Self::SumaNiMangadop => "Suma ni Mangadop",
            Self::AnggaraSampulu => "Anggara Sampulu",
            Self::MudaNiMangadop => "Muda ni Mangadop",
            Self::BoraspatiNiTangkop => "Boraspati ni Tangkop",
            Self::SingkoraPurnama => "Singkora Purnama",
            Self::SamisaraPurnama => "Samisara Purnama",
            Self::Tula => "Tula",
            Self::SumaNiHolom => "Suma ni Holom",
            Self::AnggaraNiHolom => "Anggara ni Holom",
            Self::MudaNiHolom => "Muda ni Holom",
            Self::BoraspatiNiHolom => "Boraspati ni Holom",
            Self::SingkoraDuapulu => "Singkora Duapulu",
            Self::SamisaraMoraTurun => "Samisara Mora Turun",
            Self::AntianNiAngga => "Antian ni Angga",
            Self::SumaNiMate => "Suma ni Mate",
            Self::AnggaraNaBegu => "Anggara na Begu",
            Self::MudaNiMate => "Muda ni Mate",
            Self::BoraspatiNiGok => "Boraspati ni Gok",
            Self::SingkoraDuduk => "Singkora duduk",
            Self::SamisaraBulanMate => "Samisara bulan mate",
            Self::Hurung => "Hurung",
            Self::Ringkar => "Ringkar",
        }
    }

    /// 1-based position in the month.
    pub fn ordinal(self) -> u32 {
        ALL_DAYS
            .iter()
            .position(|&d| d == self)
            .map_or(0, |i| i as u32 + 1)
    }

    /// Day for a 1-based ordinal, `None` outside 1..=30.
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        let index = usize::try_from(ordinal.checked_sub(1)?).ok()?;
        ALL_DAYS.get(index).copied()
    }
}

impl fmt::Display for BatakDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
