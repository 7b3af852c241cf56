// thaiid-rs/thaiid/src/decode/date.rs

use crate::constants::{BUDDHIST_ERA_OFFSET, LIFELONG_SENTINEL};

const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const LIFELONG_TH: &str = "ตลอดชีพ";
const LIFELONG_EN: &str = "LIFELONG";
const UNSPECIFIED_TH: &str = "ไม่ระบุ";
const UNSPECIFIED_EN: &str = "Not specified";

/// Date field read from the card (birth, issue or expiry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardDate {
    /// Calendar date, year in Buddhist Era.
    Date {
        /// Day of month, 1-31
        day: u8,
        /// Month, 1-12
        month: u8,
        /// Buddhist Era year
        year_be: i32,
    },
    /// The card never expires.
    Lifelong,
    /// Missing or malformed on the card.
    Unspecified,
}

impl CardDate {
    /// Parse a `YYYYMMDD` Buddhist Era string or the `99999999` sentinel.
    pub fn parse(raw: &str) -> Self {
        if raw == LIFELONG_SENTINEL {
            return Self::Lifelong;
        }
        if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Self::Unspecified;
        }
        let (Ok(year_be), Ok(month), Ok(day)) = (
            raw[0..4].parse::<i32>(),
            raw[4..6].parse::<u8>(),
            raw[6..8].parse::<u8>(),
        ) else {
            return Self::Unspecified;
        };
        if !(1..=12).contains(&month) {
            return Self::Unspecified;
        }
        Self::Date {
            day,
            month,
            year_be,
        }
    }

    /// Year in the Gregorian calendar, `None` for sentinels.
    pub fn gregorian_year(&self) -> Option<i32> {
        match self {
            Self::Date { year_be, .. } => Some(year_be - BUDDHIST_ERA_OFFSET),
            _ => None,
        }
    }

    /// Thai rendering, e.g. `1 มกราคม 2568`.
    pub fn th(&self) -> String {
        match self {
            Self::Date {
                day,
                month,
                year_be,
            } => format!("{} {} {}", day, THAI_MONTHS[month_index(*month)], year_be),
            Self::Lifelong => LIFELONG_TH.to_string(),
            Self::Unspecified => UNSPECIFIED_TH.to_string(),
        }
    }

    /// English rendering with a Gregorian year, e.g. `1 January 2025`.
    pub fn en(&self) -> String {
        match self {
            Self::Date {
                day,
                month,
                year_be,
            } => format!(
                "{} {} {}",
                day,
                ENGLISH_MONTHS[month_index(*month)],
                year_be - BUDDHIST_ERA_OFFSET
            ),
            Self::Lifelong => LIFELONG_EN.to_string(),
            Self::Unspecified => UNSPECIFIED_EN.to_string(),
        }
    }

    /// Thai and English renderings, always produced together.
    pub fn pair(&self) -> (String, String) {
        (self.th(), self.en())
    }

    /// Compact `d/m/yyyy` (Buddhist Era) form used in spreadsheet exports.
    /// Sentinels keep their Thai wording.
    pub fn short_th(&self) -> String {
        match self {
            Self::Date {
                day,
                month,
                year_be,
            } => format!("{}/{}/{}", day, month, year_be),
            _ => self.th(),
        }
    }
}

// Only called for months already range-checked by `parse`.
fn month_index(month: u8) -> usize {
    (month.clamp(1, 12) - 1) as usize
}

/// Decode a raw date field into its (Thai, English) pair.
pub fn decode_date(raw: &str) -> (String, String) {
    CardDate::parse(raw).pair()
}
