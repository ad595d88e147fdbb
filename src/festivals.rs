//! Multi-day festivals of the Coligny year.
//!
//! Each festival opens on a fixed day of a Coligny month and runs for a few
//! days. Fire festivals sit on the cross-quarters, solar ones on the
//! solstices and equinoxes. Days are matched within the opening month only,
//! so the tail of Trinox Samoni past the month's end is never reported.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FestivalKind {
    Fire,
    Solar,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MultiFestival {
    pub name: &'static str,
    /// Name in tablet orthography
    pub coligny_name: &'static str,
    pub month_index: i32,
    pub start_day: i32,
    pub duration: i32,
    pub kind: FestivalKind,
}

impl MultiFestival {
    pub fn end_day(&self) -> i32 {
        self.start_day + self.duration - 1
    }

    pub fn contains(&self, month_index: i32, day_of_month: i32) -> bool {
        month_index == self.month_index
            && (self.start_day..=self.end_day()).contains(&day_of_month)
    }
}

const fn festival(
    name: &'static str,
    coligny_name: &'static str,
    month_index: i32,
    start_day: i32,
    duration: i32,
    kind: FestivalKind,
) -> MultiFestival {
    MultiFestival {
        name,
        coligny_name,
        month_index,
        start_day,
        duration,
        kind,
    }
}

pub const MULTI_FESTIVALS: [MultiFestival; 8] = [
    festival("Trinox Samoni", "TRINVX SAMONI", 0, 28, 5, FestivalKind::Fire),
    festival("Trinox Giamoni", "TRINVX GIAMONI", 1, 20, 3, FestivalKind::Solar),
    festival("Trinox Imbolc", "TRINVX IMBOLC", 3, 2, 3, FestivalKind::Fire),
    festival("Trinox Ostara", "TRINVX OSTARA", 4, 19, 3, FestivalKind::Solar),
    festival("Beltane IVOS", "IVOS BELTAINE", 6, 1, 5, FestivalKind::Fire),
    festival("Trinox Litha", "TRINVX LITHA", 7, 22, 3, FestivalKind::Solar),
    festival("Trinox Lughnasadh", "TRINVX LUGHNASADH", 9, 3, 3, FestivalKind::Fire),
    festival("Trinox Mabon", "TRINVX MABON", 10, 25, 3, FestivalKind::Solar),
];

/// Festival running on this Coligny month/day, if any.
pub fn multi_festival_at(month_index: i32, day_of_month: i32) -> Option<&'static MultiFestival> {
    MULTI_FESTIVALS
        .iter()
        .find(|f| f.contains(month_index, day_of_month))
}

/// 1-based day within the running festival, or 0 outside any festival.
pub fn festival_day_number(month_index: i32, day_of_month: i32) -> i32 {
    multi_festival_at(month_index, day_of_month).map_or(0, |f| day_of_month - f.start_day + 1)
}
