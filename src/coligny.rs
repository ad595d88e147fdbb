//! Coligny tablet conventions: month names, MAT/ANM classification and the
//! day markings of each half-month.
//!
//! Month indices run Giamonios-first (0 = Giamonios … 11 = Cutios), with
//! [`INTERCALARY_MONTH`] naming the thirteenth month. Lookups never fail:
//! an index outside the table yields a neutral sentinel.

use crate::calendar::INTERCALARY_MONTH;

const MONTH_NAMES: [&str; 12] = [
    "Giamonios",
    "Simivisonnos",
    "Equos",
    "Elembivios",
    "Aedrinios",
    "Cantlos",
    "Samonios",
    "Dumannios",
    "Riuros",
    "Anagantios",
    "Ogronnios",
    "Cutios",
];

const MONTH_ABBREVS: [&str; 12] = [
    "GIA", "SIM", "EQU", "ELE", "AED", "CAN", "SAM", "DUM", "RIV", "ANA", "OGR", "CUT",
];

// MAT months: SIM, AED, SAM, RIV, OGR, CUT
const MAT: [bool; 12] = [
    false, true, false, false, true, false, true, false, true, false, true, true,
];

const MONTH_DAYS: [i32; 12] = [29, 30, 29, 29, 30, 29, 30, 29, 30, 29, 30, 30];

fn slot(month_index: i32) -> Option<usize> {
    usize::try_from(month_index).ok().filter(|&i| i < 12)
}

/// Full month name; "Quimonios" for the intercalary month, "Unknown" otherwise.
pub fn month_name(month_index: i32) -> &'static str {
    if month_index == INTERCALARY_MONTH {
        return "Quimonios";
    }
    slot(month_index).map_or("Unknown", |i| MONTH_NAMES[i])
}

/// Three-letter abbreviation; "QUI" for the intercalary month, "???" otherwise.
pub fn month_abbrev(month_index: i32) -> &'static str {
    if month_index == INTERCALARY_MONTH {
        return "QUI";
    }
    slot(month_index).map_or("???", |i| MONTH_ABBREVS[i])
}

/// MAT (auspicious, "complete") month. Unknown indices are ANM.
pub fn is_mat_month(month_index: i32) -> bool {
    slot(month_index).is_some_and(|i| MAT[i])
}

/// Nominal tablet length of a month (29 or 30); unknown indices get 30.
pub fn month_days(month_index: i32) -> i32 {
    slot(month_index).map_or(30, |i| MONTH_DAYS[i])
}

/// Day falls in the second half-month, after ATENOUX.
pub fn is_atenoux(day_of_month: i32) -> bool {
    day_of_month > 15
}

/// D AMB (inauspicious) day: days 5 and 11 in the first half, odd days other
/// than 16 in the second.
pub fn is_d_amb(day_of_month: i32) -> bool {
    if day_of_month <= 15 {
        day_of_month == 5 || day_of_month == 11
    } else {
        day_of_month != 16 && day_of_month % 2 == 1
    }
}

/// Tablet notation printed beside a day.
pub fn day_notation(month_index: i32, day_of_month: i32) -> &'static str {
    let mat = is_mat_month(month_index);
    let second_half = is_atenoux(day_of_month);

    if !second_half && (7..=9).contains(&day_of_month) {
        if day_of_month == 7 {
            return if mat { "PRINNI LOUD" } else { "PRINNI LAG" };
        }
        return if mat { "M D" } else { "D" };
    }
    if second_half && (22..=24).contains(&day_of_month) {
        return "N INIS R";
    }
    if is_d_amb(day_of_month) {
        return "D AMB";
    }
    if mat {
        "M D"
    } else {
        "D"
    }
}

/// Triple mark for the daytime divisions, on a six-day cycle.
pub fn triple_mark(day_of_month: i32) -> &'static str {
    match (day_of_month - 1).rem_euclid(6) {
        0 => "ƚıı",
        1 => "ıƚı",
        2 => "ııƚ",
        _ => "   ",
    }
}

/// One-character day marker: `!` D AMB, `*` MAT month, blank otherwise.
pub fn day_marker(month_index: i32, day_of_month: i32) -> char {
    if is_d_amb(day_of_month) {
        '!'
    } else if is_mat_month(month_index) {
        '*'
    } else {
        ' '
    }
}

/// Roman numeral for a half-month day (1..=15), tablet style (IIII, VIIII).
pub fn roman_day(day_in_half: i32) -> &'static str {
    const NUMERALS: [&str; 16] = [
        "", "I", "II", "III", "IIII", "V", "VI", "VII", "VIII", "VIIII", "X", "XI", "XII",
        "XIII", "XIIII", "XV",
    ];
    usize::try_from(day_in_half)
        .ok()
        .and_then(|i| NUMERALS.get(i))
        .copied()
        .unwrap_or("")
}
