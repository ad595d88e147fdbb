//! # Almanac Terminal Rendering
//!
//! This module turns a [`DailyAlmanac`] snapshot into the boxed terminal view:
//! the day reckoning, Metonic, Pleiades and Wheel of the Year panels, followed
//! by the current lunar month laid out as two half-month (coicise) grids and
//! the Coligny tablet notation for today.
//!
//! Rendering builds a `String` so the layout can be tested without a terminal;
//! [`draw_ascii`] prints it.
//!
//! ## Width Handling
//! Box padding is computed from display columns, not bytes or chars. Moon
//! glyphs and other emoji occupy two columns on common terminals even where
//! the locale reports one, so code points in the emoji blocks count double.

use crate::{
    almanac::{weekday, DailyAlmanac},
    coligny,
    config::Config,
    festivals::{self, MULTI_FESTIVALS},
    lunar::{self, MoonPhase},
    wheel::{self, WheelEvent},
    Jdn,
};

/// Width of one day cell in the month grid, in columns
const CELL_WIDTH: usize = 9;

/// Inner width of a seven-column grid row
const GRID_SPAN_WIDTH: usize = CELL_WIDTH * 7 + 6;

/// Planetary weekday glyphs, Sunday first
const WEEKDAY_GLYPHS: [&str; 7] = ["☉", "☽", "♂", "☿", "♃", "♀", "♄"];
const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Display columns taken by one code point.
fn char_width(ch: char) -> usize {
    match ch as u32 {
        0x1F300..=0x1FAFF | 0x1F600..=0x1F64F => 2,
        // variation selectors and zero-width joiner
        0xFE00..=0xFE0F | 0x200D => 0,
        _ => 1,
    }
}

/// Display columns taken by a string.
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Line-oriented text buffer with box-drawing helpers.
struct Canvas {
    out: String,
    box_width: usize,
}

impl Canvas {
    fn new(box_width: usize) -> Self {
        Self {
            out: String::new(),
            box_width,
        }
    }

    fn text(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn border(&mut self, left: &str, right: &str) {
        self.out.push_str(left);
        self.out.push_str(&"─".repeat(self.box_width));
        self.out.push_str(right);
        self.out.push('\n');
    }

    /// Left-aligned text padded to the box width; overlong text is not cut.
    fn line(&mut self, text: &str) {
        let pad = self.box_width.saturating_sub(display_width(text));
        self.out.push('│');
        self.out.push_str(text);
        self.out.push_str(&" ".repeat(pad));
        self.out.push_str("│\n");
    }

    fn titled_box(&mut self, title: &str, lines: &[String]) {
        self.border("┌", "┐");
        self.line(title);
        self.border("├", "┤");
        for l in lines {
            self.line(l);
        }
        self.border("└", "┘");
        self.blank();
    }

    fn grid_border(&mut self, left: &str, mid: &str, right: &str) {
        self.out.push_str(left);
        for col in 0..7 {
            self.out.push_str(&"─".repeat(CELL_WIDTH));
            self.out.push_str(if col == 6 { right } else { mid });
        }
        self.out.push('\n');
    }

    fn grid_span_center(&mut self, text: &str) {
        let pad = GRID_SPAN_WIDTH.saturating_sub(display_width(text));
        let left = pad / 2;
        self.out.push('│');
        self.out.push_str(&" ".repeat(left));
        self.out.push_str(text);
        self.out.push_str(&" ".repeat(pad - left));
        self.out.push_str("│\n");
    }

    fn cell(&mut self, text: &str) {
        self.out.push_str(text);
        let pad = CELL_WIDTH.saturating_sub(display_width(text));
        self.out.push_str(&" ".repeat(pad));
        self.out.push('│');
    }

    fn centered_cell(&mut self, text: &str) {
        let pad = CELL_WIDTH.saturating_sub(display_width(text));
        let left = pad / 2;
        self.out.push_str(&" ".repeat(left));
        self.out.push_str(text);
        self.out.push_str(&" ".repeat(pad - left));
        self.out.push('│');
    }

    fn empty_cells(&mut self, count: usize) {
        for _ in 0..count {
            self.cell("");
        }
    }
}

/// Status glyph for a grid cell: festivals override the plain marker.
fn status_glyph(is_festival: bool, marker: char) -> &'static str {
    match (is_festival, marker) {
        (true, '!') => "⚠",
        (true, '*') => "☆",
        (true, _) => "⚐",
        (false, '!') => "!",
        (false, '*') => "*",
        _ => " ",
    }
}

/// A day is marked as a festival when a multi-day festival runs or the Sun
/// stands on a station of the wheel.
fn is_festival_day(month_index: i32, day: i32, jdn: Jdn) -> bool {
    festivals::multi_festival_at(month_index, day).is_some() || wheel::is_wheel_day(jdn).is_some()
}

fn day_cell(day: i32, phase: MoonPhase, status: &str, today: bool) -> String {
    if today {
        format!("[{:2}{}{}]", day, phase.glyph(), status)
    } else {
        format!(" {:2}{}{} ", day, phase.glyph(), status)
    }
}

fn signed_days(days: i32) -> String {
    format!("{:+4} days", days)
}

fn render_header(c: &mut Canvas, a: &DailyAlmanac) {
    let rule = "═".repeat(51);
    c.text("Celtic Calendar — Daily View (Lunar-Synced)");
    c.text(&rule);
    c.text(&format!("Celtic Year: {}", a.celtic_year));
    c.text(&format!(
        "Elapsed fraction of current year: {:.2}",
        a.elapsed_fraction
    ));
    c.text(&format!("Age: {} | Year in Age: {}", a.age, a.year_in_age));
    c.text(&format!(
        "Day of Year: {} / {} | Days Remaining: {}",
        a.day_of_year, a.year_length, a.days_remaining
    ));
    c.text(&rule);
}

fn render_day_reckoning(c: &mut Canvas, a: &DailyAlmanac, config: &Config) {
    let hemisphere = if a.latitude >= 0.0 { 'N' } else { 'S' };
    let mut lines = vec![
        format!(" Current Time: {}", crate::sunset::format_hour(a.hour)),
        format!(
            " Sunset Today: {} ({}, {:.2}°{})",
            a.sunset,
            config.location.name,
            a.latitude.abs(),
            hemisphere
        ),
    ];
    if a.after_sunset {
        lines.push(" ☽ After Sunset — Celtic day has begun".to_string());
    } else {
        lines.push(" ☉ Before Sunset — Still previous Celtic day".to_string());
    }
    lines.push(" \"The night in each case precedes the day.\"".to_string());
    c.titled_box(" CELTIC DAY RECKONING (Sunset to Sunset) ", &lines);
}

fn render_metonic(c: &mut Canvas, a: &DailyAlmanac) {
    let m = &a.metonic;
    let lines = vec![
        format!(
            " Cycle #{} | Year {} of 19 | Lunation {} of 235",
            m.cycle, m.year, m.lunation
        ),
        format!(
            " Accumulated drift: {:.1} hours ({:.1} days)",
            m.drift_hours,
            m.drift_hours / 24.0
        ),
        " 235 moons = 19 years (error: ~2 hrs/cycle)".to_string(),
    ];
    c.titled_box(" METONIC CYCLE (19-Year Lunisolar Sync) ", &lines);
}

fn render_pleiades(c: &mut Canvas, a: &DailyAlmanac) {
    let days = a.days_to_pleiades_rising;
    let lines = if a.pleiades_rising {
        vec![
            " ✧ HELIACAL RISING NOW ✧".to_string(),
            " The Pleiades rise before dawn - Samhain time!".to_string(),
        ]
    } else if days > 0 {
        vec![
            format!(" Days until heliacal rising: {days}"),
            " (Pleiades hidden by Sun's glare)".to_string(),
        ]
    } else {
        vec![
            format!(" Days since heliacal rising: {}", -days),
            " (Pleiades visible in pre-dawn sky)".to_string(),
        ]
    };
    c.titled_box(" PLEIADES (Seven Sisters) - Samhain Marker ", &lines);
}

fn wheel_line(a: &DailyAlmanac, event: WheelEvent) -> String {
    let days = a
        .wheel
        .iter()
        .find(|offset| offset.event == event)
        .map_or(0, |offset| offset.days);
    format!(
        " {:<10} ({:>3.0}°) {:<16} {}",
        event.name(),
        event.longitude(),
        format!("{}:", event.description()),
        signed_days(days)
    )
}

fn render_wheel(c: &mut Canvas, a: &DailyAlmanac) {
    let mut lines = vec![
        format!(" Current Sun Longitude: {:5.1}°", a.sun_longitude),
        " ".to_string(),
        " ══ SOLSTICES & EQUINOXES (Quarter Days) ══".to_string(),
    ];
    lines.extend(WheelEvent::QUARTERS.iter().map(|&e| wheel_line(a, e)));
    lines.push(" ".to_string());
    lines.push(" ══ CROSS-QUARTERS (Fire Festivals) ══".to_string());
    lines.extend(WheelEvent::CROSS_QUARTERS.iter().map(|&e| wheel_line(a, e)));
    lines.push(" ".to_string());
    lines.push(format!(
        " → Next: {:<10} in {:3} days",
        a.next_wheel_event.event.name(),
        a.next_wheel_event.days
    ));
    lines.push(format!(
        " Solilunar Samhain in {} days",
        a.days_to_solilunar_samhain
    ));
    c.titled_box(" THE EIGHT-FOLD YEAR (Wheel of the Year) ", &lines);
}

fn render_month_panels(c: &mut Canvas, a: &DailyAlmanac) {
    c.border("┌", "┐");
    c.line(&format!("  {:<12} ({})", a.month_name, a.month_abbrev));
    let kind = if a.is_mat {
        "Matis (lucky/complete month)"
    } else {
        "Anmatu (unlucky/incomplete month)"
    };
    c.line(&format!("  {:<36} - {:2} days", kind, a.month_length));
    c.border("└", "┘");

    c.border("┌", "┐");
    c.line(&format!(
        "  Today: Day {:2} ({}) - {}{} - Sun {}",
        a.day_of_month,
        WEEKDAY_GLYPHS[a.weekday as usize % 7],
        a.moon_phase.glyph(),
        a.moon_sign.glyph(),
        a.sun_sign.glyph()
    ));
    if a.is_atenoux {
        c.line("  ═══ ATENOUX (Second Coicise) ═══");
    } else {
        c.line("  ═══ First Coicise ═══");
    }
    c.border("└", "┘");

    c.border("┌", "┐");
    let mut any = false;
    for f in MULTI_FESTIVALS.iter().filter(|f| f.month_index == a.month_index) {
        c.line(&format!(
            "  IVOS: {:<33} Days {:2}-{:2}",
            f.name,
            f.start_day,
            f.end_day()
        ));
        any = true;
    }
    if let Some(f) = &a.festival {
        c.line(&format!(
            "  Today is day {} of {} ({})",
            a.festival_day, f.name, f.coligny_name
        ));
    }
    if !any {
        c.line("  (No major festivals this month)");
    }
    c.border("└", "┘");
    c.blank();
}

fn render_week_header(c: &mut Canvas) {
    c.out.push('│');
    for glyph in WEEKDAY_GLYPHS {
        c.centered_cell(glyph);
    }
    c.out.push_str("\n│");
    for name in WEEKDAY_NAMES {
        c.centered_cell(name);
    }
    c.out.push('\n');
}

fn render_grid_half(c: &mut Canvas, a: &DailyAlmanac, start_day: i32, end_day: i32) {
    let first = a.month_start + start_day as Jdn - 1;
    c.out.push('│');
    c.empty_cells(weekday(first) as usize);

    for day in start_day..=end_day {
        let jdn = a.month_start + day as Jdn - 1;
        if weekday(jdn) == 0 && day > start_day {
            c.out.push('\n');
            c.grid_border("├", "┼", "┤");
            c.out.push('│');
        }
        let marker = coligny::day_marker(a.month_index, day);
        let status = status_glyph(is_festival_day(a.month_index, day, jdn), marker);
        let cell = day_cell(day, lunar::moon_phase(jdn), status, day == a.day_of_month);
        c.cell(&cell);
    }

    let last = a.month_start + end_day as Jdn - 1;
    c.empty_cells(6 - weekday(last) as usize);
    c.out.push('\n');
}

fn render_month_grid(c: &mut Canvas, a: &DailyAlmanac) {
    c.grid_border("┌", "┬", "┐");
    c.grid_span_center("FIRST COICISE (Days I - XV)");
    c.grid_span_center("🌕 Full Moon → 🌑 New Moon");
    c.grid_border("├", "┼", "┤");
    render_week_header(c);
    c.grid_border("├", "┼", "┤");
    render_grid_half(c, a, 1, 15);
    c.grid_border("└", "┴", "┘");
    c.blank();

    c.text("        ════════ ATENOUX (🌑) ════════");
    c.text("           \"Returning Night\"");
    c.blank();

    c.grid_border("┌", "┬", "┐");
    if a.month_length == 30 {
        c.grid_span_center("SECOND COICISE (Days XVI - XXX)");
    } else {
        c.grid_span_center("SECOND COICISE (Days XVI - XXIX)");
    }
    c.grid_span_center("🌑 New Moon → 🌕 Full Moon");
    c.grid_border("├", "┼", "┤");
    render_week_header(c);
    c.grid_border("├", "┼", "┤");
    render_grid_half(c, a, 16, a.month_length);
    c.grid_border("└", "┴", "┘");

    if a.month_length == 29 {
        c.blank();
        c.text("        ◎ XXX  DIVERTOMU  (virtual 30th day)");
    }
}

fn render_tablet(c: &mut Canvas, a: &DailyAlmanac) {
    let day = a.day_of_month;
    let in_half = if a.is_atenoux { day - 15 } else { day };

    let mut lines = vec![format!(
        "  ◎ {:<5} {} {:<3} {}",
        coligny::roman_day(in_half),
        coligny::triple_mark(day),
        if a.is_mat { "M" } else { " " },
        a.notation
    )];
    if !a.is_atenoux && (7..=9).contains(&day) {
        let loud = if a.is_mat { "LOUD" } else { "LAG" };
        lines.push(format!("  [PRINNI {loud} - Full Moon Triplet]"));
    }
    if a.is_atenoux && (22..=24).contains(&day) {
        lines.push("  [N INIS R - Dark Moon Night]".to_string());
    }
    if a.festival.is_some() {
        lines.push("  [IVOS - Festival Day]".to_string());
    }
    c.blank();
    c.titled_box(" COLIGNY TABLET NOTATION FOR TODAY", &lines);
}

/// Render the full almanac view.
pub fn render_daily(almanac: &DailyAlmanac, config: &Config) -> String {
    let display = &config.display;
    let mut c = Canvas::new(display.box_width);

    render_header(&mut c, almanac);
    render_day_reckoning(&mut c, almanac, config);
    if display.show_metonic {
        render_metonic(&mut c, almanac);
    }
    if display.show_pleiades {
        render_pleiades(&mut c, almanac);
    }
    if display.show_wheel {
        render_wheel(&mut c, almanac);
    }
    render_month_panels(&mut c, almanac);
    if display.show_month_grid {
        render_month_grid(&mut c, almanac);
    }
    if (1..=almanac.month_length).contains(&almanac.day_of_month) {
        render_tablet(&mut c, almanac);
    }
    c.out
}

/// Render the almanac to the terminal.
pub fn draw_ascii(almanac: &DailyAlmanac, config: &Config) {
    print!("{}", render_daily(almanac, config));
}
