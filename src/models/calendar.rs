use chrono::Weekday;

/// Spanish month names accepted by the release-count endpoint, in calendar order
pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Spanish weekday names, Monday first
pub const DAY_NAMES: [&str; 7] = [
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
    "Domingo",
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Upper-cases the first character and lower-cases the rest
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Resolves a Spanish month name to its number (1-12)
pub fn month_from_name(name: &str) -> Option<u32> {
    let wanted = capitalize(name);
    MONTH_NAMES
        .iter()
        .position(|m| *m == wanted)
        .map(|i| i as u32 + 1)
}

/// Resolves a Spanish weekday name
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    let wanted = capitalize(name);
    DAY_NAMES
        .iter()
        .position(|d| *d == wanted)
        .map(|i| WEEKDAYS[i])
}
