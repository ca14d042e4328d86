//! Built-in Turkish holiday table.
//!
//! Used when no other source is configured and as the fallback whenever the
//! configured source fails. Religious holidays follow the published
//! Diyanet dates; their eves (arife) are half days.

use chrono::NaiveDate;

use crate::models::{HolidayKind, HolidayRecord};

const FULL: HolidayKind = HolidayKind::FullDay;
const HALF: HolidayKind = HolidayKind::HalfDay;

/// Fixed-date holidays observed every year: (month, day, name, kind).
const FIXED: &[(u32, u32, &str, HolidayKind)] = &[
    (1, 1, "Yılbaşı", FULL),
    (4, 23, "Ulusal Egemenlik ve Çocuk Bayramı", FULL),
    (5, 1, "Emek ve Dayanışma Günü", FULL),
    (5, 19, "Atatürk'ü Anma, Gençlik ve Spor Bayramı", FULL),
    (7, 15, "Demokrasi ve Milli Birlik Günü", FULL),
    (8, 30, "Zafer Bayramı", FULL),
    (10, 28, "Cumhuriyet Bayramı Arifesi", HALF),
    (10, 29, "Cumhuriyet Bayramı", FULL),
];

/// Moving religious holidays: (year, month, day, name, kind).
const RELIGIOUS: &[(i32, u32, u32, &str, HolidayKind)] = &[
    (2024, 4, 9, "Ramazan Bayramı Arifesi", HALF),
    (2024, 4, 10, "Ramazan Bayramı 1. Gün", FULL),
    (2024, 4, 11, "Ramazan Bayramı 2. Gün", FULL),
    (2024, 4, 12, "Ramazan Bayramı 3. Gün", FULL),
    (2024, 6, 15, "Kurban Bayramı Arifesi", HALF),
    (2024, 6, 16, "Kurban Bayramı 1. Gün", FULL),
    (2024, 6, 17, "Kurban Bayramı 2. Gün", FULL),
    (2024, 6, 18, "Kurban Bayramı 3. Gün", FULL),
    (2024, 6, 19, "Kurban Bayramı 4. Gün", FULL),
    (2025, 3, 29, "Ramazan Bayramı Arifesi", HALF),
    (2025, 3, 30, "Ramazan Bayramı 1. Gün", FULL),
    (2025, 3, 31, "Ramazan Bayramı 2. Gün", FULL),
    (2025, 4, 1, "Ramazan Bayramı 3. Gün", FULL),
    (2025, 6, 5, "Kurban Bayramı Arifesi", HALF),
    (2025, 6, 6, "Kurban Bayramı 1. Gün", FULL),
    (2025, 6, 7, "Kurban Bayramı 2. Gün", FULL),
    (2025, 6, 8, "Kurban Bayramı 3. Gün", FULL),
    (2025, 6, 9, "Kurban Bayramı 4. Gün", FULL),
    (2026, 3, 19, "Ramazan Bayramı Arifesi", HALF),
    (2026, 3, 20, "Ramazan Bayramı 1. Gün", FULL),
    (2026, 3, 21, "Ramazan Bayramı 2. Gün", FULL),
    (2026, 3, 22, "Ramazan Bayramı 3. Gün", FULL),
    (2026, 5, 26, "Kurban Bayramı Arifesi", HALF),
    (2026, 5, 27, "Kurban Bayramı 1. Gün", FULL),
    (2026, 5, 28, "Kurban Bayramı 2. Gün", FULL),
    (2026, 5, 29, "Kurban Bayramı 3. Gün", FULL),
    (2026, 5, 30, "Kurban Bayramı 4. Gün", FULL),
    (2027, 3, 8, "Ramazan Bayramı Arifesi", HALF),
    (2027, 3, 9, "Ramazan Bayramı 1. Gün", FULL),
    (2027, 3, 10, "Ramazan Bayramı 2. Gün", FULL),
    (2027, 3, 11, "Ramazan Bayramı 3. Gün", FULL),
    (2027, 5, 15, "Kurban Bayramı Arifesi", HALF),
    (2027, 5, 16, "Kurban Bayramı 1. Gün", FULL),
    (2027, 5, 17, "Kurban Bayramı 2. Gün", FULL),
    (2027, 5, 18, "Kurban Bayramı 3. Gün", FULL),
    (2027, 5, 19, "Kurban Bayramı 4. Gün", FULL),
];

/// First and last year covered by the built-in table.
pub const EMBEDDED_YEARS: (i32, i32) = (2024, 2027);

/// Builds the full built-in table.
///
/// Where a religious holiday falls on a fixed holiday (e.g. 19 May 2027)
/// the religious entry wins.
pub fn embedded_records() -> Vec<HolidayRecord> {
    let mut records = Vec::new();
    for year in EMBEDDED_YEARS.0..=EMBEDDED_YEARS.1 {
        for &(month, day, name, kind) in FIXED {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                records.push(HolidayRecord {
                    date,
                    name: name.to_string(),
                    kind,
                });
            }
        }
    }
    for &(year, month, day, name, kind) in RELIGIOUS {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            records.push(HolidayRecord {
                date,
                name: name.to_string(),
                kind,
            });
        }
    }
    records
}
