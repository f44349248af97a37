//! Percent-escape templates over [`WadokeiTime`].
//!
//! | code | value                                   |
//! |------|-----------------------------------------|
//! | `%H` | whole hour `floor(hour)`                |
//! | `%M` | quarter ordinal, 1 to 4                 |
//! | `%T` | hour name (midnight/noon at the marks)  |
//! | `%b` | earthly-branch glyph                    |
//! | `%h` | bell count                              |
//! | `%m` | quarter glyph                           |
//! | `%p` | 昼 or 夜                                 |
//! | `%s` | heavenly-stem glyph                     |
//! | `%%` | a literal `%`                           |
//!
//! Any other code is emitted as written; rendering never fails.

use crate::reading::WadokeiTime;

/// Hour name, stem, branch and quarter, e.g. `真昼九ツ・戊午ノ四刻`.
pub const DEFAULT_FORMAT: &str = "%T・%s%bノ%m刻";

/// Expand `template` for `time`.
pub fn render(template: &str, time: &WadokeiTime) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(code) = chars.next() else {
            out.push('%');
            break;
        };
        match code {
            'H' => out.push_str(&time.whole_hour().to_string()),
            'M' => out.push_str(&time.quarter_ordinal().to_string()),
            'T' => out.push_str(time.toki_name()),
            'b' => out.push(time.branch()),
            'h' => out.push_str(&time.hour_number.to_string()),
            'm' => out.push(time.quarter()),
            'p' => out.push(time.day_night_glyph()),
            's' => out.push(time.stem_glyph()),
            '%' => out.push('%'),
            other => {
                out.push('%');
                out.push(other);
            }
        }
    }
    out
}
