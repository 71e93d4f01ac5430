//! Formatting options attached to number and date/time arguments.
//! 数字与日期/时间参数上的格式选项。
//!
//! The field names and values follow the `Intl.NumberFormat` and
//! `Intl.DateTimeFormat` option bags so renderers can hand them over as-is.

use serde::Serialize;

/// Number display style.
/// 数字显示样式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NumberStyle {
    Percent,
}

/// Options for a `{x, number, ...}` argument.
/// `{x, number, ...}` 参数的选项。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberFormatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<NumberStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_fraction_digits: Option<u8>,
}

impl NumberFormatOptions {
    /// The `integer` style: no fractional digits.
    pub fn integer() -> Self {
        Self {
            maximum_fraction_digits: Some(0),
            ..Self::default()
        }
    }

    /// The `percent` style.
    pub fn percent() -> Self {
        Self {
            style: Some(NumberStyle::Percent),
            ..Self::default()
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Named date or time style.
/// 命名的日期或时间样式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateTimeStyle {
    Short,
    Medium,
    Long,
    Full,
}

impl DateTimeStyle {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "short" => Some(DateTimeStyle::Short),
            "medium" => Some(DateTimeStyle::Medium),
            "long" => Some(DateTimeStyle::Long),
            "full" => Some(DateTimeStyle::Full),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateTimeStyle::Short => "short",
            DateTimeStyle::Medium => "medium",
            DateTimeStyle::Long => "long",
            DateTimeStyle::Full => "full",
        }
    }
}

/// Width of a single calendar field.
/// 单个日历字段的宽度。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldStyle {
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
    Short,
    Long,
    Narrow,
    ShortOffset,
    LongOffset,
    ShortGeneric,
    LongGeneric,
}

impl FieldStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldStyle::Numeric => "numeric",
            FieldStyle::TwoDigit => "2-digit",
            FieldStyle::Short => "short",
            FieldStyle::Long => "long",
            FieldStyle::Narrow => "narrow",
            FieldStyle::ShortOffset => "shortOffset",
            FieldStyle::LongOffset => "longOffset",
            FieldStyle::ShortGeneric => "shortGeneric",
            FieldStyle::LongGeneric => "longGeneric",
        }
    }
}

/// Hour numbering.
/// 小时制。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HourCycle {
    /// 0-11 / 0 到 11
    H11,
    /// 1-12 / 1 到 12
    H12,
    /// 0-23 / 0 到 23
    H23,
    /// 1-24 / 1 到 24
    H24,
}

/// Options for a `{x, date, ...}` or `{x, time, ...}` argument.
/// `{x, date, ...}` 或 `{x, time, ...}` 参数的选项。
///
/// Either one of the two styles is set, or a combination of fields taken
/// from a skeleton.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeFormatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_style: Option<DateTimeStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_style: Option<DateTimeStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub era: Option<FieldStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<FieldStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<FieldStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<FieldStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<FieldStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_period: Option<FieldStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<FieldStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<FieldStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<FieldStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fractional_second_digits: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone_name: Option<FieldStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_cycle: Option<HourCycle>,
}

impl DateTimeFormatOptions {
    pub fn date(style: DateTimeStyle) -> Self {
        Self {
            date_style: Some(style),
            ..Self::default()
        }
    }

    pub fn time(style: DateTimeStyle) -> Self {
        Self {
            time_style: Some(style),
            ..Self::default()
        }
    }

    fn style_slot(&mut self, field: DateField) -> Option<&mut Option<FieldStyle>> {
        match field {
            DateField::Era => Some(&mut self.era),
            DateField::Year => Some(&mut self.year),
            DateField::Month => Some(&mut self.month),
            DateField::Weekday => Some(&mut self.weekday),
            DateField::Day => Some(&mut self.day),
            DateField::DayPeriod => Some(&mut self.day_period),
            DateField::Hour => Some(&mut self.hour),
            DateField::Minute => Some(&mut self.minute),
            DateField::Second => Some(&mut self.second),
            DateField::TimeZoneName => Some(&mut self.time_zone_name),
            DateField::FractionalSecondDigits => None,
        }
    }

    /// Set a field from a skeleton value. Mismatched pairs are ignored.
    pub fn set(&mut self, field: DateField, value: SkeletonValue) {
        match (field, value) {
            (DateField::FractionalSecondDigits, SkeletonValue::Digits(digits)) => {
                self.fractional_second_digits = Some(digits);
            }
            (field, SkeletonValue::Style(style)) => {
                if let Some(slot) = self.style_slot(field) {
                    *slot = Some(style);
                }
            }
            _ => {}
        }
    }

    pub fn get(&self, field: DateField) -> Option<SkeletonValue> {
        let style = match field {
            DateField::Era => self.era,
            DateField::Year => self.year,
            DateField::Month => self.month,
            DateField::Weekday => self.weekday,
            DateField::Day => self.day,
            DateField::DayPeriod => self.day_period,
            DateField::Hour => self.hour,
            DateField::Minute => self.minute,
            DateField::Second => self.second,
            DateField::TimeZoneName => self.time_zone_name,
            DateField::FractionalSecondDigits => {
                return self.fractional_second_digits.map(SkeletonValue::Digits);
            }
        };
        style.map(SkeletonValue::Style)
    }

    /// Whether any field that renders an actual date or time value is set.
    pub fn has_required_field(&self) -> bool {
        DateField::ALL
            .iter()
            .any(|field| field.is_required() && self.get(*field).is_some())
    }
}

/// A calendar field addressable from a date skeleton.
/// 日期骨架可设置的日历字段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Era,
    Year,
    Month,
    Weekday,
    Day,
    DayPeriod,
    Hour,
    Minute,
    Second,
    FractionalSecondDigits,
    TimeZoneName,
}

impl DateField {
    /// Canonical skeleton order.
    pub const ALL: [DateField; 11] = [
        DateField::Era,
        DateField::Year,
        DateField::Month,
        DateField::Weekday,
        DateField::Day,
        DateField::DayPeriod,
        DateField::Hour,
        DateField::Minute,
        DateField::Second,
        DateField::FractionalSecondDigits,
        DateField::TimeZoneName,
    ];

    /// Era and time zone name decorate a value but cannot stand alone.
    pub fn is_required(self) -> bool {
        !matches!(self, DateField::Era | DateField::TimeZoneName)
    }
}

/// A value a skeleton symbol assigns to its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkeletonValue {
    Style(FieldStyle),
    Digits(u8),
}

/// One skeleton letter: the field it sets and the value for each repeat
/// count (index 0 is a single letter). `None` entries are unmapped counts.
/// 一个骨架字母：它设置的字段以及每种重复次数对应的值。
#[derive(Debug)]
pub struct SkeletonSymbol {
    pub letter: char,
    pub field: DateField,
    pub values: &'static [Option<SkeletonValue>],
    pub hour_cycle: Option<HourCycle>,
}

impl SkeletonSymbol {
    pub fn value(&self, count: usize) -> Option<SkeletonValue> {
        count
            .checked_sub(1)
            .and_then(|index| self.values.get(index).copied().flatten())
    }
}

const fn style(style: FieldStyle) -> Option<SkeletonValue> {
    Some(SkeletonValue::Style(style))
}

const NUMERIC: &[Option<SkeletonValue>] = &[style(FieldStyle::Numeric), style(FieldStyle::TwoDigit)];

const TEXT: &[Option<SkeletonValue>] = &[
    style(FieldStyle::Short),
    style(FieldStyle::Short),
    style(FieldStyle::Short),
    style(FieldStyle::Long),
    style(FieldStyle::Narrow),
];

const MONTH: &[Option<SkeletonValue>] = &[
    style(FieldStyle::Numeric),
    style(FieldStyle::TwoDigit),
    style(FieldStyle::Short),
    style(FieldStyle::Long),
    style(FieldStyle::Narrow),
];

const FRACTION: &[Option<SkeletonValue>] = &[
    Some(SkeletonValue::Digits(1)),
    Some(SkeletonValue::Digits(2)),
    Some(SkeletonValue::Digits(3)),
];

const ZONE_SPECIFIC: &[Option<SkeletonValue>] = &[
    style(FieldStyle::Short),
    style(FieldStyle::Short),
    style(FieldStyle::Short),
    style(FieldStyle::Long),
];

const ZONE_OFFSET: &[Option<SkeletonValue>] = &[
    style(FieldStyle::ShortOffset),
    None,
    None,
    style(FieldStyle::LongOffset),
];

const ZONE_GENERIC: &[Option<SkeletonValue>] = &[
    style(FieldStyle::ShortGeneric),
    None,
    None,
    style(FieldStyle::LongGeneric),
];

const fn symbol(letter: char, field: DateField, values: &'static [Option<SkeletonValue>]) -> SkeletonSymbol {
    SkeletonSymbol {
        letter,
        field,
        values,
        hour_cycle: None,
    }
}

const fn hour(letter: char, hour_cycle: HourCycle) -> SkeletonSymbol {
    SkeletonSymbol {
        letter,
        field: DateField::Hour,
        values: NUMERIC,
        hour_cycle: Some(hour_cycle),
    }
}

/// The recognized ICU skeleton letters.
/// 支持的 ICU 骨架字母。
///
/// `j` asks for the preferred hour of the locale; without one at parse time
/// it resolves to `h23`, after the explicit `H` entry so printing picks `H`.
pub const SKELETON_SYMBOLS: &[SkeletonSymbol] = &[
    symbol('G', DateField::Era, TEXT),
    symbol('y', DateField::Year, NUMERIC),
    symbol('M', DateField::Month, MONTH),
    symbol('L', DateField::Month, MONTH),
    symbol('E', DateField::Weekday, TEXT),
    symbol('d', DateField::Day, NUMERIC),
    symbol('a', DateField::DayPeriod, TEXT),
    symbol('B', DateField::DayPeriod, TEXT),
    hour('h', HourCycle::H12),
    hour('H', HourCycle::H23),
    hour('k', HourCycle::H24),
    hour('K', HourCycle::H11),
    hour('j', HourCycle::H23),
    symbol('m', DateField::Minute, NUMERIC),
    symbol('s', DateField::Second, NUMERIC),
    symbol('S', DateField::FractionalSecondDigits, FRACTION),
    symbol('z', DateField::TimeZoneName, ZONE_SPECIFIC),
    symbol('O', DateField::TimeZoneName, ZONE_OFFSET),
    symbol('v', DateField::TimeZoneName, ZONE_GENERIC),
];

pub fn skeleton_symbol(letter: char) -> Option<&'static SkeletonSymbol> {
    SKELETON_SYMBOLS.iter().find(|symbol| symbol.letter == letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_lookup() {
        let y = skeleton_symbol('y').expect("year symbol");
        assert_eq!(y.field, DateField::Year);
        assert_eq!(y.value(1), Some(SkeletonValue::Style(FieldStyle::Numeric)));
        assert_eq!(y.value(2), Some(SkeletonValue::Style(FieldStyle::TwoDigit)));
        assert_eq!(y.value(3), None);
        assert_eq!(y.value(0), None);
        assert!(skeleton_symbol('Q').is_none());
    }

    #[test]
    fn test_every_hour_letter_has_cycle() {
        for letter in ['h', 'H', 'k', 'K', 'j'] {
            let symbol = skeleton_symbol(letter).expect("hour symbol");
            assert_eq!(symbol.field, DateField::Hour);
            assert!(symbol.hour_cycle.is_some(), "{letter} has no hour cycle");
        }
        assert_eq!(skeleton_symbol('j').unwrap().hour_cycle, Some(HourCycle::H23));
    }

    #[test]
    fn test_offset_zone_gaps() {
        let o = skeleton_symbol('O').expect("zone symbol");
        assert!(o.value(1).is_some());
        assert!(o.value(2).is_none());
        assert_eq!(o.value(4), Some(SkeletonValue::Style(FieldStyle::LongOffset)));
    }

    #[test]
    fn test_required_fields() {
        let mut options = DateTimeFormatOptions::default();
        options.set(DateField::Era, SkeletonValue::Style(FieldStyle::Long));
        assert!(!options.has_required_field());
        options.set(DateField::FractionalSecondDigits, SkeletonValue::Digits(2));
        assert!(options.has_required_field());
        assert_eq!(options.fractional_second_digits, Some(2));
    }

    #[test]
    fn test_mismatched_value_ignored() {
        let mut options = DateTimeFormatOptions::default();
        options.set(DateField::Year, SkeletonValue::Digits(2));
        assert_eq!(options, DateTimeFormatOptions::default());
    }

    #[test]
    fn test_number_presets() {
        assert!(NumberFormatOptions::default().is_default());
        assert_eq!(NumberFormatOptions::integer().maximum_fraction_digits, Some(0));
        assert_eq!(NumberFormatOptions::percent().style, Some(NumberStyle::Percent));
    }
}
