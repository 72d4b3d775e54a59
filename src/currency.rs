//! Display formatting for rupee amounts and percentages.

use finwise_config::Config;

/// How digits are grouped left of the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// 1,234,567
    Western,
    /// 12,34,567 (lakh/crore)
    Indian,
}

impl Grouping {
    pub fn for_locale(locale: &str) -> Self {
        if locale.to_ascii_uppercase().ends_with("-IN") || locale.ends_with("_IN") {
            Grouping::Indian
        } else {
            Grouping::Western
        }
    }
}

/// Formats whole-currency amounts the way the calculators display them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping: Grouping,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: currency_symbol("INR"),
            grouping: Grouping::Indian,
        }
    }
}

impl CurrencyFormat {
    pub fn from_config(config: &Config) -> Self {
        Self {
            symbol: currency_symbol(&config.currency),
            grouping: Grouping::for_locale(&config.locale),
        }
    }

    /// Rounds to whole units and groups digits, e.g. `₹12,397` or `-₹1,50,000`.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{}-", self.symbol);
        }
        let rounded = value.round();
        let digits = format!("{:.0}", rounded.abs());
        let grouped = group_digits(&digits, self.grouping);
        if rounded < 0.0 {
            format!("-{}{}", self.symbol, grouped)
        } else {
            format!("{}{}", self.symbol, grouped)
        }
    }
}

/// Maps ISO codes to display symbols; unknown codes render as `CODE `.
pub fn currency_symbol(code: &str) -> String {
    match code.to_ascii_uppercase().as_str() {
        "INR" => "\u{20b9}".into(),
        "USD" => "$".into(),
        "EUR" => "\u{20ac}".into(),
        "GBP" => "\u{a3}".into(),
        other => format!("{other} "),
    }
}

fn group_digits(digits: &str, grouping: Grouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(len - 3);
    let step = match grouping {
        Grouping::Western => 3,
        Grouping::Indian => 2,
    };
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// One decimal place, e.g. `43.8%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn western() -> CurrencyFormat {
        CurrencyFormat {
            symbol: "\u{20b9}".into(),
            grouping: Grouping::Western,
        }
    }

    #[test]
    fn groups_western_thousands() {
        assert_eq!(western().format(12_397.24), "\u{20b9}12,397");
        assert_eq!(western().format(1_234_567.0), "\u{20b9}1,234,567");
        assert_eq!(western().format(650.0), "\u{20b9}650");
    }

    #[test]
    fn huge_amounts_keep_every_digit() {
        assert_eq!(
            western().format(1e20),
            "\u{20b9}100,000,000,000,000,000,000"
        );
        assert_eq!(
            western().format(-3.5e19),
            "-\u{20b9}35,000,000,000,000,000,000"
        );
    }

    #[test]
    fn groups_indian_lakhs() {
        let format = CurrencyFormat::default();
        assert_eq!(format.format(150_000.0), "\u{20b9}1,50,000");
        assert_eq!(format.format(12_345_678.0), "\u{20b9}1,23,45,678");
        assert_eq!(format.format(-2_500.0), "-\u{20b9}2,500");
    }

    #[test]
    fn locale_selects_grouping() {
        assert_eq!(Grouping::for_locale("en-IN"), Grouping::Indian);
        assert_eq!(Grouping::for_locale("hi_IN"), Grouping::Indian);
        assert_eq!(Grouping::for_locale("en-US"), Grouping::Western);
    }

    #[test]
    fn unknown_currency_uses_code() {
        let mut config = Config::default();
        config.currency = "JPY".into();
        config.locale = "ja-JP".into();
        assert_eq!(CurrencyFormat::from_config(&config).format(1_000.0), "JPY 1,000");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(43.846), "43.8%");
    }
}
