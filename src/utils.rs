//! Utility functions

/// Format an amount with thousands separators and no decimals, e.g. `$ 189.000`
///
/// Spanish-speaking locales group with `.`; English uses `,`.
pub fn format_price(amount: f64, currency: &str, language: crate::i18n::Language) -> String {
    let separator = match language {
        crate::i18n::Language::English => ',',
        crate::i18n::Language::Spanish => '.',
    };

    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{}", rounded.abs() as u64);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{} {}{}", sign, currency_symbol(currency), grouped, currency_suffix(currency))
}

fn currency_symbol(currency: &str) -> &'static str {
    match currency {
        "EUR" => "€",
        "BRL" => "R$",
        _ => "$",
    }
}

/// Disambiguate dollar-sign currencies other than the local one
fn currency_suffix(currency: &str) -> String {
    match currency {
        "ARS" | "EUR" | "BRL" | "" => String::new(),
        other => format!(" {}", other),
    }
}

/// Short reference for an order, unique enough to correlate payment callbacks
pub fn order_reference(user_id: &str, timestamp_ms: i64) -> String {
    let user: String = user_id.chars().filter(|c| c.is_ascii_alphanumeric()).take(8).collect();
    format!("VY-{}-{}", user, timestamp_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn groups_thousands_per_language() {
        assert_eq!(format_price(189_000.0, "ARS", Language::Spanish), "$ 189.000");
        assert_eq!(format_price(189_000.0, "ARS", Language::English), "$ 189,000");
        assert_eq!(
            format_price(1_234_567.4, "ARS", Language::English),
            "$ 1,234,567"
        );
    }

    #[test]
    fn small_and_zero_amounts() {
        assert_eq!(format_price(0.0, "ARS", Language::English), "$ 0");
        assert_eq!(format_price(999.5, "ARS", Language::English), "$ 1,000");
        assert_eq!(format_price(-2500.0, "ARS", Language::Spanish), "-$ 2.500");
    }

    #[test]
    fn foreign_currencies_are_labelled() {
        assert_eq!(format_price(500.0, "USD", Language::English), "$ 500 USD");
        assert_eq!(format_price(500.0, "EUR", Language::English), "€ 500");
    }

    #[test]
    fn order_reference_strips_punctuation() {
        assert_eq!(
            order_reference("3f2a-91bc-77de", 1_700_000_000_000),
            "VY-3f2a91bc-1700000000000"
        );
    }
}
