/// Standard ISO 4217 metadata for a currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsoCurrency {
    /// Three-letter alphabetic code (e.g. "EUR")
    pub code: &'static str,
    /// Three-digit numeric code (e.g. 978)
    pub numeric: u16,
    /// Default fraction digits; `None` where ISO defines no minor unit (metals)
    pub minor_units: Option<u8>,
    /// Display symbol
    pub symbol: &'static str,
    /// English name
    pub name: &'static str,
}

impl IsoCurrency {
    /// Look up a currency by its alphabetic code (exact, case-sensitive)
    pub fn find(code: &str) -> Option<&'static IsoCurrency> {
        ISO_4217.iter().find(|c| c.code == code)
    }

    /// Look up a currency by its numeric code
    pub fn find_numeric(numeric: u16) -> Option<&'static IsoCurrency> {
        ISO_4217.iter().find(|c| c.numeric == numeric)
    }

    /// Every known currency, in table order
    pub fn all() -> &'static [IsoCurrency] {
        ISO_4217
    }
}

const fn iso(
    code: &'static str,
    numeric: u16,
    minor_units: Option<u8>,
    symbol: &'static str,
    name: &'static str,
) -> IsoCurrency {
    IsoCurrency {
        code,
        numeric,
        minor_units,
        symbol,
        name,
    }
}

/// Commonly traded ISO 4217 currencies and precious metals
static ISO_4217: &[IsoCurrency] = &[
    iso("USD", 840, Some(2), "$", "US Dollar"),
    iso("EUR", 978, Some(2), "€", "Euro"),
    iso("GBP", 826, Some(2), "£", "Pound Sterling"),
    iso("JPY", 392, Some(0), "¥", "Yen"),
    iso("CHF", 756, Some(2), "CHF", "Swiss Franc"),
    iso("AUD", 36, Some(2), "A$", "Australian Dollar"),
    iso("CAD", 124, Some(2), "CA$", "Canadian Dollar"),
    iso("NZD", 554, Some(2), "NZ$", "New Zealand Dollar"),
    iso("SEK", 752, Some(2), "kr", "Swedish Krona"),
    iso("NOK", 578, Some(2), "kr", "Norwegian Krone"),
    iso("DKK", 208, Some(2), "kr", "Danish Krone"),
    iso("PLN", 985, Some(2), "zł", "Zloty"),
    iso("CZK", 203, Some(2), "Kč", "Czech Koruna"),
    iso("HUF", 348, Some(2), "Ft", "Forint"),
    iso("RON", 946, Some(2), "lei", "Romanian Leu"),
    iso("TRY", 949, Some(2), "₺", "Turkish Lira"),
    iso("RUB", 643, Some(2), "₽", "Russian Ruble"),
    iso("ZAR", 710, Some(2), "R", "Rand"),
    iso("ILS", 376, Some(2), "₪", "New Israeli Sheqel"),
    iso("MXN", 484, Some(2), "MX$", "Mexican Peso"),
    iso("BRL", 986, Some(2), "R$", "Brazilian Real"),
    iso("SGD", 702, Some(2), "S$", "Singapore Dollar"),
    iso("HKD", 344, Some(2), "HK$", "Hong Kong Dollar"),
    iso("CNY", 156, Some(2), "CN¥", "Yuan Renminbi"),
    iso("INR", 356, Some(2), "₹", "Indian Rupee"),
    iso("KRW", 410, Some(0), "₩", "Won"),
    iso("THB", 764, Some(2), "฿", "Baht"),
    iso("AED", 784, Some(2), "AED", "UAE Dirham"),
    iso("SAR", 682, Some(2), "SAR", "Saudi Riyal"),
    iso("KWD", 414, Some(3), "KWD", "Kuwaiti Dinar"),
    iso("BHD", 48, Some(3), "BHD", "Bahraini Dinar"),
    iso("XAU", 959, None, "XAU", "Gold"),
    iso("XAG", 961, None, "XAG", "Silver"),
];
