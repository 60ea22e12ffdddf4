use std::sync::Arc;

use dashmap::DashMap;

/// Active ISO 4217 alpha-3 currency codes.
const ISO_4217_CODES: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN", "BAM", "BBD", "BDT",
    "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BRL", "BSD", "BTN", "BWP", "BYN", "BZD", "CAD",
    "CDF", "CHF", "CLP", "CNY", "COP", "CRC", "CUP", "CVE", "CZK", "DJF", "DKK", "DOP", "DZD",
    "EGP", "ERN", "ETB", "EUR", "FJD", "FKP", "GBP", "GEL", "GHS", "GIP", "GMD", "GNF", "GTQ",
    "GYD", "HKD", "HNL", "HTG", "HUF", "IDR", "ILS", "INR", "IQD", "IRR", "ISK", "JMD", "JOD",
    "JPY", "KES", "KGS", "KHR", "KMF", "KPW", "KRW", "KWD", "KYD", "KZT", "LAK", "LBP", "LKR",
    "LRD", "LSL", "LYD", "MAD", "MDL", "MGA", "MKD", "MMK", "MNT", "MOP", "MRU", "MUR", "MVR",
    "MWK", "MXN", "MYR", "MZN", "NAD", "NGN", "NIO", "NOK", "NPR", "NZD", "OMR", "PAB", "PEN",
    "PGK", "PHP", "PKR", "PLN", "PYG", "QAR", "RON", "RSD", "RUB", "RWF", "SAR", "SBD", "SCR",
    "SDG", "SEK", "SGD", "SHP", "SLE", "SOS", "SRD", "SSP", "STN", "SVC", "SYP", "SZL", "THB",
    "TJS", "TMT", "TND", "TOP", "TRY", "TTD", "TWD", "TZS", "UAH", "UGX", "USD", "UYU", "UZS",
    "VES", "VND", "VUV", "WST", "XAF", "XCD", "XOF", "XPF", "YER", "ZAR", "ZMW", "ZWG",
];

/// Why a currency input was rejected before reaching the fetch stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyRejection {
    /// The caller-supplied code is not a known ISO 4217 currency.
    InvalidFormat,
    /// The configured default currency itself failed validation.
    InvalidDefault,
}

/// Pluggable authority on whether a well-formed code names a real currency.
///
/// The default table covers current tender currencies; a format-only
/// validator is available when precision matters less than recall.
#[cfg_attr(test, mockall::automock)]
pub trait CurrencyValidator: Send + Sync {
    fn is_known(&self, code: &str) -> bool;
}

/// Validator backed by the static ISO 4217 table.
#[derive(Debug, Clone, Default)]
pub struct Iso4217Validator;

impl CurrencyValidator for Iso4217Validator {
    fn is_known(&self, code: &str) -> bool {
        ISO_4217_CODES.binary_search(&code).is_ok()
    }
}

/// Accepts any well-formed three-letter code. Best-effort fallback when no
/// authoritative source is wanted; trades precision for recall.
#[derive(Debug, Clone, Default)]
pub struct FormatOnlyValidator;

impl CurrencyValidator for FormatOnlyValidator {
    fn is_known(&self, _code: &str) -> bool {
        true
    }
}

/// Memoizing wrapper. Validation is a pure function of the code, so the
/// process-wide cache needs no invalidation.
pub struct CachedCurrencyValidator {
    inner: Arc<dyn CurrencyValidator>,
    cache: DashMap<String, bool>,
}

impl CachedCurrencyValidator {
    pub fn new(inner: Arc<dyn CurrencyValidator>) -> Self {
        Self {
            inner,
            cache: DashMap::new(),
        }
    }
}

impl Default for CachedCurrencyValidator {
    fn default() -> Self {
        Self::new(Arc::new(Iso4217Validator))
    }
}

impl CurrencyValidator for CachedCurrencyValidator {
    fn is_known(&self, code: &str) -> bool {
        if let Some(hit) = self.cache.get(code) {
            return *hit;
        }
        let known = self.inner.is_known(code);
        self.cache.insert(code.to_string(), known);
        known
    }
}

fn is_well_formed(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

fn is_valid(code: &str, validator: &dyn CurrencyValidator) -> bool {
    is_well_formed(code) && validator.is_known(code)
}

/// Resolve the effective currency for an operation.
///
/// Caller input (any letter case) is trimmed and uppercased before
/// validation; an omitted input falls back to the configured default, which
/// is validated the same way but rejected with a distinct reason.
pub fn resolve_currency(
    requested: Option<&str>,
    default: &str,
    validator: &dyn CurrencyValidator,
) -> Result<String, CurrencyRejection> {
    match requested {
        None => {
            let code = default.trim().to_uppercase();
            if is_valid(&code, validator) {
                Ok(code)
            } else {
                Err(CurrencyRejection::InvalidDefault)
            }
        }
        Some(raw) => {
            let code = raw.trim().to_uppercase();
            if is_valid(&code, validator) {
                Ok(code)
            } else {
                Err(CurrencyRejection::InvalidFormat)
            }
        }
    }
}
