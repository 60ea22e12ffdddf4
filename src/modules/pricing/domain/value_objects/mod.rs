mod currency;
mod query_variants;

pub use currency::{
    CachedCurrencyValidator, CurrencyRejection, CurrencyValidator, FormatOnlyValidator,
    Iso4217Validator, resolve_currency,
};
pub use query_variants::QueryVariants;
