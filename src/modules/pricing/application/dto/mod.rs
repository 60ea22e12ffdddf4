mod outcome;
mod requests;
mod simplified_item;

pub use outcome::{
    ErrorNote, ErrorResult, PricingOutcome, SearchNote, SearchResult, PUBLIC_SUBSET_INFO,
};
pub use requests::{GetSkuRequest, SearchNameRequest};
pub use simplified_item::{PriceNote, SimplifiedItem};
