pub mod lookup;
pub mod tally;

pub use lookup::LookupRequest;
