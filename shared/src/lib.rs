pub mod models;
pub mod utils;

pub use models::{CardAction, ChartBar, FleetInputs, FleetSizeBounds, StatMetric};
pub use utils::currency::{format_currency, parse_display_digits};
