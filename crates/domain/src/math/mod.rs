pub mod distribution;
pub mod fixed_point;

pub use distribution::{calculate_annualized_yield, calculate_share};
pub use fixed_point::{format_percentage, parse_from_display_string, to_display_string};
