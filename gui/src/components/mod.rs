// GUI components module
pub mod action_bar;
pub mod bar_chart;
pub mod input_panel;
pub mod results_panel;
pub mod roi_calculator;
pub mod stat_card;

pub use roi_calculator::FleetRoiCalculator;
