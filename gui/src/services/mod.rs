// Services that connect the calculator core to the Dioxus runtime
pub mod counter_driver;
