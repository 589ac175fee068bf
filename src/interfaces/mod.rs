pub mod components;
pub mod design_system;
pub mod forecast_form;
pub mod results_panel;
pub mod ui;
