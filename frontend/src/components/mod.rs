pub mod fields;
pub mod handlers;
pub mod header;
pub mod image_diagnosis;
pub mod pie_chart;
pub mod preview_area;
pub mod results;
pub mod survey_form;
pub mod upload_section;
pub mod utils;
