// Shared pieces
pub mod widgets;

// Equipment set pages
pub mod set_create;
pub mod set_detail;
pub mod set_edit;
pub mod set_list;

// Equipment catalog pages
pub mod equipment_create;
pub mod equipment_list;
