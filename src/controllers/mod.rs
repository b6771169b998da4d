pub mod insights_controller;
pub mod inventory_controller;
pub mod rental_controller;
