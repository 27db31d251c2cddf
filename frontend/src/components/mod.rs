pub mod registration_modal;
