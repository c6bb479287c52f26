// src/gui/components/mod.rs
pub mod action_buttons;
pub mod board_view;
pub mod export_bar;
