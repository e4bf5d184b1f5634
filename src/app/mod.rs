//! Módulo de la aplicación - estado y lógica

mod state;
mod actions;
mod event_handler;

pub use state::App;
// DialogResult se usa dentro del módulo actions
