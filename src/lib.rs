//! Dashboard de líneas de autobús de Amana Transportation
//!
//! Arquitectura MVVM:
//! - models: estructuras de datos del dominio
//! - data: dataset fijo embebido
//! - viewmodels: estado y lógica de la interfaz
//! - services: navegador y Leaflet
//! - components: vistas de Yew

pub mod components;
pub mod config;
pub mod data;
pub mod models;
pub mod services;
pub mod utils;
pub mod viewmodels;
