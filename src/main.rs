use amana_dashboard::data::dataset;
use amana_dashboard::utils::validation::validate_dataset;
use validator::ValidationErrors;

/// Validar el dataset embebido y dejar constancia en el log
fn check_dataset() -> Result<(), ValidationErrors> {
    let result = validate_dataset(dataset());
    match &result {
        Ok(()) => log::info!(
            "✅ Dataset válido: {} líneas de {}",
            dataset().bus_lines.len(),
            dataset().company.name
        ),
        Err(e) => log::error!("❌ Dataset inválido: {}", e),
    }
    result
}

#[cfg(target_arch = "wasm32")]
fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚌 Amana Transportation - Bus Dashboard");

    // En el navegador la página se pinta aunque el dataset falle
    check_dataset().ok();

    yew::Renderer::<amana_dashboard::components::App>::new().render();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> amana_dashboard::utils::AppResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("🚌 Amana Transportation - Bus Dashboard");
    log::info!("================================================");

    check_dataset()?;

    let summary = serde_json::to_string_pretty(&dataset().operational_summary)?;
    log::info!("📊 Resumen operativo:\n{}", summary);
    log::info!("🌐 La interfaz se ejecuta en el navegador (trunk serve)");

    Ok(())
}
