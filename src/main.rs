use ciudad_consulta::domain::model::{FeedScan, RoadsReport, WeatherReport};
use ciudad_consulta::utils::{logger, text::title_case, validation::Validate};
use ciudad_consulta::{
    CityReport, CliConfig, ConsultaEngine, FileConfig, HttpFeedFetcher, LocalResources,
    NoopFeedFetcher,
};
use clap::Parser;

const SUMMARY_DISPLAY_CHARS: usize = 300;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting ciudad-consulta CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let file_config = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let config = cli.resolve(file_config.as_ref());

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if cli.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let store = LocalResources::new(".".to_string());

    // the feed capability is chosen once, at startup
    let result = if config.news_enabled {
        let fetcher = HttpFeedFetcher::new(reqwest::Client::new());
        let engine = ConsultaEngine::new_with_monitoring(fetcher, store, config, cli.monitor);
        engine.run(&cli.ciudad, &cli.filtro).await
    } else {
        let engine = ConsultaEngine::new_with_monitoring(NoopFeedFetcher, store, config, cli.monitor);
        engine.run(&cli.ciudad, &cli.filtro).await
    };

    match result {
        Ok(report) => render_report(&report),
        Err(e) => {
            tracing::error!("❌ Consulta failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn render_report(report: &CityReport) {
    println!();
    println!("🌤 Clima actual – {}", title_case(&report.city));
    match &report.weather {
        WeatherReport::Current {
            condition,
            temp_c,
            humidity,
        } => {
            println!("   Condición: {}", condition);
            println!("   Temperatura: {} °C", temp_c);
            println!("   Humedad: {} %", humidity);
        }
        WeatherReport::MissingParams => {
            println!("⚠️ No se puede consultar el clima: falta ciudad o clave de API.");
        }
        WeatherReport::ConnectionError(msg) => {
            println!("❌ Error de conexión: {}", msg);
        }
        WeatherReport::Unavailable => {
            println!("⚠️ No se pudo obtener el clima.");
        }
    }

    println!("---");
    println!("📰 Noticias de orden público (filtradas por ciudad)");
    if !report.news_available {
        println!("⚠️ La capacidad de noticias está deshabilitada. No se pueden mostrar noticias.");
    } else if report.news.is_empty() {
        println!("Sin noticias de orden público al momento.");
    } else {
        for item in &report.news {
            println!("• {}", item.title);
            if !item.summary.is_empty() {
                println!("  {}", truncate_summary(&item.summary, SUMMARY_DISPLAY_CHARS));
            }
            println!("  {}", item.link);
        }
    }

    if let Some(warning) = &report.municipios_warning {
        println!("⚠️ {}", warning);
    }
    let skipped = report
        .scans
        .iter()
        .filter(|s| matches!(s, FeedScan::Skipped { .. }))
        .count();
    if skipped > 0 {
        println!("({} fuentes no disponibles)", skipped);
    }

    println!("---");
    println!("🚧 Estado de las vías en Colombia");
    match &report.roads {
        RoadsReport::Table(records) if records.is_empty() => {
            println!("Sin tramos coincidentes.");
        }
        RoadsReport::Table(records) => {
            println!("{:<40} {:<30} {:<12} OBSERVACIÓN", "SECTOR", "TRAMO", "ESTADO");
            for r in records {
                println!(
                    "{:<40} {:<30} {:<12} {}",
                    r.sector, r.tramo, r.estado, r.observacion
                );
            }
        }
        RoadsReport::LoadError(msg) => {
            println!("❌ Error al cargar el archivo de vías: {}", msg);
        }
    }

    println!();
    println!("✅ Actualizado: {}", report.generated_at.format("%d/%m %H:%M"));
}

fn truncate_summary(summary: &str, max_chars: usize) -> String {
    let mut out: String = summary.chars().take(max_chars).collect();
    if summary.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}
