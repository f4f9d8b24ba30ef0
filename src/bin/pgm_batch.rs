use pgm_processor::config::pipeline::{load_config, PipelineConfig};
use pgm_processor::diagnostics::{elapsed_ms, RunReport};
use pgm_processor::edges::{CannyResult, EdgeDetector};
use pgm_processor::image::io::{save_grayscale_f32, save_pgm, write_json_file};
use pgm_processor::{Operation, Session};
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    let start = Instant::now();

    let mut session = Session::new();
    session.load(&config.input).map_err(|e| e.to_string())?;

    let mut operations = Vec::with_capacity(config.operations.len());
    for (step, op) in config.operations.iter().enumerate() {
        let failed = |e: pgm_processor::ProcessError| format!("step {step} ({op}) failed: {e}");
        let report = match (op, &config.output.canny_stages_dir) {
            (
                Operation::Edge {
                    detector: EdgeDetector::Canny,
                },
                Some(dir),
            ) => {
                let (report, detailed) = session.apply_canny().map_err(failed)?;
                save_canny_stages(&dir.join(format!("step{step:02}")), &detailed)?;
                report
            }
            _ => session.apply(*op).map_err(failed)?,
        };
        println!(
            "[{step}] {}: {}x{} -> {}x{} ({:.3} ms)",
            report.operation,
            report.input.width,
            report.input.height,
            report.output.width,
            report.output.height,
            report.timing.total_ms
        );
        operations.push(report);
    }

    session
        .save(&config.output.image)
        .map_err(|e| e.to_string())?;
    println!("Saved result to {}", config.output.image.display());

    write_report(&config, operations, elapsed_ms(start))
}

fn save_canny_stages(dir: &Path, detailed: &CannyResult) -> Result<(), String> {
    save_grayscale_f32(&detailed.blurred, &dir.join("blurred.png")).map_err(|e| e.to_string())?;
    save_grayscale_f32(&detailed.gradient.magnitude, &dir.join("magnitude.png"))
        .map_err(|e| e.to_string())?;
    save_pgm(&detailed.suppressed, &dir.join("suppressed.pgm")).map_err(|e| e.to_string())?;
    println!("Canny intermediates written to {}", dir.display());
    Ok(())
}

fn write_report(
    config: &PipelineConfig,
    operations: Vec<pgm_processor::diagnostics::OperationReport>,
    total_ms: f64,
) -> Result<(), String> {
    let Some(path) = &config.output.report_json else {
        return Ok(());
    };
    let report = RunReport {
        input_path: config.input.display().to_string(),
        output_path: config.output.image.display().to_string(),
        operations,
        total_ms,
    };
    write_json_file(path, &report).map_err(|e| e.to_string())?;
    println!("Report written to {}", path.display());
    Ok(())
}

fn usage() -> String {
    "Usage: pgm_batch <config.json>".to_string()
}
