//! Convert command handler

use super::utils::{load_document, load_rules, save_document};
use crate::cli::ConvertArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use jsonmapper_core::{CoercionMode, Mapper};

/// Handle the convert command
pub fn handle_convert(args: ConvertArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let source = load_document(&args.source)?;
    let rules = load_rules(&args.rules)?;

    let mut options = config.mapper_options();
    if args.type_driven {
        options.coercion_mode = CoercionMode::TypeDriven;
    }
    let mapper = Mapper::with_options(options);

    let timer = Timer::with_details("convert", &args.source.display().to_string());
    let converted = mapper.convert(&source, &rules)?;
    tracing::info!(
        rules = rules.len(),
        coercion_mode = %mapper.options().coercion_mode,
        elapsed_us = timer.elapsed().as_micros() as u64,
        "Document converted"
    );
    drop(timer);

    match &args.save_to {
        Some(path) => {
            save_document(path, &converted)?;
            output.success(&format!("Converted document written to {}", path.display()))
        }
        None => output.data(&converted),
    }
}
