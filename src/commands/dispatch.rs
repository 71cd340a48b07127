//! Command dispatch logic for floodfill
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::time::Instant;

use floodfill_core::config::{FillConfig, RenderConfig};
use floodfill_core::error::Result;
use floodfill_core::graph::{create_graph, decode_input, Algorithm};
use floodfill_core::render::Renderer;
use floodfill_core::trace_time;

use crate::cli::{Cli, OutputFormat};
use crate::commands;

/// Settings after layering CLI flags over the config file
#[derive(Debug)]
struct Settings {
    render: RenderConfig,
    algorithms: Vec<Algorithm>,
}

fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let config = match &cli.config {
        Some(path) => FillConfig::load(path)?,
        None => FillConfig::default(),
    };

    let mut render = config.render;
    if let Some(color) = cli.color {
        render.color = color;
    }

    let algorithms = if cli.algorithms.is_empty() {
        config.traversal.algorithms
    } else {
        cli.algorithms.clone()
    };

    Ok(Settings { render, algorithms })
}

fn read_input(cli: &Cli) -> Result<String> {
    let bytes = match &cli.input {
        Some(path) => fs::read(path)?,
        None => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            bytes
        }
    };
    decode_input(bytes)
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let settings = resolve_settings(cli)?;
    tracing::debug!(?settings, "resolved settings");

    let data = read_input(cli)?;
    trace_time!(start, "read_input");

    // Any input error surfaces here, before a single byte of output.
    let parsed = create_graph(&data)?;
    trace_time!(start, "create_graph");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.format {
        OutputFormat::Human => {
            let renderer = Renderer::new(&settings.render);
            commands::fill::execute(
                &mut out,
                parsed,
                &renderer,
                &settings.algorithms,
                !cli.quiet,
            )?;
        }
        OutputFormat::Json => {
            commands::output::execute(&mut out, parsed, &settings.algorithms)?;
        }
    }

    out.flush()?;
    trace_time!(start, "done");
    Ok(())
}
