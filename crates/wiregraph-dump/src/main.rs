use std::fs;

use miette::{IntoDiagnostic, Result, miette};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use wiregraph::render::Primitive;
use wiregraph::{GraphRenderer, ParameterModel, PresetRegistry};

const USAGE: &str = "\
Usage: wiregraph-dump [options]

Generate a preset, render it, and print a JSON summary to stdout.

Options:
  --config <file>   Parameter model as JSON (missing keys take defaults)
  --preset <name>   Override the preset named in the config
  --seed <n>        Seed for random per-node radii/colors
  --list            Print the available preset names and exit
  -h, --help        Show this message";

#[derive(Default)]
struct Options {
    config: Option<String>,
    preset: Option<String>,
    seed: Option<u64>,
    list: bool,
}

fn parse_args() -> Result<Option<Options>> {
    let mut opts = Options::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => opts.config = Some(value_for(&arg, args.next())?),
            "--preset" => opts.preset = Some(value_for(&arg, args.next())?),
            "--seed" => {
                let raw = value_for(&arg, args.next())?;
                let seed = raw
                    .parse()
                    .map_err(|_| miette!("--seed expects an unsigned integer, got `{raw}`"))?;
                opts.seed = Some(seed);
            }
            "--list" => opts.list = true,
            "-h" | "--help" => return Ok(None),
            other => return Err(miette!("unknown argument `{other}`\n\n{USAGE}")),
        }
    }
    Ok(Some(opts))
}

fn value_for(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| miette!("{flag} needs a value"))
}

#[derive(Serialize)]
struct Summary {
    preset: String,
    nodes: Vec<[f64; 3]>,
    edges: Vec<[usize; 2]>,
    primitives: PrimitiveSummary,
}

#[derive(Serialize)]
struct PrimitiveSummary {
    markers: usize,
    connectors: usize,
    arrows: usize,
    geometries: usize,
    materials: usize,
    /// Column-major local-to-world transforms, in emission order
    transforms: Vec<[f64; 16]>,
}

fn main() -> Result<()> {
    // stdout carries the summary; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(opts) = parse_args()? else {
        println!("{USAGE}");
        return Ok(());
    };

    let registry = PresetRegistry::new();
    if opts.list {
        for name in registry.list_all() {
            println!("{name}");
        }
        return Ok(());
    }

    let mut model = match &opts.config {
        Some(path) => {
            let text = fs::read_to_string(path).into_diagnostic()?;
            ParameterModel::from_json(&text)?
        }
        None => ParameterModel::default(),
    };
    if let Some(preset) = opts.preset {
        model.preset = preset;
    }

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    model.allocate_per_node_overrides(&mut rng);

    let style = model.style_options();
    let graph = registry.generate(&model.preset, &model.preset_parameters(), &style);
    tracing::info!(
        preset = %model.preset,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "generated"
    );

    let mut renderer = GraphRenderer::new(style);
    let group = renderer.render_graph(&graph)?;

    let summary = Summary {
        preset: model.preset.clone(),
        nodes: graph.nodes.iter().map(|p| p.to_array()).collect(),
        edges: graph
            .edge_pairs()
            .into_iter()
            .map(|(a, b)| [a, b])
            .collect(),
        primitives: PrimitiveSummary {
            markers: group.markers().count(),
            connectors: group.connectors().count(),
            arrows: group.arrows().count(),
            geometries: group.live_geometries(),
            materials: group.live_materials(),
            transforms: group
                .primitives()
                .iter()
                .map(|p| p.transform().to_cols_array())
                .collect(),
        },
    };

    let json = serde_json::to_string_pretty(&summary).into_diagnostic()?;
    println!("{json}");

    renderer.dispose();
    Ok(())
}
