use std::{
    fs::File,
    io::{BufReader, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "crossfade", version)]
struct Cli {
    /// Log envelope placement to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the weight envelope of one image as a JSON array.
    Envelope(EnvelopeArgs),
    /// Print every image's envelope (and per-frame sums) as JSON.
    Plan(PlanArgs),
    /// Print the activation mask for an image count.
    Mask(MaskArgs),
    /// Look up one slot of an activation mask.
    At(AtArgs),
    /// List the node table a host registers.
    Nodes,
    /// Run a node invocation read from a JSON file (`-` for stdin).
    Invoke(InvokeArgs),
}

#[derive(Parser, Debug)]
struct EnvelopeArgs {
    /// Total number of output frames.
    #[arg(long)]
    frames: usize,

    /// Total number of images in the sequence.
    #[arg(long)]
    images: usize,

    /// Image to generate the envelope for (1-based).
    #[arg(long)]
    image: usize,

    /// Placement of the last image's rise.
    #[arg(long, value_enum, default_value_t = TailChoice::Truncate)]
    tail: TailChoice,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Total number of output frames.
    #[arg(long, required_unless_present = "config")]
    frames: Option<usize>,

    /// Total number of images in the sequence.
    #[arg(long, required_unless_present = "config")]
    images: Option<usize>,

    /// Placement of the last image's rise.
    #[arg(long, value_enum, default_value_t = TailChoice::Truncate)]
    tail: TailChoice,

    /// Plan request JSON (`{"number_of_frames", "number_of_images", "options"}`).
    #[arg(long, conflicts_with_all = ["frames", "images"])]
    config: Option<PathBuf>,

    /// Also print the per-frame weight sums.
    #[arg(long)]
    sums: bool,
}

#[derive(Parser, Debug)]
struct MaskArgs {
    /// Number of active images.
    #[arg(long)]
    images: usize,

    /// Mask length.
    #[arg(long, default_value_t = crossfade::DEFAULT_MASK_CAPACITY)]
    capacity: usize,
}

#[derive(Parser, Debug)]
struct AtArgs {
    /// Number of active images.
    #[arg(long)]
    images: usize,

    /// Mask length.
    #[arg(long, default_value_t = crossfade::DEFAULT_MASK_CAPACITY)]
    capacity: usize,

    /// Slot to look up (0-based).
    #[arg(long, allow_negative_numbers = true)]
    index: i64,
}

#[derive(Parser, Debug)]
struct InvokeArgs {
    /// Input invocation JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TailChoice {
    Truncate,
    AnchorEnd,
}

impl From<TailChoice> for crossfade::TailMode {
    fn from(c: TailChoice) -> Self {
        match c {
            TailChoice::Truncate => Self::Truncate,
            TailChoice::AnchorEnd => Self::AnchorEnd,
        }
    }
}

#[derive(serde::Deserialize, Debug)]
struct PlanConfig {
    number_of_frames: usize,
    number_of_images: usize,
    #[serde(default)]
    options: crossfade::EnvelopeOptions,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.cmd {
        Command::Envelope(args) => cmd_envelope(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Mask(args) => cmd_mask(args),
        Command::At(args) => cmd_at(args),
        Command::Nodes => cmd_nodes(),
        Command::Invoke(args) => cmd_invoke(args),
    }
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{s}");
    Ok(())
}

fn cmd_envelope(args: EnvelopeArgs) -> anyhow::Result<()> {
    let req = crossfade::EnvelopeRequest::new(args.frames, args.images, args.image);
    let opts = crossfade::EnvelopeOptions {
        tail: args.tail.into(),
    };
    let env = crossfade::generate_with(&req, opts)
        .with_context(|| format!("generate envelope for image {}", args.image))?;
    print_json(&env.weights)
}

fn read_plan_config(path: &Path) -> anyhow::Result<PlanConfig> {
    let f = File::open(path).with_context(|| format!("open plan config '{}'", path.display()))?;
    let cfg: PlanConfig =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse plan config JSON")?;
    Ok(cfg)
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let cfg = match &args.config {
        Some(path) => read_plan_config(path)?,
        None => PlanConfig {
            number_of_frames: args.frames.context("--frames is required")?,
            number_of_images: args.images.context("--images is required")?,
            options: crossfade::EnvelopeOptions {
                tail: args.tail.into(),
            },
        },
    };

    let plan =
        crossfade::CrossfadePlan::build(cfg.number_of_frames, cfg.number_of_images, cfg.options)?;
    if args.sums {
        print_json(&serde_json::json!({
            "plan": plan,
            "covered_frames": plan.covered_frames(),
            "sums": plan.weight_sums(),
        }))
    } else {
        print_json(&plan)
    }
}

fn cmd_mask(args: MaskArgs) -> anyhow::Result<()> {
    let m = crossfade::ActivationMask::with_capacity(args.images, args.capacity);
    print_json(&m.bits)
}

fn cmd_at(args: AtArgs) -> anyhow::Result<()> {
    let m = crossfade::ActivationMask::with_capacity(args.images, args.capacity);
    let bit = m.at(args.index)?;
    print_json(&bit)
}

fn cmd_nodes() -> anyhow::Result<()> {
    let table: Vec<_> = crossfade::NodeKind::ALL
        .into_iter()
        .map(|k| {
            serde_json::json!({
                "class_name": k.class_name(),
                "display_name": k.display_name(),
                "category": k.category(),
                "function": k.function_name(),
                "inputs": k.input_names(),
                "output": k.output_name(),
                "output_is_list": k.output_is_list(),
            })
        })
        .collect();
    print_json(&table)
}

fn cmd_invoke(args: InvokeArgs) -> anyhow::Result<()> {
    let mut payload = String::new();
    if args.in_path.as_os_str() == "-" {
        std::io::stdin()
            .read_to_string(&mut payload)
            .context("read invocation from stdin")?;
    } else {
        File::open(&args.in_path)
            .with_context(|| format!("open invocation '{}'", args.in_path.display()))?
            .read_to_string(&mut payload)
            .context("read invocation")?;
    }

    let out = crossfade::invoke_json(&payload)?;
    print_json(&out)
}
