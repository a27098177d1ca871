use std::time::{Duration, Instant};

use anyhow::Context as _;
use rgba_blend::{BlendMethod, BlendMode, Blender, BlenderOpts, CompositeOp, RgbaImage};
use serde_json::json;
use sha2::Digest as _;

#[derive(Clone, Debug)]
struct BenchArgs {
    width: u32,
    height: u32,
    merges: u32,
    warmup: u32,
    repeats: u32,
    op: CompositeOp,
    blend: BlendMode,
    parallel: bool,
    threads: Option<usize>,
    min_parallel_rows: usize,
    json: bool,
    verbose: bool,
}

#[derive(Clone, Debug, Default)]
struct RunMetrics {
    setup: Duration,
    merge_total: Duration,
    wall_total: Duration,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = parse_args()?;

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    if args.width == 0 || args.height == 0 {
        anyhow::bail!("--width/--height must be > 0");
    }
    if args.merges == 0 || args.repeats == 0 {
        anyhow::bail!("--merges and --repeats must be > 0");
    }
    if let Some(n) = args.threads
        && n == 0
    {
        anyhow::bail!("--threads must be >= 1 when set");
    }

    let opts = BlenderOpts {
        parallel: args.parallel,
        threads: args.threads,
        min_parallel_rows: args.min_parallel_rows,
    };
    let base = gradient(args.width, args.height, 0);
    let overlay = gradient(args.width, args.height, 0x9e37_79b9);
    let method = args.op.with_blend(args.blend);

    if args.warmup > 0 {
        eprintln!("warmup: {} run(s)", args.warmup);
        for i in 0..args.warmup {
            let _ = run_once(&args, &opts, &base, &overlay, &method, i, true)?;
        }
    }

    eprintln!(
        "bench: {repeats} run(s) ({profile} build), {w}x{h}, {merges} merge(s)/run, op={op}, blend={blend}, mode={mode}, threads={threads}",
        repeats = args.repeats,
        profile = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        },
        w = args.width,
        h = args.height,
        merges = args.merges,
        op = args.op,
        blend = args.blend,
        mode = if args.parallel {
            "parallel"
        } else {
            "sequential"
        },
        threads = args
            .threads
            .map(|n| n.to_string())
            .unwrap_or_else(|| "auto".to_string()),
    );

    let mut runs = Vec::<RunMetrics>::with_capacity(args.repeats as usize);
    let mut digest = String::new();
    for i in 0..args.repeats {
        let (m, out) = run_once(&args, &opts, &base, &overlay, &method, i, false)?;
        runs.push(m);
        let run_digest = sha256_hex(&out);
        if !digest.is_empty() && digest != run_digest {
            anyhow::bail!("run {i:03} produced a different buffer (nondeterministic merge)");
        }
        digest = run_digest;
    }

    let summary = report_percentiles(&runs);
    eprintln!("sha256(final): {digest}");

    if args.json {
        let out = json!({
            "width": args.width,
            "height": args.height,
            "merges": args.merges,
            "repeats": args.repeats,
            "op": args.op,
            "blend": args.blend,
            "opts": opts,
            "sha256": digest,
            "percentiles_ms": summary,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).context("serialize bench summary")?
        );
    }
    Ok(())
}

fn gradient(width: u32, height: u32, seed: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let h = (x.wrapping_mul(0x85eb_ca6b) ^ y.wrapping_mul(0xc2b2_ae35) ^ seed)
            .wrapping_mul(0x2545_f491);
        let [r, g, b, _] = h.to_le_bytes();
        let a = ((x + y) % 256) as u8;
        image::Rgba([r, g, b, a])
    })
}

fn run_once(
    args: &BenchArgs,
    opts: &BlenderOpts,
    base: &RgbaImage,
    overlay: &RgbaImage,
    method: &BlendMethod,
    run_idx: u32,
    is_warmup: bool,
) -> anyhow::Result<(RunMetrics, Vec<u8>)> {
    let wall = Instant::now();

    let t0 = Instant::now();
    let mut blender = Blender::from_image(base)?.with_opts(opts.clone())?;
    let mut m = RunMetrics {
        setup: t0.elapsed(),
        ..RunMetrics::default()
    };

    // Offset by a quarter of the canvas so every merge clips.
    let dx = (args.width / 4) as i32;
    let dy = (args.height / 4) as i32;
    for i in 0..args.merges {
        // Alternate the sign so consecutive merges cover different corners.
        let (dx, dy) = if i % 2 == 0 { (dx, dy) } else { (-dx, -dy) };
        let t1 = Instant::now();
        blender.merge(overlay, dx, dy, method)?;
        m.merge_total += t1.elapsed();
    }

    let out = blender.into_rgba8();
    m.wall_total = wall.elapsed();

    if !is_warmup {
        eprintln!(
            "run {run_idx:03}: wall={wall:.3}ms setup={setup:.3}ms merge={merge:.3}ms",
            wall = m.wall_total.as_secs_f64() * 1000.0,
            setup = m.setup.as_secs_f64() * 1000.0,
            merge = m.merge_total.as_secs_f64() * 1000.0,
        );
    }

    Ok((m, out))
}

fn sha256_hex(bytes: &[u8]) -> String {
    use std::fmt::Write as _;

    sha2::Sha256::digest(bytes)
        .iter()
        .fold(String::with_capacity(64), |mut hex, b| {
            let _ = write!(hex, "{b:02x}");
            hex
        })
}

fn parse_args() -> anyhow::Result<BenchArgs> {
    let mut args = std::env::args().skip(1);

    let mut out = BenchArgs {
        width: 1920,
        height: 1080,
        merges: 8,
        warmup: 1,
        repeats: 50,
        op: CompositeOp::SourceOver,
        blend: BlendMode::Normal,
        parallel: false,
        threads: None,
        min_parallel_rows: BlenderOpts::default().min_parallel_rows,
        json: false,
        verbose: false,
    };

    while let Some(a) = args.next() {
        match a.as_str() {
            "--width" => out.width = parse_u32(args.next(), "--width")?,
            "--height" => out.height = parse_u32(args.next(), "--height")?,
            "--merges" => out.merges = parse_u32(args.next(), "--merges")?,
            "--warmup" => out.warmup = parse_u32(args.next(), "--warmup")?,
            "--repeats" => out.repeats = parse_u32(args.next(), "--repeats")?,
            "--op" => {
                let v = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("missing value for --op"))?;
                out.op = v.parse().with_context(|| format!("parse --op value '{v}'"))?;
            }
            "--blend" => {
                let v = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("missing value for --blend"))?;
                out.blend = v
                    .parse()
                    .with_context(|| format!("parse --blend value '{v}'"))?;
            }
            "--parallel" => out.parallel = true,
            "--threads" => out.threads = Some(parse_usize(args.next(), "--threads")?),
            "--min-parallel-rows" => {
                out.min_parallel_rows = parse_usize(args.next(), "--min-parallel-rows")?
            }
            "--json" => out.json = true,
            "--verbose" | "-v" => out.verbose = true,
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => anyhow::bail!("unknown arg '{a}' (try --help)"),
        }
    }

    Ok(out)
}

fn print_help() {
    eprintln!(
        r#"rgba-blend-bench

Merges an overlay onto a canvas repeatedly and reports p50/p90/p99 per stage.

Usage:
  cargo run -q --release
  cargo run -q --release -- --op source-atop --blend soft-light
  cargo run -q --release -- --parallel --threads 4 --json

Args:
  --width N               (default 1920)
  --height N              (default 1080)
  --merges N              merges per run (default 8)
  --warmup N              (default 1)
  --repeats N             (default 50)
  --op NAME               composite operator (default source-over)
  --blend NAME            blend mode (default normal)
  --parallel              split merge rows across a rayon pool
  --threads N             worker threads for parallel mode (default auto)
  --min-parallel-rows N   overlap rows below which merges stay sequential (default 64)
  --json                  print a JSON summary on stdout
  --verbose, -v           debug-level tracing on stderr
"#
    );
}

fn parse_u32(v: Option<String>, flag: &str) -> anyhow::Result<u32> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<u32>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}

fn parse_usize(v: Option<String>, flag: &str) -> anyhow::Result<usize> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<usize>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}

/// Nearest-rank percentiles, in milliseconds, of one timing across runs.
#[derive(Clone, Copy, Debug)]
struct Percentiles {
    p50: f64,
    p90: f64,
    p99: f64,
}

impl Percentiles {
    fn of(mut samples: Vec<Duration>) -> Self {
        samples.sort_unstable();
        let at = |q: f64| {
            let Some(last) = samples.len().checked_sub(1) else {
                return 0.0;
            };
            let idx = ((q * samples.len() as f64).ceil() as usize)
                .saturating_sub(1)
                .min(last);
            samples[idx].as_secs_f64() * 1000.0
        };
        Self {
            p50: at(0.50),
            p90: at(0.90),
            p99: at(0.99),
        }
    }
}

fn report_percentiles(runs: &[RunMetrics]) -> serde_json::Value {
    let stages: [(&str, fn(&RunMetrics) -> Duration); 3] = [
        ("setup", |m| m.setup),
        ("merge_total", |m| m.merge_total),
        ("wall_total", |m| m.wall_total),
    ];

    let mut summary = serde_json::Map::new();
    eprintln!("\npercentiles across runs (p50/p90/p99):");
    for (name, stage) in stages {
        let Percentiles { p50, p90, p99 } = Percentiles::of(runs.iter().map(stage).collect());
        eprintln!("  {name:12} p50={p50:>10.3}ms  p90={p90:>10.3}ms  p99={p99:>10.3}ms");
        summary.insert(
            name.to_string(),
            json!({ "p50": p50, "p90": p90, "p99": p99 }),
        );
    }
    serde_json::Value::Object(summary)
}
