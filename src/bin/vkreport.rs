//! vkreport: Translate a VkJSON capability report into a device-info store
//!
//! Usage:
//!   # Read from file, output to stdout
//!   vkreport vkjson.json
//!
//!   # Read from stdin, compact output to a file
//!   cat vkjson.json | vkreport --compact --output device_info.json
//!
//!   # Treat Vulkan 1.2 as the first version with gated structures
//!   vkreport --version-gate 1.2 vkjson.json
//!
//!   # Print every store call to stderr as well
//!   vkreport --trace-calls vkjson.json

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use vkreport::{parse_document, ApiVersion, JsonStore, RecordingStore, Tee, TranslateConfig, Translator};

#[derive(Parser, Debug)]
#[command(name = "vkreport")]
#[command(about = "Translate VkJSON capability reports into a device-info store", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Output file (use stdout if omitted)
    #[arg(long, short = 'o')]
    output: Option<String>,

    /// Compact output (no pretty-printing)
    #[arg(long)]
    compact: bool,

    /// First API version whose devices carry the Vulkan 1.1 structures,
    /// packed (4198400) or dotted (1.1)
    #[arg(long, value_name = "VERSION")]
    version_gate: Option<ApiVersion>,

    /// Field name for the format enum in flattened format entries
    #[arg(long)]
    format_tag: Option<String>,

    /// Write every store call to stderr
    #[arg(long)]
    trace_calls: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = TranslateConfig::default();
    if let Some(gate) = args.version_gate {
        config.version_gate = gate.packed();
    }
    if let Some(tag) = args.format_tag {
        config.format_tag = tag;
    }
    log::debug!("version gate {}", ApiVersion::from_packed(config.version_gate));

    let mut bytes = Vec::new();
    let read = match &args.input {
        Some(path) => File::open(path)
            .with_context(|| format!("Failed to open {}", path))?
            .read_to_end(&mut bytes),
        None => std::io::stdin().read_to_end(&mut bytes),
    };
    read.context("Failed to read input")?;
    let document = parse_document(bytes)?;

    let translator = Translator::new(config);
    let store = if args.trace_calls {
        let mut tee = Tee(JsonStore::new(), RecordingStore::new());
        let result = translator.translate(&document, &mut tee);
        let Tee(store, recording) = tee;
        let mut stderr = std::io::stderr().lock();
        for event in recording.events() {
            writeln!(stderr, "{}", event)?;
        }
        result.context("Failed to translate VkJSON document")?;
        store
    } else {
        let mut store = JsonStore::new();
        translator
            .translate(&document, &mut store)
            .context("Failed to translate VkJSON document")?;
        store
    };

    match args.output {
        Some(path) => {
            let file = File::create(&path).with_context(|| format!("Failed to create {}", path))?;
            store.write_to(BufWriter::new(file), args.compact)
        }
        None => store.write_to(std::io::stdout().lock(), args.compact),
    }
}
