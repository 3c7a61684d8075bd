use std::io::Read;

use ncode_draw::cli::{self, Args};
use ncode_draw::config::Config;
use ncode_draw::logging;

fn fail(msg: &str) -> ! {
    eprintln!("error: {msg}");
    std::process::exit(1);
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|a| a == "--print-config") {
        let config = Config::default();
        match toml::to_string_pretty(&config) {
            Ok(s) => print!("{s}"),
            Err(e) => fail(&e.to_string()),
        }
        return;
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("ncode-draw {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("ncode-draw {}", env!("CARGO_PKG_VERSION"));
        println!("Render Hangul and ASCII text with ncode bitmap fonts\n");
        println!("USAGE:");
        println!("    ncode-draw [OPTIONS] [TEXT]...\n");
        println!("Reads TEXT from stdin when none is given.\n");
        println!("OPTIONS:");
        println!("    --config <FILE>       Use FILE instead of the default config");
        println!("    --ascii-font <FILE>   ASCII font blob");
        println!("    --ncode-font <FILE>   Ncode Hangul font blob");
        println!("    --align <ALIGN>       left, center or right");
        println!("    --max-width <PX>      Wrap lines at PX pixels (0 = no wrap)");
        println!("    --simple              Simple syllable composition");
        println!("    --width <PX>          Canvas width");
        println!("    --height <PX>         Canvas height");
        println!("    --pbm                 Print a PBM image instead of text");
        println!("    --trim                Drop blank rows above and below the text");
        println!("    --encode              Print ncode bytes as hex instead of drawing");
        println!("    --verbose, -v         Write debug output to the log file");
        println!("    --print-config        Print the default configuration to stdout");
        println!("    --version, -V         Print version information");
        println!("    --help, -h            Print this help message");
        return;
    }

    let args = Args::parse(args).unwrap_or_else(|e| fail(&e));
    let config = args.resolve_config().unwrap_or_else(|e| fail(&e));

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        config.log.level_filter()
    };
    if let Err(e) = logging::init(level, config.log.file.as_deref()) {
        eprintln!("warning: logging disabled: {e}");
    }

    let text = match &args.text {
        Some(t) => t.clone(),
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                fail(&format!("failed to read stdin: {e}"));
            }
            buf.trim_end_matches('\n').to_owned()
        }
    };

    match cli::run(&args, &config, &text) {
        Ok(out) => print!("{out}"),
        Err(e) => fail(&e),
    }
}
