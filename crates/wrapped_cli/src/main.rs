use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use wrapped_core::core_api::{Engine, ItemCatalog, TopEntry, WrappedMetrics};
use wrapped_core::dataset;
use wrapped_render::{FieldSelection, render_json_full, render_json_selected, render_text};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Summarize a Stardew Valley save file.
    Summary(SummaryArgs),
    /// Build a normalized item dataset from unpacked game data.
    MakeDataset(MakeDatasetArgs),
}

#[derive(Debug, Args)]
struct SummaryArgs {
    #[arg(value_name = "SAVE.xml")]
    path: PathBuf,
    /// Normalized item dataset; the built-in table is used when absent.
    #[arg(long, value_name = "PATH", env = "STARDEW_WRAPPED_DATASET")]
    dataset: Option<PathBuf>,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    farmer: bool,
    #[arg(long)]
    farm: bool,
    #[arg(long)]
    date: bool,
    #[arg(long)]
    money: bool,
    #[arg(long)]
    totals: bool,
    #[arg(long = "top-monster")]
    top_monster: bool,
    #[arg(long = "most-shipped")]
    most_shipped: bool,
    #[arg(long = "most-cooked")]
    most_cooked: bool,
    #[arg(long = "most-caught-fish")]
    most_caught_fish: bool,
    #[arg(long)]
    friends: bool,
    #[arg(long = "top-grossing")]
    top_grossing: bool,
    #[arg(long)]
    categories: bool,
}

#[derive(Debug, Args)]
struct MakeDatasetArgs {
    /// Unpacked `Data/Objects` JSON, or a legacy `objectInformation` dump.
    #[arg(value_name = "INPUT.json")]
    input: PathBuf,
    /// Where to write the dataset; stdout when absent.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Summary(args) => run_summary(&args),
        Command::MakeDataset(args) => run_make_dataset(&args),
    }
}

fn run_summary(args: &SummaryArgs) {
    let fields = field_selection(args);

    let catalog = match &args.dataset {
        Some(path) => ItemCatalog::load_from_path(path).unwrap_or_else(|e| {
            eprintln!("Error loading dataset {}: {e}", path.display());
            process::exit(1);
        }),
        None => {
            log::info!("no dataset given; using the built-in item table");
            ItemCatalog::builtin()
        }
    };

    let bytes = fs::read(&args.path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", args.path.display());
        process::exit(1);
    });

    let metrics = Engine::new()
        .summarize_bytes(bytes, &catalog)
        .unwrap_or_else(|e| {
            eprintln!("Error parsing save file: {}", args.path.display());
            eprintln!("  {e}");
            process::exit(1);
        });

    if args.json {
        let json = if fields.is_any_selected() {
            render_json_selected(&metrics, &fields)
        } else {
            render_json_full(&metrics)
        };
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    if fields.is_any_selected() {
        for (key, value) in selected_pairs(&fields, &metrics) {
            println!("{key}={value}");
        }
        return;
    }

    print!("{}", render_text(&metrics));
}

fn run_make_dataset(args: &MakeDatasetArgs) {
    let text = fs::read_to_string(&args.input).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", args.input.display());
        process::exit(1);
    });

    let catalog = dataset::build_catalog_from_str(&text).unwrap_or_else(|e| {
        eprintln!("Error building dataset from {}", args.input.display());
        eprintln!("  {e}");
        process::exit(1);
    });

    let rendered = serde_json::to_string_pretty(&catalog.to_json_value()).unwrap_or_else(|e| {
        eprintln!("Error rendering dataset JSON: {e}");
        process::exit(1);
    });

    match &args.output {
        Some(out_path) => {
            fs::write(out_path, format!("{rendered}\n")).unwrap_or_else(|e| {
                eprintln!("Error writing {}: {e}", out_path.display());
                process::exit(1);
            });
            println!("Wrote {} items to {}", catalog.len(), out_path.display());
        }
        None => println!("{rendered}"),
    }
}

fn field_selection(args: &SummaryArgs) -> FieldSelection {
    FieldSelection {
        farmer: args.farmer,
        farm: args.farm,
        date: args.date,
        money: args.money,
        totals: args.totals,
        top_monster: args.top_monster,
        most_shipped: args.most_shipped,
        most_cooked: args.most_cooked,
        most_caught_fish: args.most_caught_fish,
        friends: args.friends,
        top_grossing: args.top_grossing,
        categories: args.categories,
    }
}

fn selected_pairs(fields: &FieldSelection, metrics: &WrappedMetrics) -> Vec<(&'static str, String)> {
    let mut out = Vec::new();

    if fields.farmer {
        out.push(("farmer", metrics.farmer_name.clone()));
    }
    if fields.farm {
        out.push(("farm", metrics.farm_name.clone()));
    }
    if fields.date {
        out.push(("date", metrics.date.clone()));
    }
    if fields.money {
        out.push(("money_earned", or_unknown(metrics.money_earned)));
    }
    if fields.totals {
        out.push(("seeds_sown", or_unknown(metrics.seeds_sown)));
        out.push(("items_cooked", or_unknown(metrics.items_cooked_count)));
        out.push(("times_fished", or_unknown(metrics.times_fished)));
        out.push((
            "unique_items_shipped",
            metrics.unique_items_shipped.to_string(),
        ));
        out.push((
            "unique_recipes_cooked",
            metrics.unique_recipes_cooked.to_string(),
        ));
        out.push(("fish_types_caught", metrics.fish_types_caught.to_string()));
    }
    if fields.top_monster {
        out.push((
            "top_monster",
            metrics
                .top_monster
                .as_ref()
                .map(|m| format!("{} x{}", m.name, m.count))
                .unwrap_or_else(|| "unknown".to_string()),
        ));
    }
    if fields.most_shipped {
        out.push(("most_shipped", format_top(metrics.most_shipped.as_ref())));
    }
    if fields.most_cooked {
        out.push((
            "most_cooked",
            metrics
                .most_cooked_recipe
                .as_ref()
                .map(|r| match r.id {
                    Some(id) => format!("{} (#{id}) x{}", r.name, r.count),
                    None => format!("{} x{}", r.name, r.count),
                })
                .unwrap_or_else(|| "unknown".to_string()),
        ));
    }
    if fields.most_caught_fish {
        out.push((
            "most_caught_fish",
            format_top(metrics.most_caught_fish.as_ref()),
        ));
    }
    if fields.friends {
        for f in &metrics.friends_top {
            out.push(("friend", format!("{}={:.1}", f.name, f.hearts)));
        }
    }
    if fields.top_grossing {
        out.push((
            "top_grossing",
            metrics
                .top_grossing_item
                .as_ref()
                .map(|g| format!("{} (#{}) gross={}", g.name, g.id, g.gross))
                .unwrap_or_else(|| "unknown".to_string()),
        ));
    }
    if fields.categories {
        for (category, entry) in metrics.most_shipped_by_category.iter() {
            out.push(("category", format!("{category}={}", format_top(entry))));
        }
    }

    out
}

fn format_top(entry: Option<&TopEntry>) -> String {
    entry
        .map(|e| format!("{} (#{}) x{}", e.name, e.id, e.count))
        .unwrap_or_else(|| "unknown".to_string())
}

fn or_unknown(value: Option<i64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
