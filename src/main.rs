use clap::{Parser, Subcommand};
use dialoguer::Input;
use showscout::{
    CatalogProvider, ListingState, ListingViewModel, ScreenKind, ShowRecord, TvMazeCatalog,
};
use std::process;

/// Suggestions shown on the search screen before the first query.
const POPULAR_SEARCHES: [&str; 5] = ["Action", "Comedy", "Drama", "Thriller", "Sci-Fi"];

/// Width of one column in the two-column show grid.
const COLUMN_WIDTH: usize = 38;

#[derive(Parser)]
#[command(
    name = "showscout",
    version,
    about = "Browse and search the TVMaze show catalog from your terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the catalog as a grid, optionally narrowed by a query
    Browse {
        /// Only list shows whose title contains this text
        #[arg(long)]
        query: Option<String>,
    },
    /// Search the catalog interactively
    Search {
        /// Initial query; the prompt loop starts with its results
        query: Option<String>,
    },
    /// Print the details of a single show
    Details {
        /// TVMaze id of the show, as printed by browse and search
        id: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Browse { query: None }) {
        Command::Browse { query } => run_browse(query.as_deref().unwrap_or("")),
        Command::Search { query } => run_search(query),
        Command::Details { id } => run_details(id),
    }
}

/// Fetches the catalog for one screen activation.
///
/// On failure the error is printed and the process exits: the error
/// screen is terminal for this activation, there is no retry.
fn load_listing(screen: ScreenKind) -> ListingViewModel {
    let (mut model, ticket) = ListingViewModel::new(screen);
    println!("Loading catalog from TVMaze...");

    let provider = TvMazeCatalog::new();
    model.resolve_fetch(ticket, provider.fetch_all());

    if let ListingState::Failed { message } = model.state() {
        eprintln!("Error: {}", message);
        process::exit(1);
    }
    model
}

/// The home listing: the whole catalog, optionally narrowed.
fn run_browse(query: &str) {
    let mut model = load_listing(ScreenKind::Home);
    model.set_query(query);

    if model.visible_shows().is_empty() {
        if query.is_empty() {
            println!("The catalog came back empty.");
        } else {
            println!("No results found for \"{}\".", query);
        }
        return;
    }

    render_grid(model.visible_shows());
}

/// The search screen: an interactive prompt loop over the fetched catalog.
fn run_search(initial_query: Option<String>) {
    let mut model = load_listing(ScreenKind::Search);

    if initial_query.is_none() {
        println!("Popular searches: {}\n", POPULAR_SEARCHES.join(", "));
    }

    let mut next_query = initial_query;
    loop {
        let query = match next_query.take() {
            Some(query) => query,
            None => Input::<String>::new()
                .with_prompt("Search for shows (empty to quit)")
                .allow_empty(true)
                .interact_text()
                .unwrap_or_default(),
        };

        // An empty query ends the session; the search screen never
        // renders the full catalog.
        if query.is_empty() {
            break;
        }

        model.set_query(&query);
        if model.visible_shows().is_empty() {
            println!("No results found for \"{}\".\n", query);
        } else {
            render_grid(model.visible_shows());
        }
    }

    model.detach();
}

/// The details screen for one show, looked up by its id.
fn run_details(id: u32) {
    let model = load_listing(ScreenKind::Home);

    // The home listing with an empty query is the full catalog
    let Some(show) = model.visible_shows().iter().find(|show| show.id == id) else {
        eprintln!("Error: No show with id {} in the catalog.", id);
        process::exit(1);
    };

    render_details(show);
}

/// Renders show records as a two-column grid of title and summary lines.
fn render_grid(shows: &[ShowRecord]) {
    println!();
    for row in shows.chunks(2) {
        let titles: Vec<String> = row.iter().map(title_cell).collect();
        let summaries: Vec<String> = row.iter().map(summary_cell).collect();
        println!("{}", join_cells(&titles));
        println!("{}", join_cells(&summaries));
        println!();
    }
    println!("{} show(s)", shows.len());
}

/// One grid title cell: id, name and rating, shortened to the column width.
fn title_cell(show: &ShowRecord) -> String {
    let rating = show
        .rating
        .map(|rating| format!(" [{:.1}]", rating))
        .unwrap_or_default();
    shorten(&format!("#{} {}{}", show.id, show.name, rating), COLUMN_WIDTH)
}

/// One grid summary cell: the first line of the summary, tags stripped.
fn summary_cell(show: &ShowRecord) -> String {
    shorten(&display_summary(show), COLUMN_WIDTH)
}

/// Pads the left cell so the right cell starts at a fixed column.
fn join_cells(cells: &[String]) -> String {
    match cells {
        [left, right] => format!("{:<width$}  {}", left, right, width = COLUMN_WIDTH),
        [left] => left.clone(),
        _ => String::new(),
    }
}

/// Prints the details view for a single show.
fn render_details(show: &ShowRecord) {
    println!("\n=== {} ===\n", show.name);
    println!("{}\n", display_summary(show));

    let genres = if show.genres.is_empty() {
        "N/A".to_string()
    } else {
        show.genres.join(", ")
    };
    println!("  Genre:   {}", genres);
    println!("  Status:  {}", show.status.as_deref().unwrap_or("N/A"));
    match show.rating {
        Some(rating) => println!("  Rating:  {:.1}", rating),
        None => println!("  Rating:  N/A"),
    }
    match show.runtime {
        Some(runtime) => println!("  Runtime: {} minutes", runtime),
        None => println!("  Runtime: N/A"),
    }
    if let Some(image) = &show.image {
        if let Some(url) = image.original.as_deref().or(image.medium.as_deref()) {
            println!("  Poster:  {}", url);
        }
    }
}

/// The show summary as plain text, with a fallback for shows without one.
fn display_summary(show: &ShowRecord) -> String {
    show.summary
        .as_deref()
        .map(|summary| nanohtml2text::html2text(summary).trim().to_string())
        .filter(|summary| !summary.is_empty())
        .unwrap_or_else(|| "No summary available.".to_string())
}

/// Shortens a string to `max` characters, marking the cut with an ellipsis.
fn shorten(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(max.saturating_sub(3)).collect();
    shortened.push_str("...");
    shortened
}
