use std::io::{self, BufRead, Write};

use log::warn;

use recipe_browser::{
    App, Command, Direction, FileStorage, HttpRecipeApi, Outcome, Settings,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let settings = Settings::load().unwrap_or_else(|e| {
        warn!("falling back to default settings: {e}");
        Settings::default()
    });

    let api = HttpRecipeApi::new(
        &settings.api.base_url,
        Some(std::time::Duration::from_secs(settings.api.timeout)),
    )?;
    let storage = FileStorage::new(&settings.storage.data_dir);
    let mut app = App::new(api, storage, settings.page_size);

    println!("recipe-browser — type 'help' for commands");
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }
        if input == "help" {
            print_help();
            continue;
        }

        let command = match parse_command(input) {
            Some(command) => command,
            None => {
                eprintln!("unknown command: {input} (try 'help')");
                continue;
            }
        };
        match app.dispatch(command).await {
            Ok(outcome) => render(&outcome),
            Err(e) => eprintln!("error: {e}"),
        }
    }

    Ok(())
}

fn parse_command(input: &str) -> Option<Command> {
    let (verb, rest) = match input.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (input, ""),
    };

    match verb {
        "search" if !rest.is_empty() => Some(Command::Search(rest.to_string())),
        "page" => rest.parse().ok().map(Command::GotoPage),
        "open" if !rest.is_empty() => Some(Command::OpenRecipe(rest.to_string())),
        "inc" => Some(Command::AdjustServings(Direction::Inc)),
        "dec" => Some(Command::AdjustServings(Direction::Dec)),
        "add" => Some(Command::AddToList),
        "list" => Some(Command::ShowList),
        "del" if !rest.is_empty() => Some(Command::DeleteItem(rest.to_string())),
        "count" => {
            let (id, count) = rest.split_once(char::is_whitespace)?;
            let count: f64 = count.trim().parse().ok()?;
            Some(Command::UpdateCount(id.to_string(), count))
        }
        "like" => Some(Command::ToggleLike),
        "likes" => Some(Command::ShowLikes),
        _ => None,
    }
}

fn print_help() {
    println!(
        "\
commands:
  search <query>     search recipes
  page <n>           show result page n
  open <id>          load a recipe
  inc | dec          adjust servings
  add                add ingredients to the shopping list
  list               show the shopping list
  del <item-id>      remove a shopping-list item
  count <id> <n>     set a shopping-list item's count
  like               like/unlike the loaded recipe
  likes              show liked recipes
  quit               exit"
    );
}

fn render(outcome: &Outcome) {
    match outcome {
        Outcome::ResultsPage {
            query,
            page,
            num_pages,
            results,
        } => {
            println!("results for '{query}' — page {page}/{num_pages}");
            if results.is_empty() {
                println!("  (no results on this page)");
            }
            for summary in results {
                println!("  [{}] {} — {}", summary.id, summary.title, summary.author);
            }
        }
        Outcome::RecipeLoaded(recipe) | Outcome::ServingsUpdated(recipe) => {
            println!(
                "{} — {} ({} servings, {} min)",
                recipe.title, recipe.author, recipe.servings, recipe.cook_time
            );
            println!("  {}", recipe.url);
            for ing in &recipe.ingredients {
                match ing.count {
                    Some(count) => println!(
                        "  - {} {} {}",
                        format_count(count),
                        ing.unit,
                        ing.ingredient
                    ),
                    None if ing.unit.is_empty() => println!("  - {}", ing.ingredient),
                    None => println!("  - {} {}", ing.unit, ing.ingredient),
                }
            }
        }
        Outcome::ListChanged(items) => {
            if items.is_empty() {
                println!("shopping list is empty");
            }
            for item in items {
                println!(
                    "  [{}] {} {} {}",
                    item.id,
                    format_count(item.count),
                    item.unit,
                    item.ingredient
                );
            }
        }
        Outcome::LikeToggled { liked, num_likes } => {
            let verb = if *liked { "liked" } else { "unliked" };
            println!("{verb} — {num_likes} liked recipe(s)");
        }
        Outcome::LikesListed(likes) => {
            if likes.is_empty() {
                println!("no liked recipes");
            }
            for like in likes {
                println!("  [{}] {} — {}", like.id, like.title, like.author);
            }
        }
    }
}

/// Render a count without trailing noise: whole numbers bare, fractions
/// with two decimals.
fn format_count(count: f64) -> String {
    if (count - count.round()).abs() < 1e-9 {
        format!("{}", count.round() as i64)
    } else {
        format!("{count:.2}")
    }
}
