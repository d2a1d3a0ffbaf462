use tally::{suffix, Config, HighScore, HighScores as _, JsonStore, UserStore as _};

fn main() -> anyhow::Result<()> {
    simple_env_load::load_env_from([".dev.env", ".env"]);
    alto_logger::TermLogger::new(
        alto_logger::Options::default()
            .with_time(alto_logger::TimeConfig::relative_now())
            .with_style(alto_logger::StyleConfig::MultiLine),
    )?
    .init()?;

    let config = Config::load_from_env()?;
    log::debug!("opening store at {}", config.store_path.display());
    let store = JsonStore::open(config.store_path);

    match std::env::args().nth(1) {
        Some(name) => lookup(&store, &name),
        None => leaderboard(&store),
    }

    Ok(())
}

fn lookup(store: &JsonStore, name: &str) {
    let user = match store.load_user(name) {
        Some(user) => user,
        None => {
            println!("no record for {name}");
            return;
        }
    };

    println!("{}", user.name);
    println!("  time played: {}", user.time_played());
    println!("  first login: {}", user.first_login);
    println!("  last seen:   {}", user.last_seen);
    println!("  logins:      {}", user.login_count);
    println!(
        "  kills: {}  deaths: {}  mobkills: {}  bosskills: {}",
        user.kills, user.deaths, user.mobkills, user.bosskills
    );
}

fn leaderboard(store: &JsonStore) {
    let mut scores: Vec<_> = store
        .users()
        .map(|user| HighScore::new(&user.name, user.kills))
        .collect();
    scores.sort_by(|a, b| b.score.cmp(&a.score));

    let top = match scores.top() {
        Some(top) => top,
        None => {
            println!("no players recorded");
            return;
        }
    };
    log::info!("top score: {} with {}", top.name, top.score);

    for (i, hs) in scores.iter().enumerate() {
        println!("{}. {} with {} kill{}", i + 1, hs.name, hs.score, suffix(hs.score));
    }
}
