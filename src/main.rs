use std::sync::Arc;

use quip::config::{Config, CONFIG_PATH};
use quip::jokes::feed::JokeFeed;
use quip::jokes::fetch::HttpJokeSource;
use quip::program_version;

use tokio::task::spawn;

#[tokio::main]
async fn main() {

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|x| x == "-v")
    {
        println!("Version: {}", program_version());
        std::process::exit(0);
    }

    if args.iter().any(|x| x == "-d")
    {
        unsafe { quip::OPTIONS.debug = true; }
    }

    if args.iter().any(|x| x == "-t")
    {
        unsafe { quip::OPTIONS.debug_timestamp = true; }
    }

    let config = Config::load_or_default(CONFIG_PATH);

    let source = HttpJokeSource::new(config.api.clone());
    let feed = JokeFeed::new(Arc::new(source));

    let mut observer = feed.observe().await;

    if config.refresh_period_seconds.is_some()
    {
        let period = tokio::time::Duration::from_secs(config.refresh_period_seconds.unwrap());
        let refresher = feed.clone();
        let _refresh_loop = spawn
        (async move
            {
                loop
                {
                    tokio::time::sleep(period).await;
                    refresher.refresh();
                }
            }
        );
    }

    loop
    {
        match observer.next().await
        {
            Some(Some(joke)) => { println!("{}", joke); },
            Some(None) => (),
            None => break
        }
    }
}
