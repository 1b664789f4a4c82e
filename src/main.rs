use std::env;

use daygrid::cli;
use daygrid::config::{AppConfig, ViewConfig};
use daygrid::store;

#[tokio::main]
async fn main() {
    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    };

    let get_prop = |key: &str| -> Option<String> {
        config.get(key).or_else(|| env::var(key).ok())
    };

    // The store resolves its directory through the environment; let a
    // config-file DB_LOCATION stand in when the variable is unset.
    if env::var("DB_LOCATION").is_err() {
        if let Some(location) = config.get("DB_LOCATION") {
            unsafe {
                env::set_var("DB_LOCATION", location);
            }
        }
    }

    let view = ViewConfig::from_props(get_prop);
    let mut events = store::load_events(&store::get_db_location());
    cli::cli(&mut events, &view).await;
}
