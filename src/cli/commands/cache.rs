//! Cache command - inspect the thumbnail cache

use crate::cache::ImageCache;
use crate::cli::args::{CacheAction, CacheArgs};
use crate::config::Config;
use crate::error::SnapResult;
use crate::ui::{self, UiContext};

/// Execute the cache command
pub async fn execute(args: CacheArgs, config: &Config) -> SnapResult<()> {
    let cache = ImageCache::new(&config.cache);

    match args.action {
        CacheAction::Path => println!("{}", cache.dir()?.display()),
        CacheAction::Check { id } => check(&cache, &id)?,
    }

    Ok(())
}

fn check(cache: &ImageCache, id: &str) -> SnapResult<()> {
    let ctx = UiContext::detect();
    let path = cache.entry_path(id)?;

    if cache.exists(id) {
        ui::step_ok(&ctx, &format!("{} is cached", id));
    } else {
        ui::step_info(&ctx, &format!("{} is not cached", id));
    }
    ui::key_value(&ctx, "path", &path.display().to_string());
    Ok(())
}
