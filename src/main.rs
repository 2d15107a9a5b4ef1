use std::error::Error;

use corkboard::ui::App;
use corkboard::TaskStore;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // The store starts empty on every launch: nothing is persisted.
    let store = TaskStore::new();
    App::new(store).run()
}
