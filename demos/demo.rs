//! Build a small tree, remove a key and print the tree shape before and after.
//!
//! Set `AVLTREE_LOG=trace` to log each rotation as it happens.

use avltree::AvlTree;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    let level = std::env::var("AVLTREE_LOG")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .expect("logger already initialised");

    let mut t = AvlTree::new();
    for key in [33, 13, 53, 9, 21, 61, 8, 11] {
        t.insert(key);
    }

    print!("{t}");

    t.remove(13);

    println!("After deletion");
    print!("{t}");
}
